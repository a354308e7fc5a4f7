//! Read-only page hierarchy.
//!
//! Pages are stored in a flat `Vec<Page>` in pre-order with parent/children
//! relationships tracked by indices. This provides:
//! - O(1) lookups by page id and by URL
//! - O(d) current-page resolution where d is the depth of the path
//!
//! The tree is built once from a YAML file and never mutated; menu
//! rendering works on per-request copies of the flags it needs.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::engine::PageResolver;
use crate::page::{DEFAULT_NAMESPACE, Page, PageId, PageSpec, PagesFile};

/// Maximum nesting depth accepted when building a tree.
pub const MAX_TREE_DEPTH: usize = 256;

/// Error returned when a page tree cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Page file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Page file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Page file is not valid YAML or has unexpected fields.
    #[error("Invalid page file: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Two pages share an id.
    #[error("Duplicate page id: {0}")]
    DuplicateId(PageId),
    /// Two pages resolve to the same URL.
    #[error("Duplicate page URL: {0}")]
    DuplicateUrl(String),
    /// A non-home page has an empty slug or one containing `/`.
    #[error("Invalid slug {slug:?} for page \"{title}\"")]
    InvalidSlug {
        /// Page title.
        title: String,
        /// Offending slug.
        slug: String,
    },
    /// More than one page is flagged as home.
    #[error("More than one home page: \"{first}\" and \"{second}\"")]
    MultipleHomes {
        /// Title of the first home page.
        first: String,
        /// Title of the second home page.
        second: String,
    },
    /// The home page is nested below another page.
    #[error("Home page \"{0}\" must be a root page")]
    HomeNotRoot(String),
    /// Nesting exceeds [`MAX_TREE_DEPTH`].
    #[error("Page tree is deeper than {MAX_TREE_DEPTH} levels")]
    TooDeep,
}

/// Immutable page hierarchy with efficient lookups.
#[derive(Debug)]
pub struct PageTree {
    pages: Vec<Page>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    roots: Vec<usize>,
    id_index: HashMap<PageId, usize>,
    url_index: HashMap<String, usize>,
    home: Option<usize>,
}

impl PageTree {
    /// Load a page tree from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if the file can't be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), pages = tree.len(), "Loaded page tree");
        Ok(tree)
    }

    /// Build a page tree from YAML text.
    ///
    /// ```yaml
    /// pages:
    ///   - title: Home
    ///     children:
    ///       - title: About
    ///         soft_root: true
    /// ```
    ///
    /// The home page is the root flagged `is_home`, or the first root page
    /// when none is flagged. Pages without `id` get the lowest unused ids in
    /// pre-order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if the YAML is invalid or the tree breaks an
    /// invariant (duplicate ids or URLs, bad slugs, misplaced home page).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TreeError> {
        let file: PagesFile = serde_yaml::from_str(yaml)?;
        Self::from_specs(&file.pages)
    }

    fn from_specs(specs: &[PageSpec]) -> Result<Self, TreeError> {
        let home_spec = find_home(specs)?;
        let mut builder = TreeBuilder::new(collect_explicit_ids(specs)?);

        let mut home = None;
        for (i, spec) in specs.iter().enumerate() {
            let is_home = Some(i) == home_spec;
            let idx = builder.add(spec, None, is_home, 0)?;
            if is_home {
                home = Some(idx);
            }
            builder.roots.push(idx);
        }

        Ok(builder.finish(home))
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the tree has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All pages in pre-order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Page by id.
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.id_index.get(&id).map(|&i| &self.pages[i])
    }

    /// Page by exact URL (with leading and trailing slash).
    pub fn page_by_url(&self, url: &str) -> Option<&Page> {
        self.url_index.get(url).map(|&i| &self.pages[i])
    }

    /// The home page, if the tree has any pages.
    pub fn home(&self) -> Option<&Page> {
        self.home.map(|i| &self.pages[i])
    }

    /// Parent page of `id`.
    pub fn parent(&self, id: PageId) -> Option<&Page> {
        let idx = *self.id_index.get(&id)?;
        self.parents[idx].map(|p| &self.pages[p])
    }

    /// Root pages in order.
    pub fn roots(&self) -> impl Iterator<Item = &Page> {
        self.roots.iter().map(|&i| &self.pages[i])
    }

    pub(crate) fn home_index(&self) -> Option<usize> {
        self.home
    }

    pub(crate) fn index_of(&self, id: PageId) -> Option<usize> {
        self.id_index.get(&id).copied()
    }

    pub(crate) fn page_at(&self, idx: usize) -> &Page {
        &self.pages[idx]
    }

    pub(crate) fn parent_index(&self, idx: usize) -> Option<usize> {
        self.parents[idx]
    }

    pub(crate) fn children_indices(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }
}

impl PageResolver for PageTree {
    /// Resolve a request path to the page whose URL is its longest prefix.
    ///
    /// The home page (`/`) is a prefix of every path, so any path resolves
    /// when the tree has a home page.
    fn resolve(&self, path: &str) -> Option<PageId> {
        let mut candidate = normalize_path(path);
        loop {
            if let Some(&idx) = self.url_index.get(&candidate) {
                return Some(self.pages[idx].id);
            }
            if candidate == "/" {
                return None;
            }
            let trimmed = &candidate[..candidate.len() - 1];
            let cut = trimmed.rfind('/').map_or(0, |i| i + 1);
            candidate.truncate(cut);
        }
    }
}

/// Strip query and fragment, and add the leading and trailing slash.
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut normalized = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Position of the home page among the root specs.
fn find_home(specs: &[PageSpec]) -> Result<Option<usize>, TreeError> {
    let mut flagged: Option<usize> = None;
    for (i, spec) in specs.iter().enumerate() {
        if !spec.is_home {
            continue;
        }
        if let Some(first) = flagged {
            return Err(TreeError::MultipleHomes {
                first: specs[first].title.clone(),
                second: spec.title.clone(),
            });
        }
        flagged = Some(i);
    }
    Ok(flagged.or(if specs.is_empty() { None } else { Some(0) }))
}

/// Collect ids written in the file, rejecting duplicates.
fn collect_explicit_ids(specs: &[PageSpec]) -> Result<HashSet<u64>, TreeError> {
    fn walk(specs: &[PageSpec], seen: &mut HashSet<u64>) -> Result<(), TreeError> {
        for spec in specs {
            if let Some(id) = spec.id
                && !seen.insert(id)
            {
                return Err(TreeError::DuplicateId(PageId(id)));
            }
            walk(&spec.children, seen)?;
        }
        Ok(())
    }

    let mut seen = HashSet::new();
    walk(specs, &mut seen)?;
    Ok(seen)
}

/// Accumulates pages in pre-order while walking the specs.
struct TreeBuilder {
    pages: Vec<Page>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    roots: Vec<usize>,
    url_index: HashMap<String, usize>,
    used_ids: HashSet<u64>,
    next_id: u64,
}

impl TreeBuilder {
    fn new(used_ids: HashSet<u64>) -> Self {
        Self {
            pages: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
            roots: Vec::new(),
            url_index: HashMap::new(),
            used_ids,
            next_id: 1,
        }
    }

    fn allocate_id(&mut self, explicit: Option<u64>) -> PageId {
        if let Some(id) = explicit {
            return PageId(id);
        }
        while self.used_ids.contains(&self.next_id) {
            self.next_id += 1;
        }
        self.used_ids.insert(self.next_id);
        PageId(self.next_id)
    }

    fn add(
        &mut self,
        spec: &PageSpec,
        parent: Option<usize>,
        is_home: bool,
        depth: usize,
    ) -> Result<usize, TreeError> {
        if depth >= MAX_TREE_DEPTH {
            return Err(TreeError::TooDeep);
        }
        if spec.is_home && parent.is_some() {
            return Err(TreeError::HomeNotRoot(spec.title.clone()));
        }

        let slug = spec.effective_slug();
        let url = if is_home {
            "/".to_owned()
        } else {
            if slug.is_empty() || slug.contains('/') {
                return Err(TreeError::InvalidSlug {
                    title: spec.title.clone(),
                    slug,
                });
            }
            let base = parent.map_or("/", |p| self.pages[p].url.as_str());
            format!("{base}{slug}/")
        };

        let idx = self.pages.len();
        if self.url_index.insert(url.clone(), idx).is_some() {
            return Err(TreeError::DuplicateUrl(url));
        }

        let namespace = spec
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned());
        let id = self.allocate_id(spec.id);
        self.pages.push(Page {
            id,
            title: spec.title.clone(),
            slug,
            url,
            is_home,
            in_navigation: spec.in_navigation,
            soft_root: spec.soft_root,
            reverse_id: spec.reverse_id.clone(),
            redirect_url: spec.redirect_url.clone(),
            login_required: spec.login_required,
            visibility: spec.limit_visibility,
            namespace,
        });
        self.children.push(Vec::new());
        self.parents.push(parent);

        for child in &spec.children {
            let child_idx = self.add(child, Some(idx), false, depth + 1)?;
            self.children[idx].push(child_idx);
        }

        Ok(idx)
    }

    fn finish(self, home: Option<usize>) -> PageTree {
        let id_index = self
            .pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.id, i))
            .collect();

        PageTree {
            pages: self.pages,
            children: self.children,
            parents: self.parents,
            roots: self.roots,
            id_index,
            url_index: self.url_index,
            home,
        }
    }
}
