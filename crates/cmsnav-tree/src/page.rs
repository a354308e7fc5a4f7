//! Page records and their YAML representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Namespace assigned to pages that don't declare one.
pub(crate) const DEFAULT_NAMESPACE: &str = "CMSMenu";

/// Page identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Audience a page is shown to in menus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Everyone.
    #[default]
    All,
    /// Logged-in users only.
    Users,
    /// Anonymous visitors only.
    Anonymous,
}

/// A page of the site hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Page identifier.
    pub id: PageId,
    /// Menu title.
    pub title: String,
    /// URL segment. Ignored for the home page.
    pub slug: String,
    /// Absolute URL with leading and trailing slash (`/` for home).
    pub url: String,
    /// Whether this is the site's home page.
    pub is_home: bool,
    /// Whether the page is shown in menus.
    pub in_navigation: bool,
    /// Whether the page acts as a soft root.
    pub soft_root: bool,
    /// Stable identifier used by `show_menu_below_id`.
    pub reverse_id: Option<String>,
    /// Redirect target, if the page redirects.
    pub redirect_url: Option<String>,
    /// Whether viewing the page requires login.
    pub login_required: bool,
    /// Menu audience.
    pub visibility: Visibility,
    /// Menu namespace.
    pub namespace: String,
}

impl Page {
    /// Whether anonymous visitors see this page in menus.
    pub fn visible_for_anonymous(&self) -> bool {
        self.visibility != Visibility::Users
    }

    /// Whether logged-in users see this page in menus.
    pub fn visible_for_authenticated(&self) -> bool {
        self.visibility != Visibility::Anonymous
    }
}

/// Top-level layout of a page tree file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PagesFile {
    pub(crate) pages: Vec<PageSpec>,
}

/// A page as written in the YAML file, with nested children.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PageSpec {
    #[serde(default)]
    pub(crate) id: Option<u64>,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) slug: Option<String>,
    #[serde(default)]
    pub(crate) is_home: bool,
    #[serde(default = "default_true")]
    pub(crate) in_navigation: bool,
    #[serde(default)]
    pub(crate) soft_root: bool,
    #[serde(default)]
    pub(crate) reverse_id: Option<String>,
    #[serde(default)]
    pub(crate) redirect_url: Option<String>,
    #[serde(default)]
    pub(crate) login_required: bool,
    #[serde(default)]
    pub(crate) limit_visibility: Visibility,
    #[serde(default)]
    pub(crate) namespace: Option<String>,
    #[serde(default)]
    pub(crate) children: Vec<PageSpec>,
}

fn default_true() -> bool {
    true
}

impl PageSpec {
    /// Slug from the file, or one derived from the title.
    pub(crate) fn effective_slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.title))
    }
}

/// Lowercase the title and join alphanumeric runs with `-`.
fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
