//! `cmsnav check` command implementation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use cmsnav_config::{CliSettings, Config};
use cmsnav_tree::PageTree;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover cmsnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page tree file (overrides config).
    #[arg(long, env = "CMSNAV_PAGES")]
    pages: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the page tree is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            pages_file: self.pages,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let tree = PageTree::load(&config.pages_resolved.file)?;
        let summary = Summary::of(&tree);

        output.highlight(&config.pages_resolved.file.display().to_string());
        output.field("Pages", &summary.pages.to_string());
        match &summary.home {
            Some(home) => output.field("Home", home),
            None => output.warning("No home page: every request renders without a current page"),
        }
        if !summary.soft_roots.is_empty() {
            output.field("Soft roots", &summary.soft_roots.join(", "));
        }
        output.field("Namespaces", &summary.namespaces.join(", "));
        output.success("Page tree is valid");

        Ok(())
    }
}

/// Facts about a loaded page tree.
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    pages: usize,
    home: Option<String>,
    soft_roots: Vec<String>,
    namespaces: Vec<String>,
}

impl Summary {
    fn of(tree: &PageTree) -> Self {
        let namespaces: BTreeSet<&str> = tree.pages().map(|p| p.namespace.as_str()).collect();
        Self {
            pages: tree.len(),
            home: tree.home().map(|p| format!("{} ({})", p.title, p.url)),
            soft_roots: tree
                .pages()
                .filter(|p| p.soft_root)
                .map(|p| format!("{} ({})", p.title, p.url))
                .collect(),
            namespaces: namespaces.into_iter().map(str::to_owned).collect(),
        }
    }
}
