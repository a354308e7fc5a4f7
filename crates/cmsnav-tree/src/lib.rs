//! Page tree and navigation engine for cmsnav.
//!
//! This crate provides:
//! - [`PageResolver`] and [`NavigationEngine`]: the contract the REST layer
//!   uses to find the current page and render menus
//! - [`PageTree`]: a read-only page hierarchy loaded from YAML that
//!   implements both traits with the menu semantics of the CMS
//!   (`show_menu`, `show_menu_below_id`, `show_sub_menu`, `show_breadcrumb`)
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use cmsnav_tree::{MenuArgs, NavigationEngine, PageResolver, PageTree, RenderContext};
//!
//! let tree = PageTree::load(Path::new("pages.yaml"))?;
//! let current = tree.resolve("/about/team/");
//! let ctx = RenderContext::new("/about/team/", current);
//!
//! let menu = tree.show_menu(&ctx, &MenuArgs::default())?;
//! # Ok(())
//! # }
//! ```

mod engine;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
mod menu;
mod node;
mod page;
mod tree;

pub use engine::{
    BreadcrumbArgs, EngineError, MenuArgs, NavigationEngine, PageResolver, RenderContext,
    SubMenuArgs,
};
pub use node::{NavigationNode, NodeAttributes};
pub use page::{Page, PageId, Visibility};
pub use tree::{MAX_TREE_DEPTH, PageTree, TreeError};
