//! Page trees shared by tests across the workspace.
//!
//! Enabled with the `fixtures` feature for downstream test code.

use crate::tree::PageTree;

/// Extended menu tree:
///
/// ```text
/// P1 (home)
///   P2
///     P3
///   P9
///     P10
///       P11
/// P4
///   P5
/// P6 (not in navigation)
///   P7
///   P8
/// ```
pub const EXTENDED_MENUS_YAML: &str = "\
pages:
  - id: 1
    title: P1
    children:
      - id: 2
        title: P2
        children:
          - id: 3
            title: P3
      - id: 9
        title: P9
        reverse_id: p9
        children:
          - id: 10
            title: P10
            children:
              - id: 11
                title: P11
  - id: 4
    title: P4
    children:
      - id: 5
        title: P5
  - id: 6
    title: P6
    in_navigation: false
    children:
      - id: 7
        title: P7
      - id: 8
        title: P8
";

/// Tree with a soft root below the home page:
///
/// ```text
/// Home
///   Projects (soft root)
///     django CMS
///     django Shop
///   People
/// ```
pub const SOFT_ROOT_YAML: &str = "\
pages:
  - title: Home
    children:
      - title: Projects
        soft_root: true
        reverse_id: projects
        children:
          - title: django CMS
          - title: django Shop
      - title: People
";

/// Parsed [`EXTENDED_MENUS_YAML`].
pub fn extended_menus() -> PageTree {
    PageTree::from_yaml_str(EXTENDED_MENUS_YAML).expect("extended menus fixture is valid")
}

/// Parsed [`SOFT_ROOT_YAML`].
pub fn soft_root() -> PageTree {
    PageTree::from_yaml_str(SOFT_ROOT_YAML).expect("soft root fixture is valid")
}
