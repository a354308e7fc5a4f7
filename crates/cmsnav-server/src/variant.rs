//! Endpoint table.
//!
//! Each menu endpoint is described by a [`VariantSpec`]; the router and the
//! API root listing are both built from [`VARIANTS`].

/// Menu operation behind an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Variant {
    ShowMenu,
    ShowMenuBelowId,
    ShowSubMenu,
    ShowBreadcrumb,
}

/// Static description of one endpoint.
#[derive(Debug)]
pub(crate) struct VariantSpec {
    pub(crate) variant: Variant,
    /// Name used in the root listing.
    pub(crate) name: &'static str,
    /// Route relative to the API prefix.
    pub(crate) route: &'static str,
    /// Query parameters read by the endpoint, besides `current_page`.
    pub(crate) params: &'static [&'static str],
    /// Serialize nodes without their children.
    pub(crate) flatten: bool,
}

pub(crate) static VARIANTS: [VariantSpec; 4] = [
    VariantSpec {
        variant: Variant::ShowMenu,
        name: "show-menu",
        route: "/show-menu/",
        params: &[
            "start_level",
            "end_level",
            "extra_inactive",
            "extra_active",
            "namespace",
            "root_id",
        ],
        flatten: false,
    },
    VariantSpec {
        variant: Variant::ShowMenuBelowId,
        name: "show-menu-below-id",
        route: "/show-menu-below-id/",
        params: &[
            "root_id",
            "start_level",
            "end_level",
            "extra_inactive",
            "extra_active",
            "namespace",
        ],
        flatten: false,
    },
    VariantSpec {
        variant: Variant::ShowSubMenu,
        name: "show-submenu",
        route: "/show-submenu/",
        params: &["levels", "root_level", "nephews"],
        flatten: false,
    },
    VariantSpec {
        variant: Variant::ShowBreadcrumb,
        name: "show-breadcrumb",
        route: "/show-breadcrumb/",
        params: &["start_level", "only_visible"],
        flatten: true,
    },
];
