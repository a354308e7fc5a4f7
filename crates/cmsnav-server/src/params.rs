//! Query parameter translation.
//!
//! Turns the raw query string of a menu endpoint into a typed
//! [`MenuRequest`]. Absent parameters take the endpoint defaults; present
//! ones must parse or the request fails with `400 Bad Request`.

use std::collections::HashMap;

use cmsnav_tree::{
    BreadcrumbArgs, EngineError, MenuArgs, NavigationEngine, NavigationNode, RenderContext,
    SubMenuArgs,
};

use crate::error::ServerError;
use crate::variant::{Variant, VariantSpec};

/// Typed engine call for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum MenuRequest {
    Menu(MenuArgs),
    MenuBelowId(MenuArgs),
    SubMenu(SubMenuArgs),
    Breadcrumb(BreadcrumbArgs),
}

impl MenuRequest {
    /// Translate the query of a `spec` endpoint.
    ///
    /// `show_menu_extra_active` is the `extra_active` default of the full
    /// menu endpoint.
    pub(crate) fn translate(
        spec: &VariantSpec,
        query: &HashMap<String, String>,
        show_menu_extra_active: u32,
    ) -> Result<Self, ServerError> {
        for name in query.keys() {
            if name != "current_page" && !spec.params.contains(&name.as_str()) {
                tracing::debug!(
                    endpoint = spec.name,
                    parameter = %name,
                    "Ignoring query parameter"
                );
            }
        }

        let defaults = MenuArgs::default();
        let request = match spec.variant {
            Variant::ShowMenu | Variant::ShowMenuBelowId => {
                let extra_active_default = if spec.variant == Variant::ShowMenu {
                    show_menu_extra_active
                } else {
                    defaults.extra_active
                };
                let args = MenuArgs {
                    start_level: number(query, "start_level", defaults.start_level)?,
                    end_level: number(query, "end_level", defaults.end_level)?,
                    extra_inactive: number(query, "extra_inactive", defaults.extra_inactive)?,
                    extra_active: number(query, "extra_active", extra_active_default)?,
                    namespace: text(query, "namespace"),
                    root_id: text(query, "root_id"),
                };
                if spec.variant == Variant::ShowMenu {
                    Self::Menu(args)
                } else {
                    Self::MenuBelowId(args)
                }
            }
            Variant::ShowSubMenu => {
                let defaults = SubMenuArgs::default();
                let root_level = match query.get("root_level").map(String::as_str) {
                    None | Some("") => None,
                    Some(_) => Some(number(query, "root_level", 0)?),
                };
                Self::SubMenu(SubMenuArgs {
                    levels: number(query, "levels", defaults.levels)?,
                    root_level,
                    nephews: number(query, "nephews", defaults.nephews)?,
                })
            }
            Variant::ShowBreadcrumb => {
                let defaults = BreadcrumbArgs::default();
                Self::Breadcrumb(BreadcrumbArgs {
                    start_level: number(query, "start_level", defaults.start_level)?,
                    only_visible: flag(query, "only_visible", defaults.only_visible)?,
                })
            }
        };
        Ok(request)
    }

    /// Name of the menu tag this request renders.
    pub(crate) fn tag(&self) -> &'static str {
        match self {
            Self::Menu(_) => "show_menu",
            Self::MenuBelowId(_) => "show_menu_below_id",
            Self::SubMenu(_) => "show_sub_menu",
            Self::Breadcrumb(_) => "show_breadcrumb",
        }
    }

    /// Positional arguments of the menu tag, in tag order.
    pub(crate) fn arguments(&self) -> Vec<String> {
        match self {
            Self::Menu(args) => vec![
                args.start_level.to_string(),
                args.end_level.to_string(),
                args.extra_inactive.to_string(),
                args.extra_active.to_string(),
                quoted("menu/menu.html"),
                quoted(args.namespace.as_deref().unwrap_or_default()),
                quoted(args.root_id.as_deref().unwrap_or_default()),
            ],
            Self::MenuBelowId(args) => vec![
                quoted(args.root_id.as_deref().unwrap_or_default()),
                args.start_level.to_string(),
                args.end_level.to_string(),
                args.extra_inactive.to_string(),
                args.extra_active.to_string(),
                quoted("menu/menu.html"),
                quoted(args.namespace.as_deref().unwrap_or_default()),
            ],
            Self::SubMenu(args) => vec![
                args.levels.to_string(),
                args.root_level
                    .map_or_else(|| "None".to_owned(), |level| level.to_string()),
                args.nephews.to_string(),
            ],
            Self::Breadcrumb(args) => vec![
                args.start_level.to_string(),
                quoted("menu/breadcrumb.html"),
                u8::from(args.only_visible).to_string(),
            ],
        }
    }

    /// Invoke the engine operation for this request.
    pub(crate) fn render(
        &self,
        engine: &dyn NavigationEngine,
        ctx: &RenderContext,
    ) -> Result<Vec<NavigationNode>, EngineError> {
        match self {
            Self::Menu(args) | Self::MenuBelowId(args) => engine.show_menu(ctx, args),
            Self::SubMenu(args) => engine.show_sub_menu(ctx, args),
            Self::Breadcrumb(args) => engine.show_breadcrumb(ctx, args),
        }
    }
}

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

fn invalid(parameter: &'static str, value: &str) -> ServerError {
    ServerError::InvalidParameter {
        parameter,
        value: value.to_owned(),
    }
}

/// Non-negative integer parameter.
fn number(
    query: &HashMap<String, String>,
    name: &'static str,
    default: u32,
) -> Result<u32, ServerError> {
    match query.get(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| invalid(name, raw)),
    }
}

/// Boolean parameter given as an integer (non-zero is true) or `true`/`false`.
fn flag(
    query: &HashMap<String, String>,
    name: &'static str,
    default: bool,
) -> Result<bool, ServerError> {
    let Some(raw) = query.get(name) else {
        return Ok(default);
    };
    let value = raw.trim();
    if let Ok(number) = value.parse::<u64>() {
        Ok(number != 0)
    } else if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(invalid(name, raw))
    }
}

/// Free text parameter; empty means absent.
fn text(query: &HashMap<String, String>, name: &str) -> Option<String> {
    query.get(name).filter(|v| !v.is_empty()).cloned()
}
