//! Deployment base path handling.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/portal` for a project
//! page), asset URLs and router paths are prefixed with it. Local builds
//! without `PUBLIC_URL` stay root-anchored.

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// URL of a file under `static/`, respecting the base path.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(public_url(), relative)
}

/// Link target for an in-site path such as `/forum`, respecting the base path.
#[must_use]
pub fn route_href(path: &str) -> String {
    join_base(public_url(), path)
}

/// Base path for the router, `None` when hosted at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(public_url())
}

fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

fn join_base(base: &str, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    match normalize_base(base) {
        Some(base) => format!("{base}/{rel}"),
        None => format!("/{rel}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_are_root_anchored_without_base() {
        assert_eq!(asset_path("img/logo.png"), "/img/logo.png");
        assert_eq!(asset_path("/img/logo.png"), "/img/logo.png");
        assert_eq!(router_base(), None);
        assert_eq!(route_href("/forum"), "/forum");
        assert_eq!(route_href("/"), "/");
    }

    #[test]
    fn assets_are_prefixed_with_base() {
        assert_eq!(join_base("/portal", "img/logo.png"), "/portal/img/logo.png");
        assert_eq!(join_base("/portal/", "/img/logo.png"), "/portal/img/logo.png");
        assert_eq!(normalize_base(" /portal/ "), Some(String::from("/portal")));
        assert_eq!(normalize_base("/"), None);
    }
}
