//! Navbar link model.
use yew_router::Routable;

use crate::router::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    #[must_use]
    pub fn href(&self) -> String {
        self.route.to_path()
    }
}

/// Top-level links, ending with the session entry point.
#[must_use]
pub fn nav_links(logged_in: bool) -> Vec<NavLink> {
    let session = if logged_in {
        NavLink {
            label: "Dashboard",
            route: Route::Account,
        }
    } else {
        NavLink {
            label: "Login",
            route: Route::Login,
        }
    };
    vec![
        NavLink {
            label: "Home",
            route: Route::Home,
        },
        NavLink {
            label: "Downloads",
            route: Route::Downloads,
        },
        NavLink {
            label: "Forum",
            route: Route::Forum,
        },
        NavLink {
            label: "Community",
            route: Route::Community,
        },
        session,
    ]
}

/// Whether a link to `href` should be highlighted while `current` is shown.
/// The home link only matches exactly; every other link also matches its
/// sub-paths.
#[must_use]
pub fn is_active(current: &str, href: &str) -> bool {
    current == href || (href != "/" && current.starts_with(href))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_link_follows_login_state() {
        let guest = nav_links(false);
        let member = nav_links(true);
        assert_eq!(guest.len(), 5);
        assert_eq!(guest[4].label, "Login");
        assert_eq!(guest[4].href(), "/login");
        assert_eq!(member[4].label, "Dashboard");
        assert_eq!(member[4].href(), "/account");
        assert_eq!(guest[..4], member[..4]);
    }

    #[test]
    fn home_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/forum", "/"));
        assert!(is_active("/forum", "/forum"));
        assert!(is_active("/forum/3", "/forum"));
        assert!(!is_active("/downloads", "/forum"));
    }
}
