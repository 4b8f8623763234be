//! Navigation guard. Everything outside the public prefix needs a logged-in
//! session; this only shapes the UX, the API enforces access itself.

use super::table::{FALLBACK_PATH, match_path};

pub const PUBLIC_PREFIX: &str = "/public/";
/// Landing page for visitors without a session.
pub const UNAUTHENTICATED_PATH: &str = "/public/unauthenticated";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

pub fn is_public(path: &str) -> bool {
    path.starts_with(PUBLIC_PREFIX)
}

/// Decides whether a navigation to `path` may proceed.
pub fn check(path: &str, logged_in: bool) -> Navigation {
    if is_public(path) || logged_in {
        Navigation::Proceed
    } else {
        Navigation::Redirect(UNAUTHENTICATED_PATH)
    }
}

/// Where the app has to go instead of `path`, if anywhere: the guard runs
/// first, then unknown paths fall back to the front page.
pub fn next_navigation(path: &str, logged_in: bool) -> Option<&'static str> {
    match check(path, logged_in) {
        Navigation::Redirect(target) => Some(target),
        Navigation::Proceed if match_path(path).is_none() => Some(FALLBACK_PATH),
        Navigation::Proceed => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigation, UNAUTHENTICATED_PATH, check, next_navigation};

    #[test]
    fn private_paths_redirect_without_a_session() {
        for path in ["/", "/membership", "/admin", "/admin/company/3", "/public"] {
            assert_eq!(
                check(path, false),
                Navigation::Redirect(UNAUTHENTICATED_PATH),
                "{path}"
            );
            assert_eq!(check(path, true), Navigation::Proceed, "{path}");
        }
    }

    #[test]
    fn public_paths_never_redirect() {
        for logged_in in [false, true] {
            assert_eq!(check("/public/unauthenticated", logged_in), Navigation::Proceed);
            assert_eq!(check("/public/anything", logged_in), Navigation::Proceed);
        }
    }

    #[test]
    fn next_navigation_applies_guard_then_fallback() {
        assert_eq!(next_navigation("/admin", false), Some(UNAUTHENTICATED_PATH));
        assert_eq!(next_navigation("/admin", true), None);
        assert_eq!(next_navigation("/nope", true), Some("/"));
        assert_eq!(next_navigation("/nope", false), Some(UNAUTHENTICATED_PATH));
        assert_eq!(next_navigation("/public/unknown", false), Some("/"));
        assert_eq!(next_navigation("/public/unauthenticated", false), None);
    }
}
