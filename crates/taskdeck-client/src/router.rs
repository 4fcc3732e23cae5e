//! Routes and Route Guard
//!
//! Maps browser paths to views and decides, from the session state, whether
//! a view may be shown.

use crate::session::SessionState;

/// Client-side views
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Signup,
    /// Guarded: requires an authenticated session
    Dashboard,
    NotFound(String),
}

impl Route {
    /// Parse a location path. Query, fragment and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::NotFound(path) => path,
        }
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Outcome of checking a navigation against the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    /// Replace the current history entry with this route
    Redirect(Route),
    /// Session still loading; nothing may be decided
    Pending,
}

/// Decide what to show for `route`.
///
/// Anonymous visitors asking for a guarded view go to the login page; the
/// original destination is not remembered.
pub fn decide(session: &SessionState, route: &Route) -> GuardDecision {
    match session {
        SessionState::Loading => GuardDecision::Pending,
        _ if !route.is_guarded() => GuardDecision::Render(route.clone()),
        SessionState::Authenticated(_) => GuardDecision::Render(route.clone()),
        SessionState::Anonymous => GuardDecision::Redirect(Route::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRef;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/signup/"), Route::Signup);
        assert_eq!(Route::from_path("/dashboard?page=2#top"), Route::Dashboard);
        assert_eq!(
            Route::from_path("/settings"),
            Route::NotFound("/settings".to_string())
        );
    }

    #[test]
    fn test_route_paths() {
        for route in [Route::Home, Route::Login, Route::Signup, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert!(Route::Dashboard.is_guarded());
        assert!(!Route::Login.is_guarded());
    }

    #[test]
    fn test_anonymous_always_redirected() {
        assert_eq!(
            decide(&SessionState::Anonymous, &Route::Dashboard),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(
            decide(&SessionState::Anonymous, &Route::Signup),
            GuardDecision::Render(Route::Signup)
        );
    }

    #[test]
    fn test_authenticated_renders_dashboard() {
        let session = SessionState::Authenticated(UserRef::from("alice@example.com"));
        assert_eq!(
            decide(&session, &Route::Dashboard),
            GuardDecision::Render(Route::Dashboard)
        );
    }

    #[test]
    fn test_loading_never_decides() {
        for route in [Route::Home, Route::Login, Route::Dashboard] {
            assert_eq!(decide(&SessionState::Loading, &route), GuardDecision::Pending);
        }
    }
}
