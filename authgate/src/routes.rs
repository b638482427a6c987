pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/home";
pub const REGISTER_ROUTE: &str = "/register";
pub const LOGOUT_ROUTE: &str = "/logout";

/// Where the login form sends an authenticated user. Form contents play no
/// part in the decision.
pub fn redirect_target(is_authenticated: bool) -> Option<&'static str> {
    if is_authenticated {
        Some(HOME_ROUTE)
    } else {
        None
    }
}

/// Where a protected page sends a visitor without a session.
pub fn guard_target(is_authenticated: bool) -> Option<&'static str> {
    if is_authenticated {
        None
    } else {
        Some(LOGIN_ROUTE)
    }
}
