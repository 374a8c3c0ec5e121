//! Unauthorized Handling
//!
//! The capability the pipeline invokes after a 401 has torn the session down:
//! sending the user back to the login entry point.

use tracing::warn;

/// Reacts to an authentication rejection by routing to the login entry point.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self, login_route: &str);
}

impl<F> UnauthorizedHandler for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_unauthorized(&self, login_route: &str) {
        self(login_route)
    }
}

// == Login Redirect ==
/// Default handler: records the redirect in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginRedirect;

impl UnauthorizedHandler for LoginRedirect {
    fn on_unauthorized(&self, login_route: &str) {
        warn!(route = %login_route, "Session expired, redirecting to login");
    }
}
