//! Keys and payloads kept in the per-visitor session.

use serde::{Deserialize, Serialize};

/// Logged-in user, set at login and cleared at logout.
pub const SESSION_USER_KEY: &str = "user";

/// Dashboard search criteria ([`store::SearchQuery`]).
pub const SESSION_SEARCH_KEY: &str = "search";

/// One-shot message shown on the next render of the login page.
pub const SESSION_LOGIN_ERROR_KEY: &str = "login_error";

/// One-shot message shown on the next render of the register page.
pub const SESSION_REGISTER_ERROR_KEY: &str = "register_error";

/// Identity stored in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: store::UserId,
    pub username: String,
}

impl From<&store::User> for SessionUser {
    fn from(user: &store::User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
