//! Local username + password authentication.

mod credentials;
mod password;
mod session;

pub use credentials::{validate_password, validate_username, CredentialError};
pub use password::{hash_password, verify_password, PasswordError};
pub use session::{
    SessionUser, SESSION_LOGIN_ERROR_KEY, SESSION_REGISTER_ERROR_KEY, SESSION_SEARCH_KEY,
    SESSION_USER_KEY,
};
