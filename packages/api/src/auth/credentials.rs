//! Registration rules for usernames and passwords.
//!
//! Usernames must be non-empty and free of spaces. Passwords must be free of
//! spaces, contain at least two digits and at least one special character.
//! The [`CredentialError`] messages are shown verbatim on the register page.

const SPECIAL_CHARACTERS: &str = "`~!@#$%^&*()-_+=:;\"',<.>?/{}[]";

const MIN_DIGITS: usize = 2;
const MIN_SPECIAL: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Username can't be empty")]
    EmptyUsername,

    #[error("Username can't contain spaces")]
    UsernameSpaces,

    #[error("Password must contain no spaces, atleast two numbers, and atleast 1 special character (e.g. '@')")]
    WeakPassword,
}

pub fn validate_username(username: &str) -> Result<(), CredentialError> {
    if username.is_empty() {
        return Err(CredentialError::EmptyUsername);
    }
    if username.contains(' ') {
        return Err(CredentialError::UsernameSpaces);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), CredentialError> {
    if password.contains(' ') {
        return Err(CredentialError::WeakPassword);
    }
    let digits = password.chars().filter(char::is_ascii_digit).count();
    let special = password
        .chars()
        .filter(|c| SPECIAL_CHARACTERS.contains(*c))
        .count();
    if digits < MIN_DIGITS || special < MIN_SPECIAL {
        return Err(CredentialError::WeakPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username("alice"), Ok(()));
        assert_eq!(validate_username(""), Err(CredentialError::EmptyUsername));
        assert_eq!(
            validate_username("alice smith"),
            Err(CredentialError::UsernameSpaces)
        );
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("pa55word!"), Ok(()));
        assert_eq!(validate_password("12{"), Ok(()));
        assert_eq!(
            validate_password("pa55 word!"),
            Err(CredentialError::WeakPassword)
        );
        assert_eq!(
            validate_password("pa5sword!"),
            Err(CredentialError::WeakPassword)
        );
        assert_eq!(
            validate_password("pa55word"),
            Err(CredentialError::WeakPassword)
        );
    }
}
