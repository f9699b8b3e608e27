// Login guard (pure functions)

use crate::session::types::LoginError;

/// Any non-empty username and password pair is accepted.
///
/// Whitespace counts as content; nothing is trimmed.
pub fn check_credentials(username: &str, password: &str) -> Result<(), LoginError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(())
}
