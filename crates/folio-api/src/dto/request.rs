//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Username; becomes the portfolio subdomain.
    #[validate(
        length(min = 3, max = 32, message = "Username must be 3 to 32 characters"),
        custom(function = "validate_username")
    )]
    pub username: String,
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address or username.
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub login: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Email verification confirmation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    /// Email address the token was sent to.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Plaintext token from the link.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}

/// Password reset request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    /// Account email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
}

/// Password reset confirmation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// Account email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Plaintext token from the link.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
    /// New plaintext password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Usernames are subdomain labels: lowercase letters, digits, and inner hyphens.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid_chars || username.starts_with('-') || username.ends_with('-') {
        let mut err = ValidationError::new("username");
        err.message = Some("Username may only contain letters, digits, and inner hyphens".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str) -> RegisterRequest {
        RegisterRequest {
            email: "a@b.com".to_string(),
            username: username.to_string(),
            name: "John Doe".to_string(),
            password: "plum-Harbor-42-lantern".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(register("johndoe").validate().is_ok());
        assert!(register("john-doe2").validate().is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(register("jo").validate().is_err());
        assert!(register("-john").validate().is_err());
        assert!(register("john_doe").validate().is_err());
        assert!(register("john.doe").validate().is_err());
    }

    #[test]
    fn test_invalid_email() {
        let mut req = register("johndoe");
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }
}
