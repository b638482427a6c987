use crate::error::FormError;

pub const EMAIL_FIELD: &str = "Email";
pub const PASSWORD_FIELD: &str = "Password";
pub const CONFIRM_PASSWORD_FIELD: &str = "Password confirmation";

/// Email/password pair that passed the required-field gate.
///
/// Mirrors the browser `required` check only: fields must be non-empty, the
/// email format is left to the identity provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Result<Self, FormError> {
        require(EMAIL_FIELD, email)?;
        require(PASSWORD_FIELD, password)?;
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn with_confirmation(
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Self, FormError> {
        let credentials = Self::new(email, password)?;
        require(CONFIRM_PASSWORD_FIELD, confirmation)?;
        if password != confirmation {
            return Err(FormError::Mismatch {
                field: CONFIRM_PASSWORD_FIELD.to_string(),
            });
        }
        Ok(credentials)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// password stays out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

fn require(field: &str, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        Err(FormError::Required {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}
