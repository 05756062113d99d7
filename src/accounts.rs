//! Demo sign-up and log-in against an in-memory user list.
//!
//! Passwords are compared as plain strings. This only gates the demo UI and
//! is not an authentication system.

use crate::errors::AppError;
use crate::models::UserProfile;
use std::fmt;

pub const DEMO_NAME: &str = "Demo User";
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    PasswordMismatch,
    EmailTaken,
    InvalidCredentials,
    MissingField(&'static str),
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::PasswordMismatch => write!(f, "passwords do not match"),
            AccountError::EmailTaken => write!(f, "a user with this email already exists"),
            AccountError::InvalidCredentials => write!(f, "invalid email or password"),
            AccountError::MissingField(field) => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for AccountError {}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        let message = err.to_string();
        match err {
            AccountError::PasswordMismatch | AccountError::MissingField(_) => {
                AppError::bad_request(message)
            }
            AccountError::EmailTaken => AppError::conflict(message),
            AccountError::InvalidCredentials => AppError::unauthorized(message),
        }
    }
}

#[derive(Debug, Clone)]
struct Account {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl Default for AccountDirectory {
    fn default() -> Self {
        Self {
            accounts: vec![Account {
                name: DEMO_NAME.to_string(),
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
            }],
        }
    }
}

impl AccountDirectory {
    pub fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<UserProfile, AccountError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(AccountError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(AccountError::MissingField("email"));
        }
        if password != confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        if self.accounts.iter().any(|account| account.email == email) {
            return Err(AccountError::EmailTaken);
        }

        let account = Account {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let profile = profile(&account);
        self.accounts.push(account);
        Ok(profile)
    }

    pub fn log_in(&self, email: &str, password: &str) -> Result<UserProfile, AccountError> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|account| account.email == email && account.password == password)
            .map(profile)
            .ok_or(AccountError::InvalidCredentials)
    }
}

fn profile(account: &Account) -> UserProfile {
    UserProfile {
        name: account.name.clone(),
        email: account.email.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_user_can_log_in() {
        let directory = AccountDirectory::default();
        let user = directory.log_in(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(user.name, DEMO_NAME);
        assert_eq!(
            directory.log_in(DEMO_EMAIL, "wrong"),
            Err(AccountError::InvalidCredentials)
        );
    }

    #[test]
    fn sign_up_then_log_in() {
        let mut directory = AccountDirectory::default();
        directory
            .sign_up("Ada", "ada@example.com", "secret", "secret")
            .unwrap();
        assert_eq!(
            directory.log_in("ada@example.com", "secret").unwrap().name,
            "Ada"
        );
    }

    #[test]
    fn sign_up_rejects_mismatch_and_duplicates() {
        let mut directory = AccountDirectory::default();
        assert_eq!(
            directory.sign_up("Ada", "ada@example.com", "a", "b"),
            Err(AccountError::PasswordMismatch)
        );
        assert_eq!(
            directory.sign_up("Again", DEMO_EMAIL, "x", "x"),
            Err(AccountError::EmailTaken)
        );
        assert_eq!(
            directory.sign_up("  ", "blank@example.com", "x", "x"),
            Err(AccountError::MissingField("name"))
        );
    }

    #[test]
    fn account_errors_map_to_statuses() {
        use axum::http::StatusCode;
        assert_eq!(
            AppError::from(AccountError::EmailTaken).status,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(AccountError::InvalidCredentials).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AccountError::PasswordMismatch).status,
            StatusCode::BAD_REQUEST
        );
    }
}
