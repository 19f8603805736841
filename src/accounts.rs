use std::{str::FromStr, sync::Arc};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountParseError {
    #[error("expected `username:password`")]
    MissingSeparator,
    #[error("username must not be empty")]
    EmptyUsername,
}

/// A username/password pair allowed to submit analyses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Account {
    username: String,
    password: String,
}

impl Account {
    pub(crate) fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Parses `username:password`. The password is everything after the first `:` and may be empty.
impl FromStr for Account {
    type Err = AccountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (username, password) = s
            .split_once(':')
            .ok_or(AccountParseError::MissingSeparator)?;
        if username.is_empty() {
            return Err(AccountParseError::EmptyUsername);
        }

        Ok(Self::new(username, password))
    }
}

/// Accounts allowed to use the service. With no accounts configured the gate stays open.
#[derive(Debug, Default, Clone)]
pub(crate) struct Accounts(Arc<Vec<Account>>);

impl Accounts {
    pub(crate) fn new(accounts: Vec<Account>) -> Self {
        Self(Arc::new(accounts))
    }

    pub(crate) fn is_open(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if some account matches both `username` and `password` exactly.
    pub(crate) fn is_valid(&self, username: &str, password: &str) -> bool {
        self.0.iter().any(|account| account.matches(username, password))
    }

    /// Whether a request carrying these optional credentials may proceed.
    pub(crate) fn admits(&self, username: Option<&str>, password: Option<&str>) -> bool {
        if self.is_open() {
            return true;
        }

        match (username, password) {
            (Some(username), Some(password)) => self.is_valid(username, password),
            _ => false,
        }
    }
}
