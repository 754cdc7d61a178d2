use enum_dispatch::enum_dispatch;
use std::fmt;

use super::DbSizeError;

pub const USER_VAR: &str = "DB_USER";
pub const PASSWORD_VAR: &str = "DB_PASSWORD";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"****")
            .finish()
    }
}

#[enum_dispatch]
pub trait CredentialSource {
    fn resolve(&self) -> Result<Credentials, DbSizeError>;
}

/// Credentials compiled into the binary.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub user: String,
    pub password: String,
}

impl Default for StaticCredentials {
    fn default() -> Self {
        StaticCredentials {
            user: "user".to_owned(),
            password: "password".to_owned(),
        }
    }
}

impl CredentialSource for StaticCredentials {
    fn resolve(&self) -> Result<Credentials, DbSizeError> {
        Ok(Credentials {
            user: self.user.clone(),
            password: self.password.clone(),
        })
    }
}

/// Credentials read from two environment variables at resolve time.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    pub user_var: String,
    pub password_var: String,
}

impl Default for EnvCredentials {
    fn default() -> Self {
        EnvCredentials {
            user_var: USER_VAR.to_owned(),
            password_var: PASSWORD_VAR.to_owned(),
        }
    }
}

impl EnvCredentials {
    /// Unset and empty variables are both treated as missing.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<Credentials, DbSizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| match lookup(var) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(DbSizeError::MissingCredentials(var.to_owned())),
        };

        Ok(Credentials {
            user: get(&self.user_var)?,
            password: get(&self.password_var)?,
        })
    }
}

impl CredentialSource for EnvCredentials {
    fn resolve(&self) -> Result<Credentials, DbSizeError> {
        self.resolve_with(|k| std::env::var(k).ok())
    }
}

#[enum_dispatch(CredentialSource)]
#[derive(Debug, Clone)]
pub enum Source {
    StaticCredentials,
    EnvCredentials,
}
