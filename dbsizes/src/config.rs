pub const CLIENT_VAR: &str = "DB_CLIENT";
pub const DEFAULT_CLIENT: &str = "mysql";

/// Where to find the database command-line client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub program: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            program: DEFAULT_CLIENT.to_owned(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(CLIENT_VAR) {
            Some(program) if !program.is_empty() => ClientConfig { program },
            _ => ClientConfig::default(),
        }
    }
}
