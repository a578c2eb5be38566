use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub movies_file: String,
    pub users_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_owned(),
            port: 8000,
            movies_file: "movies.json".to_owned(),
            users_file: "users.json".to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = Config::default();
        Config {
            host: lookup("CATALOG_HOST").unwrap_or(defaults.host),
            port: lookup("CATALOG_PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            movies_file: lookup("MOVIES_FILE").unwrap_or(defaults.movies_file),
            users_file: lookup("USERS_FILE").unwrap_or(defaults.users_file),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
