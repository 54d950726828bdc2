use std::env;

pub const DEFAULT_DATABASE_PATH: &str = "data/blog_list.db";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_path: String,
    /// Overrides Rocket's configured port when set.
    pub port: Option<u16>,
}

impl Config {
    /// Reads the configuration from the process environment, after loading
    /// a `.env` file from the working directory if there is one.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let database_path = var("DATABASE_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        let port = var("PORT").and_then(|raw| match raw.trim().parse() {
            Ok(port) => Some(port),
            Err(e) => {
                log::warn!("Ignoring invalid PORT value {raw:?}: {e}");
                None
            }
        });
        Config { database_path, port }
    }
}
