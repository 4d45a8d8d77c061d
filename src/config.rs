use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Environment variable holding the Telegram bot token.
pub const TOKEN_VAR: &str = "BOT_TOKEN";

/// Env file read at startup when no other path is given.
pub const DEFAULT_ENV_FILE: &str = "pet1.env";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Bot token not set: pass --token or define BOT_TOKEN")]
    MissingToken,

    #[error("Failed to read env file {}: {}", .path.display(), .source)]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Settings the bot needs at process start.
#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
}

impl BotConfig {
    /// Resolve the token from, in order: the explicit override, the process
    /// environment, then the env file. A missing env file is not an error.
    pub fn load(env_file: &Path, token: Option<String>) -> Result<Self, ConfigError> {
        let file_token = read_env_file(env_file)?.remove(TOKEN_VAR);
        Self::resolve(token, std::env::var(TOKEN_VAR).ok(), file_token)
    }

    fn resolve(
        explicit: Option<String>,
        from_env: Option<String>,
        from_file: Option<String>,
    ) -> Result<Self, ConfigError> {
        let token = [explicit, from_env, from_file]
            .into_iter()
            .flatten()
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        Ok(Self { token })
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "env file not found, skipping");
        return Ok(HashMap::new());
    }

    let to_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };
    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .map(|item| item.map_err(to_error))
        .collect()
}
