use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Variable holding the Telegram bot token.
pub const TOKEN_VAR: &str = "BOT_TOKEN";
/// Optional directory for the file log.
pub const LOG_DIR_VAR: &str = "LOG_DIR";

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// `BOT_TOKEN` is not set or blank.
    MissingToken,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(
                f,
                "{TOKEN_VAR} not found. Please create a .env file with {TOKEN_VAR}=your_token_here"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Startup configuration. Loaded once in `main` and handed to the bot host.
#[derive(Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    /// Directory for the file log. Stdout only when unset.
    pub log_dir: Option<PathBuf>,
    /// Non-fatal problems found while loading, logged once logging is up.
    pub warnings: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"<redacted>")
            .field("log_dir", &self.log_dir)
            .field("warnings", &self.warnings)
            .finish()
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    /// Variables already set in the environment win over the file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_warning = match dotenvy::dotenv() {
            Err(e) if !e.not_found() => Some(format!("Ignoring .env file: {e}")),
            _ => None,
        };
        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        if let Some(warning) = env_warning {
            config.warnings.insert(0, warning);
        }
        Ok(config)
    }

    /// Load only from the given env file, ignoring the process environment.
    /// An unreadable file counts as empty.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let (vars, env_warning) = match dotenvy::from_path_iter(path)
            .and_then(|iter| iter.collect::<Result<HashMap<_, _>, _>>())
        {
            Ok(vars) => (vars, None),
            Err(e) => (
                HashMap::new(),
                Some(format!("Ignoring env file '{}': {e}", path.display())),
            ),
        };
        let mut config = Self::from_lookup(|key| vars.get(key).cloned())?;
        if let Some(warning) = env_warning {
            config.warnings.insert(0, warning);
        }
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let mut warnings = Vec::new();
        if !token_looks_valid(&token) {
            warnings.push(format!(
                "{TOKEN_VAR} looks malformed (expected format: 123456789:ABCdefGHI...)"
            ));
        }

        let log_dir = lookup(LOG_DIR_VAR)
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            telegram_bot_token: token,
            log_dir,
            warnings,
        })
    }
}

/// Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric.
fn token_looks_valid(token: &str) -> bool {
    match token.split_once(':') {
        Some((id, secret)) => {
            id.parse::<u64>().is_ok() && !secret.is_empty() && !secret.contains(':')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_env(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn assert_err<T>(result: Result<T, ConfigError>) -> ConfigError {
        match result {
            Ok(_) => panic!("expected error, got Ok"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_valid_env_file() {
        let file = write_env("BOT_TOKEN=123456789:ABCdefGHIjklMNOpqrsTUVwxyz\n");
        let config = Config::from_env_file(file.path()).expect("should load valid config");
        assert_eq!(config.telegram_bot_token, "123456789:ABCdefGHIjklMNOpqrsTUVwxyz");
        assert!(config.log_dir.is_none());
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_log_dir() {
        let file = write_env("BOT_TOKEN=123:abc\nLOG_DIR=/var/log/pepbot\n");
        let config = Config::from_env_file(file.path()).unwrap();
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/pepbot")));
    }

    #[test]
    fn test_missing_token() {
        let file = write_env("LOG_DIR=logs\n");
        let err = assert_err(Config::from_env_file(file.path()));
        assert!(matches!(err, ConfigError::MissingToken));
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    fn test_blank_token() {
        let err = assert_err(Config::from_lookup(lookup_from(&[("BOT_TOKEN", "   ")])));
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_token_is_trimmed() {
        let config = Config::from_lookup(lookup_from(&[("BOT_TOKEN", " 42:secret ")])).unwrap();
        assert_eq!(config.telegram_bot_token, "42:secret");
    }

    #[test]
    fn test_malformed_tokens_only_warn() {
        for token in ["invalid_token", "abc:def", "123456789:", "1:a:b"] {
            let config = Config::from_lookup(lookup_from(&[("BOT_TOKEN", token)]))
                .unwrap_or_else(|e| panic!("{token:?} should load: {e}"));
            assert_eq!(config.telegram_bot_token, token);
            assert_eq!(config.warnings.len(), 1, "token {token:?}");
            assert!(config.warnings[0].contains("malformed"));
        }
    }

    #[test]
    fn test_env_file_not_found_is_only_missing_token() {
        let err = assert_err(Config::from_env_file("/nonexistent/path/.env"));
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_malformed_env_file_warns() {
        let file = write_env("BOT_TOKEN=123:abc\nthis line is 'not valid\n");
        match Config::from_env_file(file.path()) {
            // dotenvy rejects the whole file, so the token is gone too
            Err(ConfigError::MissingToken) => {}
            Ok(config) => assert!(!config.warnings.is_empty()),
        }
    }

    #[test]
    fn test_debug_hides_token() {
        let config =
            Config::from_lookup(lookup_from(&[("BOT_TOKEN", "123:supersecret")])).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("supersecret"));
    }
}
