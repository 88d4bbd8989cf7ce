// Settings for the send-request command.
//
// Values come from the process environment first and from an env file
// second, so a variable exported in the shell always wins over the file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{ConfigError, CredentialsError};

pub const API_URL: &str = "API_URL";
pub const API_CREDENTIALS: &str = "API_CREDENTIALS";

/// Env file looked up in the user's home directory when `./.env` is absent.
pub const HOME_ENV_FILE: &str = ".dp_request.env";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    api_url: Option<String>,
    api_credentials: Option<String>,
}

impl Settings {
    /// Load settings from the process environment, falling back to an env
    /// file. An explicit `env_file` must be readable; the implicit candidates
    /// (`./.env`, then `~/.dp_request.env`) are skipped when missing.
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => match default_env_file() {
                Some(path) => read_env_file(&path)?,
                None => HashMap::new(),
            },
        };

        Ok(Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| file_vars.get(key).cloned())
        }))
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Self {
            api_url,
            api_credentials: lookup(API_CREDENTIALS),
        }
    }

    /// Endpoint URL, `None` when unset or blank.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Parse `API_CREDENTIALS` into the object sent under `credentials`.
    pub fn credentials(&self) -> Result<Value, CredentialsError> {
        let Some(raw) = self.api_credentials.as_deref() else {
            tracing::debug!("{API_CREDENTIALS} not set, sending empty credentials");
            return Ok(Value::Object(Map::new()));
        };

        match serde_json::from_str::<Value>(raw)? {
            obj @ Value::Object(_) => Ok(obj),
            other => Err(CredentialsError::NotAnObject(json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn default_env_file() -> Option<PathBuf> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        return Some(local);
    }
    let home = dirs::home_dir()?.join(HOME_ENV_FILE);
    home.is_file().then_some(home)
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded env file");
    Ok(parse_env(&contents))
}

/// Parse `KEY=VALUE` lines. Comments, blank lines and lines without `=` are
/// skipped and a leading `export ` is removed. Quoted values keep everything
/// between the quotes; unquoted values end at a whitespace-preceded `#`.
pub fn parse_env(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            tracing::debug!(line = idx + 1, "ignoring env line without '='");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), parse_value(value.trim()).to_string());
    }

    vars
}

fn parse_value(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            if let Some(end) = rest.find(quote) {
                return &rest[..end];
            }
        }
    }
    match value.find([' ', '\t']).filter(|&i| value[i..].trim_start().starts_with('#')) {
        Some(i) => value[..i].trim_end(),
        None => value,
    }
}
