// Error types for the send-request command.
//
// Two groups live here:
// - recoverable failures (`SendError`): the request left the machine or was
//   answered with a non-2xx status. The command reports these on stderr and
//   still finishes normally.
// - fatal failures (`CommandError`, `ConfigError`, `CredentialsError`):
//   anything that stops the command before or outside the network call.

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The env file was requested explicitly but could not be read.
    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `API_CREDENTIALS` holds something that cannot be sent as credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("API_CREDENTIALS is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON, but not an object. Carries the JSON kind that was found.
    #[error("API_CREDENTIALS must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// The sign-in request failed on the network or was rejected by the server.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// DNS failure, refused connection, timeout, invalid URL.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a 4xx or 5xx status.
    #[error("{source}")]
    Status {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },
}

impl SendError {
    /// Status code returned by the server, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Errors that abort the command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("The API_URL environment variable is not set. Please configure it in your .env file.")]
    MissingApiUrl,

    #[error("An unexpected error occurred: {0}")]
    InvalidCredentials(#[from] CredentialsError),

    /// The HTTP client itself could not be built (TLS backend, system config).
    #[error("An unexpected error occurred: {0}")]
    Client(#[source] reqwest::Error),

    /// Writing a status line to stdout or stderr failed.
    #[error("An unexpected error occurred: {0}")]
    Output(#[from] io::Error),
}
