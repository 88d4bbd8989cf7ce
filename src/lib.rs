// Library root
// -----------
// The `dp-request` binary is a thin clap wrapper around this crate.
//
// Module responsibilities:
// - `config`: reads `API_URL` / `API_CREDENTIALS` from the environment and
//   env files.
// - `api`: the blocking HTTP client that POSTs the sign-in payload.
// - `command`: the `send-request` flow and its success/failure reporting.
// - `ui`: terminal styling and the progress spinner.
// - `error`: fatal and recoverable error types.
pub mod api;
pub mod command;
pub mod config;
pub mod error;
pub mod ui;

pub use api::ApiClient;
pub use command::Outcome;
pub use config::Settings;
pub use error::{CommandError, ConfigError, CredentialsError, SendError};
pub use ui::Console;
