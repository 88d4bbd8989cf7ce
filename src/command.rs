// The `send-request` command: validate settings, send one sign-in request
// and report the result.
//
// Network and HTTP status failures are reported on the error stream and the
// command still returns `Ok`. Everything else is a `CommandError`.

use std::io::Write;

use reqwest::StatusCode;
use serde_json::Value;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::error::CommandError;
use crate::ui::Console;

pub const SENDING: &str = "Sending sign-in request...";
pub const SENT: &str = "Successfully sent POST request to the server.";
const WAITING: &str = "waiting for server";

/// What happened to the sign-in request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered with this 2xx status.
    Sent(StatusCode),
    /// Transport failure or non-2xx status, already reported on `err`.
    Failed,
}

/// Run the command against the configured endpoint.
///
/// Fails with [`CommandError::MissingApiUrl`] before touching the network
/// when no endpoint is configured.
pub fn handle<O: Write, E: Write>(
    settings: &Settings,
    console: Console,
    out: &mut O,
    err: &mut E,
) -> Result<Outcome, CommandError> {
    let url = settings.api_url().ok_or(CommandError::MissingApiUrl)?;

    console.notice(out, SENDING)?;
    let credentials = settings.credentials()?;
    let api = ApiClient::new(url).map_err(CommandError::Client)?;

    run(&api, &credentials, console, out, err)
}

/// Send the request with an existing client and report the outcome.
pub fn run<O: Write, E: Write>(
    api: &ApiClient,
    credentials: &Value,
    console: Console,
    out: &mut O,
    err: &mut E,
) -> Result<Outcome, CommandError> {
    let spinner = console.spinner(WAITING);
    let result = api.sign_in(credentials);
    spinner.finish_and_clear();

    match result {
        Ok(status) => {
            console.success(out, SENT)?;
            Ok(Outcome::Sent(status))
        }
        Err(e) => {
            tracing::warn!(url = %api.url(), status = ?e.status(), error = %e, "sign-in request failed");
            console.error(err, format!("Failed to send request: {e}"))?;
            Ok(Outcome::Failed)
        }
    }
}
