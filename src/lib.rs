//! Sends YM Sports push notifications from the command line.
//!
//! A notification is resolved from a predefined template (or custom
//! title/body/url), posted once to the notification API, and the delivery
//! report is printed to stdout.

pub mod errors;
pub mod models;
pub mod network;
pub mod templates;
pub mod ui;

use errors::NotifierError;
use models::notification::NotificationResult;
use network::Endpoint;
use ui::{cli::Args, output};

/// Resolves, sends and reports a single notification.
///
/// Every stage prints its own section of the report; the returned error only
/// tells the caller that the invocation failed.
///
/// # Arguments
/// * `args` - Parsed command line
/// * `endpoint` - Notification API to post to, normally [`Endpoint::default()`]
///
/// # Returns
/// The API delivery summary on HTTP 200, otherwise the resolution or send error
pub fn run(args: &Args, endpoint: &Endpoint) -> Result<NotificationResult, NotifierError> {
    let overrides = args.overrides();
    let request = match templates::resolve(&args.user_id, &args.notification_type, overrides) {
        Ok(request) => request,
        Err(e) => {
            output::print_resolution_error(&e);
            return Err(e.into());
        }
    };
    tracing::debug!(?request, "notification resolved");

    output::print_request_summary(&request);

    match network::send_notification(&request, endpoint) {
        Ok(result) => {
            output::print_delivery_report(&result);
            Ok(result)
        }
        Err(e) => {
            output::print_send_error(&e);
            Err(e.into())
        }
    }
}
