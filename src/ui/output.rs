//! Output and reporting functions for the notification sender.
//!
//! This module handles all console output, including:
//! - Usage and template listing
//! - Summary of the request about to be sent
//! - Delivery report returned by the API
//! - Failure diagnostics
//!
//! Each section is rendered to a `String` first so the layout can be checked
//! without capturing stdout.

use crate::errors::{ResolutionError, SendError, UsageError};
use crate::models::notification::{NotificationRequest, NotificationResult};
use crate::templates::{self, CUSTOM_TYPE, DEFAULT_URL};
use chrono::{DateTime, Local};

const DIVIDER_WIDTH: usize = 60;

/// Characters of the user id shown in the request summary
const USER_ID_DISPLAY_WIDTH: usize = 36;

/// Characters of a device endpoint shown in the delivery report
const ENDPOINT_DISPLAY_WIDTH: usize = 50;

const EXAMPLE_USER_ID: &str = "45610e6d-f5f5-4540-912d-a5c9a361e20f";

fn divider() -> String {
    "━".repeat(DIVIDER_WIDTH)
}

fn header() -> String {
    format!(
        "{}\n📱 YM Sports - Envio de Notificações\n{}",
        divider(),
        divider()
    )
}

/// Keeps at most `max` characters of `value`.
fn truncate(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Renders the usage text with every template key and its title.
///
/// # Arguments
/// * `program` - Name the binary was invoked as, used in the examples
pub fn render_help(program: &str) -> String {
    let template_lines: String = templates::all()
        .iter()
        .map(|t| format!("  {:12} - {}\n", t.key, t.title))
        .collect();

    format!(
        "{header}\n\n\
         Uso:\n  {program} <user_id> <tipo> [--title T] [--body B] [--url U]\n\n\
         Tipos disponíveis:\n{template_lines}\n\
         Exemplos:\n  {program} {EXAMPLE_USER_ID} workout\n  {program} {EXAMPLE_USER_ID} test\n\n\
         Envio personalizado:\n  {program} SEU_USER_ID {CUSTOM_TYPE} \\\n    \
         --title '🎉 Parabéns' \\\n    --body 'Você é incrível!' \\\n    --url '{DEFAULT_URL}'\n\n\
         {divider}",
        header = header(),
        divider = divider(),
    )
}

/// Renders the summary printed right before the request goes out.
///
/// # Arguments
/// * `request` - Payload about to be posted
/// * `sent_at` - Local dispatch time shown in the summary
pub fn render_request_summary(request: &NotificationRequest, sent_at: DateTime<Local>) -> String {
    format!(
        "{}\n\n👤 Usuário: {}\n📝 Título: {}\n💬 Mensagem: {}\n🔗 URL: {}\n🕒 Horário: {}\n\n\
         📤 Enviando...\n",
        header(),
        truncate(&request.user_id, USER_ID_DISPLAY_WIDTH),
        request.title,
        request.body,
        request.url,
        sent_at.format("%d/%m/%Y %H:%M:%S")
    )
}

/// Renders the API delivery counts and one line per device.
///
/// # Arguments
/// * `result` - Summary returned by the API on HTTP 200
pub fn render_delivery_report(result: &NotificationResult) -> String {
    let mut out = format!(
        "{}\n✅ Notificação enviada com sucesso!\n\nResultado:\n  ✅ Enviadas: {}\n  \
         ❌ Falharam: {}\n  📱 Total de dispositivos: {}\n",
        divider(),
        result.sent,
        result.failed,
        result.total
    );

    if !result.details.is_empty() {
        out.push_str("\nDetalhes:\n");
        for (i, detail) in result.details.iter().enumerate() {
            let marker = if detail.success { "✅" } else { "❌" };
            out.push_str(&format!(
                "  {} Dispositivo {}: {}...\n",
                marker,
                i + 1,
                truncate(&detail.endpoint, ENDPOINT_DISPLAY_WIDTH)
            ));
        }
    }

    out.push('\n');
    out.push_str(&divider());
    out
}

/// Renders a failed delivery, including the API response when there is one.
///
/// # Arguments
/// * `error` - Classified send failure
pub fn render_send_error(error: &SendError) -> String {
    let details = match error {
        SendError::Api { body, .. } => format!("❌ {}\n\nResposta:\n{}\n\n", error, body),
        SendError::Connection(_) => {
            format!("❌ Erro: {}\n   Verifique sua conexão com a internet\n", error)
        }
        SendError::Timeout => format!("❌ Erro: {}\n", error),
        SendError::Unexpected(_) => format!("❌ {}\n", error),
    };

    format!("{}\n{}{}", divider(), details, divider())
}

/// Renders a request that could not be built.
pub fn render_resolution_error(error: &ResolutionError) -> String {
    match error {
        ResolutionError::UnknownType(_) => {
            format!("❌ {}\nUse --help para ver tipos disponíveis", error)
        }
        ResolutionError::MissingField { .. } => format!("❌ Erro: {}", error),
    }
}

/// Prints the usage text.
///
/// # Arguments
/// * `program` - Name the binary was invoked as
pub fn print_help(program: &str) {
    println!("{}", render_help(program));
}

/// Prints a usage error followed by the help text.
///
/// # Arguments
/// * `program` - Name the binary was invoked as
/// * `error` - Why the command line was rejected
pub fn print_usage_error(program: &str, error: &UsageError) {
    println!("❌ Erro: {}\n", error);
    print_help(program);
}

/// Prints the request summary stamped with the current local time.
///
/// # Arguments
/// * `request` - Payload about to be posted
pub fn print_request_summary(request: &NotificationRequest) {
    println!("{}", render_request_summary(request, Local::now()));
}

/// Prints the delivery report of a successful send.
///
/// # Arguments
/// * `result` - Summary returned by the API
pub fn print_delivery_report(result: &NotificationResult) {
    println!("{}", render_delivery_report(result));
}

/// Prints the diagnostics of a failed send.
///
/// # Arguments
/// * `error` - Classified send failure
pub fn print_send_error(error: &SendError) {
    println!("{}", render_send_error(error));
}

/// Prints why the notification could not be built.
///
/// # Arguments
/// * `error` - Unknown type or missing custom field
pub fn print_resolution_error(error: &ResolutionError) {
    println!("{}", render_resolution_error(error));
}
