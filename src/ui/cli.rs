//! Command-line interface module.
//!
//! Arguments are scanned permissively before clap sees them: the two
//! positionals are taken as-is, known flags are kept with their values and
//! anything else is dropped. Only the filtered list is handed to clap.

use crate::errors::UsageError;
use crate::templates::Overrides;
use clap::{ArgAction, Parser};

/// Tokens that ask for the usage text when given as the first argument.
const HELP_TOKENS: [&str; 3] = ["-h", "--help", "help"];

/// Flags that consume the following token as their value.
const VALUE_FLAGS: [&str; 3] = ["--title", "--body", "--url"];

/// CLI arguments for the notification sender
#[derive(Parser, Debug)]
#[command(
    name = "send-notification",
    author,
    about,
    long_about = None,
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// Id of the user whose devices receive the notification
    pub user_id: String,

    /// Template key, or `custom` to use --title/--body/--url
    pub notification_type: String,

    /// Title of a custom notification
    #[arg(long)]
    pub title: Option<String>,

    /// Body of a custom notification
    #[arg(long)]
    pub body: Option<String>,

    /// Url opened by a custom notification (defaults to /dashboard)
    #[arg(long)]
    pub url: Option<String>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, hide = true)]
    pub verbose: u8,

    /// Tokens dropped by the permissive scan
    #[arg(skip)]
    pub ignored: Vec<String>,
}

impl Args {
    /// Borrows the `--title`/`--body`/`--url` values for template resolution.
    ///
    /// # Returns
    /// [`Overrides`] pointing into these arguments; only used for `custom`
    pub fn overrides(&self) -> Overrides<'_> {
        Overrides {
            title: self.title.as_deref(),
            body: self.body.as_deref(),
            url: self.url.as_deref(),
        }
    }
}

/// What the command line asks the program to do.
#[derive(Debug)]
pub enum Invocation {
    Help,
    Send(Args),
}

/// Parses a full argv (program name first) into an [`Invocation`].
///
/// No arguments or a help token as the first argument yields
/// [`Invocation::Help`]. Unknown flags are skipped, the last value wins for a
/// repeated flag, and a value flag with nothing after it is skipped too.
///
/// # Errors
/// - [`UsageError::MissingArguments`] when the type positional is missing
/// - [`UsageError::Invalid`] when clap rejects the filtered arguments
pub fn parse_invocation<I, T>(argv: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
    let program = argv
        .first()
        .cloned()
        .unwrap_or_else(|| String::from("send-notification"));
    let rest = argv.get(1..).unwrap_or_default();

    match rest {
        [] => return Ok(Invocation::Help),
        [first, ..] if HELP_TOKENS.contains(&first.as_str()) => return Ok(Invocation::Help),
        [_] => return Err(UsageError::MissingArguments),
        _ => {}
    }

    let (user_id, notification_type) = (&rest[0], &rest[1]);
    let (mut filtered, ignored) = scan_options(&rest[2..]);
    filtered.insert(0, program);
    filtered.push(String::from("--"));
    filtered.push(user_id.clone());
    filtered.push(notification_type.clone());

    let mut args = Args::try_parse_from(filtered)
        .map_err(|e| UsageError::Invalid(first_line(&e.to_string())))?;
    args.ignored = ignored;
    Ok(Invocation::Send(args))
}

/// Splits the optional arguments into the ones clap should see and the dropped ones.
fn scan_options(options: &[String]) -> (Vec<String>, Vec<String>) {
    let mut kept = Vec::new();
    let mut ignored = Vec::new();
    let mut i = 0;

    while i < options.len() {
        let token = &options[i];
        if VALUE_FLAGS.contains(&token.as_str()) && i + 1 < options.len() {
            kept.push(format!("{}={}", token, options[i + 1]));
            i += 2;
        } else if is_verbose_switch(token) {
            kept.push(token.clone());
            i += 1;
        } else {
            ignored.push(token.clone());
            i += 1;
        }
    }

    (kept, ignored)
}

fn is_verbose_switch(token: &str) -> bool {
    token == "--verbose"
        || token
            .strip_prefix('-')
            .is_some_and(|flags| !flags.is_empty() && flags.chars().all(|c| c == 'v'))
}

fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
