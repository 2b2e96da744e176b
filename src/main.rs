use push_notifier::network::Endpoint;
use push_notifier::run;
use push_notifier::ui::cli::{Invocation, parse_invocation};
use push_notifier::ui::output::{print_help, print_usage_error};
use std::{env, io, process};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let argv: Vec<String> = env::args().collect();
    let program = argv
        .first()
        .cloned()
        .unwrap_or_else(|| String::from("send-notification"));

    let args = match parse_invocation(argv) {
        Ok(Invocation::Help) => {
            print_help(&program);
            process::exit(0);
        }
        Ok(Invocation::Send(args)) => args,
        Err(e) => {
            print_usage_error(&program, &e);
            process::exit(1);
        }
    };

    setup_logging(args.verbose);
    if !args.ignored.is_empty() {
        tracing::debug!(ignored = ?args.ignored, "skipping unrecognized arguments");
    }

    if let Err(e) = run(&args, &Endpoint::default()) {
        tracing::debug!(error = %e, "notification not delivered");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG, when set, takes precedence over -v
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
