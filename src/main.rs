//! reqcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use reqcheck::cli::{Cli, CommandDispatcher};
use reqcheck::ui::ReqTheme;
use reqcheck::ReqcheckError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("reqcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reqcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("reqcheck starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let dispatcher = CommandDispatcher::new();
    let theme = ReqTheme::new();
    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        // An unreadable manifest is fatal before any results exist; keep
        // the historical exit code 2 so callers can tell it apart
        Err(
            e @ (ReqcheckError::ManifestNotFound { .. } | ReqcheckError::ManifestRead { .. }),
        ) => {
            eprintln!("{}", theme.format_error(&format!("Error: {}", e), cli.ascii));
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{}", theme.format_error(&format!("Error: {}", e), cli.ascii));
            ExitCode::from(1)
        }
    }
}
