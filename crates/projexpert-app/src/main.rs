mod app_state;
mod cli;
mod runner;
mod script;

use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "projexpert=info";

/// Parse a log directive, falling back to the default on error.
fn parse_directive(directive: &str) -> (Directive, Option<ParseError>) {
    match directive.parse() {
        Ok(parsed) => (parsed, None),
        Err(e) => (
            DEFAULT_LOG_DIRECTIVE.parse().expect("static directive"),
            Some(e),
        ),
    }
}

/// Install the stderr subscriber. Returns the parse error if `directive`
/// was rejected.
fn init_logging(directive: &str) -> Option<ParseError> {
    let (parsed, rejected) = parse_directive(directive);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(parsed))
        .init();
    rejected
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let config_result = projexpert_config::load_config(args.config.as_deref());
    let config_level = config_result
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or(DEFAULT_LOG_DIRECTIVE);

    // Initialize logging
    let requested = args.log_level.as_deref().unwrap_or(config_level);
    if let Some(e) = init_logging(requested) {
        tracing::warn!("Ignoring log level '{requested}' ({e}), using {DEFAULT_LOG_DIRECTIVE}");
    }

    tracing::info!("Projexpert v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = config_result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        projexpert_config::ProjexpertConfig::default()
    });

    if args.print_config {
        println!("{}", projexpert_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let viewport = args.viewport.unwrap_or(projexpert_common::Viewport::new(
        config.viewport.width,
        config.viewport.height,
    ));

    let events = match &args.script {
        Some(path) => {
            tracing::info!("Loading script {}", path.display());
            script::load_script(path)
        }
        None => {
            tracing::info!("No script given, running demo");
            script::parse_script(script::DEMO_SCRIPT)
        }
    };
    let events = match events {
        Ok(events) => events,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "Viewport {}x{}, {} script events",
        viewport.width,
        viewport.height,
        events.len()
    );

    let mut shell = app_state::IdeShell::new(&config, viewport);
    let mut stdout = std::io::stdout().lock();
    let result = runner::run(&mut shell, events, &mut stdout).await;
    match result {
        Ok(frames) => {
            tracing::info!(
                activity = shell.activity().label(),
                copilot = shell.copilot().visibility().status_label(),
                sync = shell.status().sync_label(),
                "Shutdown complete ({frames} frames)"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Run failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directive_is_kept() {
        let (parsed, rejected) = parse_directive("projexpert=debug");
        assert!(rejected.is_none());
        assert_eq!(parsed.to_string(), "projexpert=debug");
    }

    #[test]
    fn bad_directive_falls_back_to_default() {
        let (parsed, rejected) = parse_directive("projexpert=loud");
        assert!(rejected.is_some());
        assert_eq!(parsed.to_string(), DEFAULT_LOG_DIRECTIVE);
    }
}
