use clap::Parser;
use projexpert_common::Viewport;
use std::path::PathBuf;

/// Projexpert IDE shell: replays pointer scripts against the Copilot panel
/// and prints layout frames as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "projexpert", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, projexpert=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON-lines input script. Runs the built-in demo when omitted.
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Initial viewport size as WIDTHxHEIGHT, e.g. 1280x800.
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<Viewport>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f64 = w
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{w}'"))?;
    let height: f64 = h
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{h}'"))?;
    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(format!("viewport must be positive, got '{s}'"));
    }
    Ok(Viewport::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_viewport() {
        assert_eq!(parse_viewport("1280x800"), Ok(Viewport::new(1280.0, 800.0)));
        assert_eq!(parse_viewport("640X480"), Ok(Viewport::new(640.0, 480.0)));
    }

    #[test]
    fn rejects_bad_viewports() {
        assert!(parse_viewport("1280").is_err());
        assert!(parse_viewport("wide x tall").is_err());
        assert!(parse_viewport("0x800").is_err());
        assert!(parse_viewport("-5x800").is_err());
    }

    #[test]
    fn args_parse_all_flags() {
        let args = Args::try_parse_from([
            "projexpert",
            "--config",
            "/tmp/p.toml",
            "--log-level",
            "debug",
            "-s",
            "drag.jsonl",
            "--viewport",
            "1024x768",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/p.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.script, Some(PathBuf::from("drag.jsonl")));
        assert_eq!(args.viewport, Some(Viewport::new(1024.0, 768.0)));
        assert!(args.print_config);
    }

    #[test]
    fn args_default_to_none() {
        let args = Args::try_parse_from(["projexpert"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.script.is_none());
        assert!(args.viewport.is_none());
        assert!(!args.print_config);
    }
}
