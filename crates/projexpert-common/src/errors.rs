use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures while reading or decoding an input script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("script line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ProjexpertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("panel.min_width = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: panel.min_width = 0 is out of range"
        );
    }

    #[test]
    fn script_error_display() {
        let err = ScriptError::Parse {
            line: 7,
            message: "unknown variant `hover`".into(),
        };
        assert_eq!(err.to_string(), "script line 7: unknown variant `hover`");

        let err = ScriptError::Io {
            path: PathBuf::from("/tmp/drag.jsonl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().starts_with("failed to read script /tmp/drag.jsonl"));
    }

    #[test]
    fn projexpert_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ProjexpertError = config_err.into();
        assert!(matches!(err, ProjexpertError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn projexpert_error_from_script() {
        let script_err = ScriptError::Parse {
            line: 1,
            message: "expected value".into(),
        };
        let err: ProjexpertError = script_err.into();
        assert!(matches!(err, ProjexpertError::Script(_)));
        assert_eq!(err.to_string(), "script line 1: expected value");
    }

    #[test]
    fn projexpert_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: ProjexpertError = io_err.into();
        assert!(matches!(err, ProjexpertError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }
}
