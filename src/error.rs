use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("figma api error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("identifier collision: '{first}' and '{second}' both normalize to '{identifier}'")]
    NameCollision {
        identifier: String,
        first: String,
        second: String,
    },
    #[error("invalid plan: {0}")]
    Config(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExportError {
    /// Process exit code for each fatal error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExportError::Authentication(_) => 2,
            ExportError::NotFound(_) => 3,
            ExportError::Io { .. } => 4,
            ExportError::NameCollision { .. } => 5,
            ExportError::Api { .. } | ExportError::Transport(_) => 6,
            ExportError::Config(_) | ExportError::Other(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_fatal_kind() {
        let auth = ExportError::Authentication("bad token".into());
        let not_found = ExportError::NotFound("abc".into());
        let collision = ExportError::NameCollision {
            identifier: "ARROWLEFT".into(),
            first: "arrow-left".into(),
            second: "arrowleft".into(),
        };
        assert_eq!(auth.exit_code(), 2);
        assert_eq!(not_found.exit_code(), 3);
        assert_eq!(collision.exit_code(), 5);
    }

    #[test]
    fn collision_message_names_both_offenders() {
        let err = ExportError::NameCollision {
            identifier: "ARROWLEFT".into(),
            first: "arrow-left".into(),
            second: "arrowleft".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("arrow-left"));
        assert!(msg.contains("arrowleft"));
        assert!(msg.contains("ARROWLEFT"));
    }

    #[test]
    fn io_failure_reports_the_offending_path() {
        let err = ExportError::Io {
            path: PathBuf::from("dist/icons/arrow-left.svg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("dist/icons/arrow-left.svg"));
        assert_eq!(err.exit_code(), 4);
    }
}
