use std::path::PathBuf;
use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    IoError = 12,
    UnsupportedMode = 13,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

#[derive(Debug, Error)]
pub enum PassforgeError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("unsupported mode: {name}")]
    UnsupportedMode { name: String },

    #[error("clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    #[error("cannot write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("window error: {message}")]
    Gui { message: String },
}

impl PassforgeError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PassforgeError::InvalidInput { .. } => ExitCode::InvalidInput,
            PassforgeError::UnsupportedMode { .. } => ExitCode::UnsupportedMode,
            PassforgeError::FileWrite { .. } | PassforgeError::Io(_) => ExitCode::IoError,
            PassforgeError::ClipboardUnavailable { .. }
            | PassforgeError::Json(_)
            | PassforgeError::Gui { .. } => ExitCode::GeneralError,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unsupported_mode(name: impl Into<String>) -> Self {
        Self::UnsupportedMode { name: name.into() }
    }

    pub fn clipboard_unavailable(reason: impl Into<String>) -> Self {
        Self::ClipboardUnavailable {
            reason: reason.into(),
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn gui(message: impl Into<String>) -> Self {
        Self::Gui {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PassforgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(PassforgeError::invalid_input("x").exit_code(), ExitCode::InvalidInput);
        assert_eq!(PassforgeError::unsupported_mode("sha512").exit_code(), ExitCode::UnsupportedMode);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(PassforgeError::file_write("/tmp/x", io).exit_code(), ExitCode::IoError);
    }

    #[test]
    fn test_file_write_message_carries_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = PassforgeError::file_write("missing/out.txt", io);
        let msg = err.to_string();
        assert!(msg.contains("missing/out.txt"));
        assert!(msg.contains("no such directory"));
    }
}
