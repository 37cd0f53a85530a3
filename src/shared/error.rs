use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-kind fetch failures and per-item apply/destroy failures do NOT
/// change the exit code; they are reported in the run summary instead.
/// Only pre-flight problems terminate with a failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the run completed, even if individual items were skipped or failed
    Success = 0,
    /// Pre-flight error (missing credentials, unreadable config file)
    PreflightError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PreflightError => write!(f, "Preflight Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the sync CLI.
///
/// These cover pre-flight validation and artifact persistence. Provider
/// API failures use `ApiError` at the transport port instead, so that
/// use cases can downgrade them to per-kind statuses.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Okta credentials missing: {details}\n\n💡 Hint: Set --org-name and --api-token, or the OKTA_ORG_NAME and OKTA_API_TOKEN environment variables")]
    MissingCredentials { details: String },

    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigRead { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid JSON with the expected shape")]
    ConfigParse { path: PathBuf, details: String },

    #[error("Failed to write artifact: {path}\nDetails: {details}\n\n💡 Hint: Check that the output directory exists and you have write permissions")]
    ArtifactWrite { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::PreflightError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::PreflightError), "Preflight Error (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_missing_credentials_display() {
        let error = SyncError::MissingCredentials {
            details: "org name not set".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("credentials missing"));
        assert!(display.contains("org name not set"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("OKTA_ORG_NAME"));
    }

    #[test]
    fn test_config_read_error_display() {
        let error = SyncError::ConfigRead {
            path: PathBuf::from("/test/config.json"),
            details: "No such file".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read config file"));
        assert!(display.contains("/test/config.json"));
        assert!(display.contains("No such file"));
    }

    #[test]
    fn test_artifact_write_error_display() {
        let error = SyncError::ArtifactWrite {
            path: PathBuf::from("/out/entitlements.tf"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write artifact"));
        assert!(display.contains("/out/entitlements.tf"));
        assert!(display.contains("Permission denied"));
    }
}
