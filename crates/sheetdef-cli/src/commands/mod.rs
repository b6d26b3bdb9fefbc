//! Command implementations for the sheetdef CLI.
//!
//! Each command module parses its arguments, executes the operation, and
//! formats output according to the requested format. Failures bubble up as
//! [`anyhow::Error`]; [`exit_code_for`] maps them onto process exit codes.

pub mod completions;
pub mod generate;
pub mod inspect;

use sheetdef_core::cli::ExitCode;

/// Maps a failed command onto its process exit code.
///
/// Walks the error chain looking for a [`sheetdef_core::Error`]: input
/// problems exit with [`ExitCode::INVALID_INPUT`], output write failures
/// with [`ExitCode::WRITE_ERROR`], and everything else (including errors
/// with no domain error in the chain) with [`ExitCode::ERROR`].
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<sheetdef_core::Error>())
        .map_or(ExitCode::ERROR, |error| match error {
            sheetdef_core::Error::WorkbookNotFound { .. }
            | sheetdef_core::Error::UnsupportedFormat { .. }
            | sheetdef_core::Error::ValidationError { .. }
            | sheetdef_core::Error::InvalidArgument(_) => ExitCode::INVALID_INPUT,
            sheetdef_core::Error::WriteError { .. } => ExitCode::WRITE_ERROR,
            sheetdef_core::Error::WorkbookRead { .. }
            | sheetdef_core::Error::GenerationError { .. } => ExitCode::ERROR,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use sheetdef_core::Error;

    #[test]
    fn test_exit_code_for_plain_anyhow_error() {
        let err = anyhow::anyhow!("something else went wrong");
        assert_eq!(exit_code_for(&err), ExitCode::ERROR);
    }

    #[test]
    fn test_exit_code_for_validation_error() {
        let err = anyhow::Error::from(Error::ValidationError {
            field: "origin name".to_string(),
            reason: "must not be empty".to_string(),
        });
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_for_invalid_argument() {
        let err = anyhow::Error::from(Error::InvalidArgument("bad encoding".to_string()));
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_for_missing_workbook() {
        let err = anyhow::Error::from(Error::WorkbookNotFound {
            path: "items.xlsx".to_string(),
        });
        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_for_write_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = anyhow::Error::from(Error::WriteError {
            path: "/out/Items.cs".to_string(),
            source: io,
        });
        assert_eq!(exit_code_for(&err), ExitCode::WRITE_ERROR);
    }

    #[test]
    fn test_exit_code_for_context_wrapped_error() {
        // Context layers must not hide the domain error underneath.
        let err = anyhow::Result::<()>::Err(Error::UnsupportedFormat {
            extension: "csv".to_string(),
        }
        .into())
        .context("failed to load workbook 'items.csv'")
        .unwrap_err();

        assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_for_read_error_is_generic_failure() {
        let err = anyhow::Error::from(Error::WorkbookRead {
            path: "items.xlsx".to_string(),
            message: "corrupt archive".to_string(),
            source: None,
        });
        assert_eq!(exit_code_for(&err), ExitCode::ERROR);
    }
}
