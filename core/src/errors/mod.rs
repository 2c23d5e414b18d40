mod runtime_error;

pub use runtime_error::RuntimeError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all propflags errors.
#[derive(Debug, Error, Diagnostic)]
pub enum PropflagsError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}
