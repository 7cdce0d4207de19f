//! Invocation boundary error types.

use thiserror::Error;

/// Errors surfaced at the invocation boundary.
///
/// Both variants are detected before parsing begins; parsing itself is total
/// and cannot fail. There is no partial-result state: a call either returns
/// a complete result or one of these.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// An argument is not valid UTF-8 text.
    #[error("argument {index} is not valid UTF-8: {source}")]
    Encoding {
        /// Zero-based argument index.
        index: usize,
        /// The underlying decoding error.
        #[source]
        source: std::str::Utf8Error,
    },

    /// The function was invoked with the wrong number of arguments.
    #[error("{function} expects {expected} argument(s), got {got}")]
    Arity {
        /// The invoked function.
        function: &'static str,
        /// Expected argument count.
        expected: usize,
        /// Actual argument count.
        got: usize,
    },
}

impl InvokeError {
    /// Creates an encoding error for the given argument.
    pub fn encoding(index: usize, source: std::str::Utf8Error) -> Self {
        Self::Encoding { index, source }
    }

    /// Creates an arity error for the given function.
    pub fn arity(function: &'static str, expected: usize, got: usize) -> Self {
        Self::Arity {
            function,
            expected,
            got,
        }
    }
}
