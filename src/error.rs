//! Errors surfaced by the transposer and its command line shell.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransposeError {
    /// Writing the transposed output (or reading input mid-stream) failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrong argument count or otherwise unusable invocation.
    #[error("{0}")]
    Usage(String),
}

impl TransposeError {
    /// True when the sink went away (e.g. `kv-transpose file | head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            TransposeError::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransposeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(err.to_string().contains("disk on fire"));
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn broken_pipe_is_recognised() {
        let err: TransposeError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(err.is_broken_pipe());
        assert!(!TransposeError::Usage("nope".to_string()).is_broken_pipe());
    }
}
