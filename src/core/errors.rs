use std::fmt;
use std::io;
use std::path::PathBuf;

/// Unrecoverable failures for a render run. Every variant terminates the
/// run with a diagnostic and a non-zero exit status; there is no retry and
/// no partial-output recovery. NaN inside the Newton iteration is NOT an
/// error — it is the intended divergence signal.
#[derive(Debug)]
pub enum FractalError {
    /// Malformed or missing numeric input in a parameter file.
    InputRead(String),
    /// A required file could not be opened or created.
    File { path: PathBuf, source: io::Error },
    /// Writing the output image failed partway through.
    ImageWrite(io::Error),
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractalError::InputRead(message) => {
                write!(f, "could not read input parameters: {}", message)
            }
            FractalError::File { path, source } => {
                write!(f, "could not open file {:?}: {}", path, source)
            }
            FractalError::ImageWrite(source) => {
                write!(f, "failed to write image output: {}", source)
            }
        }
    }
}

impl std::error::Error for FractalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FractalError::InputRead(_) => None,
            FractalError::File { source, .. } => Some(source),
            FractalError::ImageWrite(source) => Some(source),
        }
    }
}
