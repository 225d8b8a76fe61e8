use std::error::Error;
use std::fmt;

use rayon::ThreadPoolBuildError;

#[derive(Debug)]
pub enum RenderPoolError {
    Build(ThreadPoolBuildError),
}

impl fmt::Display for RenderPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(err) => write!(f, "failed to start render workers: {}", err),
        }
    }
}

impl Error for RenderPoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Build(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for RenderPoolError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::Build(err)
    }
}
