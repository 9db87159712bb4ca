use crate::Page;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the corpus has no pages")]
    EmptyCorpus,

    #[error("page {0} is not in the corpus")]
    UnknownPage(Page),

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }

    /// Whether this is a corpus precondition failure rather than a bad
    /// parameter or an I/O failure.
    pub fn is_invalid_corpus(&self) -> bool {
        matches!(self, Self::EmptyCorpus | Self::UnknownPage(_))
    }
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(Error::invalid("damping", damping))
    }
}
