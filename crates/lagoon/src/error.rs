use thiserror::Error;

use crate::dig::ParseError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing input: no dig plan path configured")]
    MissingInput,

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
