use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An empty identifier or an out-of-domain value was supplied to a
    /// constructor or a mutating operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The roster file does not follow the expected layout.
    #[error("malformed roster file: {0}")]
    MalformedFormat(String),
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(err) => Error::Io(err),
            _ => Error::MalformedFormat(message),
        }
    }
}
