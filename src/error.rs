use std::convert::From;
use std::error;
use std::fmt;
use std::io;
use std::process::ExitStatus;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    Usage,
    Render(ExitStatus),
    MissingArtifact,
    Delivery,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::Render(_) | ErrorKind::MissingArtifact => 2,
            _ => 1,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::Usage => "invalid arguments".to_owned(),
            ErrorKind::Render(status) => match status.code() {
                Some(code) => format!("renderer failed with exit code {}", code),
                None => "renderer was terminated by a signal".to_owned(),
            },
            ErrorKind::MissingArtifact => "renderer produced no output".to_owned(),
            ErrorKind::Delivery => "unable to deliver calendar".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(Error::from(ErrorKind::Usage).exit_code(), 1);
        assert_eq!(Error::from(ErrorKind::MissingArtifact).exit_code(), 2);
        assert_eq!(Error::from(ErrorKind::Delivery).exit_code(), 1);

        let io_error = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::from(io_error).exit_code(), 1);
    }

    #[test]
    fn display_includes_message() {
        let err = Error::new(ErrorKind::Delivery, "cannot copy to /nowhere");
        assert_eq!(
            err.to_string(),
            "unable to deliver calendar: cannot copy to /nowhere"
        );

        let err = Error::from(ErrorKind::MissingArtifact).with_msg("index.pdf");
        assert_eq!(err.to_string(), "renderer produced no output: index.pdf");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;

        let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "denied");
        assert!(err.source().is_some());
    }
}
