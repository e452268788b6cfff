use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    ConfigError(String),
    MissingField(String),
    JsonError(serde_json::Error),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::MissingField(field) => write!(f, "Missing Field: {}", field),
            Error::JsonError(err) => write!(f, "JSON Error: {}", err),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::JsonError(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::ParserError(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::ParserError(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(err)
    }
}
