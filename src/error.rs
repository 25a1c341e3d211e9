use std::fmt;

#[derive(Debug)]
pub enum BolideError {
    Config(String),
    Dependency(String),
    Process(String),
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for BolideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BolideError::Config(msg) => write!(f, "Config error: {}", msg),
            BolideError::Dependency(msg) => write!(f, "Dependency error: {}", msg),
            BolideError::Process(msg) => write!(f, "Process error: {}", msg),
            BolideError::Io(err) => write!(f, "IO error: {}", err),
            BolideError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for BolideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BolideError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BolideError {
    fn from(err: std::io::Error) -> Self {
        BolideError::Io(err)
    }
}

impl From<toml::de::Error> for BolideError {
    fn from(err: toml::de::Error) -> Self {
        BolideError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BolideError>;
