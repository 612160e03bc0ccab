use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    /// Input is neither a URL, inline CSV nor a `.csv` path.
    InvalidConversionType,
    FileNotFound(PathBuf),
    /// Transport failure, carrying the underlying cause.
    Fetch(Box<dyn std::error::Error + Send + Sync>),
    Io(std::io::Error),
    Config(String),
}

impl AppError {
    pub fn fetch<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::Fetch(Box::new(err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidConversionType => write!(f, "Invalid Conversion Type"),
            AppError::FileNotFound(_) => write!(f, "File does not exist"),
            AppError::Fetch(err) => write!(f, "Fetch error: {}", err),
            AppError::Io(err) => write!(f, "IO error: {}", err),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Fetch(err) => Some(err.as_ref()),
            AppError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(AppError::InvalidConversionType.to_string(), "Invalid Conversion Type");
        assert_eq!(
            AppError::FileNotFound(PathBuf::from("./missing.csv")).to_string(),
            "File does not exist"
        );
    }

    #[test]
    fn test_fetch_exposes_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AppError::fetch(cause);

        assert_eq!(err.to_string(), "Fetch error: refused");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "refused");
    }
}
