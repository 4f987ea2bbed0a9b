use thiserror::Error;

/// Fallo de una petición HTTP. Para la UI todas las variantes son
/// "request failed": se registran en el log y se descartan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::Http { status: 404, status_text: "Not Found".to_string() };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
        assert_eq!(ApiError::Parse("eof".into()).to_string(), "Parse error: eof");
    }
}
