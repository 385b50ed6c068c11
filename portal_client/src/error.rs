use std::fmt::Display;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Why a request produced no HTTP response at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFailure {
    Timeout,
    Connect,
    Other,
}

impl Display for NetworkFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NetworkFailure::Timeout => "timed out",
            NetworkFailure::Connect => "connection failed",
            NetworkFailure::Other => "request failed",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received (connectivity, DNS, CORS, timeout).
    #[error("Network error ({kind}) calling {url}: {source}")]
    Network {
        kind: NetworkFailure,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a 5xx status.
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The backend answered with `success: false`.
    #[error("Request rejected ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Response from {path} carried no data")]
    MissingData { path: String },

    #[error("Invalid response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not build request: {0}")]
    Request(String),
}

impl ApiError {
    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        let kind = if source.is_timeout() {
            NetworkFailure::Timeout
        } else if is_connect(&source) {
            NetworkFailure::Connect
        } else {
            NetworkFailure::Other
        };

        ApiError::Network {
            kind,
            url: url.to_owned(),
            source,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    /// HTTP status if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. }
            | ApiError::Rejected { status, .. }
            | ApiError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for an alert or toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => {
                "Não foi possível conectar ao servidor. Verifique sua conexão.".to_owned()
            }
            ApiError::Server { .. } => {
                "O servidor encontrou um erro. Tente novamente mais tarde.".to_owned()
            }
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected { status: 401, .. } => {
                "Sua sessão expirou. Faça login novamente.".to_owned()
            }
            ApiError::Rejected { .. } => "A solicitação foi recusada pelo servidor.".to_owned(),
            ApiError::MissingData { .. } | ApiError::Decode { .. } | ApiError::Request(_) => {
                "Resposta inesperada do servidor.".to_owned()
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(error: &reqwest::Error) -> bool {
    error.is_connect()
}

// Browsers report refused connections and CORS rejections the same way.
#[cfg(target_arch = "wasm32")]
fn is_connect(error: &reqwest::Error) -> bool {
    error.is_request()
}
