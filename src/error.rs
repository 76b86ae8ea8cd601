use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while fetching or parsing fussball.de pages.
///
/// The public lookup methods never return these; they log and degrade to an
/// empty result instead. The type is exposed for [`crate::ClientConfig`] and
/// client construction, which can fail up front.
#[derive(thiserror::Error, Debug)]
pub enum FussballError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// A configuration value taken from the environment is invalid.
    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },

    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl FussballError {
    /// Whether this error came from the transport rather than from parsing.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FussballError::Http { .. }
                | FussballError::UnexpectedStatus { .. }
                | FussballError::ResponseBody { .. }
        )
    }
}

impl<'a> From<SelectorErrorKind<'a>> for FussballError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        FussballError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FussballError>;
