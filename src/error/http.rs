use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid value for header '{name}': {source}")]
    InvalidHeaderValue {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("Validation request failed: {source}")]
    ValidationRequestFailed {
        #[source]
        source: Box<HttpError>,
    },
    #[error("Request failed: {source}")]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body: {source}")]
    ReadBodyFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Timed request {index} failed: {source}")]
    TimedRequestFailed {
        index: u32,
        #[source]
        source: Box<HttpError>,
    },
    #[error("Expected JSON but got: {body}")]
    UnexpectedBody { body: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
}
