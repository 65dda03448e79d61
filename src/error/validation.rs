use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid override '{token}'. Format is -<name> <value>.")]
    ArgumentFormat { token: String },
    #[error("Missing value for override '-{name}'.")]
    MissingArgumentValue { name: String },
    #[error("Missing required setting '{name}'.")]
    MissingSetting { name: &'static str },
    #[error("Unknown verb: {value}. Use get or post.")]
    UnsupportedMethod { value: String },
    #[error("Invalid runCount '{value}': {source}")]
    InvalidRunCount {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("runCount must be >= 1 (got {value}).")]
    RunCountNotPositive { value: i64 },
    #[error("Invalid uri '{value}': {source}")]
    InvalidUri {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported uri scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Invalid boolean '{value}' for '{name}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { name: &'static str, value: String },
    #[error("Invalid duration for '{name}': {message}")]
    InvalidDuration {
        name: &'static str,
        message: String,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
