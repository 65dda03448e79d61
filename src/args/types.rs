use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::ValidationError;

/// Verbs the probe can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            other => Err(ValidationError::UnsupportedMethod {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
        }
    }
}

/// Number of timed sends. Always >= 1, so averaging never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunCount(NonZeroU32);

impl RunCount {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for RunCount {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(RunCount)
            .ok_or(ValidationError::RunCountNotPositive {
                value: i64::from(value),
            })
    }
}

impl FromStr for RunCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|err| ValidationError::InvalidRunCount {
                value: trimmed.to_owned(),
                source: err,
            })?;
        if value <= 0 {
            return Err(ValidationError::RunCountNotPositive { value });
        }
        let count: u32 = trimmed
            .parse()
            .map_err(|err| ValidationError::InvalidRunCount {
                value: trimmed.to_owned(),
                source: err,
            })?;
        RunCount::try_from(count)
    }
}

impl fmt::Display for RunCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl From<RunCount> for u32 {
    fn from(value: RunCount) -> Self {
        value.get()
    }
}
