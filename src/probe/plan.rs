use std::time::Duration;

use url::Url;

use crate::args::parsers::{parse_bool_setting, parse_duration_setting};
use crate::args::{HttpMethod, RunCount};
use crate::config::Settings;
use crate::config::settings::{
    CONNECT_TIMEOUT, CONTENT_TYPE, COOKIE, INSECURE, METHOD, PAYLOAD, REQUIRED_SETTINGS,
    RUN_COUNT, TIMEOUT, URI,
};
use crate::error::ValidationError;
use crate::http::TransportOptions;

/// Content type whose validation response must look like a JSON object.
pub const JSON_CONTENT_TYPE: &str = "application/json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Validated view of resolved settings. Built before any network I/O, so a
/// bad verb, run count, or URI never reaches the transport.
#[derive(Debug, Clone)]
pub struct ProbePlan {
    /// `uri` exactly as resolved; the report shows this, never the parsed form.
    pub uri_text: String,
    pub uri: Url,
    pub method: HttpMethod,
    pub cookie: String,
    pub payload: String,
    pub content_type: String,
    pub run_count: RunCount,
    pub transport: TransportOptions,
}

impl ProbePlan {
    /// # Errors
    ///
    /// Returns an error when a required setting is missing or any setting
    /// fails to parse.
    pub fn from_settings(settings: &Settings) -> Result<Self, ValidationError> {
        for name in REQUIRED_SETTINGS {
            settings.require(name)?;
        }

        let method: HttpMethod = settings.require(METHOD)?.parse()?;
        let run_count: RunCount = settings.require(RUN_COUNT)?.parse()?;
        let uri_text = settings.require(URI)?;
        let uri = parse_uri(uri_text)?;

        let timeout = settings
            .get(TIMEOUT)
            .map(|value| parse_duration_setting(TIMEOUT, value))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT);
        let connect_timeout = settings
            .get(CONNECT_TIMEOUT)
            .map(|value| parse_duration_setting(CONNECT_TIMEOUT, value))
            .transpose()?
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        let insecure = settings
            .get(INSECURE)
            .map(|value| parse_bool_setting(INSECURE, value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            uri_text: uri_text.to_owned(),
            uri,
            method,
            cookie: settings.require(COOKIE)?.to_owned(),
            payload: settings.require(PAYLOAD)?.to_owned(),
            content_type: settings.require(CONTENT_TYPE)?.to_owned(),
            run_count,
            transport: TransportOptions {
                timeout,
                connect_timeout,
                insecure,
            },
        })
    }

    #[must_use]
    pub fn expects_json(&self) -> bool {
        self.content_type == JSON_CONTENT_TYPE
    }
}

fn parse_uri(value: &str) -> Result<Url, ValidationError> {
    let uri = Url::parse(value.trim()).map_err(|err| ValidationError::InvalidUri {
        value: value.to_owned(),
        source: err,
    })?;
    match uri.scheme() {
        "http" | "https" => Ok(uri),
        other => Err(ValidationError::UnsupportedScheme {
            scheme: other.to_owned(),
        }),
    }
}
