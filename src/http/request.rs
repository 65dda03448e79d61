use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::HttpError;
use crate::probe::ProbePlan;

pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Immutable request shape shared by the validation send and every timed send.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub uri: Url,
    pub headers: HeaderMap,
    pub body: String,
}

impl RequestDescriptor {
    /// # Errors
    ///
    /// Returns an error when the cookie or content type is not a valid
    /// header value.
    pub fn from_plan(plan: &ProbePlan) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(COOKIE, header_value("Cookie", &plan.cookie)?);
        headers.insert(
            HeaderName::from_static(REQUESTED_WITH_HEADER),
            HeaderValue::from_static(REQUESTED_WITH_VALUE),
        );
        headers.insert(
            CONTENT_TYPE,
            header_value("Content-Type", &plan.content_type)?,
        );

        Ok(Self {
            method: plan.method.into(),
            uri: plan.uri.clone(),
            headers,
            body: plan.payload.clone(),
        })
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value).map_err(|err| HttpError::InvalidHeaderValue { name, source: err })
}
