use crate::config::config;
use crate::error::{Error, Result};
use crate::http::ResponseType;
use crate::http::body::Body;
use crate::http::guard::Guard;
use crate::http::headers::{HeadersInit, HttpHeaders};
use crate::http::validator::{Validator, is_ok_status};

#[derive(Debug, Clone, Default)]
pub struct ResponseInit {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub headers: Option<HeadersInit>,
    pub url: Option<String>,
}

/// A response; its headers are always guarded with [`Guard::Response`].
#[derive(Debug)]
pub struct HttpResponse {
    pub response_type: ResponseType,
    pub url: String,
    pub status: u16,
    pub status_text: String,

    headers: HttpHeaders,
    body: Body,
}

impl HttpResponse {
    pub fn new(body: &str, init: ResponseInit) -> Self {
        let defaults = &config().response;
        Self {
            response_type: ResponseType::Default,
            url: init.url.unwrap_or_default(),
            status: init.status.unwrap_or(defaults.status),
            status_text: init
                .status_text
                .unwrap_or_else(|| defaults.status_text.clone()),
            headers: HttpHeaders::with_init(init.headers, Guard::Response),
            body: Body::new(body),
        }
    }

    /// A network error: status 0, no status text, type [`ResponseType::Error`].
    pub fn error() -> Self {
        let mut res = Self::new(
            "",
            ResponseInit {
                status: Some(0),
                status_text: Some(String::new()),
                ..Default::default()
            },
        );
        res.response_type = ResponseType::Error;
        res
    }

    /// A redirect to `url` carrying a single `location` header.
    pub fn redirect(url: &str, status: u16) -> Result<Self> {
        Validator::validate_redirect_status(status)?;

        Ok(Self::new(
            "",
            ResponseInit {
                status: Some(status),
                headers: Some([("location", url)].into()),
                ..Default::default()
            },
        ))
    }

    pub fn ok(&self) -> bool {
        is_ok_status(self.status)
    }

    pub fn try_clone(&self) -> Result<Self> {
        if self.body_used() {
            return Err(Error::BodyAlreadyUsed);
        }

        Ok(Self {
            response_type: self.response_type,
            url: self.url.clone(),
            status: self.status,
            status_text: self.status_text.clone(),
            headers: HttpHeaders::with_init(&self.headers, Guard::Response),
            body: self.body.clone(),
        })
    }

    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HttpHeaders {
        &mut self.headers
    }

    pub fn body_used(&self) -> bool {
        self.body.body_used()
    }

    pub fn raw_body(&self) -> &str {
        self.body.raw_body()
    }

    pub fn text(&mut self) -> Result<String> {
        self.body.text()
    }
}
