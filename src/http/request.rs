use crate::config::{RequestDefaults, config};
use crate::error::{Error, Result};
use crate::http::body::Body;
use crate::http::guard::Guard;
use crate::http::headers::{HeadersInit, HttpHeaders};
use crate::http::validator::Validator;
use crate::http::{CacheMode, Credentials, RequestMode, normalize_method};

/// Optional overrides applied on top of the defaults or of a source request.
#[derive(Debug, Clone, Default)]
pub struct RequestInit {
    pub method: Option<String>,
    pub headers: Option<HeadersInit>,
    pub body: Option<String>,
    pub mode: Option<RequestMode>,
    pub credentials: Option<Credentials>,
    pub cache: Option<CacheMode>,
}

#[derive(Debug)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub mode: RequestMode,
    pub credentials: Credentials,
    pub cache: CacheMode,
    pub referrer: Option<String>,

    headers: HttpHeaders,
    body: Body,
}

/// Guard protecting the headers of a request in the given mode.
fn guard_for(mode: RequestMode) -> Guard {
    match mode {
        RequestMode::NoCors => Guard::RequestNoCors,
        _ => Guard::Request,
    }
}

impl HttpRequest {
    pub fn new(url: &str, init: RequestInit) -> Result<Self> {
        Self::with_defaults(url, init, &config().request)
    }

    /// Same as [`HttpRequest::new`] with explicit defaults instead of the
    /// process-wide config.
    pub fn with_defaults(url: &str, init: RequestInit, defaults: &RequestDefaults) -> Result<Self> {
        Self::build(
            url.to_string(),
            defaults.method.clone(),
            defaults.mode,
            defaults.credentials,
            defaults.cache,
            HeadersInit::Empty,
            None,
            init,
        )
    }

    /// Builds a request from another one.
    ///
    /// Headers are copied into a fresh collection whose guard follows the new
    /// request's mode. Unless `init` brings its own body, the source body is
    /// taken over and the source is flagged as read.
    pub fn from_request(input: &mut HttpRequest, init: RequestInit) -> Result<Self> {
        let headers = HeadersInit::from(&input.headers);
        if input.body_used() {
            return Err(Error::BodyAlreadyUsed);
        }

        // An empty body in `init` does not replace the source body.
        let transfer = init.body.as_deref().is_none_or(str::is_empty);
        let request = Self::build(
            input.url.clone(),
            input.method.clone(),
            input.mode,
            input.credentials,
            input.cache,
            headers,
            Some(input.body.raw_body().to_string()),
            init,
        )?;

        if transfer {
            input.body.mark_used();
        }
        Ok(request)
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        url: String,
        method: String,
        mode: RequestMode,
        credentials: Credentials,
        cache: CacheMode,
        headers: HeadersInit,
        inherited_body: Option<String>,
        init: RequestInit,
    ) -> Result<Self> {
        let method = normalize_method(&init.method.unwrap_or(method));
        let body = init
            .body
            .filter(|body| !body.is_empty())
            .or(inherited_body)
            .map(Body::new)
            .unwrap_or_default();
        Validator::validate_request_body(&method, !body.is_empty())?;

        let mode = init.mode.unwrap_or(mode);
        let headers = HttpHeaders::with_init(init.headers.unwrap_or(headers), guard_for(mode));

        Ok(Self {
            method,
            url,
            mode,
            credentials: init.credentials.unwrap_or(credentials),
            cache: init.cache.unwrap_or(cache),
            referrer: None,
            headers,
            body,
        })
    }

    /// Copies the request, headers included. The body is copied, not taken,
    /// so the original stays readable.
    pub fn try_clone(&self) -> Result<Self> {
        if self.body_used() {
            return Err(Error::BodyAlreadyUsed);
        }

        Ok(Self {
            method: self.method.clone(),
            url: self.url.clone(),
            mode: self.mode,
            credentials: self.credentials,
            cache: self.cache,
            referrer: self.referrer.clone(),
            headers: HttpHeaders::with_init(&self.headers, self.headers.guard()),
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
