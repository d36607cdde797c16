use serde::Deserialize;

pub mod body;
pub mod guard;
pub mod headers;
pub mod request;
pub mod response;
pub mod validator;

/// Methods that are normalized to upper case when given in any casing.
/// Every other method name is kept exactly as provided (see [`normalize_method`]).
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum HttpMethod {
    Delete,
    Get,
    Head,
    Options,
    Post,
    Put,
}

impl HttpMethod {
    /// Case-insensitive lookup of a normalizable method
    pub fn parse(method: &str) -> Option<HttpMethod> {
        match method.to_ascii_uppercase().as_str() {
            "DELETE" => Some(HttpMethod::Delete),
            "GET" => Some(HttpMethod::Get),
            "HEAD" => Some(HttpMethod::Head),
            "OPTIONS" => Some(HttpMethod::Options),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Delete => "DELETE",
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-cases the well-known methods, leaves extension methods untouched.
pub fn normalize_method(method: &str) -> String {
    match HttpMethod::parse(method) {
        Some(m) => m.as_str().to_string(),
        None => method.to_string(),
    }
}

/// Request mode, decides which guard protects a request's headers
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestMode {
    SameOrigin,
    NoCors,
    #[default]
    Cors,
    Navigate,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Credentials {
    #[default]
    Omit,
    SameOrigin,
    Include,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheMode {
    #[default]
    Default,
    NoStore,
    Reload,
    NoCache,
    ForceCache,
    OnlyIfCached,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum ResponseType {
    Basic,
    Cors,
    #[default]
    Default,
    Error,
    Opaque,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_known_methods() {
        assert_eq!(normalize_method("get"), "GET");
        assert_eq!(normalize_method("Post"), "POST");
        assert_eq!(normalize_method("oPtIoNs"), "OPTIONS");
    }

    #[test]
    fn keeps_extension_methods_verbatim() {
        assert_eq!(normalize_method("patch"), "patch");
        assert_eq!(normalize_method("PROPFIND"), "PROPFIND");
    }
}
