//! Guarded HTTP header collections with Fetch semantics.
//!
//! The heart of the crate is [`HttpHeaders`]: an ordered, case-insensitive
//! multimap whose mutations are filtered by a [`Guard`] fixed at
//! construction. [`HttpRequest`] and [`HttpResponse`] are thin value objects
//! that own one header collection each, built with the guard matching
//! their context.
//!
//! ```
//! use rustyfetch::{Guard, HttpHeaders};
//!
//! let mut headers = HttpHeaders::new(Guard::Request);
//! headers.append("X-Custom", "1").unwrap();
//! headers.append("Host", "example.com").unwrap(); // silently dropped
//!
//! assert_eq!(headers.get("x-custom"), Some("1"));
//! assert!(!headers.has("Host"));
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use error::{Error, Result};
pub use http::body::Body;
pub use http::guard::{Guard, Mutation};
pub use http::headers::{HeadersInit, HttpHeaders};
pub use http::request::{HttpRequest, RequestInit};
pub use http::response::{HttpResponse, ResponseInit};
pub use http::{CacheMode, Credentials, HttpMethod, RequestMode, ResponseType};
