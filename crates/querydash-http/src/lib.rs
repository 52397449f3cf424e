//! Request and serialization helpers for querydash.
//!
//! These are the small utilities the dashboard's HTTP layer leans on:
//!
//! - [`build_url`] - Absolute links that keep the request's scheme and port
//! - [`collect_parameters_from_request`] - `p_`-prefixed query parameters
//! - [`filter_none`] - Drop `null` values from a JSON object
//! - [`json_dumps`] / [`json_loads`] - JSON with hex-encoded binary data
//! - [`generate_token`] - Random API keys
//! - [`to_filename`] - Safe download names
//!
//! # Example
//!
//! ```
//! use querydash_http::{build_url, json_dumps, Binary, RequestParts};
//!
//! let request = RequestParts::new("example.com:5000", "http");
//! assert_eq!(build_url(&request, "example.com", "/test"), "http://example.com:5000/test");
//! assert_eq!(json_dumps(&Binary::from(&b"test"[..])).unwrap(), "\"74657374\"");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub mod filename;
pub mod json;
pub mod params;
pub mod token;
pub mod url;

pub use error::HttpError;
pub use filename::to_filename;
pub use json::{hex_bytes, json_dumps, json_loads, Binary, ResultValue};
pub use params::{collect_parameters_from_request, filter_none, parse_query_string, PARAMETER_PREFIX};
pub use token::{generate_token, DEFAULT_TOKEN_LENGTH};
pub use url::{build_url, RequestInfo, RequestParts};
