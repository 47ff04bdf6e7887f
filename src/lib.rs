#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! An owned, structured URI value that strictly adheres to IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! A [`Uri`] holds the seven components of a URI reference (scheme, user
//! information, host, port, path, query and fragment) in percent-decoded
//! form. It can be parsed from a string, have its path normalized, be
//! resolved against another `Uri` as a base, and be turned back into a
//! string with every component percent-encoded as needed.
//!
//! # Examples
//!
//! ```
//! use uri_value::Uri;
//!
//! let base = Uri::parse("http://a/b/c/d;p?q")?;
//! let reference = Uri::parse("g")?;
//! assert_eq!(base.resolve(&reference).to_string(), "http://a/b/c/g");
//!
//! let uri = Uri::parse("http://www.example.com/%7Efoo%20bar")?;
//! assert_eq!(uri.path(), &["", "~foo bar"]);
//! assert_eq!(uri.to_string(), "http://www.example.com/~foo%20bar");
//! # Ok::<_, uri_value::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. This includes the [`Error`]
//!   implementation for [`ParseError`].
//!
//! - `serde`: Enables serialization of [`Uri`] as a string with [`serde`].
//!
//! [`Error`]: std::error::Error
//! [`serde`]: https://docs.rs/serde

extern crate alloc;

pub mod component;
pub mod pct_enc;

mod error;
mod fmt;
mod ip;
mod normalize;
mod resolve;
mod uri;

pub use error::{ParseError, ParseErrorKind};
pub use uri::Uri;
