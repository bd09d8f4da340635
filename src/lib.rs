#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A generic URI parser, normalizer and resolver following IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! A [`Uri`] holds the five components of a URI reference, each optional,
//! under a [`Policy`] that constrains the scheme, the host and a few other
//! components. Policies for generic, `http`/`https` and `file` URIs are
//! predefined.
//!
//! # Examples
//!
//! ```
//! use generic_uri::{Policy, Uri};
//!
//! let base = Uri::parse_with(Policy::HTTP, "http://a/b/c/d;p?q")?;
//!
//! let mut uri = Uri::merge(&base, "../g#s")?;
//! assert_eq!(uri.to_string(), "http://a/b/g#s");
//!
//! uri.make_relative(&base);
//! assert_eq!(uri.to_string(), "../g#s");
//! # Ok::<_, generic_uri::FormatError>(())
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. This includes [`Error`] implementations.
//!
//! - `serde`: Enables [`serde`] support, serializing a [`Uri`] as a string.
//!
//! - `log`: Logs parsing steps at trace level and rejected components at
//!   debug level through the [`log`] crate.
//!
//! [`Error`]: std::error::Error
//! [`serde`]: https://docs.rs/serde
//! [`log`]: https://docs.rs/log

extern crate alloc;

mod log;

pub mod component;
mod error;
mod file;
pub mod host;
mod normalize;
pub mod pct_enc;
mod policy;
mod resolve;
mod uri;

pub use error::{FormatError, FormatErrorKind, SerializeError};
pub use host::{validate_host, HostKinds};
pub use policy::Policy;
pub use resolve::remove_dot_segments;
pub use uri::Uri;
