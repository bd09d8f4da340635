//! Error types.

use alloc::string::String;
use core::fmt;

/// Detailed cause of a [`FormatError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormatErrorKind {
    /// The scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    InvalidScheme,
    /// The scheme is well-formed but not in the whitelist of the [`Policy`].
    ///
    /// [`Policy`]: crate::Policy
    SchemeNotAccepted,
    /// The host matches none of the grammars allowed by the [`HostKinds`] of the [`Policy`].
    ///
    /// [`HostKinds`]: crate::HostKinds
    /// [`Policy`]: crate::Policy
    InvalidHost,
    /// The port is zero or exceeds 65535.
    InvalidPort,
}

/// An error occurred when assigning or parsing a URI component.
///
/// Carries the rejected component text, which can be recovered with [`value`].
///
/// [`value`]: Self::value
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormatError {
    pub(crate) kind: FormatErrorKind,
    pub(crate) value: String,
}

impl FormatError {
    pub(crate) fn new(kind: FormatErrorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FormatErrorKind {
        self.kind
    }

    /// Returns the component text that was rejected.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            FormatErrorKind::InvalidScheme => "invalid scheme",
            FormatErrorKind::SchemeNotAccepted => "scheme not accepted by policy",
            FormatErrorKind::InvalidHost => "invalid host",
            FormatErrorKind::InvalidPort => "invalid port",
        };
        write!(f, "{msg} {:?}", self.value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// An error occurred when serializing a URI that is neither valid
/// nor a valid relative reference.
///
/// Each variant names the rule that the URI violates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SerializeError {
    /// A host is present but the path is non-empty and does not start with `'/'`.
    RootlessPathWithHost,
    /// A user-info or port is present without a host.
    AuthorityWithoutHost,
    /// No host is present and the path starts with `"//"`.
    AmbiguousPath,
    /// None of path, query, and fragment is present.
    Empty,
    /// A query is present but the [`Policy`] does not allow queries.
    ///
    /// [`Policy`]: crate::Policy
    QueryNotAllowed,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::RootlessPathWithHost => "path must be empty or start with '/' when a host is present",
            Self::AuthorityWithoutHost => "user-info or port present without a host",
            Self::AmbiguousPath => "path starts with \"//\" but no host is present",
            Self::Empty => "none of path, query and fragment is present",
            Self::QueryNotAllowed => "query is not allowed by policy",
        };
        write!(f, "URI cannot be serialized: {msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SerializeError {}
