//! URI components and their standalone validators.

use crate::pct_enc::table;
use core::{
    fmt,
    hash::{Hash, Hasher},
};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// The scheme of a [`Uri`], borrowed from it.
///
/// Schemes are case-insensitive: two `Scheme`s are equal, and hash the same,
/// when they differ only in ASCII case. The text is kept as written; call
/// [`as_str`](Self::as_str) to see it, or [`Uri::normalize`] to lowercase it.
///
/// [`Uri`]: crate::Uri
/// [`Uri::normalize`]: crate::Uri::normalize
///
/// # Examples
///
/// ```
/// use generic_uri::{component::Scheme, Uri};
///
/// const HTTPS: &Scheme = Scheme::new_or_panic("https");
///
/// let uri = Uri::parse("HTTPS://example.com/")?;
/// let scheme = uri.scheme().unwrap();
///
/// assert_eq!(scheme, HTTPS);
/// assert_eq!(scheme, "https");
/// assert_eq!(scheme.as_str(), "HTTPS");
/// # Ok::<_, generic_uri::FormatError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Wraps a string as a `Scheme` if it is a well-formed scheme name.
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if validate_scheme(s) {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Wraps a string as a `Scheme`, for use in constants.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a well-formed scheme name;
    /// see [`validate_scheme`].
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("malformed scheme name"),
        }
    }

    /// Returns the scheme as written.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

impl PartialEq<str> for Scheme {
    fn eq(&self, other: &str) -> bool {
        self.inner.eq_ignore_ascii_case(other)
    }
}

impl Hash for Scheme {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for x in self.inner.bytes() {
            state.write_u8(x.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl fmt::Debug for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// Checks whether a string matches `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
///
/// The whitelist of a [`Policy`] is not consulted here; see
/// [`Policy::accepts_scheme`] for that.
///
/// [`Policy`]: crate::Policy
/// [`Policy::accepts_scheme`]: crate::Policy::accepts_scheme
#[must_use]
pub const fn validate_scheme(s: &str) -> bool {
    matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
}

/// Extracts the leading scheme of a URI string, if any.
///
/// # Examples
///
/// ```
/// use generic_uri::component::parse_scheme;
///
/// assert_eq!(parse_scheme("http://example.com"), Some("http"));
/// assert_eq!(parse_scheme("urn:isbn:0451450523"), Some("urn"));
/// assert_eq!(parse_scheme("//example.com"), None);
/// assert_eq!(parse_scheme("1http:"), None);
/// ```
#[must_use]
pub fn parse_scheme(s: &str) -> Option<&str> {
    let (scheme, _) = s.split_once(':')?;
    validate_scheme(scheme).then_some(scheme)
}

/// Checks whether a string is a valid user-info subcomponent.
#[must_use]
pub fn validate_user_info(s: &str) -> bool {
    table::USERINFO.validate(s.as_bytes())
}

/// Checks whether a port lies within `1..=65535`.
///
/// Accepts the decimal text of a port, as found in a URI string.
///
/// # Examples
///
/// ```
/// use generic_uri::component::validate_port;
///
/// assert!(validate_port("8080"));
/// assert!(!validate_port("0"));
/// assert!(!validate_port("65536"));
/// assert!(!validate_port("http"));
/// ```
#[must_use]
pub fn validate_port(s: &str) -> bool {
    parse_port(s).is_some()
}

pub(crate) fn parse_port(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|x| x.is_ascii_digit()) {
        return None;
    }
    s.parse::<u16>().ok().filter(|&port| port != 0)
}

/// Checks whether a string is a valid path component.
///
/// A path is made of segments of unreserved characters, percent-encoded
/// octets and `":" / "@" / "&" / "=" / "+" / "$" / ","`, separated by
/// `'/'` or `';'`.
#[must_use]
pub fn validate_path(s: &str) -> bool {
    table::PATH.validate(s.as_bytes())
}

/// Checks whether a string is a valid query or fragment component.
#[must_use]
pub fn validate_query_fragment(s: &str) -> bool {
    table::QUERY_FRAGMENT.validate(s.as_bytes())
}
