//! Character classes of URI components.
//!
//! Every class is a [`Table`] built at compile time. The ABNF in the
//! documentation of each constant is taken from [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#appendix-A

use super::is_hexdig_pair;

/// A set of ASCII characters allowed unencoded in a string, plus a flag
/// telling whether percent-encoded octets are allowed as well.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Table {
    ascii: u128,
    pct_encoded: bool,
}

impl Table {
    /// Creates a table allowing exactly the given bytes, unencoded.
    ///
    /// # Panics
    ///
    /// Panics if a byte is `b'%'` or not ASCII. Use
    /// [`or_pct_encoded`](Self::or_pct_encoded) to allow percent-encoded octets.
    #[must_use]
    pub const fn new(bytes: &[u8]) -> Self {
        let mut ascii = 0u128;
        let mut i = 0;
        while i < bytes.len() {
            let x = bytes[i];
            assert!(x.is_ascii() && x != b'%', "only ASCII bytes other than '%' may be allowed");
            ascii |= 1 << x;
            i += 1;
        }
        Self {
            ascii,
            pct_encoded: false,
        }
    }

    /// Returns the union of two tables.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self {
            ascii: self.ascii | other.ascii,
            pct_encoded: self.pct_encoded || other.pct_encoded,
        }
    }

    /// Returns a copy of the table that also allows percent-encoded octets.
    #[must_use]
    pub const fn or_pct_encoded(self) -> Self {
        Self {
            ascii: self.ascii,
            pct_encoded: true,
        }
    }

    /// Checks whether a byte is allowed unencoded.
    #[inline]
    #[must_use]
    pub const fn allows_ascii(self, x: u8) -> bool {
        x.is_ascii() && self.ascii & (1 << x) != 0
    }

    /// Checks whether percent-encoded octets are allowed.
    #[inline]
    #[must_use]
    pub const fn allows_pct_encoded(self) -> bool {
        self.pct_encoded
    }

    /// Checks whether every character of a string is allowed.
    ///
    /// A `'%'` must start a well-formed percent-encoded octet, and only
    /// when the table allows them.
    #[must_use]
    pub const fn validate(self, mut s: &[u8]) -> bool {
        loop {
            s = match s {
                [] => return true,
                [b'%', hi, lo, rem @ ..] if self.pct_encoded && is_hexdig_pair(*hi, *lo) => rem,
                [x, rem @ ..] if self.allows_ascii(*x) => rem,
                _ => return false,
            };
        }
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// The sub-delimiters left without meaning by form encoding:
/// `"!" / "$" / "'" / "(" / ")" / "*" / ","`
pub const QUERY_DELIMS: Table = new(b"!$'()*,");

/// The characters following the first one of a scheme:
/// `ALPHA / DIGIT / "+" / "-" / "."`
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub const USERINFO: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":")).or_pct_encoded();

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub const REG_NAME: Table = UNRESERVED.or(SUB_DELIMS).or_pct_encoded();

/// A path segment:
/// `*( unreserved / pct-encoded / ":" / "@" / "&" / "=" / "+" / "$" / "," )`
pub const SEGMENT: Table = UNRESERVED.or(new(b":@&=+$,")).or_pct_encoded();

/// Segments separated by `"/"` or `";"`.
pub const PATH: Table = SEGMENT.or(new(b"/;"));

/// `query = fragment = *( pchar / "/" / "?" )`
pub const QUERY_FRAGMENT: Table = UNRESERVED
    .or(SUB_DELIMS)
    .or(new(b":@/?"))
    .or_pct_encoded();

/// Characters whose percent-encoded form is decoded when normalizing a path.
///
/// `"/"` stays encoded so that decoding never splits a segment.
pub const PATH_DECODE: Table = UNRESERVED.or(new(b":@&=+$,;"));

/// Characters whose percent-encoded form is decoded when normalizing a query.
pub const QUERY_DECODE: Table = UNRESERVED.or(QUERY_DELIMS).or(new(b":@/?"));

/// Characters whose percent-encoded form is decoded when normalizing a fragment.
pub const FRAGMENT_DECODE: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@/?"));
