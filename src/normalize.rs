//! Syntax-based normalization.

use crate::{
    pct_enc::{self, table},
    resolve::{guard_leading_slashes, remove_dot_segments},
    Uri,
};
use alloc::{borrow::ToOwned, string::String};

impl Uri {
    /// Normalizes the URI in place.
    ///
    /// The components are normalized in a fixed order:
    ///
    /// - The scheme and the host are lowercased, except for the hexadecimal
    ///   digits of percent-encoded octets in the host, which are uppercased.
    /// - A port equal to the default port of the scheme under the policy is removed.
    /// - Dot segments are removed from the path. Percent-encoded octets of
    ///   characters allowed unencoded in a path segment are decoded, the hexadecimal
    ///   digits of the others are uppercased, and disallowed characters are encoded.
    ///   Dot segments uncovered by decoding are removed as well.
    /// - The query and the fragment are decoded and encoded in the same way,
    ///   each with its own set of characters.
    /// - An empty path is replaced with `"/"` when a host is present. Without
    ///   a host, a path starting with `"//"` is prefixed with `"/."`.
    ///
    /// Normalization is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_uri::{Policy, Uri};
    ///
    /// let mut uri = Uri::parse_with(Policy::HTTP, "HTTP://www.EXAMPLE.com:80/a/./b/../%7Euser/%2fc?x=%41%26#%66rag")?;
    /// uri.normalize();
    /// assert_eq!(uri.to_string(), "http://www.example.com/a/~user/%2Fc?x=A%26#frag");
    /// # Ok::<_, generic_uri::FormatError>(())
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        if let Some(scheme) = &mut self.scheme {
            scheme.make_ascii_lowercase();
        }

        if let Some(host) = &mut self.host {
            *host = normalize_host(host);
        }

        if let (Some(port), Some(scheme)) = (self.port, &self.scheme) {
            if self.policy.default_port(scheme) == Some(port) {
                self.port = None;
            }
        }

        if let Some(path) = &mut self.path {
            *path = normalize_path(path);
            if self.host.is_none() {
                guard_leading_slashes(path);
            }
        }

        if let Some(query) = &mut self.query {
            *query = normalize_estr(query, table::QUERY_DECODE, table::QUERY_FRAGMENT);
        }

        if let Some(fragment) = &mut self.fragment {
            *fragment = normalize_estr(fragment, table::FRAGMENT_DECODE, table::QUERY_FRAGMENT);
        }

        if self.host.is_some() && self.path.as_deref().map_or(true, str::is_empty) {
            self.path = Some("/".to_owned());
        }

        self
    }
}

fn normalize_host(host: &str) -> String {
    let mut out = String::with_capacity(host.len());
    let mut rest = host;
    while let Some(i) = rest.find('%') {
        out.push_str(&rest[..i].to_ascii_lowercase());
        let octet = rest.get(i..i + 3).unwrap_or("%");
        out.push_str(&octet.to_ascii_uppercase());
        rest = &rest[i + octet.len()..];
    }
    out.push_str(&rest.to_ascii_lowercase());
    out
}

fn normalize_path(path: &str) -> String {
    let path = remove_dot_segments(path);
    let path = normalize_estr(&path, table::PATH_DECODE, table::PATH);
    remove_dot_segments(&path)
}

/// Encodes first, so that a stray `'%'` is never completed into an octet by decoding.
fn normalize_estr(s: &str, decode: table::Table, encode: table::Table) -> String {
    let encoded = pct_enc::encode(s, encode);
    pct_enc::decode_selective(&encoded, decode).into_owned()
}
