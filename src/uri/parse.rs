//! The left-to-right URI parser.
//!
//! Each stage consumes a prefix of the input and hands the remainder to the
//! next one. Only scheme, host and port go through validation; the other
//! components are stored as they appear.

use super::Uri;
use crate::{
    component::{parse_port, parse_scheme},
    error::{FormatError, FormatErrorKind},
    log::trace,
};

pub(super) fn parse_into(uri: &mut Uri, mut s: &str) -> Result<(), FormatError> {
    if let Some(scheme) = parse_scheme(s) {
        trace!("scheme: {scheme:?}");
        uri.set_scheme(Some(scheme))?;
        s = &s[scheme.len() + 1..];
    }

    if let Some(rest) = s.strip_prefix("//") {
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let mut authority = &rest[..end];
        s = &rest[end..];

        if let Some((user_info, host)) = authority.rsplit_once('@') {
            trace!("user info: {user_info:?}");
            uri.set_user_info(Some(user_info));
            authority = host;
        }

        if let Some((host, port)) = split_port(authority) {
            trace!("port: {port:?}");
            if !port.is_empty() {
                let port = parse_port(port)
                    .ok_or_else(|| FormatError::new(FormatErrorKind::InvalidPort, port))?;
                uri.set_port(Some(port))?;
            }
            authority = host;
        }

        trace!("host: {authority:?}");
        uri.set_host(Some(authority))?;
    }

    if s.is_empty() {
        return Ok(());
    }

    let end = s.find(['?', '#']).unwrap_or(s.len());
    trace!("path: {:?}", &s[..end]);
    uri.set_path(Some(&s[..end]));
    s = &s[end..];

    if let Some(rest) = s.strip_prefix('?') {
        let end = rest.find('#').unwrap_or(rest.len());
        trace!("query: {:?}", &rest[..end]);
        uri.set_query(Some(&rest[..end]));
        s = &rest[end..];
    }

    if let Some(fragment) = s.strip_prefix('#') {
        trace!("fragment: {fragment:?}");
        uri.set_fragment(Some(fragment));
    }
    Ok(())
}

/// Splits a trailing `":" *5DIGIT` off an authority. An empty port is
/// the same as no port.
fn split_port(authority: &str) -> Option<(&str, &str)> {
    let digits = authority
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits > 5 {
        return None;
    }
    let colon = authority.len().checked_sub(digits + 1)?;
    if authority.as_bytes().get(colon) != Some(&b':') {
        return None;
    }
    Some((&authority[..colon], &authority[colon + 1..]))
}

#[cfg(test)]
mod tests {
    use super::split_port;

    #[test]
    fn port_suffix() {
        assert_eq!(split_port("example.com:80"), Some(("example.com", "80")));
        assert_eq!(split_port("[::1]:65535"), Some(("[::1]", "65535")));
        assert_eq!(split_port(":1"), Some(("", "1")));
        assert_eq!(split_port("example.com:123456"), None);
        assert_eq!(split_port("example.com:"), Some(("example.com", "")));
        assert_eq!(split_port("[::1]:"), Some(("[::1]", "")));
        assert_eq!(split_port("example.com"), None);
        assert_eq!(split_port("80"), None);
        assert_eq!(split_port("[::1]"), None);
    }
}
