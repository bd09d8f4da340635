//! Percent-encoding utilities.
//!
//! All functions in this module operate on ASCII: any byte outside the
//! allowed [`Table`] is escaped as a `%XX` triple with uppercase hexadecimal
//! digits, and decoding never yields non-ASCII characters.

pub mod table;

pub use table::Table;

use alloc::{borrow::Cow, collections::BTreeMap, string::String, vec::Vec};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub(crate) const fn is_hexdig_pair(x: u8, y: u8) -> bool {
    x.is_ascii_hexdigit() && y.is_ascii_hexdigit()
}

/// Appends `%XX` for a byte, with uppercase hexadecimal digits.
fn push_pct_encoded(buf: &mut String, x: u8) {
    buf.push('%');
    buf.push(HEX_DIGITS[usize::from(x >> 4)] as char);
    buf.push(HEX_DIGITS[usize::from(x & 0x0f)] as char);
}

fn hex_value(x: u8) -> Option<u8> {
    match x {
        b'0'..=b'9' => Some(x - b'0'),
        b'A'..=b'F' => Some(x - b'A' + 10),
        b'a'..=b'f' => Some(x - b'a' + 10),
        _ => None,
    }
}

/// Returns the percent-encoded octet starting at `i`, if there is a well-formed one.
fn pct_encoded_at(bytes: &[u8], i: usize) -> Option<u8> {
    match bytes.get(i..i + 3) {
        Some(&[b'%', hi, lo]) => Some(hex_value(hi)? << 4 | hex_value(lo)?),
        _ => None,
    }
}

/// Percent-encodes every byte of a string that is not [unreserved].
///
/// This is the fallback encoder for characters that are disallowed in a
/// component. Existing `'%'` characters are escaped too.
///
/// [unreserved]: table::UNRESERVED
///
/// # Examples
///
/// ```
/// use generic_uri::pct_enc::escape;
///
/// assert_eq!(escape("a b/c"), "a%20b%2Fc");
/// assert_eq!(escape("100%"), "100%25");
/// assert_eq!(escape("ü"), "%C3%BC");
/// ```
#[must_use]
pub fn escape(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    for &x in s.as_bytes() {
        if table::UNRESERVED.allows_ascii(x) {
            buf.push(x as char);
        } else {
            push_pct_encoded(&mut buf, x);
        }
    }
    buf
}

/// Percent-encodes the characters of a string that are not allowed by the table.
///
/// Well-formed percent-encoded octets are kept verbatim when the table
/// [allows them][Table::allows_pct_encoded], which makes encoding idempotent.
/// A `'%'` that does not start a well-formed octet is escaped as `"%25"`.
///
/// # Examples
///
/// ```
/// use generic_uri::pct_enc::{encode, table::PATH};
///
/// assert_eq!(encode("/a b/%7E", PATH), "/a%20b/%7E");
/// assert_eq!(encode("/50%/", PATH), "/50%25/");
/// assert_eq!(encode("/a%20b", PATH), "/a%20b");
/// ```
#[must_use]
pub fn encode(input: &str, table: Table) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let mut buf: Option<String> = None;

    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' && table.allows_pct_encoded() && pct_encoded_at(bytes, i).is_some() {
            if let Some(buf) = &mut buf {
                buf.push_str(&input[i..i + 3]);
            }
            i += 3;
            continue;
        }
        if table.allows_ascii(x) {
            if let Some(buf) = &mut buf {
                buf.push(x as char);
            }
        } else {
            let buf = buf.get_or_insert_with(|| {
                let mut buf = String::with_capacity(input.len() + 8);
                buf.push_str(&input[..i]);
                buf
            });
            push_pct_encoded(buf, x);
        }
        i += 1;
    }

    match buf {
        Some(buf) => Cow::Owned(buf),
        None => Cow::Borrowed(input),
    }
}

/// Decodes the percent-encoded octets of a string that stand for characters
/// allowed by the table.
///
/// Every other percent-encoded octet is kept encoded, with its hexadecimal
/// digits uppercased. Unencoded characters and malformed `'%'` are left untouched.
///
/// # Examples
///
/// ```
/// use generic_uri::pct_enc::{decode_selective, table::UNRESERVED};
///
/// assert_eq!(decode_selective("%7euser%2fdir%c3%bc", UNRESERVED), "~user%2Fdir%C3%BC");
/// ```
#[must_use]
pub fn decode_selective(input: &str, table: Table) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let mut buf: Option<String> = None;

    let mut i = 0;
    let mut copied = 0;
    while i < bytes.len() {
        let Some(x) = pct_encoded_at(bytes, i) else {
            i += 1;
            continue;
        };
        let decode = x.is_ascii() && table.allows_ascii(x);
        let lowercase = bytes[i + 1..i + 3].iter().any(u8::is_ascii_lowercase);
        if decode || lowercase {
            let buf = buf.get_or_insert_with(|| String::with_capacity(input.len()));
            buf.push_str(&input[copied..i]);
            if decode {
                buf.push(x as char);
            } else {
                push_pct_encoded(buf, x);
            }
            copied = i + 3;
        }
        i += 3;
    }

    match buf {
        Some(mut buf) => {
            buf.push_str(&input[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(input),
    }
}

/// Percent-encodes a user-info subcomponent.
#[must_use]
pub fn encode_user_info(s: &str) -> Cow<'_, str> {
    encode(s, table::USERINFO)
}

/// Percent-encodes a path component. `'/'` and `';'` are kept.
#[must_use]
pub fn encode_path(s: &str) -> Cow<'_, str> {
    encode(s, table::PATH)
}

/// Percent-encodes a query or fragment component.
#[must_use]
pub fn encode_query_fragment(s: &str) -> Cow<'_, str> {
    encode(s, table::QUERY_FRAGMENT)
}

/// Form-encodes key-value pairs as `key=value` joined by `'&'`.
///
/// Keys and values are [escaped](escape), so a space becomes `"%20"`.
pub(crate) fn form_encode<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut buf = String::new();
    for (k, v) in pairs {
        if !buf.is_empty() {
            buf.push('&');
        }
        buf.push_str(&escape(k.as_ref()));
        buf.push('=');
        buf.push_str(&escape(v.as_ref()));
    }
    buf
}

/// Form-decodes a query string into a map.
///
/// `'+'` decodes to a space, a pair without `'='` has an empty value,
/// pairs with an empty key are skipped, and a later key replaces an earlier one.
pub(crate) fn form_decode(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (form_decode_str(k), form_decode_str(v)))
        .collect()
}

fn form_decode_str(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if let Some(x) = pct_encoded_at(bytes, i) {
            out.push(x);
            i += 3;
        } else {
            out.push(match bytes[i] {
                b'+' => b' ',
                x => x,
            });
            i += 1;
        }
    }

    match String::from_utf8(out) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
