//! Host validation.
//!
//! A [`HostKinds`] bitmask selects which host grammars [`validate_host`]
//! tries. The grammars are tried in a fixed order and the first match wins:
//!
//! 1. IPv4 and bracketed IPv6 literals, when an IP kind is selected.
//! 2. Registered names, when [`HostKinds::REGNAME`] is selected.
//! 3. Numeric DNS hostnames, when [`HostKinds::DNS`] is selected.

use crate::pct_enc::table;
use core::{
    fmt,
    net::{Ipv4Addr, Ipv6Addr},
    ops::{BitAnd, BitOr},
};

/// A bitmask of the host grammars accepted by a URI.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct HostKinds(u8);

impl HostKinds {
    /// IPv4 address literals.
    pub const IPV4: Self = Self(0x01);
    /// Bracketed IPv6 address literals.
    pub const IPV6: Self = Self(0x02);
    /// Any IP address literal.
    pub const IPVANY: Self = Self(0x07);
    /// DNS hostnames.
    ///
    /// Only hostnames that are shaped like an IP address are recognized:
    /// all digits and dots, or all hexadecimal digits, dots and colons.
    /// Alphabetic labels are not accepted by this kind; select
    /// [`REGNAME`](Self::REGNAME) for them.
    pub const DNS: Self = Self(0x08);
    /// DNS hostnames or IPv4 literals.
    pub const DNS_OR_IPV4: Self = Self(0x09);
    /// DNS hostnames or IPv6 literals.
    pub const DNS_OR_IPV6: Self = Self(0x0A);
    /// DNS hostnames, IPv4 or IPv6 literals.
    pub const DNS_OR_IPV4_OR_IPV6: Self = Self(0x0B);
    /// DNS hostnames or any IP literal.
    pub const DNS_OR_IPVANY: Self = Self(0x0F);
    /// Registered names.
    pub const REGNAME: Self = Self(0x10);
    /// DNS hostnames, IPv4 or IPv6 literals, or registered names.
    pub const DNS_OR_IPV4_OR_IPV6_OR_REGNAME: Self = Self(0x1B);
    /// Every host grammar.
    pub const ALL: Self = Self(0x1F);

    /// Returns the raw bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Creates a bitmask from raw bits, dropping unknown bits.
    #[inline]
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Combines two bitmasks.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Checks whether every bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Checks whether any bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for HostKinds {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for HostKinds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for HostKinds {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for HostKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(HostKinds, &str); 4] = [
            (HostKinds::IPV4, "IPV4"),
            (HostKinds::IPV6, "IPV6"),
            (HostKinds::DNS, "DNS"),
            (HostKinds::REGNAME, "REGNAME"),
        ];
        let mut first = true;
        for (kind, name) in NAMES {
            if self.contains(kind) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("(empty)")?;
        }
        Ok(())
    }
}

/// Checks whether a host matches one of the allowed grammars.
///
/// An empty host matches no grammar. [`Uri::set_host`] accepts it
/// regardless, as it stands for an empty authority.
///
/// [`Uri::set_host`]: crate::Uri::set_host
///
/// # Examples
///
/// ```
/// use generic_uri::{validate_host, HostKinds};
///
/// assert!(validate_host("192.168.0.1", HostKinds::IPV4));
/// assert!(validate_host("[::1]", HostKinds::IPV6));
/// assert!(validate_host("example.com", HostKinds::REGNAME));
/// assert!(!validate_host("not a host", HostKinds::REGNAME));
/// assert!(!validate_host("example.com", HostKinds::DNS_OR_IPVANY));
/// ```
#[must_use]
pub fn validate_host(host: &str, allowed: HostKinds) -> bool {
    if allowed.intersects(HostKinds::IPVANY) && is_valid_ip_address(host, allowed) {
        return true;
    }
    if allowed.contains(HostKinds::REGNAME) && is_valid_reg_name(host) {
        return true;
    }
    if allowed.contains(HostKinds::DNS) && is_valid_dns_hostname(host) {
        return true;
    }
    false
}

fn is_valid_ip_address(host: &str, allowed: HostKinds) -> bool {
    if allowed.contains(HostKinds::IPV4) && parse_v4(host.as_bytes()).is_some() {
        return true;
    }
    if allowed.contains(HostKinds::IPV6) {
        if let Some(inner) = host.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return parse_v6(inner.as_bytes()).is_some();
        }
    }
    false
}

fn is_valid_reg_name(host: &str) -> bool {
    !host.is_empty() && table::REG_NAME.validate(host.as_bytes())
}

fn is_valid_dns_hostname(host: &str) -> bool {
    let numeric = host.bytes().all(|x| x.is_ascii_digit() || x == b'.') && host.contains('.');
    let hex = host
        .bytes()
        .all(|x| x.is_ascii_hexdigit() || x == b':' || x == b'.')
        && host.contains(':');
    (numeric || hex) && is_valid_ip_address(host, HostKinds::IPVANY)
}

/// `dec-octet`: a decimal number from 0 to 255 without leading zeros.
fn dec_octet(s: &[u8]) -> Option<u8> {
    match s {
        [b'0'] => Some(0),
        [b'1'..=b'9', ..] if s.len() <= 3 => radix_octet(s, s.len(), 10),
        _ => None,
    }
}

/// Splits a dotted quad, checking each part against `f`.
fn dotted<F>(s: &[u8], mut f: F) -> Option<[u8; 4]>
where
    F: FnMut(&[u8]) -> Option<u8>,
{
    let mut out = [0; 4];
    let mut parts = s.split(|&x| x == b'.');
    for octet in &mut out {
        *octet = f(parts.next()?)?;
    }
    match parts.next() {
        Some(_) => None,
        None => Some(out),
    }
}

/// Reads exactly `len` digits in the given radix as an octet.
fn radix_octet(s: &[u8], len: usize, radix: u32) -> Option<u8> {
    if s.len() != len {
        return None;
    }
    let n = s
        .iter()
        .try_fold(0u32, |n, &x| Some(n * radix + char::from(x).to_digit(radix)?))?;
    u8::try_from(n).ok()
}

/// Parses an IPv4 address literal.
///
/// Besides the canonical dotted-decimal form (no leading zeros), three
/// alternate notations are recognized, each made of four dot-separated parts:
///
/// - binary, eight binary digits per part: `11000000.10101000.00000000.00000001`;
/// - decimal, three digits per part: `192.168.000.001`;
/// - hexadecimal, two hexadecimal digits per part: `c0.a8.00.01`.
///
/// The notations are tried in that order before the canonical form,
/// so `10.10.10.10` reads as hexadecimal.
///
/// # Examples
///
/// ```
/// use generic_uri::host::parse_v4;
/// use std::net::Ipv4Addr;
///
/// let addr = Ipv4Addr::new(192, 168, 0, 1);
/// assert_eq!(parse_v4(b"192.168.0.1"), Some(addr));
/// assert_eq!(parse_v4(b"192.168.000.001"), Some(addr));
/// assert_eq!(parse_v4(b"c0.a8.00.01"), Some(addr));
/// assert_eq!(parse_v4(b"11000000.10101000.00000000.00000001"), Some(addr));
/// assert_eq!(parse_v4(b"192.168.0.01"), None);
/// ```
#[must_use]
pub fn parse_v4(s: &[u8]) -> Option<Ipv4Addr> {
    parse_v4_bytes(s).map(Ipv4Addr::from)
}

fn parse_v4_bytes(s: &[u8]) -> Option<[u8; 4]> {
    let shaped = |len: usize, pred: fn(&u8) -> bool| {
        dotted(s, |part| (part.len() == len && part.iter().all(pred)).then_some(0)).is_some()
    };

    if shaped(8, |x: &u8| matches!(*x, b'0' | b'1')) {
        dotted(s, |part| radix_octet(part, 8, 2))
    } else if shaped(3, u8::is_ascii_digit) {
        dotted(s, |part| radix_octet(part, 3, 10))
    } else if shaped(2, u8::is_ascii_hexdigit) {
        dotted(s, |part| radix_octet(part, 2, 16))
    } else {
        dotted(s, dec_octet)
    }
}

/// Parses an IPv6 address literal without brackets.
///
/// `"::"` elides one or more groups of zeros and may appear at most once.
/// The low 32 bits may be written as an IPv4 literal in any notation
/// accepted by [`parse_v4`].
///
/// # Examples
///
/// ```
/// use generic_uri::host::parse_v6;
/// use std::net::Ipv6Addr;
///
/// assert_eq!(parse_v6(b"::1"), Some(Ipv6Addr::LOCALHOST));
/// assert_eq!(parse_v6(b"::ffff:192.0.2.33"), Some(Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0xc000, 0x221)));
/// assert_eq!(parse_v6(b"1::2::3"), None);
/// ```
#[must_use]
pub fn parse_v6(s: &[u8]) -> Option<Ipv6Addr> {
    let mut groups = [0u16; 8];

    match s.windows(2).position(|w| w == b"::") {
        None => {
            if read_groups(s, &mut groups, true)? != 8 {
                return None;
            }
        }
        Some(i) => {
            let head = read_groups(&s[..i], &mut groups, false)?;
            let mut tail_groups = [0u16; 8];
            let tail = read_groups(&s[i + 2..], &mut tail_groups, true)?;
            if head + tail > 7 {
                return None;
            }
            groups[8 - tail..].copy_from_slice(&tail_groups[..tail]);
        }
    }
    Some(groups.into())
}

/// Reads colon-separated groups into `out`, returning how many were read.
///
/// With `ls32`, the last part may be an IPv4 literal, read as two groups.
fn read_groups(s: &[u8], out: &mut [u16; 8], ls32: bool) -> Option<usize> {
    if s.is_empty() {
        return Some(0);
    }

    let mut n = 0;
    let mut parts = s.split(|&x| x == b':').peekable();
    while let Some(part) = parts.next() {
        if ls32 && parts.peek().is_none() && part.contains(&b'.') {
            let [a, b, c, d] = parse_v4_bytes(part)?;
            let slot = out.get_mut(n..n + 2)?;
            slot.copy_from_slice(&[u16::from_be_bytes([a, b]), u16::from_be_bytes([c, d])]);
            return Some(n + 2);
        }
        *out.get_mut(n)? = hex_group(part)?;
        n += 1;
    }
    Some(n)
}

/// `h16`: one to four hexadecimal digits.
fn hex_group(s: &[u8]) -> Option<u16> {
    if !(1..=4).contains(&s.len()) {
        return None;
    }
    s.iter()
        .try_fold(0u16, |n, &x| Some(n << 4 | char::from(x).to_digit(16)? as u16))
}
