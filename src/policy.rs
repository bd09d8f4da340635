//! Scheme-specific policies.

use crate::{
    component::validate_scheme,
    error::{FormatError, FormatErrorKind},
    host::HostKinds,
    log::debug,
};

/// Scheme-specific constraints applied to a [`Uri`].
///
/// A policy is plain configuration data: a scheme whitelist, a default-port
/// table, the accepted host grammars, and a handful of flags. It is fixed when
/// a `Uri` is created and carried along with it, so URIs under different
/// policies can coexist.
///
/// Three policies are predefined: [`GENERIC`](Self::GENERIC),
/// [`HTTP`](Self::HTTP) and [`FILE`](Self::FILE). Custom policies are built
/// by chaining the `with_*` methods.
///
/// # Examples
///
/// ```
/// use generic_uri::{HostKinds, Policy, Uri};
///
/// const WS: Policy = Policy::GENERIC
///     .with_schemes(&["ws", "wss"])
///     .with_default_ports(&[("ws", 80), ("wss", 443)])
///     .with_host_kinds(HostKinds::DNS_OR_IPV4_OR_IPV6_OR_REGNAME);
///
/// let mut uri = Uri::parse_with(WS, "WSS://Example.com:443/chat")?;
/// uri.normalize();
/// assert_eq!(uri.to_string(), "wss://example.com/chat");
///
/// assert!(Uri::parse_with(WS, "http://example.com/").is_err());
/// # Ok::<_, generic_uri::FormatError>(())
/// ```
///
/// [`Uri`]: crate::Uri
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct Policy {
    schemes: &'static [&'static str],
    default_ports: &'static [(&'static str, u16)],
    host_kinds: HostKinds,
    user_info: bool,
    fragment: bool,
    query: bool,
    root_path: bool,
    port_fallback: bool,
}

impl Policy {
    /// The policy of a generic URI.
    ///
    /// Accepts every scheme and every host grammar.
    pub const GENERIC: Self = Self {
        schemes: &[],
        default_ports: &[],
        host_kinds: HostKinds::ALL,
        user_info: true,
        fragment: true,
        query: true,
        root_path: false,
        port_fallback: false,
    };

    /// The policy of an `http` or `https` URI.
    ///
    /// An empty path is replaced with `"/"` after parsing, and
    /// [`Uri::port`] falls back to the default port of the scheme.
    ///
    /// [`Uri::port`]: crate::Uri::port
    pub const HTTP: Self = Self::GENERIC
        .with_schemes(&["http", "https"])
        .with_default_ports(&[("http", 80), ("https", 443)])
        .with_host_kinds(HostKinds::DNS_OR_IPV4_OR_IPV6_OR_REGNAME)
        .force_root_path(true)
        .default_port_fallback(true);

    /// The policy of a `file` URI.
    ///
    /// User information and fragments are silently dropped on assignment,
    /// and a URI carrying a query is not valid.
    pub const FILE: Self = Self::GENERIC
        .with_schemes(&["file"])
        .allow_user_info(false)
        .allow_fragment(false)
        .allow_query(false);

    /// Creates a new `Policy` equal to [`GENERIC`](Self::GENERIC).
    pub const fn new() -> Self {
        Self::GENERIC
    }

    /// Sets the scheme whitelist, compared case-insensitively.
    ///
    /// An empty whitelist accepts every well-formed scheme.
    pub const fn with_schemes(mut self, schemes: &'static [&'static str]) -> Self {
        self.schemes = schemes;
        self
    }

    /// Sets the default-port table, keyed by lowercase scheme.
    pub const fn with_default_ports(mut self, ports: &'static [(&'static str, u16)]) -> Self {
        self.default_ports = ports;
        self
    }

    /// Sets the host grammars accepted on assignment.
    pub const fn with_host_kinds(mut self, kinds: HostKinds) -> Self {
        self.host_kinds = kinds;
        self
    }

    /// Sets whether user information is kept on assignment.
    ///
    /// This defaults to `true`. When `false`, assigning user information is a no-op.
    pub const fn allow_user_info(mut self, value: bool) -> Self {
        self.user_info = value;
        self
    }

    /// Sets whether a fragment is kept on assignment.
    ///
    /// This defaults to `true`. When `false`, assigning a fragment is a no-op.
    pub const fn allow_fragment(mut self, value: bool) -> Self {
        self.fragment = value;
        self
    }

    /// Sets whether a URI with a query is valid.
    ///
    /// This defaults to `true`.
    pub const fn allow_query(mut self, value: bool) -> Self {
        self.query = value;
        self
    }

    /// Sets whether an empty path is replaced with `"/"` after parsing.
    ///
    /// This defaults to `false`.
    pub const fn force_root_path(mut self, value: bool) -> Self {
        self.root_path = value;
        self
    }

    /// Sets whether [`Uri::port`] falls back to the default port of the scheme.
    ///
    /// This defaults to `false`.
    ///
    /// [`Uri::port`]: crate::Uri::port
    pub const fn default_port_fallback(mut self, value: bool) -> Self {
        self.port_fallback = value;
        self
    }

    /// Returns the scheme whitelist.
    #[must_use]
    pub const fn schemes(&self) -> &'static [&'static str] {
        self.schemes
    }

    /// Returns the accepted host grammars.
    #[must_use]
    pub const fn host_kinds(&self) -> HostKinds {
        self.host_kinds
    }

    /// Checks whether a well-formed scheme passes the whitelist.
    #[must_use]
    pub fn accepts_scheme(&self, scheme: &str) -> bool {
        self.schemes.is_empty()
            || self
                .schemes
                .iter()
                .any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Returns the default port of a scheme, compared case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_uri::Policy;
    ///
    /// assert_eq!(Policy::HTTP.default_port("HTTPS"), Some(443));
    /// assert_eq!(Policy::HTTP.default_port("ftp"), None);
    /// assert_eq!(Policy::GENERIC.default_port("http"), None);
    /// ```
    #[must_use]
    pub fn default_port(&self, scheme: &str) -> Option<u16> {
        self.default_ports
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(scheme))
            .map(|&(_, port)| port)
    }

    pub(crate) fn check_scheme(&self, scheme: &str) -> Result<(), FormatError> {
        if !validate_scheme(scheme) {
            debug!("rejected scheme {scheme:?}");
            return Err(FormatError::new(FormatErrorKind::InvalidScheme, scheme));
        }
        if !self.accepts_scheme(scheme) {
            debug!("scheme {scheme:?} not accepted by policy");
            return Err(FormatError::new(FormatErrorKind::SchemeNotAccepted, scheme));
        }
        Ok(())
    }

    pub(crate) const fn allows_user_info(&self) -> bool {
        self.user_info
    }

    pub(crate) const fn allows_fragment(&self) -> bool {
        self.fragment
    }

    pub(crate) const fn allows_query(&self) -> bool {
        self.query
    }

    pub(crate) const fn forces_root_path(&self) -> bool {
        self.root_path
    }

    pub(crate) const fn falls_back_to_default_port(&self) -> bool {
        self.port_fallback
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::GENERIC
    }
}
