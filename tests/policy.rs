use generic_uri::{FormatErrorKind, HostKinds, Policy, SerializeError, Uri};

#[test]
fn http_whitelist() {
    let e = Uri::parse_with(Policy::HTTP, "ftp://x").unwrap_err();
    assert_eq!(e.kind(), FormatErrorKind::SchemeNotAccepted);
    assert_eq!(e.value(), "ftp");

    let u = Uri::parse_with(Policy::HTTP, "https://x").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "https");
    assert_eq!(u.path(), Some("/"));
    assert_eq!(u.to_string(), "https://x/");

    assert!(Uri::parse_with(Policy::HTTP, "HTTP://x").is_ok());

    // Not a scheme, so nothing to check against the whitelist.
    let u = Uri::parse_with(Policy::HTTP, "1http://x").unwrap();
    assert_eq!(u.scheme(), None);

    let mut u = Uri::with_policy(Policy::HTTP);
    let e = u.set_scheme(Some("mailto")).unwrap_err();
    assert_eq!(e.kind(), FormatErrorKind::SchemeNotAccepted);
    let e = u.set_scheme(Some("ht tp")).unwrap_err();
    assert_eq!(e.kind(), FormatErrorKind::InvalidScheme);
    assert_eq!(u.scheme(), None);
}

#[test]
fn http_port_fallback() {
    let u = Uri::parse_with(Policy::HTTP, "http://x/").unwrap();
    assert_eq!(u.port(), Some(80));
    assert_eq!(u.explicit_port(), None);

    let u = Uri::parse_with(Policy::HTTP, "HTTPS://x/").unwrap();
    assert_eq!(u.port(), Some(443));

    let u = Uri::parse_with(Policy::HTTP, "http://x:8080/").unwrap();
    assert_eq!(u.port(), Some(8080));

    // No scheme, no fallback.
    let u = Uri::parse_with(Policy::HTTP, "//x/").unwrap();
    assert_eq!(u.port(), None);

    // The generic policy never falls back.
    let u = Uri::parse("http://x/").unwrap();
    assert_eq!(u.port(), None);
}

#[test]
fn http_root_path() {
    let u = Uri::parse_with(Policy::HTTP, "http://x?q").unwrap();
    assert_eq!(u.path(), Some("/"));
    assert_eq!(u.to_string(), "http://x/?q");

    let u = Uri::parse_with(Policy::HTTP, "http://x/a").unwrap();
    assert_eq!(u.path(), Some("/a"));
}

#[test]
fn http_host_kinds() {
    assert!(Uri::parse_with(Policy::HTTP, "http://example.com/").is_ok());
    assert!(Uri::parse_with(Policy::HTTP, "http://127.0.0.1/").is_ok());
    assert!(Uri::parse_with(Policy::HTTP, "http://[::1]/").is_ok());

    let e = Uri::parse_with(Policy::HTTP, "http://exa mple/").unwrap_err();
    assert_eq!(e.kind(), FormatErrorKind::InvalidHost);
}

#[test]
fn user_and_password() {
    let mut u = Uri::parse_with(Policy::HTTP, "http://alice:s3cr3t@x/").unwrap();
    assert_eq!(u.user(), Some("alice"));
    assert_eq!(u.password(), Some("s3cr3t"));

    u.set_user(Some("bob"));
    assert_eq!(u.user_info(), Some("bob:s3cr3t"));

    u.set_password(None);
    assert_eq!(u.user_info(), Some("bob"));
    assert_eq!(u.password(), None);

    u.set_user(None);
    assert_eq!(u.user_info(), None);
    assert_eq!(u.user(), None);

    u.set_password(Some("pw"));
    assert_eq!(u.user_info(), Some(":pw"));
    assert_eq!(u.user(), Some(""));
    assert_eq!(u.to_string(), "http://:pw@x/");
}

#[test]
fn file_policy() {
    let u = Uri::parse_with(Policy::FILE, "file://me@host/etc/hosts#top").unwrap();
    assert_eq!(u.user_info(), None);
    assert_eq!(u.fragment(), None);
    assert_eq!(u.to_string(), "file://host/etc/hosts");

    let e = Uri::parse_with(Policy::FILE, "http://host/").unwrap_err();
    assert_eq!(e.kind(), FormatErrorKind::SchemeNotAccepted);

    let mut u = Uri::parse_with(Policy::FILE, "file:///x?q").unwrap();
    assert_eq!(u.query(), Some("q"));
    assert!(!u.is_valid());
    assert_eq!(u.serialize(), Err(SerializeError::QueryNotAllowed));
    assert_eq!(u.to_string(), "");

    u.set_query(None);
    assert_eq!(u.to_string(), "file:///x");

    u.set_fragment(Some("f")).set_user_info(Some("me"));
    assert_eq!(u.fragment(), None);
    assert_eq!(u.user_info(), None);
}

#[test]
fn file_paths() {
    assert_eq!(Uri::from_unix_path("/etc/passwd").to_string(), "file:///etc/passwd");
    assert_eq!(Uri::from_unix_path("/").to_string(), "file:///");
    assert_eq!(Uri::from_unix_path("/tmp/a b#c").to_string(), "file:///tmp/a%20b%23c");
    assert_eq!(Uri::from_unix_path("rel/x").to_string(), "file:rel/x");

    assert_eq!(Uri::from_windows_path("C:\\Users").to_string(), "file:///C:/Users");
    assert_eq!(Uri::from_windows_path("c:\\").to_string(), "file:///c:/");
    assert_eq!(
        Uri::from_windows_path("\\\\server\\share").to_string(),
        "file:////server/share"
    );
    assert_eq!(Uri::from_windows_path("dir\\a/b").to_string(), "file:dir/a%2Fb");

    let u = Uri::from_unix_path("/etc/passwd");
    assert_eq!(*u.policy(), Policy::FILE);
    assert_eq!(u.host(), Some(""));
    assert_eq!(u.path(), Some("/etc/passwd"));
}

#[test]
fn from_uri() {
    let generic = Uri::parse("http://me@h:8080?q#f").unwrap();

    let http = Uri::from_uri(Policy::HTTP, &generic).unwrap();
    assert_eq!(http.policy(), &Policy::HTTP);
    assert_eq!(http.explicit_port(), Some(8080));
    assert_eq!(http.path(), Some(""));
    assert_eq!(http.to_string(), "http://me@h:8080/?q#f");

    let e = Uri::from_uri(Policy::FILE, &generic).unwrap_err();
    assert_eq!(e.kind(), FormatErrorKind::SchemeNotAccepted);

    const IP_ONLY: Policy = Policy::new().with_host_kinds(HostKinds::IPVANY);
    let e = Uri::from_uri(IP_ONLY, &generic).unwrap_err();
    assert_eq!(e.kind(), FormatErrorKind::InvalidHost);
    assert_eq!(e.value(), "h");
}

#[test]
fn policy_accessors() {
    assert_eq!(Policy::default(), Policy::GENERIC);
    assert_eq!(Policy::new(), Policy::GENERIC);
    assert!(Policy::GENERIC.schemes().is_empty());
    assert!(Policy::GENERIC.accepts_scheme("anything"));
    assert_eq!(Policy::GENERIC.host_kinds(), HostKinds::ALL);

    assert_eq!(Policy::HTTP.schemes(), ["http", "https"]);
    assert!(Policy::HTTP.accepts_scheme("HTTPS"));
    assert!(!Policy::HTTP.accepts_scheme("ws"));
    assert_eq!(Policy::HTTP.default_port("http"), Some(80));
    assert_eq!(Policy::HTTP.default_port("Https"), Some(443));
    assert_eq!(Policy::FILE.default_port("file"), None);
}

#[test]
fn custom_policy() {
    const WS: Policy = Policy::GENERIC
        .with_schemes(&["ws", "wss"])
        .with_default_ports(&[("ws", 80), ("wss", 443)])
        .default_port_fallback(true)
        .force_root_path(true);

    let mut u = Uri::parse_with(WS, "wss://example.com").unwrap();
    assert_eq!(u.path(), Some("/"));
    assert_eq!(u.port(), Some(443));

    u.set_port(Some(443)).unwrap();
    assert_eq!(u.to_string(), "wss://example.com:443/");
    u.normalize();
    assert_eq!(u.to_string(), "wss://example.com/");

    assert!(Uri::parse_with(WS, "http://example.com").is_err());
}
