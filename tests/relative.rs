use generic_uri::{Policy, Uri};

trait Test {
    fn relative(&self, target: &str, expected: &str);
}

impl Test for Uri {
    #[track_caller]
    fn relative(&self, target: &str, expected: &str) {
        let mut uri = Uri::parse(target).unwrap();
        uri.make_relative(self);
        assert_eq!(uri.to_string(), expected);

        // Resolving the result gives back the target, up to normalization.
        let mut normalized = Uri::parse(target).unwrap();
        normalized.normalize();
        uri.resolve(self).unwrap().normalize();
        assert_eq!(uri.to_string(), normalized.to_string());
    }
}

#[test]
fn make_relative() {
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();

    base.relative("http://a/b/c/g", "g");
    base.relative("http://a/b/c/g/", "g/");
    base.relative("http://a/b/c/", "./");
    base.relative("http://a/b/", "../");
    base.relative("http://a/b/g", "../g");
    base.relative("http://a/", "../../");
    base.relative("http://a/g", "../../g");
    base.relative("http://a/x/y/z", "../../x/y/z");
    base.relative("http://a/b/c/g?y#s", "g?y#s");
    base.relative("http://a/b/c/d;p?y", "?y");
    base.relative("http://a/b/c/d;p?q#s", "?q#s");
    base.relative("http://a/b/c/d;p", "d;p");
    base.relative("http://a/b/c/a:b", "./a:b");
    base.relative("http://a/b/c//x", ".//x");
}

#[test]
fn make_relative_normalizes_first() {
    let base = Uri::parse("HTTP://A/b/./c/d").unwrap();

    base.relative("http://a/b/c/%7Efoo", "~foo");
    base.relative("http://A/b/x/../c/g", "g");
}

#[test]
fn make_relative_keeps_differing_uris() {
    let base = Uri::parse("http://a/b/c").unwrap();

    let mut u = Uri::parse("http://other/b/c").unwrap();
    u.make_relative(&base);
    assert_eq!(u.to_string(), "http://other/b/c");

    let mut u = Uri::parse("https://a/b/c").unwrap();
    u.make_relative(&base);
    assert_eq!(u.to_string(), "https://a/b/c");

    let mut u = Uri::parse("http://a:8080/b/c").unwrap();
    u.make_relative(&Uri::parse("http://a:9090/b/c").unwrap());
    assert_eq!(u.to_string(), "http://a:8080/b/c");
}

#[test]
fn make_relative_default_port() {
    let base = Uri::parse_with(Policy::HTTP, "http://a:80/b/c").unwrap();
    let mut u = Uri::parse_with(Policy::HTTP, "http://a/b/d").unwrap();
    u.make_relative(&base);
    assert_eq!(u.to_string(), "d");
    assert_eq!(u.scheme(), None);
    assert_eq!(u.host(), None);
}

#[test]
fn make_relative_compares_fallback_ports() {
    let base = Uri::parse_with(Policy::HTTP, "http://a/b/c").unwrap();

    let mut u = Uri::parse_with(Policy::HTTP, "http://a:8080/b/d").unwrap();
    u.make_relative(&base);
    assert_eq!(u.to_string(), "http://a:8080/b/d");
    u.resolve(&base).unwrap();
    assert_eq!(u.to_string(), "http://a:8080/b/d");

    let base = Uri::parse_with(Policy::HTTP, "https://a:8443/b/c").unwrap();
    let mut u = Uri::parse_with(Policy::HTTP, "https://a/b/d").unwrap();
    u.make_relative(&base);
    assert_eq!(u.port(), Some(443));
    assert_eq!(u.to_string(), "https://a/b/d");
}

#[test]
fn make_relative_drops_user_info() {
    let base = Uri::parse("http://me@a/b/c").unwrap();
    let mut u = Uri::parse("http://me@a/b/d").unwrap();
    u.make_relative(&base);
    assert_eq!(u.user_info(), None);
    assert_eq!(u.to_string(), "d");
}

#[test]
fn make_relative_identical() {
    let base = Uri::parse("http://a/b/c?q").unwrap();
    let mut u = Uri::parse("http://a/b/c?q#f").unwrap();
    u.make_relative(&base);
    assert_eq!(u.path(), Some(""));
    assert_eq!(u.to_string(), "?q#f");
}
