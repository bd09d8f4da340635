use generic_uri::{remove_dot_segments, FormatErrorKind, Policy, Uri};

trait Test {
    fn pass(&self, r: &str, expected: &str);
}

impl Test for Uri {
    #[track_caller]
    fn pass(&self, r: &str, expected: &str) {
        let mut uri = Uri::parse(r).unwrap();
        uri.resolve(self).unwrap();
        assert_eq!(uri.serialize().unwrap(), expected);

        assert_eq!(Uri::merge(self, r).unwrap().serialize().unwrap(), expected);
    }
}

#[test]
fn resolve() {
    // Examples from Section 5.4 of RFC 3986.
    let base = Uri::parse("http://a/b/c/d;p?q").unwrap();

    base.pass("g:h", "g:h");
    base.pass("g", "http://a/b/c/g");
    base.pass("./g", "http://a/b/c/g");
    base.pass("g/", "http://a/b/c/g/");
    base.pass("/g", "http://a/g");
    base.pass("//g", "http://g");
    base.pass("?y", "http://a/b/c/d;p?y");
    base.pass("g?y", "http://a/b/c/g?y");
    base.pass("#s", "http://a/b/c/d;p?q#s");
    base.pass("g#s", "http://a/b/c/g#s");
    base.pass("g?y#s", "http://a/b/c/g?y#s");
    base.pass(";x", "http://a/b/c/;x");
    base.pass("g;x", "http://a/b/c/g;x");
    base.pass("g;x?y#s", "http://a/b/c/g;x?y#s");
    base.pass("", "http://a/b/c/d;p?q");
    base.pass(".", "http://a/b/c/");
    base.pass("./", "http://a/b/c/");
    base.pass("..", "http://a/b/");
    base.pass("../", "http://a/b/");
    base.pass("../g", "http://a/b/g");
    base.pass("../..", "http://a/");
    base.pass("../../", "http://a/");
    base.pass("../../g", "http://a/g");

    base.pass("../../../g", "http://a/g");
    base.pass("../../../../g", "http://a/g");

    base.pass("/./g", "http://a/g");
    base.pass("/../g", "http://a/g");
    base.pass("g.", "http://a/b/c/g.");
    base.pass(".g", "http://a/b/c/.g");
    base.pass("g..", "http://a/b/c/g..");
    base.pass("..g", "http://a/b/c/..g");

    base.pass("./../g", "http://a/b/g");
    base.pass("./g/.", "http://a/b/c/g/");
    base.pass("g/./h", "http://a/b/c/g/h");
    base.pass("g/../h", "http://a/b/c/h");
    base.pass("g;x=1/./y", "http://a/b/c/g;x=1/y");
    base.pass("g;x=1/../y", "http://a/b/c/y");

    base.pass("g?y/./x", "http://a/b/c/g?y/./x");
    base.pass("g?y/../x", "http://a/b/c/g?y/../x");
    base.pass("g#s/./x", "http://a/b/c/g#s/./x");
    base.pass("g#s/../x", "http://a/b/c/g#s/../x");

    // Strict parsers keep the scheme of the reference.
    base.pass("http:g", "http:g");
}

#[test]
fn resolve_authority() {
    let base = Uri::parse("http://user@a:8080/b/c").unwrap();

    base.pass("d", "http://user@a:8080/b/d");
    base.pass("//x/./y/../z", "http://x/z");
    base.pass("//x", "http://x");
}

#[test]
fn resolve_against_empty_base_path() {
    let base = Uri::parse("http://a").unwrap();
    base.pass("g", "http://a/g");
    base.pass("?y", "http://a/?y");
}

#[test]
fn resolve_absolute_is_noop() {
    let base = Uri::parse("http://a/b").unwrap();
    let mut uri = Uri::parse("ftp://x/./y").unwrap();
    uri.resolve(&base).unwrap();
    assert_eq!(uri.path(), Some("/./y"));
}

#[test]
fn resolve_rejected_by_policy() {
    // The base carries a scheme the HTTP policy does not accept.
    let base = Uri::parse("ftp://a/b/c").unwrap();
    let mut uri = Uri::parse_with(Policy::HTTP, "g").unwrap();
    let before = uri.clone();

    let e = uri.resolve(&base).unwrap_err();
    assert_eq!(e.kind(), FormatErrorKind::SchemeNotAccepted);
    assert_eq!(uri, before);
}

#[test]
fn resolve_without_authority() {
    let base = Uri::parse("foo:/a/b").unwrap();
    base.pass("..//g", "foo:/.//g");
    base.pass("/..//g", "foo:/.//g");
    base.pass("g", "foo:/a/g");

    let mut uri = Uri::parse("..//g").unwrap();
    uri.resolve(&base).unwrap();
    assert!(uri.is_valid());
    assert_eq!(uri.path(), Some("/.//g"));
}

#[test]
fn resolve_chained() {
    let base = Uri::parse("http://a/b/c/d").unwrap();
    let mut uri = Uri::parse("../X/./Y").unwrap();
    uri.resolve(&base).unwrap().normalize();
    assert_eq!(uri.to_string(), "http://a/b/X/Y");
}

#[test]
fn dot_segments() {
    // Examples from Section 5.2.4 of RFC 3986.
    assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
    assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");

    assert_eq!(remove_dot_segments("/a/b/c/."), "/a/b/c/");
    assert_eq!(remove_dot_segments("/a/b/c/.."), "/a/b/");
    assert_eq!(remove_dot_segments("/../../a"), "/a");
    assert_eq!(remove_dot_segments("../../a"), "a");
    assert_eq!(remove_dot_segments("a/b/../../.."), "/");
    assert_eq!(remove_dot_segments("/a;b/./c=d/../e"), "/a;b/e");
}
