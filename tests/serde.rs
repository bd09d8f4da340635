#![cfg(feature = "serde")]

use generic_uri::Uri;

#[test]
fn serialize() {
    let u = Uri::parse("http://example.com/a b?q#f").unwrap();
    assert_eq!(
        serde_json::to_string(&u).unwrap(),
        r#""http://example.com/a%20b?q#f""#
    );

    let e = serde_json::to_string(&Uri::new()).unwrap_err();
    assert!(e.to_string().contains("none of path"), "{e}");
}

#[test]
fn deserialize() {
    let u: Uri = serde_json::from_str(r#""foo://user@host:8042/over/there?name=ferret""#).unwrap();
    assert_eq!(u.user_info(), Some("user"));
    assert_eq!(u.port(), Some(8042));
    assert_eq!(u.query(), Some("name=ferret"));

    let urls: Vec<Uri> = serde_json::from_str(r##"["/a", "b?c", "#d"]"##).unwrap();
    assert_eq!(urls.len(), 3);
    assert_eq!(urls[2].fragment(), Some("d"));

    let e = serde_json::from_str::<Uri>(r#""http://bad host/""#).unwrap_err();
    assert!(e.to_string().contains("invalid host"), "{e}");

    assert!(serde_json::from_str::<Uri>("42").is_err());
}
