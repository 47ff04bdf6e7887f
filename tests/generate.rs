use uri_value::Uri;

#[track_caller]
fn round_trip(s: &str, expected: &str) {
    let u = Uri::parse(s).unwrap();
    let generated = u.generate_string();
    assert_eq!(generated, expected);
    assert_eq!(Uri::parse(&generated).unwrap(), u);
}

#[test]
fn generate() {
    round_trip("http://www.example.com/foo/bar", "http://www.example.com/foo/bar");
    round_trip("http://www.example.com", "http://www.example.com/");
    round_trip("HTTP://WWW.Example.COM:8080/", "http://www.example.com:8080/");
    round_trip("http://a:0/", "http://a:0/");
    round_trip("http://a:/", "http://a/");
    round_trip("//u:p@h/", "//u:p@h/");
    round_trip("mailto:John.Doe@example.com", "mailto:John.Doe@example.com");
    round_trip("urn:hello,%20w%6Frld", "urn:hello,%20world");
    round_trip("foo/bar", "foo/bar");
    round_trip("/", "/");
    round_trip("", "");
    round_trip("?", "?");
    round_trip("#", "#");
    round_trip("?q#f", "?q#f");
    round_trip("/a/b/", "/a/b/");
    round_trip("/%7Euser/%41%62c", "/~user/Abc");
    round_trip("/a%2fb", "/a%2Fb");
    round_trip("/%bc", "/%BC");
    round_trip("/?a+b=c%2Bd&e", "/?a+b=c+d&e");
    round_trip("/#x?y/z", "/#x?y/z");
}

#[test]
fn generate_ip_literals() {
    round_trip("http://[2001:DB8::7]/", "http://[2001:db8::7]/");
    round_trip("http://[::ffff:192.0.2.33]:80", "http://[::ffff:192.0.2.33]:80/");
    round_trip("http://192.0.2.16/", "http://192.0.2.16/");

    // IPvFuture literals are generated as registered names.
    let u = Uri::parse("http://[v1.x]/").unwrap();
    assert_eq!(u.to_string(), "http://v1.x/");
    let u = Uri::parse("http://[v1.a:b]/").unwrap();
    assert_eq!(u.to_string(), "http://v1.a%3Ab/");
}

#[test]
fn generate_without_authority() {
    // A path starting with "//" is not mistaken for an authority.
    let mut u = Uri::new();
    u.set_scheme("foo");
    u.set_path(["", "", "bar"]);
    assert_eq!(u.to_string(), "foo:/.//bar");

    let mut parsed = Uri::parse(&u.to_string()).unwrap();
    assert!(!parsed.has_authority());
    parsed.normalize_path();
    u.normalize_path();
    assert_eq!(parsed, u);

    // A first segment with a colon is not mistaken for a scheme.
    let mut u = Uri::new();
    u.set_path(["a:b", "c"]);
    assert_eq!(u.to_string(), "./a:b/c");
    let mut parsed = Uri::parse(&u.to_string()).unwrap();
    assert_eq!(parsed.scheme(), None);
    parsed.normalize_path();
    assert_eq!(parsed, u);

    // With a scheme, the colon is harmless.
    u.set_scheme("x");
    assert_eq!(u.to_string(), "x:a:b/c");
}

#[test]
fn generate_from_setters() {
    let mut u = Uri::new();
    u.set_host("example.com");
    assert_eq!(u.to_string(), "//example.com");

    u.set_port(0);
    assert_eq!(u.to_string(), "//example.com:0");

    u.clear_host();
    assert_eq!(u.to_string(), "//:0");

    u.set_host("::1");
    u.set_path([""]);
    assert_eq!(u.to_string(), "//[::1]:0/");

    u.clear_port();
    u.set_user_info("me");
    assert_eq!(u.to_string(), "//me@[::1]/");
}

#[test]
fn debug() {
    let u = Uri::parse("http://u@h:1/a%bc?q#f").unwrap();
    assert_eq!(
        format!("{u:?}"),
        r#"Uri { scheme: Some("http"), user_info: b"u", host: b"h", port: Some(1), path: [b"", b"a\xbc"], query: Some(b"q"), fragment: Some(b"f") }"#
    );
}
