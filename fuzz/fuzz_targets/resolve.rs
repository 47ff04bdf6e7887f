#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_value::Uri;

fuzz_target!(|data: (&str, &str)| {
    let (Ok(base), Ok(r)) = (Uri::parse(data.0), Uri::parse(data.1)) else {
        return;
    };

    let u1 = base.resolve(&r);
    assert_eq!(u1.fragment(), r.fragment());
    if base.scheme().is_some() {
        assert!(u1.scheme().is_some());
    }

    let u2 = Uri::parse(&u1.to_string()).unwrap();
    assert_eq!(u1.scheme(), u2.scheme());
    assert_eq!(u1.port(), u2.port());
    assert_eq!(u1.query(), u2.query());
    assert_eq!(u1.fragment(), u2.fragment());
});
