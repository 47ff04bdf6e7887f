#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_value::Uri;

fuzz_target!(|data: &str| {
    let Ok(u1) = Uri::parse(data) else {
        return;
    };

    // Generated strings always parse, and settle after one round.
    let u2 = Uri::parse(&u1.to_string()).unwrap();
    let u3 = Uri::parse(&u2.to_string()).unwrap();
    assert_eq!(u2, u3);

    assert_eq!(u1.scheme(), u2.scheme());
    assert_eq!(u1.user_info(), u2.user_info());
    assert_eq!(u1.port(), u2.port());
    assert_eq!(u1.query(), u2.query());
    assert_eq!(u1.fragment(), u2.fragment());
});
