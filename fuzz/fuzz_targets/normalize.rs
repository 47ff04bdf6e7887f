#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_value::Uri;

fuzz_target!(|data: &str| {
    let Ok(mut u) = Uri::parse(data) else {
        return;
    };

    u.normalize_path();
    assert!(u
        .path()
        .segments()
        .all(|seg| seg != b"." && seg != b".."));

    // `normalize_path` is idempotent.
    let once = u.clone();
    u.normalize_path();
    assert_eq!(u, once);
});
