#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::Ipv4Addr;
use std::str::FromStr;
use uri_value::{component::Host, Uri};

fuzz_target!(|data: &str| {
    if data.contains(['/', '?', '#', '@', ':', '%']) {
        return;
    }
    // Leading zeros are accepted here but not by the standard library.
    if let Ok(addr) = Ipv4Addr::from_str(data) {
        assert_eq!(parse_v4(data), Some(addr));
    }
});

fn parse_v4(s: &str) -> Option<Ipv4Addr> {
    let s = format!("//user@{s}:81/");
    match Uri::parse(&s).ok()?.host_kind()? {
        Host::Ipv4(addr) => Some(addr),
        _ => None,
    }
}
