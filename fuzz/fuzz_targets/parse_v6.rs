#![no_main]
use libfuzzer_sys::fuzz_target;
use std::net::Ipv6Addr;
use std::str::FromStr;
use uri_value::{component::Host, Uri};

fuzz_target!(|data: &str| {
    let std_addr = Ipv6Addr::from_str(data).ok();
    if data.contains('.') {
        // Leading zeros in an embedded IPv4 address are accepted here only.
        if let Some(addr) = std_addr {
            assert_eq!(parse_v6(data), Some(addr));
        }
    } else {
        assert_eq!(parse_v6(data), std_addr);
    }
});

fn parse_v6(s: &str) -> Option<Ipv6Addr> {
    let s = format!("//[{s}]");
    match Uri::parse(&s).ok()?.host_kind()? {
        Host::Ipv6(addr) => Some(addr),
        _ => None,
    }
}
