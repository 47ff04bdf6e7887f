#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_value::pct_enc::{decode, encode, table::*};

fuzz_target!(|data: &[u8]| {
    for table in [PCHAR, QUERY, USERINFO, REG_NAME] {
        let s = encode(data, table);
        assert!(s.bytes().all(|x| x == b'%' || table.allows(x)));
        assert_eq!(data, &*decode(&s, table).unwrap());
    }
});
