#![no_main]
use libfuzzer_sys::fuzz_target;
use jamilek::{Options, parse_reader, parse_str};

// Valid UTF-8 must decode identically whether it arrives as a string or as bytes.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let from_str = parse_str(s);
        let from_bytes = parse_reader(data, &Options::default());
        match (from_str, from_bytes) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            (a, b) => panic!("sources disagree: {a:?} vs {b:?}"),
        }
    }
});
