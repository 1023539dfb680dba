#![no_main]
use libfuzzer_sys::fuzz_target;
use jamilek::{Options, parse_reader};

fuzz_target!(|data: &[u8]| {
    let _ = parse_reader(data, &Options::default());
});
