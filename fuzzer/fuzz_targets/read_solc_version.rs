//!
//! The metadata trailer fuzzer.
//!

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|bytecode: &[u8]| {
    let first = solc_metadata::read_solc_version(bytecode);
    let second = solc_metadata::read_solc_version(bytecode);
    assert_eq!(first, second);

    // A version can only come from a payload that decodes on its own.
    if first.is_ok() {
        assert!(solc_metadata::decode_solc_metadata(bytecode).is_ok());
    }
});
