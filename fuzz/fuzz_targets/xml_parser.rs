#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Rejected input is fine; a panic is a bug
    if let Ok(doc) = rdxml::from_bytes(data) {
        // Anything accepted must be written back to an equal tree
        let written = doc.to_xml();
        assert_eq!(rdxml::from_str(&written), Ok(doc), "written as {written:?}");
    }
});
