#![no_main]
use libfuzzer_sys::fuzz_target;

fn run(data: &[u8]) {
    // Arbitrary bytes must produce a clean pass/fail, never a panic.
    let _ = jsonvet::validate(data);

    // Anything serde_json parses and re-serializes is grammatically valid
    // JSON, so the validator must accept the canonical form. (The raw input
    // itself is not cross-checked: the two disagree by design on lone
    // surrogate escapes and on the exact nesting limit.)
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let canonical = serde_json::to_vec(&value).expect("reserialization failed");
        assert!(
            jsonvet::validate(&canonical).is_ok(),
            "canonical JSON rejected: {canonical:?}"
        );
    }
}

fuzz_target!(|data: &[u8]| run(data));
