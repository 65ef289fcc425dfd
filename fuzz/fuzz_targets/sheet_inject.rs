#![no_main]

use gadjet_core::prelude::StyleSheet;

libfuzzer_sys::fuzz_target!(|data: String| {
    let sheet = StyleSheet::new();
    sheet.inject(&data);
    let blocks = sheet.len();
    let rules = sheet.rule_count();

    // Injecting the same text again never adds anything.
    sheet.inject(&data);
    assert_eq!(sheet.len(), blocks);
    assert_eq!(sheet.rule_count(), rules);

    let _ = sheet.to_css();
});
