//! Property-based invariants of the mapper and dispatcher.

use proptest::prelude::*;

use crate::translit::{cross_script_transliterate, romanize};

proptest! {
    /// Pure passthrough text (digits, whitespace, ASCII punctuation) comes
    /// back unchanged from both built-in mappings.
    #[test]
    fn passthrough_text_is_unchanged(text in "[0-9 .,;:!?'\\-]{0,48}") {
        prop_assert_eq!(romanize(&text, "te"), text.clone());
        prop_assert_eq!(cross_script_transliterate(&text, "te", "hi"), text);
    }

    /// Both mappings emit only characters outside their own source tables,
    /// so applying them twice changes nothing after the first pass.
    #[test]
    fn mapping_is_idempotent(text in "\\PC{0,64}") {
        let once = romanize(&text, "te");
        prop_assert_eq!(romanize(&once, "te"), once.clone());

        let rendered = cross_script_transliterate(&text, "te", "hi");
        prop_assert_eq!(
            cross_script_transliterate(&rendered, "te", "hi"),
            rendered
        );
    }

    /// No input ever panics or errors out of the public boundary.
    #[test]
    fn never_panics(text in "\\PC{0,64}", lang in "[a-z]{0,3}") {
        let _ = romanize(&text, &lang);
        let _ = cross_script_transliterate(&text, &lang, "hi");
        let _ = cross_script_transliterate(&text, "te", &lang);
    }
}
