//! Table-level behavior of the two built-in mappings.

use crate::translit::{cross_script_transliterate, romanize};

const SUPPORTED_LANGS: &[&str] = &["hi", "mr", "te", "ta", "kn", "ml", "bn", "gu", "en"];

#[test]
fn test_empty_text_is_empty_for_every_lang() {
    for lang in SUPPORTED_LANGS {
        assert_eq!(romanize("", lang), "");
    }
    assert_eq!(cross_script_transliterate("", "te", "hi"), "");
}

#[test]
fn test_missing_params_are_empty() {
    assert_eq!(romanize("నమస్తే", ""), "");
    assert_eq!(cross_script_transliterate("नमस्ते", "", "hi"), "");
    assert_eq!(cross_script_transliterate("नमस्ते", "te", ""), "");
}

#[test]
fn test_passthrough_text_unchanged() {
    let text = "12, 34 ... ok?!";
    assert_eq!(romanize(text, "te"), text);
    assert_eq!(cross_script_transliterate(text, "te", "hi"), text);
}

#[test]
fn test_bare_consonant_keeps_inherent_vowel() {
    assert_eq!(romanize("క", "te"), "ka");
}

#[test]
fn test_virama_strips_inherent_vowel() {
    assert_eq!(romanize("క్", "te"), "k");
}

#[test]
fn test_matra_replaces_inherent_vowel() {
    // "ki", not "kai" or "ka"+"i"
    assert_eq!(romanize("కి", "te"), "ki");
    assert_eq!(romanize("కా", "te"), "kaa");
}

#[test]
fn test_independent_vowel() {
    assert_eq!(romanize("అ", "te"), "a");
    assert_eq!(romanize("ఐ", "te"), "ai");
}

#[test]
fn test_standalone_matra_substitutes_independent_vowel() {
    assert_eq!(romanize("ి", "te"), "i");
    assert_eq!(romanize("ృ", "te"), "r\u{325}");
}

#[test]
fn test_special_marks() {
    assert_eq!(romanize("ం", "te"), "m");
    assert_eq!(romanize("ః", "te"), "h");
    assert_eq!(romanize("ఁ", "te"), "n");
}

#[test]
fn test_conjunct_cluster_consumes_all_code_points() {
    // క + ్ + ష is one unit, not "k" + "sha"
    assert_eq!(romanize("క్ష", "te"), "ksh");
    assert_eq!(romanize("క్షి", "te"), "kshi");
}

#[test]
fn test_consonant_vowel_sign_visarga_word() {
    // stripped consonant + sign output + visarga output
    assert_eq!(romanize("కిః", "te"), "kih");
}

#[test]
fn test_telugu_words() {
    assert_eq!(romanize("తెలుగు", "te"), "telugu");
    assert_eq!(romanize("నమస్కారం", "te"), "namaskaaram");
}

#[test]
fn test_unsupported_source_is_empty() {
    // Only Telugu has a built-in romanizer
    assert_eq!(romanize("नमस्ते", "hi"), "");
    assert_eq!(romanize("வணக்கம்", "ta"), "");
}

#[test]
fn test_unsupported_pair_is_empty() {
    // The only built-in pair renders Devanagari for a Telugu reader
    assert_eq!(cross_script_transliterate("నమస్తే", "hi", "te"), "");
    assert_eq!(cross_script_transliterate("text", "ta", "kn"), "");
    assert_eq!(cross_script_transliterate("text", "zz", "hi"), "");
}

#[test]
fn test_devanagari_to_telugu_consonant_forms() {
    assert_eq!(cross_script_transliterate("क", "te", "hi"), "క");
    assert_eq!(cross_script_transliterate("क्", "te", "hi"), "క్");
    assert_eq!(cross_script_transliterate("कि", "te", "hi"), "కి");
}

#[test]
fn test_devanagari_to_telugu_vowels_and_marks() {
    assert_eq!(cross_script_transliterate("अ", "te", "hi"), "అ");
    assert_eq!(cross_script_transliterate("औ", "te", "hi"), "ఔ");
    assert_eq!(cross_script_transliterate("अं", "te", "hi"), "అం");
    assert_eq!(cross_script_transliterate("ः", "te", "hi"), "ః");
    // Standalone matra approximated by the independent vowel
    assert_eq!(cross_script_transliterate("ि", "te", "hi"), "ఇ");
}

#[test]
fn test_devanagari_to_telugu_word() {
    assert_eq!(cross_script_transliterate("नमस्ते", "te", "hi"), "నమస్తే");
}

#[test]
fn test_mixed_text_passes_unknown_through() {
    assert_eq!(romanize("తెలుగు ok!", "te"), "telugu ok!");
    assert_eq!(
        cross_script_transliterate("नमस्ते, 2024", "te", "hi"),
        "నమస్తే, 2024"
    );
}
