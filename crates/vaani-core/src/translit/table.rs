//! Character tables for the built-in fallback mappings.
//!
//! Comparisons are on exact precomposed code points; the mapper performs no
//! normalization, so every code point the source block uses in practice
//! must appear here. Matra rows are `(sign, composed output, independent
//! vowel output)` — the third field is the substitution emitted when a
//! dependent sign shows up with no preceding consonant.

// --- Telugu → Latin romanization ---

pub(super) const TELUGU_VOWELS: &[(char, &str)] = &[
    ('అ', "a"),
    ('ఆ', "aa"),
    ('ఇ', "i"),
    ('ఈ', "ii"),
    ('ఉ', "u"),
    ('ఊ', "uu"),
    ('ఋ', "r\u{325}"),
    ('ౠ', "r\u{325}\u{304}"),
    ('ఎ', "e"),
    ('ఏ', "ee"),
    ('ఐ', "ai"),
    ('ఒ', "o"),
    ('ఓ', "oo"),
    ('ఔ', "au"),
];

pub(super) const TELUGU_MATRAS: &[(char, &str, &str)] = &[
    ('ా', "aa", "aa"),
    ('ి', "i", "i"),
    ('ీ', "ii", "ii"),
    ('ు', "u", "u"),
    ('ూ', "uu", "uu"),
    ('ృ', "ru", "r\u{325}"),
    ('ె', "e", "e"),
    ('ే', "ee", "ee"),
    ('ై', "ai", "ai"),
    ('ొ', "o", "o"),
    ('ో', "oo", "oo"),
    ('ౌ', "au", "au"),
];

/// Base forms carry the inherent vowel; the mapper strips the trailing `a`
/// before a virama or vowel sign applies.
pub(super) const TELUGU_CONSONANTS: &[(char, &str)] = &[
    ('క', "ka"),
    ('ఖ', "kha"),
    ('గ', "ga"),
    ('ఘ', "gha"),
    ('ఙ', "nga"),
    ('చ', "cha"),
    ('ఛ', "chha"),
    ('జ', "ja"),
    ('ఝ', "jha"),
    ('ఞ', "nya"),
    ('ట', "ta"),
    ('ఠ', "tha"),
    ('డ', "da"),
    ('ఢ', "dha"),
    ('ణ', "na"),
    ('త', "ta"),
    ('థ', "tha"),
    ('ద', "da"),
    ('ధ', "dha"),
    ('న', "na"),
    ('ప', "pa"),
    ('ఫ', "pha"),
    ('బ', "ba"),
    ('భ', "bha"),
    ('మ', "ma"),
    ('య', "ya"),
    ('ర', "ra"),
    ('ల', "la"),
    ('వ', "va"),
    ('శ', "sha"),
    ('ష', "sha"),
    ('స', "sa"),
    ('హ', "ha"),
    ('ళ', "la"),
    ('ఱ', "ra"),
];

/// Anusvara, visarga, candrabindu.
pub(super) const TELUGU_SPECIALS: &[(char, &str)] = &[('ం', "m"), ('ః', "h"), ('ఁ', "n")];

pub(super) const TELUGU_VIRAMA: char = '్';

/// The one conjunct cluster with special-case handling. Other consonant
/// clusters fall through to per-character mapping.
pub(super) const TELUGU_CONJUNCTS: &[(&[char], &str)] = &[(&['క', '్', 'ష'], "ksh")];

// --- Devanagari → Telugu ---

pub(super) const DEVANAGARI_VOWELS: &[(char, &str)] = &[
    ('अ', "అ"),
    ('आ', "ఆ"),
    ('इ', "ఇ"),
    ('ई', "ఈ"),
    ('उ', "ఉ"),
    ('ऊ', "ఊ"),
    ('ऋ', "ఋ"),
    ('ॠ', "ౠ"),
    ('ए', "ఎ"),
    ('ऐ', "ఐ"),
    ('ओ', "ఒ"),
    ('औ', "ఔ"),
];

pub(super) const DEVANAGARI_MATRAS: &[(char, &str, &str)] = &[
    ('ा', "ా", "ఆ"),
    ('ि', "ి", "ఇ"),
    ('ी', "ీ", "ఈ"),
    ('ु', "ు", "ఉ"),
    ('ू', "ూ", "ఊ"),
    ('ृ', "ృ", "ఋ"),
    ('ॄ', "ౄ", "ౠ"),
    ('े', "ే", "ఏ"),
    ('ै', "ై", "ఐ"),
    ('ो', "ో", "ఓ"),
    ('ौ', "ౌ", "ఔ"),
];

/// Bare target glyphs; Telugu consonants keep their own inherent vowel, so
/// nothing is stripped in this direction.
pub(super) const DEVANAGARI_CONSONANTS: &[(char, &str)] = &[
    ('क', "క"),
    ('ख', "ఖ"),
    ('ग', "గ"),
    ('घ', "ఘ"),
    ('ङ', "ఙ"),
    ('च', "చ"),
    ('छ', "ఛ"),
    ('ज', "జ"),
    ('झ', "ఝ"),
    ('ञ', "ఞ"),
    ('ट', "ట"),
    ('ठ', "ఠ"),
    ('ड', "డ"),
    ('ढ', "ఢ"),
    ('ण', "ణ"),
    ('त', "త"),
    ('थ', "థ"),
    ('द', "ద"),
    ('ध', "ధ"),
    ('न', "న"),
    ('प', "ప"),
    ('फ', "ఫ"),
    ('ब', "బ"),
    ('भ', "భ"),
    ('म', "మ"),
    ('य', "య"),
    ('र', "ర"),
    ('ल', "ల"),
    ('व', "వ"),
    ('श', "శ"),
    ('ष', "ష"),
    ('स', "స"),
    ('ह', "హ"),
];

pub(super) const DEVANAGARI_SPECIALS: &[(char, &str)] =
    &[('ं', "ం"), ('ः', "ః"), ('ँ', "ఁ")];

pub(super) const DEVANAGARI_VIRAMA: char = '्';

/// Appended after a consonant when the source virama suppresses the
/// inherent vowel.
pub(super) const TELUGU_VIRAMA_OUT: &str = "్";
