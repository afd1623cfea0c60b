//! Table-driven script mapper: a single left-to-right scan with one code
//! point of lookahead.
//!
//! The mapper never fails. Unmapped code points (whitespace, punctuation,
//! digits, anything outside the tables) pass through unchanged.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::table;

/// A dependent vowel sign: the composed output appended to a stripped
/// consonant, and the independent-vowel output substituted when the sign
/// appears with no preceding consonant.
#[derive(Clone, Copy)]
struct Matra {
    sign: &'static str,
    standalone: &'static str,
}

/// An immutable mapping from one script to a target representation.
///
/// Built once behind `OnceLock` and shared; there are no writers after
/// construction.
pub struct ScriptMapping {
    vowels: HashMap<char, &'static str>,
    matras: HashMap<char, Matra>,
    consonants: HashMap<char, &'static str>,
    specials: HashMap<char, &'static str>,
    virama: char,
    /// Emitted after a vowel-suppressed consonant: the target's own virama
    /// glyph, or empty for romanization.
    virama_out: &'static str,
    /// Inherent vowel letter stripped from a base form before a matra or
    /// virama applies. None when base forms are bare target glyphs.
    inherent: Option<char>,
    conjuncts: &'static [(&'static [char], &'static str)],
}

impl ScriptMapping {
    /// Telugu → ITRANS-style Latin romanization.
    pub fn telugu_to_latin() -> &'static ScriptMapping {
        static INSTANCE: OnceLock<ScriptMapping> = OnceLock::new();
        INSTANCE.get_or_init(|| ScriptMapping {
            vowels: table::TELUGU_VOWELS.iter().copied().collect(),
            matras: collect_matras(table::TELUGU_MATRAS),
            consonants: table::TELUGU_CONSONANTS.iter().copied().collect(),
            specials: table::TELUGU_SPECIALS.iter().copied().collect(),
            virama: table::TELUGU_VIRAMA,
            virama_out: "",
            inherent: Some('a'),
            conjuncts: table::TELUGU_CONJUNCTS,
        })
    }

    /// Devanagari rendered in the Telugu block, glyph for glyph.
    pub fn devanagari_to_telugu() -> &'static ScriptMapping {
        static INSTANCE: OnceLock<ScriptMapping> = OnceLock::new();
        INSTANCE.get_or_init(|| ScriptMapping {
            vowels: table::DEVANAGARI_VOWELS.iter().copied().collect(),
            matras: collect_matras(table::DEVANAGARI_MATRAS),
            consonants: table::DEVANAGARI_CONSONANTS.iter().copied().collect(),
            specials: table::DEVANAGARI_SPECIALS.iter().copied().collect(),
            virama: table::DEVANAGARI_VIRAMA,
            virama_out: table::TELUGU_VIRAMA_OUT,
            inherent: None,
            conjuncts: &[],
        })
    }

    pub fn transliterate(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let next = chars.get(i + 1).copied();

            if let Some(&v) = self.vowels.get(&ch) {
                out.push_str(v);
                i += 1;
                continue;
            }

            if let Some(&base) = self.consonants.get(&ch) {
                if let Some((cluster, mapped)) = self.conjunct_at(&chars, i) {
                    out.push_str(mapped);
                    i += cluster.len();
                    continue;
                }
                if next == Some(self.virama) {
                    out.push_str(self.strip_inherent(base));
                    out.push_str(self.virama_out);
                    i += 2;
                    continue;
                }
                if let Some(matra) = next.and_then(|n| self.matras.get(&n).copied()) {
                    out.push_str(self.strip_inherent(base));
                    out.push_str(matra.sign);
                    i += 2;
                    continue;
                }
                out.push_str(base);
                i += 1;
                continue;
            }

            if let Some(matra) = self.matras.get(&ch) {
                // Well-formed text never has a bare sign; approximate with
                // the corresponding independent vowel.
                out.push_str(matra.standalone);
                i += 1;
                continue;
            }

            if let Some(&s) = self.specials.get(&ch) {
                out.push_str(s);
                i += 1;
                continue;
            }

            out.push(ch);
            i += 1;
        }

        out
    }

    fn conjunct_at(&self, chars: &[char], i: usize) -> Option<(&'static [char], &'static str)> {
        self.conjuncts
            .iter()
            .copied()
            .find(|(cluster, _)| chars[i..].starts_with(cluster))
    }

    fn strip_inherent(&self, base: &'static str) -> &'static str {
        match self.inherent {
            Some(v) => base.strip_suffix(v).unwrap_or(base),
            None => base,
        }
    }
}

fn collect_matras(rows: &'static [(char, &'static str, &'static str)]) -> HashMap<char, Matra> {
    rows.iter()
        .map(|&(ch, sign, standalone)| (ch, Matra { sign, standalone }))
        .collect()
}
