//! Script identifiers and Unicode block classification.

use serde::{Deserialize, Serialize};

/// A writing system with its own Unicode block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    Telugu,
    Tamil,
    Kannada,
    Malayalam,
    Bengali,
    Gujarati,
    Latin,
}

/// Indic blocks first so `of_char` never has to disambiguate; the blocks
/// are disjoint, Latin is just ASCII letters.
const ALL: [Script; 8] = [
    Script::Devanagari,
    Script::Telugu,
    Script::Tamil,
    Script::Kannada,
    Script::Malayalam,
    Script::Bengali,
    Script::Gujarati,
    Script::Latin,
];

impl Script {
    /// Map a language code to its script. Every supported code maps to
    /// exactly one script; anything else (including "auto") has none.
    pub fn for_lang(code: &str) -> Option<Script> {
        match code {
            "hi" | "mr" => Some(Script::Devanagari),
            "te" => Some(Script::Telugu),
            "ta" => Some(Script::Tamil),
            "kn" => Some(Script::Kannada),
            "ml" => Some(Script::Malayalam),
            "bn" => Some(Script::Bengali),
            "gu" => Some(Script::Gujarati),
            "en" => Some(Script::Latin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Script::Devanagari => "devanagari",
            Script::Telugu => "telugu",
            Script::Tamil => "tamil",
            Script::Kannada => "kannada",
            Script::Malayalam => "malayalam",
            Script::Bengali => "bengali",
            Script::Gujarati => "gujarati",
            Script::Latin => "latin",
        }
    }

    /// A representative language code for the script, used when a caller
    /// resolved a script from text but needs a language-keyed API.
    pub fn primary_lang(self) -> &'static str {
        match self {
            Script::Devanagari => "hi",
            Script::Telugu => "te",
            Script::Tamil => "ta",
            Script::Kannada => "kn",
            Script::Malayalam => "ml",
            Script::Bengali => "bn",
            Script::Gujarati => "gu",
            Script::Latin => "en",
        }
    }

    /// Check the script's full Unicode block. Block-level checks include a
    /// few unassigned code points, which never occur in recognizer output.
    pub fn contains(self, c: char) -> bool {
        match self {
            Script::Devanagari => ('\u{0900}'..='\u{097F}').contains(&c),
            Script::Bengali => ('\u{0980}'..='\u{09FF}').contains(&c),
            Script::Gujarati => ('\u{0A80}'..='\u{0AFF}').contains(&c),
            Script::Tamil => ('\u{0B80}'..='\u{0BFF}').contains(&c),
            Script::Telugu => ('\u{0C00}'..='\u{0C7F}').contains(&c),
            Script::Kannada => ('\u{0C80}'..='\u{0CFF}').contains(&c),
            Script::Malayalam => ('\u{0D00}'..='\u{0D7F}').contains(&c),
            Script::Latin => c.is_ascii_alphabetic(),
        }
    }

    /// The script owning a single character, if any supported block does.
    pub fn of_char(c: char) -> Option<Script> {
        ALL.into_iter().find(|s| s.contains(c))
    }

    /// Detect the script of a text from its first classifiable character.
    /// Whitespace, digits and punctuation are skipped over.
    pub fn detect(text: &str) -> Option<Script> {
        text.chars().find_map(Script::of_char)
    }
}
