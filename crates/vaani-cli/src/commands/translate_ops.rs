use serde::Serialize;

use vaani_core::settings::settings;
use vaani_core::translate::{TranslationChain, TranslationRequest};

#[derive(Serialize)]
struct TranslateRecord<'a> {
    text: &'a str,
    source: &'a str,
    target: &'a str,
    translation: &'a str,
}

pub fn translate_cmd(text: &str, source: Option<&str>, target: Option<&str>, json: bool) {
    let s = settings();
    let source = source.unwrap_or(&s.languages.default_source);
    let target = target.unwrap_or(&s.languages.default_target);

    let chain = TranslationChain::from_settings();
    let req = TranslationRequest {
        text: text.to_string(),
        source_lang: source.to_string(),
        target_lang: target.to_string(),
    };
    let translation = chain.translate(&req);

    if json {
        let record = TranslateRecord {
            text,
            source,
            target,
            translation: &translation,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&record).expect("JSON serialization failed")
        );
    } else {
        println!("{translation}");
    }
}
