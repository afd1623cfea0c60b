use std::fs;
use std::io::{BufWriter, Write};
use std::process;

use serde::Serialize;

use vaani_core::script::Script;
use vaani_core::translit::{cross_script_transliterate, romanize};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Resolve "auto" to the script of the text itself.
fn resolve_lang(text: &str, lang: &str) -> Option<String> {
    if lang == "auto" {
        Script::detect(text).map(|s| s.primary_lang().to_string())
    } else {
        Some(lang.to_string())
    }
}

#[derive(Serialize)]
struct RomanizeRecord<'a> {
    text: &'a str,
    lang: &'a str,
    latin: &'a str,
}

pub fn romanize_cmd(text: &str, lang: &str, json: bool) {
    let Some(lang) = resolve_lang(text, lang) else {
        eprintln!("Error: could not detect a supported script in the input");
        process::exit(1);
    };
    let latin = romanize(text, &lang);
    if json {
        let record = RomanizeRecord {
            text,
            lang: &lang,
            latin: &latin,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&record).expect("JSON serialization failed")
        );
    } else {
        if latin.is_empty() {
            eprintln!("(no romanization for '{lang}'; callers display the original)");
        }
        println!("{latin}");
    }
}

#[derive(Serialize)]
struct RenderRecord<'a> {
    text: &'a str,
    text_lang: &'a str,
    reader_lang: &'a str,
    rendered: &'a str,
}

pub fn render_cmd(text: &str, text_lang: &str, reader_lang: &str, json: bool) {
    let rendered = cross_script_transliterate(text, reader_lang, text_lang);
    if json {
        let record = RenderRecord {
            text,
            text_lang,
            reader_lang,
            rendered: &rendered,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&record).expect("JSON serialization failed")
        );
    } else {
        if rendered.is_empty() {
            eprintln!("(unsupported pair {text_lang} -> {reader_lang}; callers display the original)");
        }
        println!("{rendered}");
    }
}

fn read_lines(input_file: &str) -> Vec<String> {
    let content = die!(
        fs::read_to_string(input_file),
        "Failed to read input file: {}"
    );
    content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

/// Romanize a file of lines (one text per line) to JSONL records.
pub fn batch_cmd(input_file: &str, output_file: &str, lang: &str) {
    let lines = read_lines(input_file);

    let file = die!(
        fs::File::create(output_file),
        "Failed to create output file: {}"
    );
    let mut writer = BufWriter::new(file);

    let mut skipped = 0usize;
    for line in &lines {
        let Some(line_lang) = resolve_lang(line, lang) else {
            skipped += 1;
            continue;
        };
        let latin = romanize(line, &line_lang);
        let record = RomanizeRecord {
            text: line,
            lang: &line_lang,
            latin: &latin,
        };
        let json = serde_json::to_string(&record).expect("JSON serialization failed");
        die!(writeln!(writer, "{json}"), "Failed to write: {}");
    }

    eprintln!(
        "Batch written: {} lines -> {} ({} skipped)",
        lines.len() - skipped,
        output_file,
        skipped
    );
}
