use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", vaani_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        vaani_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: translation.timeout_secs={}, {} provider(s), default {} -> {}",
        s.translation.timeout_secs,
        s.translation.providers.len(),
        s.languages.default_source,
        s.languages.default_target
    );
}
