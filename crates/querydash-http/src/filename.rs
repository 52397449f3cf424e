//! Download file names.

use regex::Regex;
use std::sync::OnceLock;

fn forbidden_chars() -> &'static Regex {
    static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
    FORBIDDEN.get_or_init(|| Regex::new(r#"[<>:"\\/|?*]+"#).expect("pattern is valid"))
}

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("pattern is valid"))
}

/// Turn a query or dashboard name into a safe file name.
///
/// Characters that are not allowed in file names become spaces, runs of
/// whitespace become `_`, and leading or trailing `_` are trimmed.
pub fn to_filename(name: &str) -> String {
    let cleaned = forbidden_chars().replace_all(name, " ");
    let underscored = whitespace().replace_all(&cleaned, "_");
    underscored.trim_matches('_').to_string()
}
