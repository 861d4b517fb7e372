//! Text normalization and word tokenization.
//!
//! `word_tokenize` produces the raw, Treebank-style tokenization of a text (punctuation and
//! clitics split into their own tokens). `clean` lowercases that tokenization and keeps only
//! the tokens made entirely of alphabetic characters.

use regex::Regex;
use std::sync::LazyLock;

/// Abbreviations whose trailing period stays attached to the word.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "vs", "mt", "gen", "col", "capt", "rev",
];

/// Punctuation peeled off the front of a chunk. A straight `'` is not among them: a leading
/// apostrophe stays on its word (`'Come`).
const OPENERS: &[char] = &['(', '[', '{', '<', '"', '`', '“', '‘', '«'];

/// Punctuation peeled off the back of a chunk.
const CLOSERS: &[char] = &[
    ')', ']', '}', '>', '"', '\'', '”', '’', '»', ',', ';', ':', '!', '?',
];

/// Symbols that always stand alone, wherever they appear inside a chunk.
const INNER_SEPARATORS: &[char] = &[';', '@', '#', '$', '%', '&', '!', '?'];

/// Multi-character punctuation split out wherever it appears inside a chunk.
const INNER_RUNS: &[&str] = &["...", "--"];

/// Words the Treebank convention splits in two at a fixed offset.
const SPLIT_WORDS: &[&str] = &["cannot", "gonna", "gotta", "wanna"];

// NOTE: expect() is acceptable here, the pattern is a compile-time constant.
static CLITIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(n['’]t|['’](?:s|m|d|ll|re|ve))$").expect("Invalid regex: clitic pattern")
});

/// Split raw text into word tokens, keeping punctuation, digits and case.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chunks = text.split_whitespace().peekable();
    while let Some(chunk) = chunks.next() {
        split_chunk(chunk, chunks.peek().is_none(), &mut tokens);
    }
    tokens
}

/// Lowercase the tokenization of `text` and keep only purely alphabetic tokens.
///
/// Lowercasing happens before the alphabetic check, so a token such as `Mr.` is dropped
/// entirely rather than normalized to `mr`.
pub fn clean(text: &str) -> Vec<String> {
    word_tokenize(text)
        .into_iter()
        .map(|token| token.to_lowercase())
        .filter(|token| is_alpha(token))
        .collect()
}

/// True when `token` is non-empty and every character is alphabetic.
pub fn is_alpha(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

fn split_chunk(chunk: &str, is_last: bool, out: &mut Vec<String>) {
    let mut core = chunk;

    while let Some(c) = core.chars().next() {
        if !OPENERS.contains(&c) {
            break;
        }
        out.push(if c == '"' { "``".to_string() } else { c.to_string() });
        core = &core[c.len_utf8()..];
    }

    // Collected back to front, emitted after the core.
    let mut trailing = Vec::new();
    loop {
        if core.len() > 3 && core.ends_with("...") {
            trailing.push("...".to_string());
            core = &core[..core.len() - 3];
            continue;
        }
        let Some(c) = core.chars().next_back() else {
            break;
        };
        if CLOSERS.contains(&c) {
            trailing.push(if c == '"' { "''".to_string() } else { c.to_string() });
            core = &core[..core.len() - c.len_utf8()];
        } else if c == '.' && !keeps_period(core, is_last) {
            trailing.push(".".to_string());
            core = &core[..core.len() - 1];
        } else {
            break;
        }
    }

    if !core.is_empty() {
        split_inner(core, out);
    }
    out.extend(trailing.into_iter().rev());
}

/// Whether a chunk ending in `.` is an abbreviation or initialism that keeps its period.
///
/// A lone capital keeps it only when more text follows (`J. Smith`); at the end of the text
/// the period closes the sentence.
fn keeps_period(core: &str, is_last: bool) -> bool {
    let stem = &core[..core.len() - 1];
    if stem.is_empty() {
        return false;
    }
    if stem.contains('.') {
        return true;
    }
    let mut chars = stem.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase() && !is_last;
    }
    ABBREVIATIONS.contains(&stem.to_lowercase().as_str())
}

fn split_inner(core: &str, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut previous: Option<char> = None;
    let mut rest = core;

    while let Some(c) = rest.chars().next() {
        if let Some(run) = INNER_RUNS.iter().find(|run| rest.starts_with(**run)) {
            flush_word(&mut current, out);
            out.push(run.to_string());
            rest = &rest[run.len()..];
            previous = run.chars().next_back();
            continue;
        }

        rest = &rest[c.len_utf8()..];
        let between_digits = previous.is_some_and(|p| p.is_ascii_digit())
            && rest.chars().next().is_some_and(|n| n.is_ascii_digit());
        let separates =
            INNER_SEPARATORS.contains(&c) || ((c == ',' || c == ':') && !between_digits);

        if separates {
            flush_word(&mut current, out);
            out.push(c.to_string());
        } else {
            current.push(c);
        }
        previous = Some(c);
    }

    flush_word(&mut current, out);
}

fn flush_word(current: &mut String, out: &mut Vec<String>) {
    if !current.is_empty() {
        split_clitics(current, out);
        current.clear();
    }
}

fn split_clitics(word: &str, out: &mut Vec<String>) {
    if SPLIT_WORDS.contains(&word.to_lowercase().as_str()) {
        out.push(word[..3].to_string());
        out.push(word[3..].to_string());
        return;
    }

    match CLITIC_PATTERN.captures(word) {
        Some(caps) => {
            out.push(caps[1].to_string());
            out.push(caps[2].to_string());
        }
        None => out.push(word.to_string()),
    }
}
