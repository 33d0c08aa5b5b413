//! Turns an indented outline into a flat, ordered list of [`Entry`] values.
//!
//! Each physical line is handled on its own:
//!
//! 1. everything from an unescaped `#` to the end of the line is dropped,
//! 2. the leading run of whitespace and tree glyphs is counted as the line's depth,
//! 3. the rest is expanded into one or more entries.
//!
//! Nothing here fails. Lines that make no sense produce no entries.

use crate::entry::Entry;

const COMMENT_MARKER: char = '#';
const ESCAPE: char = '\\';
const EXTENSION_GROUP_PREFIX: &str = "*.";

/// Parses the whole outline, preserving source order.
pub fn parse(text: &str) -> Vec<Entry> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut entries = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }

        let (depth, content) = measure_depth(&line);
        if content.is_empty() {
            log::trace!("line {}: only decoration, skipping", index + 1);
            continue;
        }

        let expanded = expand(content, depth);
        if expanded.is_empty() {
            log::debug!("line {}: '{}' yielded no entries", index + 1, content);
        }

        entries.extend(expanded);
    }

    entries
}

/// Removes a trailing comment and trailing whitespace. `\#` survives as a literal `#`.
pub fn strip_comment(line: &str) -> String {
    let mut kept = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if chars.peek() == Some(&COMMENT_MARKER) => {
                kept.push(COMMENT_MARKER);
                chars.next();
            }
            COMMENT_MARKER => break,
            other => kept.push(other),
        }
    }

    kept.truncate(kept.trim_end().len());

    kept
}

/// Returns the number of prefix characters made of whitespace or tree glyphs, and the trimmed
/// remainder of the line.
///
/// Depth is a raw character count. Spaces, tabs and glyphs all weigh the same, so an outline
/// that mixes them inconsistently can nest in surprising ways.
pub fn measure_depth(line: &str) -> (usize, &str) {
    lazy_static::lazy_static! {
        // whitespace and box drawing glyphs on their own; ascii `+`, `` ` `` and `-` only as
        // part of a `|--`, `` `-- ``, `+--` or `-- ` connector, so `+page.svelte` keeps its `+`
        static ref INDENT_PREFIX: regex::Regex = regex::Regex::new(
            r"^(?:[\s│├└─┬┼┃┣┗━╰╭┊┆]|\|(?:--+)?|[`+]--+|--+\s)*"
        )
        .expect("a valid regex pattern");
    }

    let prefix_len = INDENT_PREFIX.find(line).map(|m| m.end()).unwrap_or(0);

    let depth = line[..prefix_len].chars().count();

    (depth, line[prefix_len..].trim())
}

/// Expands the content of a single line into entries sharing `depth`.
pub fn expand(content: &str, depth: usize) -> Vec<Entry> {
    let tokens: Vec<&str> = content.split_whitespace().collect();

    let Some((first, rest)) = tokens.split_first() else {
        return Vec::new();
    };

    if let Some(stripped) = first.strip_prefix(EXTENSION_GROUP_PREFIX) {
        return expand_extension_group(stripped, rest, depth);
    }

    tokens
        .iter()
        .filter_map(|token| token_to_entry(token, depth))
        .collect()
}

/// `*.py main utils` -> `main.py`, `utils.py`.
fn expand_extension_group(extension: &str, stems: &[&str], depth: usize) -> Vec<Entry> {
    // `*. a b` is malformed, not `a.` and `b.`
    if extension.is_empty() {
        return Vec::new();
    }

    stems
        .iter()
        .map(|stem| stem.trim_end_matches('/'))
        .filter(|stem| !stem.is_empty())
        .map(|stem| Entry::file(format!("{}.{}", stem, extension), depth))
        .collect()
}

fn token_to_entry(token: &str, depth: usize) -> Option<Entry> {
    match token.strip_suffix('/') {
        Some(stripped) => {
            let name = stripped.trim_end_matches('/');

            (!name.is_empty()).then(|| Entry::directory(name, depth))
        }
        None => Some(Entry::file(token, depth)),
    }
}
