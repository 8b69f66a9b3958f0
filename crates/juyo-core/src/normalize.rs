//! Normalizer: per-area blank-line cleanup of decoded CSV text.
//!
//! Lines are split on `\r\n`, a lone `\r`, `\n` and the other Unicode line
//! boundaries (VT, FF, FS, GS, RS, NEL, LS, PS), then rejoined with `\n`. A
//! line is blank when it is empty or whitespace-only.

/// Cleaning rule applied after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningMode {
    /// Drop every blank line.
    StripAllBlankLines,
    /// Drop isolated blank lines; keep runs of two or more verbatim.
    CollapseSingleBlankLines,
    /// Leave the text as is.
    PassThrough,
}

pub fn normalize(text: &str, mode: CleaningMode) -> String {
    match mode {
        CleaningMode::StripAllBlankLines => strip_all_blank_lines(text),
        CleaningMode::CollapseSingleBlankLines => collapse_single_blank_lines(text),
        CleaningMode::PassThrough => text.to_string(),
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits on every line boundary; `\r\n` counts once. A trailing break does
/// not produce a final empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    if out.is_empty() {
        out.push('\n');
    }
    out
}

fn strip_all_blank_lines(text: &str) -> String {
    join_lines(split_lines(text).into_iter().filter(|l| !is_blank(l)))
}

fn collapse_single_blank_lines(text: &str) -> String {
    let lines = split_lines(text);
    let mut kept = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if !is_blank(lines[i]) {
            kept.push(lines[i]);
            i += 1;
            continue;
        }
        let run_end = lines[i..]
            .iter()
            .position(|l| !is_blank(l))
            .map_or(lines.len(), |off| i + off);
        if run_end - i > 1 {
            kept.extend_from_slice(&lines[i..run_end]);
        }
        i = run_end;
    }
    join_lines(kept)
}
