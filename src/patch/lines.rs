//! Line-level rewriting over raw bytes.
//!
//! Template files are not guaranteed to be UTF-8, so everything after the
//! replaced line is passed through byte for byte.

/// Line terminator used when the replaced line had none.
pub const DEFAULT_LINE_ENDING: &[u8] = b"\n";

/// Splits `text` into lines that keep their terminators.
///
/// Joining the result gives back `text` exactly. An empty buffer has no
/// lines; a trailing line without `\n` is still a line.
pub fn split_lines(text: &[u8]) -> Vec<&[u8]> {
    text.split_inclusive(|b| *b == b'\n').collect()
}

/// Terminator of `line`: `\r\n`, `\n`, or [`DEFAULT_LINE_ENDING`] if none.
pub fn line_ending(line: &[u8]) -> &'static [u8] {
    if line.ends_with(b"\r\n") {
        b"\r\n"
    } else {
        DEFAULT_LINE_ENDING
    }
}

/// Replaces line 0 of `lines` with `replacement` and joins everything back.
///
/// Each replacement line is terminated with the ending of the line it
/// replaces. Lines from index 1 on are copied untouched. Returns `None` if
/// there is no first line to replace.
pub fn replace_first_line(lines: &[&[u8]], replacement: &[&str]) -> Option<Vec<u8>> {
    let (first, rest) = lines.split_first()?;
    let ending = line_ending(first);

    let mut out = Vec::with_capacity(lines.iter().map(|l| l.len()).sum::<usize>() + 64);
    for line in replacement {
        out.extend_from_slice(line.as_bytes());
        out.extend_from_slice(ending);
    }
    for line in rest {
        out.extend_from_slice(line);
    }
    Some(out)
}
