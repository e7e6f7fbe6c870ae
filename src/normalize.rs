//! Cleanup applied to generated text before it is returned to the caller.
//!
//! Both endpoints share [`normalize_response`]. Generated recipes additionally
//! go through [`drop_blank_lines`]; modified recipes do not.

/// Put markdown headers and numbered-list starts on their own lines and
/// squeeze doubled newlines.
///
/// The `" 1."` match is a plain substring replacement, so it also fires inside
/// prose such as "see page 1.".
pub fn normalize_response(text: &str) -> String {
    text.trim()
        .replace("##", "\n##")
        .replace(" 1.", "\n1.")
        .replace("\n\n", "\n")
        .trim()
        .to_string()
}

/// Line separators recognised when splitting generated text into lines.
///
/// Besides `\n` this covers lone carriage returns, vertical tab, form feed,
/// the ASCII file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Trim every line and drop the ones left empty.
pub fn drop_blank_lines(text: &str) -> String {
    // A "\r\n" pair yields an extra empty piece, which the filter removes
    text.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full cleanup for a freshly generated recipe.
pub fn normalize_recipe(text: &str) -> String {
    drop_blank_lines(&normalize_response(text))
}
