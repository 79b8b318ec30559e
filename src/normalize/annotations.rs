const OPENERS: [char; 3] = ['[', '{', '<'];

/// Remove every `[...]`, `{...}` and `<...>` span.
///
/// Each opener pairs with the first matching closer on the same line; an
/// opener without one is kept as plain text.
pub fn strip_annotations(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(OPENERS) {
        stripped.push_str(&rest[..pos]);

        let opener = rest[pos..].chars().next().unwrap_or('[');
        let after = &rest[pos + opener.len_utf8()..];
        let closer = closing_delimiter(opener);

        match span_end(after, closer) {
            Some(end) => rest = &after[end + closer.len_utf8()..],
            None => {
                stripped.push(opener);
                rest = after;
            }
        }
    }

    stripped.push_str(rest);
    stripped
}

fn closing_delimiter(opener: char) -> char {
    match opener {
        '{' => '}',
        '<' => '>',
        _ => ']',
    }
}

/// Byte offset of `closer` in `text`, unless a line break comes first
fn span_end(text: &str, closer: char) -> Option<usize> {
    for (idx, ch) in text.char_indices() {
        if ch == closer {
            return Some(idx);
        }
        if matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
            return None;
        }
    }
    None
}
