use crate::subtitle::trim_blank;

/// Punctuation that marks a line break as a real sentence boundary
const SENTENCE_TERMINALS: [char; 6] = ['.', '?', '!', '。', '？', '！'];

/// Join soft-wrapped lines.
///
/// A break survives only when the previous source line (trimmed) ends in
/// sentence-terminal punctuation; otherwise the lines are joined by a single
/// space. Every line is trimmed on the way through.
pub fn merge_soft_breaks(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut merged = trim_blank(lines[0]).to_string();

    for pair in lines.windows(2) {
        let previous = trim_blank(pair[0]);
        let current = trim_blank(pair[1]);

        if ends_sentence(previous) {
            merged.push('\n');
        } else {
            merged.push(' ');
        }
        merged.push_str(current);
    }

    merged
}

pub fn ends_sentence(line: &str) -> bool {
    line.ends_with(SENTENCE_TERMINALS)
}
