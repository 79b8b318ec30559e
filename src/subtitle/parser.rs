use tracing::debug;

use super::{trim_blank, CaptionRecord};

/// `d` stands for any ASCII digit, every other byte is literal
const TIMECODE_RANGE_TEMPLATE: &[u8] = b"dd:dd:dd,ddd --> dd:dd:dd,ddd";
const TIMECODE_WIDTH: usize = 12;
const END_TIME_OFFSET: usize = 17;

/// Parse SRT text into caption records.
///
/// Line endings are normalized to `\n` and the content is split on blank
/// lines. A block becomes a record only when it has at least three lines, an
/// integer index on the first line and a `HH:MM:SS,mmm --> HH:MM:SS,mmm`
/// range on the second. Anything else is skipped without error. Order and
/// indices are kept exactly as found.
pub fn parse(content: &str) -> Vec<CaptionRecord> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

    let mut records = Vec::new();
    for (position, block) in normalized.split("\n\n").enumerate() {
        match parse_block(block) {
            Some(record) => records.push(record),
            None if !trim_blank(block).is_empty() => {
                debug!("Skipping malformed SRT block #{}: {:?}", position + 1, trim_blank(block));
            }
            None => {}
        }
    }

    debug!("Parsed {} caption records", records.len());
    records
}

fn parse_block(block: &str) -> Option<CaptionRecord> {
    let lines: Vec<&str> = trim_blank(block).split('\n').collect();
    if lines.len() < 3 {
        return None;
    }

    let index = parse_index(lines[0])?;
    let (start_time, end_time) = find_timecode_range(lines[1])?;
    let raw_text = lines[2..].join("\n");

    Some(CaptionRecord::new(index, start_time, end_time, raw_text))
}

/// Leading integer of the line; trailing characters are ignored
fn parse_index(line: &str) -> Option<u64> {
    let line = line.trim_start();
    let line = line.strip_prefix('+').unwrap_or(line);
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());

    if digits_end == 0 {
        return None;
    }
    line[..digits_end].parse().ok()
}

/// First `start --> end` range anywhere in the line
fn find_timecode_range(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let width = TIMECODE_RANGE_TEMPLATE.len();
    if bytes.len() < width {
        return None;
    }

    (0..=bytes.len() - width)
        .find(|&start| matches_template(&bytes[start..start + width]))
        .map(|start| {
            let end_start = start + END_TIME_OFFSET;
            (
                &line[start..start + TIMECODE_WIDTH],
                &line[end_start..end_start + TIMECODE_WIDTH],
            )
        })
}

fn matches_template(window: &[u8]) -> bool {
    window
        .iter()
        .zip(TIMECODE_RANGE_TEMPLATE)
        .all(|(&byte, &expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            literal => byte == literal,
        })
}
