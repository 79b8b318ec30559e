use super::CaptionRecord;

/// Render records as SRT text, one block per record followed by a blank line.
///
/// Index and timecodes are written back unchanged. With `use_normalized`,
/// records that were never normalized fall back to their raw text.
pub fn serialize(records: &[CaptionRecord], use_normalized: bool) -> String {
    let mut srt_content = String::new();

    for record in records {
        srt_content.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            record.index,
            record.start_time,
            record.end_time,
            record.text(use_normalized)
        ));
    }

    srt_content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitle::parse;

    #[test]
    fn test_serialize_block_grammar() {
        let records = vec![
            CaptionRecord::new(1, "00:00:01,000", "00:00:02,000", "HELLO\nTHERE")
                .with_normalized("Hello there".to_string()),
            CaptionRecord::new(2, "00:00:03,000", "00:00:04,000", "bye"),
        ];

        assert_eq!(
            serialize(&records, true),
            "1\n00:00:01,000 --> 00:00:02,000\nHello there\n\n2\n00:00:03,000 --> 00:00:04,000\nbye\n\n"
        );
        assert_eq!(
            serialize(&records, false),
            "1\n00:00:01,000 --> 00:00:02,000\nHELLO\nTHERE\n\n2\n00:00:03,000 --> 00:00:04,000\nbye\n\n"
        );
    }

    #[test]
    fn test_parse_serialize_round_trip() {
        let content = "\u{feff}3\r\n00:00:01,000 --> 00:00:02,000 align:start\r\nfirst line\r\n  indented second\r\n\r\n1\r\n00:01:00,250 --> 00:01:02,000\r\n<i>tagged</i>\r\n\r\n\r\n";
        let parsed = parse(content);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parse(&serialize(&parsed, false)), parsed);
    }

    #[test]
    fn test_emptied_record_is_dropped_on_reparse() {
        let records = vec![
            CaptionRecord::new(1, "00:00:01,000", "00:00:02,000", "[music]")
                .with_normalized(String::new()),
            CaptionRecord::new(2, "00:00:03,000", "00:00:04,000", "hi")
                .with_normalized("Hi".to_string()),
        ];

        let output = serialize(&records, true);
        assert!(output.starts_with("1\n00:00:01,000 --> 00:00:02,000\n\n\n"));

        let reparsed = parse(&output);
        assert_eq!(reparsed.len(), 1);
        assert_eq!(reparsed[0].index, 2);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(serialize(&[], true), "");
    }
}
