//! Keyboard layout codec.
//!
//! Two text encodings for a [`Keyboard`] grid:
//!
//! - Position-tagged records, one per button: `row.col:label` for reply
//!   keyboards and `row.col:label:payload` for inline keyboards. Row and
//!   column are 1-based; columns restart at 1 on every row.
//! - The one-row variant: every button wrapped as `{label}`, each row
//!   terminated by the literal sentinel `{END()}`, the whole grid a
//!   single string.
//!
//! Neither grammar has escaping, on purpose: the formats predate this
//! crate and stored files must keep parsing. Labels containing a
//! delimiter are rejected at encode time instead.

use std::collections::BTreeMap;

use super::{Button, Keyboard, LayoutSet};
use crate::error::{Error, Result};

/// Row terminator of the one-row encoding.
pub const ROW_SENTINEL: &str = "{END()}";

/// Encoded form of a [`LayoutSet`]: layout name to record list.
pub type EncodedSet = BTreeMap<String, Vec<String>>;

fn check_positional_label(label: &str) -> Result<()> {
    if label.contains(':') {
        return Err(Error::InvalidArgument(format!(
            "label {label:?} contains ':', which is reserved by the record format"
        )));
    }
    Ok(())
}

fn check_one_row_label(label: &str) -> Result<()> {
    if label.contains('{') || label.contains('}') {
        return Err(Error::InvalidArgument(format!(
            "label {label:?} contains '{{' or '}}', which is reserved by the one-row format"
        )));
    }
    Ok(())
}

/// Encode a reply keyboard grid as position-tagged records (labels only).
pub fn encode_reply_grid(keyboard: &Keyboard) -> Result<Vec<String>> {
    let mut records = Vec::with_capacity(keyboard.button_count());
    for (row_idx, row) in keyboard.rows().iter().enumerate() {
        for (col_idx, button) in row.iter().enumerate() {
            check_positional_label(&button.label)?;
            records.push(format!("{}.{}:{}", row_idx + 1, col_idx + 1, button.label));
        }
    }
    Ok(records)
}

/// Encode an inline keyboard grid as position-tagged records.
///
/// Every button must carry a payload; the payload may contain ':' but
/// the label may not.
pub fn encode_inline_grid(keyboard: &Keyboard) -> Result<Vec<String>> {
    let mut records = Vec::with_capacity(keyboard.button_count());
    for (row_idx, row) in keyboard.rows().iter().enumerate() {
        for (col_idx, button) in row.iter().enumerate() {
            check_positional_label(&button.label)?;
            let payload = button.payload.as_ref().ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "inline button {:?} has no callback payload",
                    button.label
                ))
            })?;
            records.push(format!(
                "{}.{}:{}:{}",
                row_idx + 1,
                col_idx + 1,
                button.label,
                payload
            ));
        }
    }
    Ok(records)
}

/// Parse the `row.col` prefix of a record.
fn parse_position(record: &str, field: &str) -> Result<(usize, usize)> {
    let (row, col) = field
        .split_once('.')
        .ok_or_else(|| Error::malformed(record, "position is not of the form row.col"))?;
    let row: usize = row
        .parse()
        .map_err(|_| Error::malformed(record, format!("unparsable row index {row:?}")))?;
    let col: usize = col
        .parse()
        .map_err(|_| Error::malformed(record, format!("unparsable column index {col:?}")))?;
    if row == 0 || col == 0 {
        return Err(Error::malformed(record, "row and column indices are 1-based"));
    }
    Ok((row, col))
}

/// Accumulates rows while walking a record list, closing the current
/// row whenever the row index changes. The trailing row is flushed by
/// `finish`, not by the loop.
struct RowAccumulator {
    rows: Vec<Vec<Button>>,
    current: Vec<Button>,
    current_row: Option<usize>,
}

impl RowAccumulator {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            current: Vec::new(),
            current_row: None,
        }
    }

    fn push(&mut self, row: usize, button: Button) {
        if self.current_row.is_some_and(|r| r != row) {
            self.rows.push(std::mem::take(&mut self.current));
        }
        self.current_row = Some(row);
        self.current.push(button);
    }

    fn finish(mut self) -> Keyboard {
        if !self.current.is_empty() {
            self.rows.push(self.current);
        }
        Keyboard::from_rows(self.rows)
    }
}

/// Decode position-tagged reply records back into a grid.
///
/// Any unparsable record fails the whole decode; no partial grid is
/// ever returned.
pub fn decode_reply_grid(records: &[String]) -> Result<Keyboard> {
    let mut acc = RowAccumulator::new();
    for record in records {
        let (position, label) = record
            .split_once(':')
            .ok_or_else(|| Error::malformed(record, "missing ':' separator"))?;
        if label.contains(':') {
            return Err(Error::malformed(
                record,
                "reply record has more than two fields",
            ));
        }
        let (row, _col) = parse_position(record, position)?;
        acc.push(row, Button::text(label));
    }
    Ok(acc.finish())
}

/// Decode position-tagged inline records back into a grid.
///
/// A record without a payload field is a malformed-content error.
pub fn decode_inline_grid(records: &[String]) -> Result<Keyboard> {
    let mut acc = RowAccumulator::new();
    for record in records {
        let mut fields = record.splitn(3, ':');
        let position = fields.next().unwrap_or_default();
        let label = fields
            .next()
            .ok_or_else(|| Error::malformed(record, "missing label field"))?;
        let payload = fields
            .next()
            .ok_or_else(|| Error::malformed(record, "missing payload field"))?;
        let (row, _col) = parse_position(record, position)?;
        acc.push(row, Button::callback(label, payload));
    }
    Ok(acc.finish())
}

/// Encode every layout of a reply set.
pub fn encode_reply_set(layouts: &LayoutSet) -> Result<EncodedSet> {
    layouts
        .iter()
        .map(|(name, kb)| Ok((name.clone(), encode_reply_grid(kb)?)))
        .collect()
}

/// Decode every layout of a reply set.
pub fn decode_reply_set(encoded: &EncodedSet) -> Result<LayoutSet> {
    encoded
        .iter()
        .map(|(name, records)| Ok((name.clone(), decode_reply_grid(records)?)))
        .collect()
}

/// Encode every layout of an inline set.
pub fn encode_inline_set(layouts: &LayoutSet) -> Result<EncodedSet> {
    layouts
        .iter()
        .map(|(name, kb)| Ok((name.clone(), encode_inline_grid(kb)?)))
        .collect()
}

/// Decode every layout of an inline set.
pub fn decode_inline_set(encoded: &EncodedSet) -> Result<LayoutSet> {
    encoded
        .iter()
        .map(|(name, records)| Ok((name.clone(), decode_inline_grid(records)?)))
        .collect()
}

/// Encode a grid in the one-row format: `{label}` per button, each row
/// terminated by [`ROW_SENTINEL`]. Labels only; payloads are ignored.
pub fn encode_one_row(keyboard: &Keyboard) -> Result<String> {
    let mut out = String::new();
    for row in keyboard.rows() {
        for button in row {
            check_one_row_label(&button.label)?;
            out.push('{');
            out.push_str(&button.label);
            out.push('}');
        }
        out.push_str(ROW_SENTINEL);
    }
    Ok(out)
}

/// Decode a one-row encoded string back into a grid.
pub fn decode_one_row(encoded: &str) -> Result<Keyboard> {
    let mut rows = Vec::new();
    for chunk in encoded.split(ROW_SENTINEL) {
        if chunk.is_empty() {
            // The sentinel terminates every row, so the final split
            // piece is empty for well-formed input.
            continue;
        }
        let mut row = Vec::new();
        for token in chunk.split('{') {
            if token.is_empty() {
                continue;
            }
            let label = token
                .strip_suffix('}')
                .ok_or_else(|| Error::malformed(chunk, "button token not closed by '}'"))?;
            row.push(Button::text(label));
        }
        if row.is_empty() {
            return Err(Error::malformed(chunk, "row contains no buttons"));
        }
        rows.push(row);
    }
    Ok(Keyboard::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_grid() -> Keyboard {
        Keyboard::from_rows(vec![
            vec![Button::text("Test Row 1")],
            vec![Button::text("Test Row 2")],
            vec![Button::text("Test Row 3.1"), Button::text("Test Row 3.2")],
            vec![Button::text("Test Row 4")],
        ])
    }

    fn inline_grid() -> Keyboard {
        Keyboard::from_rows(vec![
            vec![Button::callback("Test Row 1", "Data Row 1")],
            vec![
                Button::callback("Test Row 2.1", "Data Row 2.1"),
                Button::callback("Test Row 2.2", "Data Row 2.2"),
            ],
            vec![Button::callback("Test Row 3", "Data Row 3")],
        ])
    }

    #[test]
    fn test_reply_record_format() {
        let records = encode_reply_grid(&reply_grid()).unwrap();
        assert_eq!(records[0], "1.1:Test Row 1");
        assert_eq!(records[2], "3.1:Test Row 3.1");
        assert_eq!(records[3], "3.2:Test Row 3.2");
        assert_eq!(records[4], "4.1:Test Row 4");
    }

    #[test]
    fn test_reply_round_trip() {
        let grid = reply_grid();
        let records = encode_reply_grid(&grid).unwrap();
        assert_eq!(decode_reply_grid(&records).unwrap(), grid);
    }

    #[test]
    fn test_inline_round_trip() {
        let grid = inline_grid();
        let records = encode_inline_grid(&grid).unwrap();
        assert_eq!(records[0], "1.1:Test Row 1:Data Row 1");
        assert_eq!(decode_inline_grid(&records).unwrap(), grid);
    }

    #[test]
    fn test_trailing_row_is_not_dropped() {
        let records = vec![
            "1.1:a".to_string(),
            "1.2:b".to_string(),
            "2.1:c".to_string(),
        ];
        let grid = decode_reply_grid(&records).unwrap();
        assert_eq!(grid.rows().len(), 2);
        assert_eq!(grid.rows()[1], vec![Button::text("c")]);
    }

    #[test]
    fn test_inline_payload_may_contain_colon() {
        let grid = Keyboard::from_rows(vec![vec![Button::callback("go", "page:2")]]);
        let records = encode_inline_grid(&grid).unwrap();
        assert_eq!(decode_inline_grid(&records).unwrap(), grid);
    }

    #[test]
    fn test_missing_payload_is_content_error() {
        let records = vec!["1.1:label without payload".to_string()];
        assert!(matches!(
            decode_inline_grid(&records),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_unparsable_position_is_content_error() {
        for bad in ["x.1:a", "1:a", "1.y:a", "0.1:a"] {
            let records = vec![bad.to_string()];
            assert!(
                matches!(decode_reply_grid(&records), Err(Error::MalformedRecord { .. })),
                "expected malformed error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_encode_rejects_delimiter_in_label() {
        let grid = Keyboard::from_rows(vec![vec![Button::text("a:b")]]);
        assert!(matches!(
            encode_reply_grid(&grid),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_set_round_trip() {
        let mut layouts = LayoutSet::new();
        layouts.insert("Test1".to_string(), reply_grid());
        layouts.insert(
            "Test2".to_string(),
            Keyboard::from_rows(vec![vec![Button::text("only")]]),
        );
        let encoded = encode_reply_set(&layouts).unwrap();
        assert_eq!(decode_reply_set(&encoded).unwrap(), layouts);
    }

    #[test]
    fn test_one_row_format() {
        let grid = Keyboard::from_rows(vec![
            vec![Button::text("A"), Button::text("B")],
            vec![Button::text("C")],
        ]);
        let encoded = encode_one_row(&grid).unwrap();
        assert_eq!(encoded, "{A}{B}{END()}{C}{END()}");
    }

    #[test]
    fn test_one_row_round_trip() {
        let grid = reply_grid();
        let encoded = encode_one_row(&grid).unwrap();
        assert_eq!(decode_one_row(&encoded).unwrap(), grid);
    }

    #[test]
    fn test_one_row_rejects_brace_in_label() {
        let grid = Keyboard::from_rows(vec![vec![Button::text("bad}label")]]);
        assert!(matches!(
            encode_one_row(&grid),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_one_row_unclosed_token_is_content_error() {
        assert!(matches!(
            decode_one_row("{A}{B{END()}"),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_one_row_empty_input_is_empty_grid() {
        assert!(decode_one_row("").unwrap().is_empty());
    }
}
