//! Keyboard module - Grid model, codecs, pagination, and the file store.
//!
//! A [`Keyboard`] is the in-memory representation shared by everything
//! here: ordered rows of ordered [`Button`]s. The codec turns it into
//! position-tagged text records for storage, the paged builder produces
//! one from a flat item list, and the conversion methods below are the
//! only contract with the teloxide transport layer.

pub mod codec;
pub mod paged;
pub mod store;

use std::collections::BTreeMap;

use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardMarkup as ReplyKeyboardMarkup,
};

use crate::error::{Error, Result};

pub use codec::{
    decode_inline_set, decode_one_row, decode_reply_set, encode_inline_set, encode_one_row,
    encode_reply_set,
};
pub use paged::{build_menu, build_paged_menu};
pub use store::KeyboardStore;

/// One keyboard button: a display label and, for inline keyboards,
/// the callback payload sent back when it is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Text shown on the button.
    pub label: String,
    /// Callback payload. `None` for plain reply buttons.
    pub payload: Option<String>,
}

impl Button {
    /// Create a plain reply button (label only).
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: None,
        }
    }

    /// Create an inline button carrying a callback payload.
    pub fn callback(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: Some(payload.into()),
        }
    }
}

/// An ordered grid of buttons. Row order and intra-row order are both
/// significant; positions are addressed 1-based by the codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// Create an empty keyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keyboard from pre-built rows.
    pub fn from_rows(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    /// Append a row of buttons.
    pub fn push_row(&mut self, row: Vec<Button>) {
        self.rows.push(row);
    }

    /// The rows of this keyboard.
    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// Total button count across all rows.
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Whether the keyboard has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert into a teloxide reply keyboard (labels only, payloads
    /// are ignored).
    pub fn to_reply_markup(&self) -> ReplyKeyboardMarkup {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| KeyboardButton::new(b.label.clone()))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        ReplyKeyboardMarkup::new(rows)
    }

    /// Convert into a teloxide inline keyboard.
    ///
    /// Every button must carry a callback payload; a missing payload is
    /// an invalid-argument error rather than a silently invented one.
    pub fn to_inline_markup(&self) -> Result<InlineKeyboardMarkup> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut buttons = Vec::with_capacity(row.len());
            for b in row {
                let payload = b.payload.as_ref().ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "inline button {:?} has no callback payload",
                        b.label
                    ))
                })?;
                buttons.push(InlineKeyboardButton::callback(
                    b.label.clone(),
                    payload.clone(),
                ));
            }
            rows.push(buttons);
        }
        Ok(InlineKeyboardMarkup::new(rows))
    }
}

/// A set of named keyboard layouts, as persisted by [`KeyboardStore`].
/// BTreeMap keeps the serialized files deterministic.
pub type LayoutSet = BTreeMap<String, Keyboard>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_markup_conversion() {
        let mut kb = Keyboard::new();
        kb.push_row(vec![Button::text("A"), Button::text("B")]);
        kb.push_row(vec![Button::text("C")]);

        let markup = kb.to_reply_markup();
        assert_eq!(markup.keyboard.len(), 2);
        assert_eq!(markup.keyboard[0].len(), 2);
        assert_eq!(markup.keyboard[0][0].text, "A");
    }

    #[test]
    fn test_inline_markup_requires_payload() {
        let kb = Keyboard::from_rows(vec![vec![Button::text("no payload")]]);
        assert!(matches!(
            kb.to_inline_markup(),
            Err(Error::InvalidArgument(_))
        ));

        let kb = Keyboard::from_rows(vec![vec![Button::callback("Ok", "ok")]]);
        let markup = kb.to_inline_markup().unwrap();
        assert_eq!(markup.inline_keyboard.len(), 1);
    }

    #[test]
    fn test_button_count() {
        let kb = Keyboard::from_rows(vec![
            vec![Button::text("1"), Button::text("2")],
            vec![Button::text("3")],
        ]);
        assert_eq!(kb.button_count(), 3);
        assert!(!kb.is_empty());
        assert!(Keyboard::new().is_empty());
    }
}
