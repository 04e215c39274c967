//! Paged inline menu builder.
//!
//! Turns a flat list of buttons into one page of a grid, with a
//! navigation row appended when there is more than one page.

use super::{Button, Keyboard};
use crate::error::{Error, Result};

/// Build an unpaged menu: `items` arranged into rows of `columns`
/// buttons each (the last row may be shorter).
pub fn build_menu(items: &[Button], columns: usize) -> Result<Keyboard> {
    if columns == 0 {
        return Err(Error::InvalidArgument("columns must be positive".into()));
    }
    Ok(Keyboard::from_rows(
        items.chunks(columns).map(<[Button]>::to_vec).collect(),
    ))
}

/// Build one page of a paged menu.
///
/// `page` is 1-based and clamped into `[1, page_max]` where
/// `page_max = ceil(items.len() / page_size)`, so page 0 or a page past
/// the end yields the nearest valid page rather than an error. The
/// page's items are arranged into rows of `columns`; when there is more
/// than one page a navigation row follows: forward-only on the first
/// page, back-only on the last, both in between.
///
/// Empty `items` produce an empty keyboard with no navigation row.
pub fn build_paged_menu(
    items: &[Button],
    page: usize,
    page_size: usize,
    columns: usize,
    back: &Button,
    forward: &Button,
) -> Result<Keyboard> {
    if page_size == 0 {
        return Err(Error::InvalidArgument("page_size must be positive".into()));
    }
    if columns == 0 {
        return Err(Error::InvalidArgument("columns must be positive".into()));
    }
    if items.is_empty() {
        return Ok(Keyboard::new());
    }

    let page_max = items.len().div_ceil(page_size);
    let page = page.clamp(1, page_max);

    let start = (page - 1) * page_size;
    let end = usize::min(start + page_size, items.len());
    let mut keyboard = build_menu(&items[start..end], columns)?;

    if page_max > 1 {
        let nav = if page == 1 {
            vec![forward.clone()]
        } else if page == page_max {
            vec![back.clone()]
        } else {
            vec![back.clone(), forward.clone()]
        };
        keyboard.push_row(nav);
    }

    Ok(keyboard)
}
