//! Fractional ordering keys for inserting cards into a list.
//!
//! Cards in a list are ordered by ascending `pos`, a floating-point key with
//! no fixed spacing. Inserting at a visual index picks a key between the two
//! neighbours instead of renumbering the whole list. Repeated insertion at
//! the same spot halves the gap each time and will eventually run out of
//! floating-point precision; that case is not handled.

use crate::error::{Result, TrelloError};

/// Parses a user-supplied insertion index.
///
/// Negative values count from the end of the list.
///
/// # Errors
///
/// Returns `TrelloError::InvalidArgument` if `value` is not an integer.
pub fn parse_index(value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        TrelloError::invalid_argument("position")
            .with_reason(format!("'{value}' is not an integer"))
    })
}

/// Computes the ordering key for a card inserted at `index` into a list whose
/// cards currently sit at `positions` (ascending).
///
/// - a negative `index` is taken from the end (`len + index`)
/// - the front of the list (or an empty list) yields `0.0`
/// - an index at or past the end yields the last key plus one
/// - anything else yields the midpoint of the two straddling neighbours
pub fn insertion_position(positions: &[f64], index: i64) -> f64 {
    let len = positions.len() as i64;
    let index = if index < 0 {
        len.saturating_add(index)
    } else {
        index
    };

    if index <= 0 || len == 0 {
        return 0.0;
    }
    if index >= len {
        return positions[positions.len() - 1] + 1.0;
    }

    let index = index as usize;
    let before = positions[index - 1];
    let after = positions[index];
    before + (after - before) / 2.0
}
