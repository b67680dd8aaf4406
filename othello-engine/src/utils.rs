//! Miscellaneous project utilities.

use crate::{Location, EDGE_LENGTH};
use itertools::Itertools;
use std::fmt::{self, Formatter};

/// Column labels, left to right.
pub const COLUMN_LABELS: &str = "ABCDEFGH";

/// Row labels, top to bottom.
pub const ROW_LABELS: &str = "12345678";

/// Write a labelled 8x8 grid, asking `piece_at` for the character shown at each location.
pub fn format_grid<F: Fn(Location) -> char>(f: &mut Formatter, piece_at: F) -> fmt::Result {
    write!(f, "  {}", COLUMN_LABELS.chars().format(" "))?;

    for (row, label) in ROW_LABELS.chars().enumerate().take(EDGE_LENGTH) {
        let pieces = (0..EDGE_LENGTH).map(|col| piece_at(Location::from_coords(row, col)));
        write!(f, "\n{} {}", label, pieces.format(" "))?;
    }

    Ok(())
}
