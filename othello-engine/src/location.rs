//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::utils::{COLUMN_LABELS, ROW_LABELS};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};
use std::iter::FromIterator;

/// A location on the Othello board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A set of locations on the Othello board, which can be iterated in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a row-major square index: 0 for A1 (top left), 63 for H8.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_SPACES);
        Self(Bitboard::from(1u64 << (63 - index)))
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.leading_zeros() as u8
    }

    /// Convert from 0-indexed row and column coordinates.
    /// Panics if either coordinate is off the board.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(
            row < EDGE_LENGTH && col < EDGE_LENGTH,
            "({}, {}) is off the board",
            row,
            col
        );
        Self::from_index((row * EDGE_LENGTH + col) as u8)
    }

    /// Get the 0-indexed row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index() as usize;
        (index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Iterate over every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Self::from_index)
    }
}

/// Convert this [`Location`] into string notation ("D3" for row 2, column 3).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let col_str = COLUMN_LABELS.chars().nth(col).ok_or(fmt::Error)?;
        let row_str = ROW_LABELS.chars().nth(row).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from case-insensitive string notation ("d3", "H8").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row_str = chars.next().ok_or(ParseLocationError)?;
        let row = ROW_LABELS.find(row_str).ok_or(ParseLocationError)?;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::from_coords(row, col))
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        let loc_bitboard: Bitboard = loc.into();
        !(loc_bitboard & self.0).is_empty()
    }

    /// Returns whether there are no locations in this list.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .fold(Bitboard::default(), |bitboard, loc| bitboard | Bitboard::from(loc)),
        )
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_loc = Location::from_index(bitboard.leading_zeros() as u8);
        self.0 ^= Bitboard::from(next_loc);

        Some(next_loc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LocationList {}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = *self;
        write!(f, "[{}]", list.format(", "))
    }
}
