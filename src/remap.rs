//! Segment bit order conversion.
//!
//! Glyphs are stored as `XABCDEFG`. The display wires segment A to bit 0 up
//! to G on bit 6 (`XGFEDCBA`). Mounted upside down, each digit is rotated by
//! 180 degrees so A/D, B/E and C/F trade places while G stays put.

/// Source bit to destination bit, one pair per segment A..G.
pub type Permutation = [(u8, u8); 7];

const NORMAL: Permutation = [
    (6, 0), // A
    (5, 1), // B
    (4, 2), // C
    (3, 3), // D
    (2, 4), // E
    (1, 5), // F
    (0, 6), // G
];

const INVERTED: Permutation = [
    (6, 3), // A -> D
    (5, 4), // B -> E
    (4, 5), // C -> F
    (3, 0), // D -> A
    (2, 1), // E -> B
    (1, 2), // F -> C
    (0, 6), // G
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    #[default]
    Normal,
    Inverted,
}

impl Orientation {
    pub const fn permutation(self) -> &'static Permutation {
        match self {
            Orientation::Normal => &NORMAL,
            Orientation::Inverted => &INVERTED,
        }
    }

    pub const fn is_inverted(self) -> bool {
        matches!(self, Orientation::Inverted)
    }
}

impl From<bool> for Orientation {
    fn from(inverted: bool) -> Self {
        if inverted {
            Orientation::Inverted
        } else {
            Orientation::Normal
        }
    }
}

/// Converts an `XABCDEFG` pattern to the device bit order for `orientation`.
pub fn remap(pattern: u8, orientation: Orientation) -> u8 {
    orientation
        .permutation()
        .iter()
        .fold(0, |raw, &(src, dst)| move_bit(raw, pattern, src, dst))
}

/// Inverse of [`remap`].
pub fn unmap(raw: u8, orientation: Orientation) -> u8 {
    orientation
        .permutation()
        .iter()
        .fold(0, |pattern, &(src, dst)| move_bit(pattern, raw, dst, src))
}

fn move_bit(acc: u8, from: u8, src: u8, dst: u8) -> u8 {
    if from & (1 << src) != 0 {
        acc | (1 << dst)
    } else {
        acc
    }
}
