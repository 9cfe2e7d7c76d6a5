use crate::glyph;
use crate::remap::{remap, Orientation};
use crate::{COLON_ON, NUM_CELLS, UNKNOWN_CHAR};

/// Outcome of a print into the [`DisplayBuffer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Printed {
    /// Characters consumed from the input, colons included.
    pub advanced: usize,
    /// Input was cut short because every cell was already written.
    pub truncated: bool,
    /// Characters rendered as [`UNKNOWN_CHAR`].
    pub unsupported: usize,
}

/// Bytes for one refresh, cells already in register order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub cells: [u8; NUM_CELLS],
    pub colon: u8,
}

/// Four remapped cells plus the colon indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    cells: [u8; NUM_CELLS],
    colon: bool,
}

impl DisplayBuffer {
    pub const fn new() -> Self {
        Self {
            cells: [0; NUM_CELLS],
            colon: false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn cells(&self) -> &[u8; NUM_CELLS] {
        &self.cells
    }

    pub fn colon(&self) -> bool {
        self.colon
    }

    /// Writes `text` starting at cell `start`.
    ///
    /// A `':'` lights the colon and takes no cell of its own. Every other
    /// character takes one cell, unsupported ones show [`UNKNOWN_CHAR`].
    /// Once the last cell is written the rest of the input is dropped.
    ///
    /// The colon is only ever switched on here. A print without a colon
    /// leaves an earlier one lit; use [`clear`](Self::clear) to reset it.
    pub fn print(&mut self, start: u8, text: &str, orientation: Orientation) -> Printed {
        let mut printed = Printed::default();
        let mut cursor = start as usize;

        for c in text.chars() {
            if c == ':' {
                self.colon = true;
                printed.advanced += 1;
                continue;
            }
            if cursor >= NUM_CELLS {
                error!("String is too long for the display, dropping from '{}'", c);
                printed.truncated = true;
                break;
            }
            let pattern = match glyph::lookup_char(c) {
                Some(pattern) => pattern,
                None => {
                    warn!("Character '{}' has no seven segment representation", c);
                    printed.unsupported += 1;
                    UNKNOWN_CHAR
                }
            };
            self.cells[cursor] = remap(pattern, orientation);
            cursor += 1;
            printed.advanced += 1;
        }

        printed
    }

    /// Cell bytes in register order. Inverted mounting also reverses the
    /// cells so text still reads left to right.
    pub fn frame(&self, orientation: Orientation) -> Frame {
        let mut cells = self.cells;
        if orientation.is_inverted() {
            cells.reverse();
        }
        Frame {
            cells,
            colon: if self.colon { COLON_ON } else { 0 },
        }
    }
}
