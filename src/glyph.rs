//! ASCII to segment translation.
//!
//! Patterns use the `XABCDEFG` convention, segment A in bit 6 down to G in bit 0:
//!
//! ```text
//!      A
//!     ---
//!  F |   | B
//!     -G-
//!  E |   | C
//!     ---
//!      D
//! ```

use crate::UNKNOWN_CHAR;

const FIRST_PRINTABLE: u8 = b' ';
const LAST_PRINTABLE: u8 = b'~';
const NO_GLYPH: u8 = 0x80; // outside the 7-bit pattern space

const ASCII_TO_SEGMENTS: [u8; (LAST_PRINTABLE - FIRST_PRINTABLE + 1) as usize] = [
    0b000_0000, // ' '
    NO_GLYPH,   // '!'
    0b010_0010, // '"'
    NO_GLYPH,   // '#'
    NO_GLYPH,   // '$'
    0b100_1001, // '%'
    NO_GLYPH,   // '&'
    0b000_0010, // '\''
    0b100_1110, // '('
    0b111_1000, // ')'
    0b100_0000, // '*'
    NO_GLYPH,   // '+'
    0b001_0000, // ','
    0b000_0001, // '-'
    NO_GLYPH,   // '.'
    NO_GLYPH,   // '/'
    0b111_1110, // '0'
    0b011_0000, // '1'
    0b110_1101, // '2'
    0b111_1001, // '3'
    0b011_0011, // '4'
    0b101_1011, // '5'
    0b101_1111, // '6'
    0b111_0000, // '7'
    0b111_1111, // '8'
    0b111_1011, // '9'
    0b100_1000, // ':'
    0b101_1000, // ';'
    NO_GLYPH,   // '<'
    NO_GLYPH,   // '='
    NO_GLYPH,   // '>'
    0b110_0101, // '?'
    0b110_1111, // '@'
    0b111_0111, // 'A'
    0b001_1111, // 'B'
    0b100_1110, // 'C'
    0b011_1101, // 'D'
    0b100_1111, // 'E'
    0b100_0111, // 'F'
    0b101_1110, // 'G'
    0b011_0111, // 'H'
    0b011_0000, // 'I'
    0b011_1100, // 'J'
    NO_GLYPH,   // 'K'
    0b000_1110, // 'L'
    NO_GLYPH,   // 'M'
    0b001_0101, // 'N'
    0b111_1110, // 'O'
    0b110_0111, // 'P'
    NO_GLYPH,   // 'Q'
    0b000_0101, // 'R'
    0b101_1011, // 'S'
    0b000_0111, // 'T'
    0b011_1110, // 'U'
    0b011_1110, // 'V'
    0b011_1111, // 'W'
    NO_GLYPH,   // 'X'
    0b010_0111, // 'Y'
    0b110_1101, // 'Z'
    0b100_1110, // '['
    NO_GLYPH,   // '\\'
    0b111_1000, // ']'
    NO_GLYPH,   // '^'
    0b000_1000, // '_'
    0b010_0000, // '`'
    0b111_0111, // 'a'
    0b001_1111, // 'b'
    0b000_1101, // 'c'
    0b011_1101, // 'd'
    0b100_1111, // 'e'
    0b100_0111, // 'f'
    0b101_1110, // 'g'
    0b001_0111, // 'h'
    0b001_0000, // 'i'
    0b011_1100, // 'j'
    NO_GLYPH,   // 'k'
    0b000_1110, // 'l'
    NO_GLYPH,   // 'm'
    0b001_0101, // 'n'
    0b001_1101, // 'o'
    0b110_0111, // 'p'
    NO_GLYPH,   // 'q'
    0b000_0101, // 'r'
    0b101_1011, // 's'
    0b000_0111, // 't'
    0b001_1100, // 'u'
    0b001_1100, // 'v'
    NO_GLYPH,   // 'w'
    NO_GLYPH,   // 'x'
    0b010_0111, // 'y'
    NO_GLYPH,   // 'z'
    0b011_0001, // '{'
    0b000_0110, // '|'
    0b000_0111, // '}'
    0b110_0011, // '~' (degree sign)
];

/// Looks up the segment pattern for a printable ASCII byte.
///
/// Returns `None` for bytes outside `0x20..=0x7E` and for characters that
/// have no seven segment representation.
pub fn lookup(byte: u8) -> Option<u8> {
    if !(FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&byte) {
        return None;
    }
    match ASCII_TO_SEGMENTS[(byte - FIRST_PRINTABLE) as usize] {
        NO_GLYPH => None,
        pattern => Some(pattern),
    }
}

/// Segment pattern for `byte`, or [`UNKNOWN_CHAR`] when there is none.
pub fn encode(byte: u8) -> u8 {
    lookup(byte).unwrap_or(UNKNOWN_CHAR)
}

pub fn lookup_char(c: char) -> Option<u8> {
    if c.is_ascii() {
        lookup(c as u8)
    } else {
        None
    }
}
