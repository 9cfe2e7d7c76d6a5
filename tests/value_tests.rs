extern crate ht16k33v110;

use ht16k33v110::{HT16K33Error, DEFAULT_ADDRESS};

struct MockI2c;

impl embedded_hal::i2c::ErrorType for MockI2c {
    type Error = embedded_hal::i2c::ErrorKind;
}

impl embedded_hal::i2c::I2c for MockI2c {
    fn write(&mut self, _address: u8, _data: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read(&mut self, _address: u8, _buffer: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_read(
        &mut self,
        _address: u8,
        _write: &[u8],
        _read: &mut [u8],
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transaction(
        &mut self,
        _address: u8,
        _operations: &mut [embedded_hal::i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn display() -> ht16k33v110::HT16K33<MockI2c> {
    ht16k33v110::HT16K33::new(MockI2c, DEFAULT_ADDRESS)
}

#[test]
fn decimal_value_test() {
    let mut display = display();

    assert!(display.print_value(9999).is_ok());
    assert!(display.print_value(10000).is_err());
    assert!(display.print_value(-999).is_ok());
    assert!(display.print_value(-1000).is_err());
    assert_eq!(display.print_value(u64::MAX), Err(HT16K33Error::InvalidValue));
}

#[test]
fn decimal_value_is_right_aligned() {
    let mut display = display();

    let printed = display.print_value(42).unwrap();
    assert_eq!(printed.advanced, 4);
    // blank, blank, 4, 2
    assert_eq!(display.buffer().cells(), &[0x00, 0x00, 0x66, 0x5B]);

    display.print_value(-7).unwrap();
    // blank, blank, -, 7
    assert_eq!(display.buffer().cells(), &[0x00, 0x00, 0x40, 0x07]);
}

#[test]
fn hexadecimal_value_test() {
    let mut display = display();

    assert!(display.print_hex_value(0xFFFF).is_ok());
    assert!(display.print_hex_value(0x10000).is_err());
    assert!(display.print_hex_value(-0xFFF).is_ok());
    assert!(display.print_hex_value(-0x1000).is_err());
}

#[test]
fn hexadecimal_value_digits() {
    let mut display = display();

    let printed = display.print_hex_value(0xBEEF).unwrap();
    assert_eq!(printed.unsupported, 0);
    // b, E, E, F
    assert_eq!(display.buffer().cells(), &[0x7C, 0x79, 0x79, 0x71]);

    display.print_hex_value(-0xA).unwrap();
    // blank, blank, -, A
    assert_eq!(display.buffer().cells(), &[0x00, 0x00, 0x40, 0x77]);
}

#[test]
fn float_values_are_truncated() {
    let mut display = display();

    assert!(display.print_value(12.7_f32).is_ok());
    // blank, blank, 1, 2
    assert_eq!(display.buffer().cells(), &[0x00, 0x00, 0x06, 0x5B]);
    assert!(display.print_value(f32::NAN).is_err());
}
