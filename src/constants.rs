pub const DEFAULT_ADDRESS: u8 = 0x70;
pub const NUM_CELLS: usize = 4;
pub const MAX_INTENSITY: u8 = 15; // 4 bits
pub const DEFAULT_INTENSITY: u8 = 7;
pub const UNKNOWN_CHAR: u8 = 0b111_1111; // all segments lit
pub const COLON_ON: u8 = 0x02;
pub const HYSTERESIS_GUARD: f32 = 1.03; // signal must exceed threshold by 3% to escalate

pub mod register {
    pub const CELL_0: u8 = 0x00;
    pub const CELL_1: u8 = 0x02;
    pub const COLON: u8 = 0x04;
    pub const CELL_2: u8 = 0x06;
    pub const CELL_3: u8 = 0x08;
    pub const CELLS: [u8; super::NUM_CELLS] = [CELL_0, CELL_1, CELL_2, CELL_3];
    pub const DIMMING: u8 = 0xE0; // low nibble: level 0-15

    pub mod system_setup {
        pub const OSCILLATOR_OFF: u8 = 0x20; // bit 0 clear: standby
        pub const OSCILLATOR_ON: u8 = 0x21; // bit 0 set: normal operation
    }

    pub mod display_setup {
        pub const DISPLAY_OFF: u8 = 0x80; // bit 0 clear: display off
        pub const DISPLAY_ON: u8 = 0x81; // bit 0 set: display on, no blinking
    }
}
