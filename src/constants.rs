pub const NUM_DIGITS: usize = 4;
pub const BITS_PER_DIGIT: usize = 4;
pub const DIGIT_MASK: u8 = 0x0F; // only the low nibble reaches the bit lines
pub const MAX_DIGIT_VALUE: u8 = 15;
pub const MAX_DECIMAL_VALUE: u16 = 9999;
pub const MAX_HEX_VALUE: u16 = 0xFFFF;

pub const CLOCK_HZ: u32 = 16_000_000;
pub const TICK_PERIOD_MS: u32 = 1;
pub const TICKS_PER_PERIOD: u32 = CLOCK_HZ / 1000 * TICK_PERIOD_MS; // prescaler 1
pub const TIMER1_RELOAD_VALUE: u16 = 0xC180; // 65536 - 16000

/// Shield wiring on an Arduino Uno (ATmega328P).
#[allow(dead_code)]
pub mod pins {
    pub mod digit {
        pub const DIGIT_0: u8 = 13; // PB5
        pub const DIGIT_1: u8 = 11; // PB3
        pub const DIGIT_2: u8 = 6; // PD6
        pub const DIGIT_3: u8 = 3; // PD3
    }

    pub mod bit {
        pub const BIT_0: u8 = 12; // PB4, LSB
        pub const BIT_1: u8 = 4; // PD4
        pub const BIT_2: u8 = 7; // PD7
        pub const BIT_3: u8 = 5; // PD5, MSB
    }

    pub const DIGITS: [u8; super::NUM_DIGITS] = [digit::DIGIT_0, digit::DIGIT_1, digit::DIGIT_2, digit::DIGIT_3];
    pub const BITS: [u8; super::BITS_PER_DIGIT] = [bit::BIT_0, bit::BIT_1, bit::BIT_2, bit::BIT_3];
}
