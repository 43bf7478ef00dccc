use core::cell::Cell;

use critical_section::Mutex;
use num_traits::ToPrimitive;

use crate::constants::*;
use crate::BinaryWatchError;

/// Digit values shared between application code and the multiplexing interrupt.
///
/// Intended to live in a `static` and be borrowed by both the application and the
/// [`BinaryWatchShield`](crate::BinaryWatchShield) serviced from the timer interrupt.
/// All four digits are written and read together inside a critical section, so the
/// interrupt never sees a mix of two updates.
pub struct DisplayState {
    digits: Mutex<Cell<[u8; NUM_DIGITS]>>,
}

impl DisplayState {
    pub const fn new() -> Self {
        Self {
            digits: Mutex::new(Cell::new([0; NUM_DIGITS])),
        }
    }

    /// Replaces all four digits, most significant first. Only the low nibble of each
    /// value is ever shown; higher bits are ignored, not rejected.
    pub fn set_display(&self, digit_3: u8, digit_2: u8, digit_1: u8, digit_0: u8) {
        #[cfg(feature = "defmt")]
        defmt::trace!("set_display {} {} {} {}", digit_3, digit_2, digit_1, digit_0);

        self.write([digit_0, digit_1, digit_2, digit_3]);
    }

    /// Like [`set_display`](Self::set_display) but rejects values that do not fit in a digit.
    pub fn try_set_display(
        &self,
        digit_3: u8,
        digit_2: u8,
        digit_1: u8,
        digit_0: u8,
    ) -> Result<(), BinaryWatchError> {
        if [digit_3, digit_2, digit_1, digit_0]
            .iter()
            .any(|&d| d > MAX_DIGIT_VALUE)
        {
            return Err(BinaryWatchError::InvalidValue);
        }
        self.set_display(digit_3, digit_2, digit_1, digit_0);
        Ok(())
    }

    pub fn clear(&self) {
        self.write([0; NUM_DIGITS]);
    }

    /// Shows `number` as four decimal digits, thousands on digit 3.
    pub fn display_value<T>(&self, number: T) -> Result<(), BinaryWatchError>
    where
        T: ToPrimitive,
    {
        let num = number
            .to_u16()
            .filter(|&n| n <= MAX_DECIMAL_VALUE)
            .ok_or(BinaryWatchError::InvalidValue)?;
        self.write_radix(num, 10);
        Ok(())
    }

    /// Shows `number` as four nibbles, high nibble on digit 3.
    pub fn display_hex_value<T>(&self, number: T) -> Result<(), BinaryWatchError>
    where
        T: ToPrimitive,
    {
        let num = number.to_u16().ok_or(BinaryWatchError::InvalidValue)?;
        self.write_radix(num, 16);
        Ok(())
    }

    /// Current digit values, indexed by digit number.
    pub fn digits(&self) -> [u8; NUM_DIGITS] {
        critical_section::with(|cs| self.digits.borrow(cs).get())
    }

    pub(crate) fn digit(&self, digit: u8) -> Result<u8, BinaryWatchError> {
        self.digits()
            .get(digit as usize)
            .copied()
            .ok_or(BinaryWatchError::InvalidLocation(digit))
    }

    fn write_radix(&self, mut num: u16, radix: u16) {
        let mut digits = [0; NUM_DIGITS];
        for d in digits.iter_mut() {
            *d = (num % radix) as u8;
            num /= radix;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("display {} (radix {})", digits, radix);

        self.write(digits);
    }

    fn write(&self, digits: [u8; NUM_DIGITS]) {
        critical_section::with(|cs| self.digits.borrow(cs).set(digits));
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
