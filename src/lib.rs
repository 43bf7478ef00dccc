#![no_std]

mod config;
mod constants;
mod state;
mod timer;

use core::convert::Infallible;

pub use config::{Config, Polarity};
pub use constants::*;
use embedded_hal::digital::OutputPin;
pub use fugit::MicrosDurationU32;
pub use state::DisplayState;
pub use timer::{overflow_reload, TickTimer};

/// Multiplexing engine for the four digits of the shield.
///
/// Owns the eight output lines and the tick timer. Application code talks to the
/// shared [`DisplayState`]; the timer interrupt calls [`on_tick`](Self::on_tick).
pub struct BinaryWatchShield<'a, P, T> {
    state: &'a DisplayState,
    digit_pins: [P; NUM_DIGITS],
    bit_pins: [P; BITS_PER_DIGIT],
    timer: T,
    config: Config,
    active_digit: u8,
}

impl<'a, P, E, T> BinaryWatchShield<'a, P, T>
where
    P: OutputPin<Error = E>,
    T: TickTimer,
{
    pub fn new(
        state: &'a DisplayState,
        digit_pins: [P; NUM_DIGITS],
        bit_pins: [P; BITS_PER_DIGIT],
        timer: T,
    ) -> Self {
        Self::with_config(state, digit_pins, bit_pins, timer, Config::default())
    }

    pub fn with_config(
        state: &'a DisplayState,
        digit_pins: [P; NUM_DIGITS],
        bit_pins: [P; BITS_PER_DIGIT],
        timer: T,
        config: Config,
    ) -> Self {
        Self {
            state,
            digit_pins,
            bit_pins,
            timer,
            config,
            active_digit: 0,
        }
    }

    pub fn destroy(self) -> ([P; NUM_DIGITS], [P; BITS_PER_DIGIT], T) {
        (self.digit_pins, self.bit_pins, self.timer)
    }

    /// Blanks all digits and starts the recurring tick timer.
    ///
    /// Calling it again only re-arms the timer; the digit currently in turn is kept.
    pub fn begin(&mut self) -> Result<(), BinaryWatchError<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("begin: {}", self.config);

        for pin in self.digit_pins.iter_mut() {
            set_level(pin, self.config.select_polarity.level_for(false))?;
        }
        self.write_bits(0)?;
        self.timer.start(self.config.tick_period);
        Ok(())
    }

    /// Timer interrupt body: re-arms the timer, shows the digit in turn and moves on
    /// to the next one.
    ///
    /// The turn advances even when a pin write fails, so every digit keeps an equal
    /// share of the cycle; the first pin error is returned.
    pub fn on_tick(&mut self) -> Result<(), BinaryWatchError<E>> {
        self.timer.reload();

        let digit = self.active_digit;
        let result = self.show_digit(digit);
        self.active_digit = (digit + 1) % NUM_DIGITS as u8;
        result
    }

    pub fn active_digit(&self) -> u8 {
        self.active_digit
    }

    pub fn state(&self) -> &'a DisplayState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn show_digit(&mut self, digit: u8) -> Result<(), BinaryWatchError<E>> {
        let value = self
            .state
            .digit(digit)
            .map_err(|e: BinaryWatchError| e.widen())?;

        // never two digits lit at once, not even between the two writes below
        for pin in self.digit_pins.iter_mut() {
            set_level(pin, self.config.select_polarity.level_for(false))?;
        }
        set_level(
            &mut self.digit_pins[digit as usize],
            self.config.select_polarity.level_for(true),
        )?;

        self.write_bits(value)
    }

    fn write_bits(&mut self, value: u8) -> Result<(), BinaryWatchError<E>> {
        let value = value & DIGIT_MASK;
        for (bit, pin) in self.bit_pins.iter_mut().enumerate() {
            set_level(pin, self.config.bit_polarity.level_for((value >> bit) & 1 == 1))?;
        }
        Ok(())
    }
}

fn set_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), P::Error> {
    if high {
        pin.set_high()
    } else {
        pin.set_low()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BinaryWatchError<E = Infallible> {
    PinError(E),
    InvalidValue,
    InvalidLocation(u8),
}

impl<E> From<E> for BinaryWatchError<E> {
    fn from(error: E) -> Self {
        BinaryWatchError::PinError(error)
    }
}

impl BinaryWatchError {
    fn widen<E>(self) -> BinaryWatchError<E> {
        match self {
            BinaryWatchError::PinError(never) => match never {},
            BinaryWatchError::InvalidValue => BinaryWatchError::InvalidValue,
            BinaryWatchError::InvalidLocation(digit) => BinaryWatchError::InvalidLocation(digit),
        }
    }
}
