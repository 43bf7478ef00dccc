use fugit::MicrosDurationU32;

use crate::constants::TICK_PERIOD_MS;

/// Electrical level that means "asserted" on a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Returns `true` if the line must be driven high to represent `asserted`.
    pub const fn level_for(self, asserted: bool) -> bool {
        match self {
            Polarity::ActiveHigh => asserted,
            Polarity::ActiveLow => !asserted,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub select_polarity: Polarity,
    pub bit_polarity: Polarity,
    pub tick_period: MicrosDurationU32,
}

impl Config {
    /// The shield's own wiring: high-side digit selects, active-low bit lines, 1 ms per digit.
    pub const fn new() -> Self {
        Self {
            select_polarity: Polarity::ActiveHigh,
            bit_polarity: Polarity::ActiveLow,
            tick_period: MicrosDurationU32::millis(TICK_PERIOD_MS),
        }
    }

    pub const fn with_select_polarity(mut self, polarity: Polarity) -> Self {
        self.select_polarity = polarity;
        self
    }

    pub const fn with_bit_polarity(mut self, polarity: Polarity) -> Self {
        self.bit_polarity = polarity;
        self
    }

    pub const fn with_tick_period(mut self, period: MicrosDurationU32) -> Self {
        self.tick_period = period;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
