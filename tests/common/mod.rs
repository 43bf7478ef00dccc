#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;

use binary_watch_shield::{
    BinaryWatchShield, DisplayState, MicrosDurationU32, TickTimer, BITS_PER_DIGIT, NUM_DIGITS,
};

const LINES: usize = NUM_DIGITS + BITS_PER_DIGIT;

/// Levels of all eight lines: digit selects first, then bit lines.
#[derive(Default)]
pub struct Bus {
    pub levels: [bool; LINES],
    pub writes: usize,
    pub max_selected: usize,
}

impl Bus {
    fn write(&mut self, line: usize, high: bool) {
        self.levels[line] = high;
        self.writes += 1;
        self.max_selected = self.max_selected.max(self.selected_count());
    }

    pub fn selected_count(&self) -> usize {
        self.levels[..NUM_DIGITS].iter().filter(|&&l| l).count()
    }

    pub fn selected(&self) -> Option<usize> {
        self.levels[..NUM_DIGITS].iter().position(|&l| l)
    }

    pub fn bits(&self) -> [bool; BITS_PER_DIGIT] {
        let mut bits = [false; BITS_PER_DIGIT];
        bits.copy_from_slice(&self.levels[NUM_DIGITS..]);
        bits
    }
}

pub struct MockPin<'a> {
    line: usize,
    bus: &'a RefCell<Bus>,
}

impl embedded_hal::digital::ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.borrow_mut().write(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.borrow_mut().write(self.line, true);
        Ok(())
    }
}

#[derive(Default)]
pub struct TimerLog {
    pub starts: Vec<MicrosDurationU32>,
    pub reloads: usize,
}

pub struct MockTimer<'a> {
    log: &'a RefCell<TimerLog>,
}

impl TickTimer for MockTimer<'_> {
    fn start(&mut self, period: MicrosDurationU32) {
        self.log.borrow_mut().starts.push(period);
    }

    fn reload(&mut self) {
        self.log.borrow_mut().reloads += 1;
    }
}

pub type MockShield<'a> = BinaryWatchShield<'a, MockPin<'a>, MockTimer<'a>>;

pub fn pins<'a, const N: usize>(bus: &'a RefCell<Bus>, first_line: usize) -> [MockPin<'a>; N] {
    core::array::from_fn(|i| MockPin {
        line: first_line + i,
        bus,
    })
}

pub fn shield<'a>(
    state: &'a DisplayState,
    bus: &'a RefCell<Bus>,
    timer: &'a RefCell<TimerLog>,
) -> MockShield<'a> {
    BinaryWatchShield::new(
        state,
        pins(bus, 0),
        pins(bus, NUM_DIGITS),
        MockTimer { log: timer },
    )
}

/// Bit line levels for `value` on the shield's active-low wiring, LSB first.
pub fn active_low_bits(value: u8) -> [bool; BITS_PER_DIGIT] {
    core::array::from_fn(|bit| (value >> bit) & 1 == 0)
}
