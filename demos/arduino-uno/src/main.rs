#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use core::cell::RefCell;

use arduino_hal::hal::port::Dynamic;
use arduino_hal::pac::TC1;
use arduino_hal::port::{mode::Output, Pin};
use arduino_hal::prelude::*;
use avr_device::interrupt::Mutex;
use binary_watch_shield::{
    overflow_reload, BinaryWatchShield, DisplayState, MicrosDurationU32, TickTimer, CLOCK_HZ,
    TIMER1_RELOAD_VALUE,
};
use panic_halt as _;

type ShieldPin = Pin<Output, Dynamic>;
type Shield = BinaryWatchShield<'static, ShieldPin, Timer1>;

static DISPLAY: DisplayState = DisplayState::new();
static SHIELD: Mutex<RefCell<Option<Shield>>> = Mutex::new(RefCell::new(None));

struct Timer1 {
    tc1: TC1,
    reload: u16,
}

impl TickTimer for Timer1 {
    fn start(&mut self, period: MicrosDurationU32) {
        self.reload = overflow_reload(CLOCK_HZ, period).unwrap_or(TIMER1_RELOAD_VALUE);
        self.tc1.tcnt1.write(|w| w.bits(self.reload));
        self.tc1.timsk1.write(|w| w.toie1().set_bit());
        self.tc1.tccr1b.write(|w| w.cs1().direct());
    }

    fn reload(&mut self) {
        self.tc1.tcnt1.write(|w| w.bits(self.reload));
    }
}

#[avr_device::interrupt(atmega328p)]
fn TIMER1_OVF() {
    avr_device::interrupt::free(|cs| {
        if let Some(shield) = SHIELD.borrow(cs).borrow_mut().as_mut() {
            shield.on_tick().ok();
        }
    });
}

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let digit_pins = [
        pins.d13.into_output().downgrade(),
        pins.d11.into_output().downgrade(),
        pins.d6.into_output().downgrade(),
        pins.d3.into_output().downgrade(),
    ];
    let bit_pins = [
        pins.d12.into_output().downgrade(),
        pins.d4.into_output().downgrade(),
        pins.d7.into_output().downgrade(),
        pins.d5.into_output().downgrade(),
    ];
    let timer = Timer1 {
        tc1: dp.TC1,
        reload: TIMER1_RELOAD_VALUE,
    };

    let mut shield = BinaryWatchShield::new(&DISPLAY, digit_pins, bit_pins, timer);
    shield.begin().unwrap();
    avr_device::interrupt::free(|cs| SHIELD.borrow(cs).replace(Some(shield)));
    unsafe { avr_device::interrupt::enable() };

    ufmt::uwriteln!(&mut serial, "Counting nibbles...").unwrap_infallible();
    for value in 0..=binary_watch_shield::MAX_DIGIT_VALUE {
        DISPLAY.set_display(value, value, value, value);
        arduino_hal::delay_ms(200);
    }

    ufmt::uwriteln!(&mut serial, "Counting up...").unwrap_infallible();
    let mut i: u16 = 0;
    loop {
        DISPLAY.display_value(i).unwrap();
        i = (i + 1) % 10000;

        arduino_hal::delay_ms(300);
    }
}
