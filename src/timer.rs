use fugit::MicrosDurationU32;

/// Recurring hardware timer that raises the multiplexing interrupt.
///
/// The interrupt handler for the timer should call
/// [`BinaryWatchShield::on_tick`](crate::BinaryWatchShield::on_tick).
pub trait TickTimer {
    /// Programs the timer to fire every `period`, enables its interrupt and starts it.
    /// Calling it again re-arms the timer with the same period.
    fn start(&mut self, period: MicrosDurationU32);

    /// Reloads the countdown so the next expiry is one period away.
    fn reload(&mut self);
}

/// Counter preload for a 16-bit overflow timer running at `clock_hz` with no prescaler.
///
/// Returns `None` if `period` rounds to zero ticks or does not fit in 16 bits.
pub const fn overflow_reload(clock_hz: u32, period: MicrosDurationU32) -> Option<u16> {
    let ticks = clock_hz as u64 * period.to_micros() as u64 / 1_000_000;
    if ticks == 0 || ticks > 0x1_0000 {
        return None;
    }
    Some((0x1_0000 - ticks) as u16)
}
