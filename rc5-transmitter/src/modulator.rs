use embedded_hal::{
    blocking::delay::{DelayMs, DelayUs},
    digital::v2::OutputPin,
};

use crate::{
    carrier::Carrier,
    config::TimingConfig,
    delay::SafeDelay,
    timer::{Clock, UsecTimer},
};

/// Drives the IR LED with marks and spaces, generating the carrier in
/// software.
pub struct Modulator<P, D, C> {
    pin: P,
    delay: SafeDelay<D>,
    clock: C,
    carrier: Carrier,
}

impl<P, D, C> Modulator<P, D, C>
where
    P: OutputPin,
    D: DelayUs<u32> + DelayMs<u32>,
    C: Clock,
{
    /// Take ownership of the LED pin and switch the LED off.
    pub fn new(pin: P, delay: D, clock: C, config: TimingConfig) -> Self {
        let mut modulator = Self {
            pin,
            delay: SafeDelay::new(delay, &config),
            clock,
            carrier: Carrier::new(&config),
        };
        modulator.led_off();
        modulator
    }

    pub fn configure(&mut self, frequency_hz: u32, duty_percent: u8) {
        self.carrier.configure(frequency_hz, duty_percent);
        debug!(
            "carrier {} Hz: on {} us, off {} us",
            self.carrier.frequency_hz(),
            self.carrier.on_period_us(),
            self.carrier.off_period_us()
        );
    }

    pub fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn led_on(&mut self) {
        self.pin.set_high().ok();
    }

    fn led_off(&mut self) {
        self.pin.set_low().ok();
    }

    /// Send a mark of `usec` microseconds, returning the number of carrier
    /// pulses emitted.
    ///
    /// Progress is measured with the clock rather than by summing the
    /// requested delays, so the overhead of each delay call does not stretch
    /// the mark.
    pub fn mark(&mut self, usec: u32) -> u16 {
        if !self.carrier.is_modulated() {
            self.led_on();
            self.delay.delay_us(usec);
            self.led_off();
            return 1;
        }

        let on = self.carrier.on_period_us();
        let off = self.carrier.off_period_us();
        let mut counter: u16 = 0;
        let timer = UsecTimer::start(&self.clock);
        let mut elapsed = timer.elapsed(&self.clock);

        while elapsed < usec {
            self.led_on();
            // Don't overrun the end of the mark
            self.delay.delay_us(on.min(usec - elapsed));
            self.led_off();
            counter = counter.saturating_add(1);
            if elapsed.saturating_add(on) >= usec {
                return counter;
            }
            self.delay.delay_us((usec - elapsed - on).min(off));
            elapsed = timer.elapsed(&self.clock);
        }
        counter
    }

    /// Turn the LED off for `usec` microseconds.
    pub fn space(&mut self, usec: u32) {
        self.led_off();
        if usec == 0 {
            return;
        }
        self.delay.delay_us(usec);
    }

    pub fn release(self) -> (P, D, C) {
        (self.pin, self.delay.release(), self.clock)
    }
}
