use embedded_hal::{
    blocking::delay::{DelayMs, DelayUs},
    digital::v2::OutputPin,
};
use rc5_protocol::{
    Frame, Symbol, CARRIER_DUTY_PERCENT, CARRIER_HZ, MIN_COMMAND_LENGTH_US, MIN_GAP_US, T1_US,
};

use crate::{
    config::TimingConfig,
    modulator::Modulator,
    timer::{Clock, UsecTimer},
};

/// Sends Philips RC-5 and RC-5X messages.
pub struct Rc5Transmitter<P, D, C> {
    ir: Modulator<P, D, C>,
}

impl<P, D, C> Rc5Transmitter<P, D, C>
where
    P: OutputPin,
    D: DelayUs<u32> + DelayMs<u32>,
    C: Clock,
{
    pub fn new(pin: P, delay: D, clock: C, config: TimingConfig) -> Self {
        Self {
            ir: Modulator::new(pin, delay, clock, config),
        }
    }

    pub fn modulator(&self) -> &Modulator<P, D, C> {
        &self.ir
    }

    /// Send the low `nbits` bits of `data`, then `repeat` more copies.
    ///
    /// Messages of 14 bits or more are sent as RC-5X. Messages wider than 64
    /// bits are silently dropped. The caller is responsible for flipping the
    /// toggle bit between key presses.
    pub fn send_rc5(&mut self, data: u64, nbits: u16, repeat: u16) {
        match Frame::new(data, nbits) {
            Some(frame) => self.send_frame(&frame, repeat),
            None => {
                debug!("rc5: dropping {} bit message", nbits);
            }
        }
    }

    /// Like [`send_rc5`](Self::send_rc5), but for frames that follow a
    /// previous call without a pause, such as a held key sent one frame at a
    /// time. The leading space of the first frame is sent.
    pub fn continue_rc5(&mut self, data: u64, nbits: u16, repeat: u16) {
        match Frame::new(data, nbits) {
            Some(frame) => self.send_burst(&frame, repeat, false),
            None => {
                debug!("rc5: dropping {} bit message", nbits);
            }
        }
    }

    pub fn send_frame(&mut self, frame: &Frame, repeat: u16) {
        // The LED has been idle before the first frame, so its leading space
        // is implied
        self.send_burst(frame, repeat, true);
    }

    fn send_burst(&mut self, frame: &Frame, repeat: u16, mut skip_space: bool) {
        self.ir.configure(CARRIER_HZ, CARRIER_DUTY_PERCENT);

        let mut timer = UsecTimer::start(self.ir.clock());
        for _ in 0..=repeat {
            timer.reset(self.ir.clock());

            let mut symbols = frame.symbols();
            if skip_space {
                symbols.next();
                skip_space = false;
            }
            for symbol in symbols {
                match symbol {
                    Symbol::Mark => {
                        self.ir.mark(T1_US);
                    }
                    Symbol::Space => self.ir.space(T1_US),
                }
            }

            // Pad the frame out to the minimum command length
            let elapsed = timer.elapsed(self.ir.clock());
            self.ir
                .space(MIN_GAP_US.max(MIN_COMMAND_LENGTH_US.saturating_sub(elapsed)));
        }
    }

    pub fn release(self) -> (P, D, C) {
        self.ir.release()
    }
}
