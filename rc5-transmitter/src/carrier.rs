use crate::config::{TimingConfig, DUTY_DEFAULT, DUTY_MAX};

/// Period in microseconds of a carrier at `hz`, rounded to the nearest
/// microsecond and never less than one.
pub const fn calc_usec_period(hz: u32, offset: i8) -> u32 {
    // Zero would divide by zero
    let hz = if hz == 0 { 1 } else { hz };
    let period = (1_000_000 + hz / 2) / hz;
    let period = period as i64 + offset as i64;
    if period < 1 {
        1
    } else {
        period as u32
    }
}

/// On and off times of one carrier cycle.
///
/// Integer microsecond timing means small frequency or duty changes may have
/// no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carrier {
    frequency_hz: u32,
    duty_percent: u8,
    on_period_us: u32,
    off_period_us: u32,
    modulation: bool,
    period_offset: i8,
}

impl Carrier {
    pub fn new(config: &TimingConfig) -> Self {
        let mut carrier = Self {
            frequency_hz: 0,
            duty_percent: DUTY_MAX,
            on_period_us: 0,
            off_period_us: 0,
            modulation: config.modulation,
            period_offset: config.effective_offset(),
        };
        carrier.configure(rc5_protocol::CARRIER_HZ, DUTY_DEFAULT);
        carrier
    }

    /// Set the carrier frequency and duty cycle.
    ///
    /// Frequencies below 1000 are taken as kHz. The duty cycle is clamped to
    /// 100% and forced to 100% when modulation is disabled.
    pub fn configure(&mut self, frequency_hz: u32, duty_percent: u8) {
        self.duty_percent = if self.modulation {
            duty_percent.min(DUTY_MAX)
        } else {
            DUTY_MAX
        };
        self.frequency_hz = if frequency_hz < 1000 {
            frequency_hz * 1000
        } else {
            frequency_hz
        };

        let period = calc_usec_period(self.frequency_hz, self.period_offset);
        self.on_period_us = period * self.duty_percent as u32 / DUTY_MAX as u32;
        self.off_period_us = period - self.on_period_us;
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    pub fn duty_percent(&self) -> u8 {
        self.duty_percent
    }

    pub fn on_period_us(&self) -> u32 {
        self.on_period_us
    }

    pub fn off_period_us(&self) -> u32 {
        self.off_period_us
    }

    pub fn period_us(&self) -> u32 {
        self.on_period_us + self.off_period_us
    }

    pub fn modulation(&self) -> bool {
        self.modulation
    }

    /// Whether marks need to toggle the LED at all.
    pub fn is_modulated(&self) -> bool {
        self.modulation && self.duty_percent < DUTY_MAX
    }
}
