use embedded_hal::blocking::delay::{DelayMs, DelayUs};

use crate::config::TimingConfig;

/// Microsecond delay that stays accurate and watchdog friendly for long
/// requests.
pub struct SafeDelay<D> {
    delay: D,
    max_accurate_us: u32,
    allow_delay_calls: bool,
}

impl<D> SafeDelay<D>
where
    D: DelayUs<u32> + DelayMs<u32>,
{
    pub fn new(delay: D, config: &TimingConfig) -> Self {
        Self {
            delay,
            max_accurate_us: config.max_accurate_delay_us.max(1),
            allow_delay_calls: config.allow_delay_calls,
        }
    }

    pub fn delay_us(&mut self, mut usec: u32) {
        if usec > self.max_accurate_us && self.allow_delay_calls {
            // Whole milliseconds first, the remainder below
            self.delay.delay_ms(usec / 1000);
            usec %= 1000;
        }
        while usec > self.max_accurate_us {
            self.delay.delay_us(self.max_accurate_us);
            usec -= self.max_accurate_us;
        }
        self.delay.delay_us(usec);
    }

    pub fn release(self) -> D {
        self.delay
    }
}
