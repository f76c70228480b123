/// Free running microsecond counter. It may wrap.
pub trait Clock {
    fn now_us(&self) -> u32;
}

impl<C: Clock> Clock for &C {
    fn now_us(&self) -> u32 {
        (**self).now_us()
    }
}

/// Measures time since it was last reset.
#[derive(Clone, Copy, Debug)]
pub struct UsecTimer {
    start: u32,
}

impl UsecTimer {
    pub fn start<C: Clock>(clock: &C) -> Self {
        Self {
            start: clock.now_us(),
        }
    }

    pub fn reset<C: Clock>(&mut self, clock: &C) {
        self.start = clock.now_us();
    }

    pub fn elapsed<C: Clock>(&self, clock: &C) -> u32 {
        clock.now_us().wrapping_sub(self.start)
    }
}
