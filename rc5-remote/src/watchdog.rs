use hal::wdt::WdtOps;

use super::hal;

pub struct Watchdog {
    wdt: hal::pac::WDT,
}

impl Watchdog {
    pub fn new(mut wdt: hal::pac::WDT, mcusr: &hal::pac::cpu::MCUSR) -> Self {
        wdt.raw_init(mcusr);
        Self { wdt }
    }

    pub fn start(&mut self, timeout: hal::wdt::Timeout) -> Result<(), ()> {
        self.wdt.raw_start(timeout)
    }

    /// Must be called at least once per timeout, including while a burst is
    /// being sent.
    pub fn feed(&mut self) {
        self.wdt.raw_feed();
    }
}
