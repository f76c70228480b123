use core::cell::Cell;

use avr_device::interrupt::Mutex;

use super::hal;

/// Timer ticks per millisecond interrupt, with a /64 prescaler.
#[cfg(feature = "atmega328p")]
const TICKS_PER_MS: u8 = 250;
#[cfg(feature = "attiny85")]
const TICKS_PER_MS: u8 = 125;

const US_PER_TICK: u32 = 1000 / TICKS_PER_MS as u32;

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Microsecond clock driven by Timer/Counter 0.
pub struct Micros {
    tc0: hal::pac::TC0,
}

impl Micros {
    pub fn new(tc0: hal::pac::TC0) -> Self {
        tc0.tccr0a.write(|w| w.wgm0().ctc());
        tc0.ocr0a.write(|w| w.bits(TICKS_PER_MS - 1));
        tc0.tccr0b.write(|w| w.cs0().prescale_64());
        #[cfg(feature = "atmega328p")]
        tc0.timsk0.write(|w| w.ocie0a().set_bit());
        #[cfg(feature = "attiny85")]
        tc0.timsk.modify(|_, w| w.ocie0a().set_bit());
        Self { tc0 }
    }

    #[cfg(feature = "atmega328p")]
    fn overflow_pending(&self) -> bool {
        self.tc0.tifr0.read().ocf0a().bit_is_set()
    }

    #[cfg(feature = "attiny85")]
    fn overflow_pending(&self) -> bool {
        self.tc0.tifr.read().ocf0a().bit_is_set()
    }
}

/// Called from the compare match interrupt.
pub fn tick() {
    avr_device::interrupt::free(|cs| {
        let millis = MILLIS.borrow(cs);
        millis.set(millis.get().wrapping_add(1));
    });
}

impl rc5_transmitter::Clock for Micros {
    fn now_us(&self) -> u32 {
        avr_device::interrupt::free(|cs| {
            let mut ms = MILLIS.borrow(cs).get();
            let mut ticks = self.tc0.tcnt0.read().bits();
            // The counter wrapped but the interrupt has not run yet
            if self.overflow_pending() {
                ms = ms.wrapping_add(1);
                ticks = self.tc0.tcnt0.read().bits();
            }
            ms.wrapping_mul(1000)
                .wrapping_add(ticks as u32 * US_PER_TICK)
        })
    }
}
