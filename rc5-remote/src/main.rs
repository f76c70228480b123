#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

#[cfg(feature = "atmega328p")]
pub use atmega_hal as hal;
#[cfg(feature = "attiny85")]
pub use attiny_hal as hal;
#[cfg(feature = "atmega328p")]
use hal::usart::BaudrateArduinoExt;
use hal::{port::Pin, prelude::*};
use panic_halt as _;
use rc5_protocol::Rc5Command;
use rc5_transmitter::{Platform, Rc5Transmitter, TimingConfig};

mod clock;
mod watchdog;

// Software carrier generation needs a fast clock. On the ATtiny85 this
// requires the CKDIV8 fuse to be unprogrammed.
#[cfg(feature = "atmega328p")]
type Speed = hal::clock::MHz16;
#[cfg(feature = "attiny85")]
type Speed = hal::clock::MHz8;
type Delay = hal::delay::Delay<Speed>;

/// RC-5 system address, 0 is TV 1
const ADDRESS: u8 = 0;
/// Standby
const COMMAND: u8 = 12;

const TIMING: TimingConfig = TimingConfig::new(Platform::Uncalibrated);

#[cfg(feature = "atmega328p")]
avr_hal_generic::renamed_pins! {
    type Pin = Pin;

    pub struct Pins from hal::Pins {
        pub led: hal::port::PB5 = pb5,
        pub button: hal::port::PD2 = pd2,
        pub uart_rx: hal::port::PD0 = pd0,
        pub uart_tx: hal::port::PD1 = pd1,
        pub ir: hal::port::PB1 = pb1,
    }
}

#[cfg(feature = "attiny85")]
avr_hal_generic::renamed_pins! {
    type Pin = Pin;

    pub struct Pins from hal::Pins {
        pub led: hal::port::PB1 = pb1,
        pub button: hal::port::PB3 = pb3,
        pub ir: hal::port::PB4 = pb4,
    }
}

#[cfg(feature = "attiny85")]
#[avr_device::interrupt(attiny85)]
fn TIMER0_COMPA() {
    clock::tick();
}

#[cfg(feature = "atmega328p")]
#[avr_device::interrupt(atmega328p)]
fn TIMER0_COMPA() {
    clock::tick();
}

#[hal::entry]
fn main() -> ! {
    let dp = hal::Peripherals::take().unwrap();
    let pins = Pins::with_mcu_pins(hal::pins!(dp));

    let mut led = pins.led.into_output();
    let button = pins.button.into_pull_up_input();

    let mut watchdog = watchdog::Watchdog::new(dp.WDT, &dp.CPU.mcusr);
    watchdog.start(hal::wdt::Timeout::Ms1000).unwrap();

    // The 1 ms tick stays enabled while sending and stretches the carrier
    // pulse it lands in by a few us. Marks re-read the clock, so the error
    // does not accumulate.
    let micros = clock::Micros::new(dp.TC0);
    unsafe { avr_device::interrupt::enable() };

    #[cfg(feature = "atmega328p")]
    let mut uart = hal::usart::Usart0::<Speed>::new(
        dp.USART0,
        pins.uart_rx,
        pins.uart_tx.into_output(),
        9600.into_baudrate(),
    );

    let mut ir = Rc5Transmitter::new(pins.ir.into_output(), Delay::new(), micros, TIMING);
    let mut command = Rc5Command::new(ADDRESS, COMMAND);
    let mut pressed = false;

    #[cfg(feature = "atmega328p")]
    ufmt::uwriteln!(&mut uart, "Booted").void_unwrap();

    loop {
        watchdog.feed();

        // Button and LED are active low
        if button.is_low() {
            let held = pressed;
            if !pressed {
                // New key press
                command.flip_toggle();
                pressed = true;

                #[cfg(feature = "atmega328p")]
                ufmt::uwriteln!(
                    &mut uart,
                    "address: {}, command: {}, toggle: {}",
                    command.address,
                    command.command,
                    command.toggle as u8
                )
                .void_unwrap();
            }

            led.set_low();
            // One frame at a time so the watchdog is fed while the key is held
            let data = command.encode() as u64;
            if held {
                ir.continue_rc5(data, rc5_protocol::RC5_BITS, 0);
            } else {
                ir.send_rc5(data, rc5_protocol::RC5_BITS, 0);
            }
            led.set_high();
        } else {
            pressed = false;
            led.set_high();
            Delay::new().delay_ms(10u8);
        }
    }
}
