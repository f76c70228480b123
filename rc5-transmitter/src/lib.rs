#![cfg_attr(not(test), no_std)]

//! Software bit-banged RC-5 infrared transmitter.
//!
//! The carrier is generated in software by toggling a GPIO pin, so every
//! transmit call blocks until the whole burst has been emitted and must not be
//! interrupted or re-entered. Disable interrupts around it if other code may
//! preempt the caller.
//!
//! Enabling the `defmt` feature logs carrier changes and dropped messages at
//! debug level. The final binary must provide a `defmt` global logger, for
//! example `defmt-rtt`, and set `DEFMT_LOG=debug` to see them.

#[macro_use]
mod fmt;

pub mod carrier;
pub mod config;
pub mod delay;
pub mod modulator;
pub mod rc5;
pub mod timer;


pub use carrier::{calc_usec_period, Carrier};
pub use config::{Platform, TimingConfig};
pub use modulator::Modulator;
pub use rc5::Rc5Transmitter;
pub use timer::{Clock, UsecTimer};
