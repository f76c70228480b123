#![no_std]

//! Philips RC-5 and RC-5X framing.
//!
//! A frame is two start bits followed by the data bits, most significant bit
//! first, each Manchester coded into two half-bits of [`T1_US`]. A `1` is a
//! space followed by a mark, a `0` is a mark followed by a space.

#[cfg(test)]
mod test;

/// Half-bit period in microseconds.
pub const T1_US: u32 = 889;
/// Minimum length of a frame including its trailing gap.
pub const MIN_COMMAND_LENGTH_US: u32 = 113_778;
/// Bits in a standard frame, including both start bits.
pub const RAW_BITS: u16 = 14;
/// Data bits in a standard frame.
pub const RC5_BITS: u16 = RAW_BITS - 2;
/// Bit count at which a message is sent as RC-5X.
pub const RC5X_BITS: u16 = RAW_BITS;
/// Minimum silence after a frame.
pub const MIN_GAP_US: u32 = MIN_COMMAND_LENGTH_US - RAW_BITS as u32 * (2 * T1_US);
/// The toggle bit, the 12th bit of a message.
pub const TOGGLE_MASK: u16 = 0x800;
/// Carrier frequency used by RC-5 remotes.
pub const CARRIER_HZ: u32 = 36_000;
/// Carrier duty cycle used by RC-5 remotes.
pub const CARRIER_DUTY_PERCENT: u8 = 25;

/// Encode a standard RC-5 message from a 5 bit address and a 6 bit command.
pub const fn encode_rc5(address: u8, command: u8, key_released: bool) -> u16 {
    (key_released as u16) << (RC5_BITS - 1)
        | ((address & 0x1f) as u16) << 6
        | (command & 0x3f) as u16
}

/// Encode an RC-5X message from a 5 bit address and a 7 bit command.
///
/// The 7th command bit lands in bit 13, which is sent inverted as the field
/// bit.
pub const fn encode_rc5x(address: u8, command: u8, key_released: bool) -> u16 {
    let s2 = ((command >> 6) & 1) as u16;
    s2 << (RC5X_BITS - 1) | encode_rc5(address, command, key_released)
}

/// Flip the toggle bit. Callers flip it on every new key press.
pub const fn toggle_rc5(data: u64) -> u64 {
    data ^ TOGGLE_MASK as u64
}

pub const fn is_toggled(data: u64) -> bool {
    data & TOGGLE_MASK as u64 != 0
}

/// Address, command and toggle state of one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rc5Command {
    pub address: u8,
    pub command: u8,
    pub toggle: bool,
}

impl Rc5Command {
    pub const fn new(address: u8, command: u8) -> Self {
        Self {
            address,
            command,
            toggle: false,
        }
    }

    /// 12 bit standard message.
    pub const fn encode(&self) -> u16 {
        encode_rc5(self.address, self.command, self.toggle)
    }

    /// 13 bit extended message, for commands above 63.
    pub const fn encode_x(&self) -> u16 {
        encode_rc5x(self.address, self.command, self.toggle)
    }

    pub fn flip_toggle(&mut self) {
        self.toggle = !self.toggle;
    }
}

/// One half-bit of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Mark,
    Space,
}

/// A message ready for transmission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    data: u64,
    data_bits: u16,
    field_bit: bool,
    extended: bool,
}

impl Frame {
    /// Build a frame from the low `nbits` bits of `data`.
    ///
    /// Returns `None` if `nbits` is wider than the data word. At
    /// [`RC5X_BITS`] or more the top bit is consumed as the inverted field
    /// bit and is not sent as data.
    pub const fn new(data: u64, nbits: u16) -> Option<Self> {
        if nbits > u64::BITS as u16 {
            return None;
        }
        let mut data_bits = nbits;
        let mut field_bit = true;
        let extended = nbits >= RC5X_BITS;
        if extended {
            field_bit = (data >> (nbits - 1)) & 1 == 0;
            data_bits -= 1;
        }
        Some(Self {
            data,
            data_bits,
            field_bit,
            extended,
        })
    }

    pub const fn field_bit(&self) -> bool {
        self.field_bit
    }

    /// Number of data bits sent after the two start bits.
    pub const fn data_bits(&self) -> u16 {
        self.data_bits
    }

    pub const fn is_extended(&self) -> bool {
        self.extended
    }

    /// Bit `index` of the frame, counting the two start bits.
    const fn bit(&self, index: u16) -> bool {
        match index {
            0 => true,
            1 => self.field_bit,
            _ => (self.data >> (self.data_bits - 1 - (index - 2))) & 1 != 0,
        }
    }

    /// Half-bits of the frame, from the leading space of the first start bit
    /// to the last half of the final data bit.
    pub fn symbols(&self) -> Symbols {
        Symbols {
            frame: *self,
            index: 0,
            len: (self.data_bits + 2) * 2,
        }
    }
}

pub struct Symbols {
    frame: Frame,
    index: u16,
    len: u16,
}

impl Iterator for Symbols {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        if self.index >= self.len {
            return None;
        }
        let bit = self.frame.bit(self.index / 2);
        let second_half = self.index % 2 == 1;
        self.index += 1;
        // 1 is space then mark, 0 is mark then space
        if bit == second_half {
            Some(Symbol::Mark)
        } else {
            Some(Symbol::Space)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Symbols {}
