//! UART serial communication abstractions
//!
//! The link is a plain byte stream: no framing, no buffering exposed to the
//! caller, and at most one byte in flight in each direction. Every operation
//! except [`UartRx::byte_available`] blocks until the peripheral is ready.

use core::fmt;

/// UART transmitter
pub trait UartTx {
    /// Write a single byte
    ///
    /// Blocks until the transmit register can accept the byte. Transmit
    /// failures are not reported to the caller.
    fn write_byte(&mut self, byte: u8);

    /// Write every byte of `data` in order
    fn write_all(&mut self, data: &[u8]) {
        for &byte in data {
            self.write_byte(byte);
        }
    }

    /// Write a string as raw bytes
    fn write_text(&mut self, s: &str) {
        self.write_all(s.as_bytes());
    }
}

/// UART receiver
pub trait UartRx {
    /// Check whether a complete byte is waiting, without consuming it
    ///
    /// This is the only non-blocking operation on the link.
    fn byte_available(&mut self) -> bool;

    /// Read a single byte
    ///
    /// Blocks until a byte has fully arrived. End of stream and line errors
    /// are reported as [`RxFault`].
    fn read_byte(&mut self) -> Result<u8, RxFault>;
}

/// Reasons a read from the link can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxFault {
    /// The input stream has ended
    EndOfStream,
    /// Framing error (missing stop bit)
    Framing,
    /// Parity error
    Parity,
    /// Receiver overrun, a byte was lost
    Overrun,
    /// Line held low for longer than a frame
    Break,
    /// Other transport error
    Other,
}

impl RxFault {
    /// Check if this fault is the end of the input stream
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, RxFault::EndOfStream)
    }
}

impl fmt::Display for RxFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RxFault::EndOfStream => "end of file",
            RxFault::Framing => "framing",
            RxFault::Parity => "parity",
            RxFault::Overrun => "overrun",
            RxFault::Break => "break",
            RxFault::Other => "unknown",
        };
        f.write_str(text)
    }
}

/// UART configuration
///
/// Set once at startup and never renegotiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 8 data bits, no parity, one stop bit at the given baud rate
    pub const fn eight_n_one(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::eight_n_one(9600)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    struct Recorder {
        bytes: [u8; 16],
        len: usize,
    }

    impl UartTx for Recorder {
        fn write_byte(&mut self, byte: u8) {
            self.bytes[self.len] = byte;
            self.len += 1;
        }
    }

    #[test]
    fn test_default_is_9600_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    fn test_write_text_sends_bytes_in_order() {
        let mut tx = Recorder {
            bytes: [0; 16],
            len: 0,
        };
        tx.write_text("ok\r\n");
        assert_eq!(&tx.bytes[..tx.len], b"ok\r\n");
    }

    #[test]
    fn test_fault_display() {
        assert_eq!(RxFault::EndOfStream.to_string(), "end of file");
        assert_eq!(RxFault::Overrun.to_string(), "overrun");
        assert!(RxFault::EndOfStream.is_end_of_stream());
        assert!(!RxFault::Framing.is_end_of_stream());
    }
}
