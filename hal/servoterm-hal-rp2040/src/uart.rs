//! Serial link adapters
//!
//! The RP2040 UART is wrapped by embassy-rp as an `embedded-io` byte stream.
//! [`SerialRx`] and [`SerialTx`] turn any such stream into the blocking,
//! single-byte `UartRx`/`UartTx` capabilities the control loop expects.

use embassy_rp::uart::{self as rp_uart, Error as UartError};
use embedded_io::{Read, ReadReady, Write};
use servoterm_hal::uart::{DataBits, Parity, StopBits};
use servoterm_hal::{RxFault, UartConfig, UartRx, UartTx};

/// Stream errors that map onto a receive fault
pub trait LineError {
    /// Fault reported to the control loop
    fn rx_fault(&self) -> RxFault;
}

impl LineError for UartError {
    fn rx_fault(&self) -> RxFault {
        match self {
            UartError::Overrun => RxFault::Overrun,
            UartError::Break => RxFault::Break,
            UartError::Parity => RxFault::Parity,
            UartError::Framing => RxFault::Framing,
            #[allow(unreachable_patterns)]
            _ => RxFault::Other,
        }
    }
}

impl LineError for embedded_io::ErrorKind {
    fn rx_fault(&self) -> RxFault {
        RxFault::Other
    }
}

/// Build the embassy-rp line settings for a link configuration
pub fn rp_config(config: &UartConfig) -> rp_uart::Config {
    let mut rp = rp_uart::Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => rp_uart::DataBits::DataBits7,
        DataBits::Eight => rp_uart::DataBits::DataBits8,
    };
    rp.parity = match config.parity {
        Parity::None => rp_uart::Parity::ParityNone,
        Parity::Even => rp_uart::Parity::ParityEven,
        Parity::Odd => rp_uart::Parity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => rp_uart::StopBits::STOP1,
        StopBits::Two => rp_uart::StopBits::STOP2,
    };
    rp
}

/// Receiving half of the serial link
pub struct SerialRx<R> {
    inner: R,
}

impl<R> SerialRx<R> {
    /// Wrap a byte stream
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Release the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> UartRx for SerialRx<R>
where
    R: Read + ReadReady,
    R::Error: LineError,
{
    fn byte_available(&mut self) -> bool {
        // A pending error counts as available so the next read reports it
        self.inner.read_ready().unwrap_or(true)
    }

    fn read_byte(&mut self) -> Result<u8, RxFault> {
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf) {
            Ok(0) => Err(RxFault::EndOfStream),
            Ok(_) => Ok(buf[0]),
            Err(e) => Err(e.rx_fault()),
        }
    }
}

/// Transmitting half of the serial link
pub struct SerialTx<T> {
    inner: T,
}

impl<T> SerialTx<T> {
    /// Wrap a byte sink
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Release the underlying sink
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Write> UartTx for SerialTx<T> {
    fn write_byte(&mut self, byte: u8) {
        self.write_all(&[byte]);
    }

    fn write_all(&mut self, bytes: &[u8]) {
        // Block until the bytes have left the transmit buffer
        let result = self
            .inner
            .write_all(bytes)
            .and_then(|()| self.inner.flush());
        if result.is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("serial write dropped {} bytes", bytes.len());
        }
    }
}
