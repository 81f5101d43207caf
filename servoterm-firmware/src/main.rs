//! Servoterm - Serial Servo Terminal Firmware
//!
//! Drives one hobby servo from single-key commands typed on a serial
//! terminal. Every refresh frame the firmware reads at most one byte,
//! updates the commanded pulse width and emits one pulse on the servo line.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use servoterm_core::startup::BLINK_DURATION_MS;
use servoterm_core::{announce, Blinker, ControlLoop, ServoState};
use servoterm_hal_rp2040::memory::free_ram;
use servoterm_hal_rp2040::uart::rp_config;
use servoterm_hal_rp2040::{HalDelay, HalOutput, SerialRx, SerialTx};

use crate::console::LoggedConsole;

mod config;
mod console;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
// RX ring matches the 32-byte hardware FIFO
static RX_BUF: StaticCell<[u8; 32]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Servoterm firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let servo_config = config::servo_config();
    let loop_config = config::loop_config();

    // Onboard LED (Pico: GPIO25) flashes once to show the board is alive
    let mut delay = HalDelay::new(Delay);
    let mut blinker = Blinker::new(HalOutput::new(Output::new(p.PIN_25, Level::Low)));
    blinker.flash(BLINK_DURATION_MS, &mut delay);

    // Serial terminal on UART0 (TX=GPIO0, RX=GPIO1)
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 32]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, rp_config(&config::UART));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    let mut tx = SerialTx::new(tx);
    info!("UART initialized at {} baud", config::UART.baudrate);

    let free = free_ram();
    info!("Free RAM: {} bytes", free);

    // Servo signal on GPIO15
    let pulse = announce(
        &mut tx,
        Some(free),
        HalOutput::new(Output::new(p.PIN_15, Level::Low)),
    );

    info!(
        "Servo: width={}us range=[{}, {}] step={}us overhead={}us",
        servo_config.default_width_us,
        servo_config.width_min_us,
        servo_config.width_max_us,
        servo_config.increment_us,
        servo_config.overhead_us
    );

    let mut control = ControlLoop::new(
        ServoState::new(servo_config),
        loop_config,
        SerialRx::new(rx),
        LoggedConsole::new(tx),
        pulse,
        delay,
    );

    info!(
        "Control loop running, refresh every {} ms",
        loop_config.refresh_period_ms
    );
    let fault = control.run();

    error!(
        "Input halted after {} frames: {}",
        control.frames(),
        fault
    );
    blinker.hold_on();

    loop {
        cortex_m::asm::wfi();
    }
}
