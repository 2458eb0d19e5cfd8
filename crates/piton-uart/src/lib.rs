//! BCM2837 (Raspberry Pi 3) mini UART.
//!
//! The `regs` module describes the AUX peripheral block and the GPIO
//! registers involved in routing the UART to pins 14/15; [`Uart`] is the
//! polling driver over any [`piton_mmio::Bus`].
//!
//! # Example
//!
//! ```
//! use piton_mmio::{Register, SparseBus};
//! use piton_uart::{regs, Uart};
//!
//! let mut uart = Uart::new(SparseBus::new());
//! uart.init();
//!
//! let bus = uart.into_bus();
//! assert_eq!(bus.value_at(regs::AuxMuBaud::ADDR), 270);
//! ```

pub mod regs;
mod uart;

pub use uart::Uart;
