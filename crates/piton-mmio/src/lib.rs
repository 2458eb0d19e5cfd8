//! Typed access to memory-mapped peripheral registers.
//!
//! This crate provides:
//! - Register and bit-field descriptions (`Register`, `Field`)
//! - A `Bus` abstraction over the physical address space
//! - Read-modify-write operations through an `Mmio` handle
//!
//! # Example
//!
//! ```
//! use piton_mmio::{Access, Field, Mmio, Register, SparseBus};
//!
//! enum Scratch {}
//!
//! impl Scratch {
//!     const LOW: Field<Self> = Field::new("low", 0, 8, Access::ReadWrite, "Low byte");
//! }
//!
//! impl Register for Scratch {
//!     const NAME: &'static str = "SCRATCH";
//!     const ADDR: usize = 0x1000;
//!     const DOC: &'static str = "Scratch register";
//!     const FIELDS: &'static [piton_mmio::FieldInfo] = &[Scratch::LOW.info()];
//! }
//!
//! let mut mmio = Mmio::new(SparseBus::new());
//! mmio.write(Scratch::LOW, 0x42);
//! assert_eq!(mmio.read(Scratch::LOW), 0x42);
//! ```

mod bus;
mod field;
mod mmio;
mod register;

pub use bus::{Bus, PhysBus, SparseBus};
pub use field::{Access, Field, FieldInfo, FieldSet};
pub use mmio::Mmio;
pub use register::{describe, Register, RegisterDoc};
