//! Register operations over a bus.

use crate::bus::Bus;
use crate::field::{Field, FieldSet};
use crate::register::Register;

/// Handle performing register operations through a [`Bus`].
#[derive(Debug)]
pub struct Mmio<B> {
    bus: B,
}

impl<B: Bus> Mmio<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Extract a field from its register.
    pub fn read<R: Register>(&mut self, field: Field<R>) -> u32 {
        field.extract(self.bus.load(R::ADDR))
    }

    /// Read-modify-write a field, preserving sibling bits.
    pub fn write<R: Register>(&mut self, field: Field<R>, value: u32) {
        let word = self.bus.load(R::ADDR);
        self.bus.store(R::ADDR, field.insert(word, value));
    }

    /// Write all-ones into a field.
    pub fn set<R: Register>(&mut self, field: Field<R>) {
        self.write(field, field.max_value());
    }

    /// Write zero into a field.
    pub fn clear<R: Register>(&mut self, field: Field<R>) {
        self.write(field, 0);
    }

    /// Set every bit of a field combination.
    pub fn set_bits<R: Register>(&mut self, fields: FieldSet<R>) {
        let word = self.bus.load(R::ADDR);
        self.bus.store(R::ADDR, word | fields.mask());
    }

    /// Clear every bit of a field combination.
    pub fn clear_bits<R: Register>(&mut self, fields: FieldSet<R>) {
        let word = self.bus.load(R::ADDR);
        self.bus.store(R::ADDR, word & !fields.mask());
    }

    /// Load the whole register word.
    pub fn load<R: Register>(&mut self) -> u32 {
        self.bus.load(R::ADDR)
    }

    /// Store the whole register word, clobbering every field.
    pub fn store<R: Register>(&mut self, value: u32) {
        self.bus.store(R::ADDR, value);
    }

    /// Store zero to the whole register.
    pub fn zero<R: Register>(&mut self) {
        self.store::<R>(0);
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::SparseBus;
    use crate::field::{Access, FieldInfo};

    enum Ctrl {}

    impl Ctrl {
        const ENABLE: Field<Self> = Field::bit("enable", 0, Access::ReadWrite, "");
        const MODE: Field<Self> = Field::new("mode", 4, 3, Access::ReadWrite, "");
        const IRQ: Field<Self> = Field::bit("irq", 7, Access::ReadWrite, "");
    }

    impl Register for Ctrl {
        const NAME: &'static str = "CTRL";
        const ADDR: usize = 0x3F00_0000;
        const DOC: &'static str = "";
        const FIELDS: &'static [FieldInfo] = &[];
    }

    #[test]
    fn test_field_write_preserves_siblings() {
        let mut mmio = Mmio::new(SparseBus::new());
        mmio.set(Ctrl::ENABLE);
        mmio.write(Ctrl::MODE, 0b101);
        assert_eq!(mmio.read(Ctrl::ENABLE), 1);
        assert_eq!(mmio.read(Ctrl::MODE), 0b101);
        assert_eq!(mmio.load::<Ctrl>(), 0b101_0001);
    }

    #[test]
    fn test_set_and_clear() {
        let mut mmio = Mmio::new(SparseBus::new());
        mmio.set(Ctrl::MODE);
        assert_eq!(mmio.read(Ctrl::MODE), 0b111);
        mmio.clear(Ctrl::MODE);
        assert_eq!(mmio.load::<Ctrl>(), 0);
    }

    #[test]
    fn test_store_clobbers_fields() {
        let mut mmio = Mmio::new(SparseBus::new());
        mmio.set(Ctrl::ENABLE);
        mmio.store::<Ctrl>(0b1000_0000);
        assert_eq!(mmio.read(Ctrl::ENABLE), 0);
        assert_eq!(mmio.read(Ctrl::IRQ), 1);
        mmio.zero::<Ctrl>();
        assert_eq!(mmio.load::<Ctrl>(), 0);
    }

    #[test]
    fn test_set_bits_and_clear_bits() {
        let mut mmio = Mmio::new(SparseBus::new());
        mmio.write(Ctrl::MODE, 0b010);
        mmio.set_bits(Ctrl::ENABLE | Ctrl::IRQ);
        assert_eq!(mmio.load::<Ctrl>(), 0b1010_0001);
        mmio.clear_bits(Ctrl::ENABLE | Ctrl::IRQ);
        assert_eq!(mmio.load::<Ctrl>(), 0b0010_0000);
    }
}
