//! The seam between the register model and the machine.

use std::collections::BTreeMap;

/// Word-granular access to the peripheral address space.
pub trait Bus {
    /// Load the 32-bit word at `addr`.
    fn load(&mut self, addr: usize) -> u32;

    /// Store a 32-bit word to `addr`.
    fn store(&mut self, addr: usize, value: u32);
}

/// Direct volatile access to physical addresses.
pub struct PhysBus {
    _private: (),
}

impl PhysBus {
    /// # Safety
    ///
    /// The caller asserts that every address later passed through this bus
    /// is a mapped, word-aligned device register.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Bus for PhysBus {
    fn load(&mut self, addr: usize) -> u32 {
        // SAFETY: upheld by the contract of `PhysBus::new`.
        unsafe { core::ptr::read_volatile(addr as *const u32) }
    }

    fn store(&mut self, addr: usize, value: u32) {
        // SAFETY: upheld by the contract of `PhysBus::new`.
        unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
    }
}

/// Map-backed bus for exercising drivers off-target.
///
/// Unwritten addresses read as zero. Every store is journaled in order, so
/// tests can assert on the exact traffic a driver generates.
#[derive(Debug, Default, Clone)]
pub struct SparseBus {
    mem: BTreeMap<usize, u32>,
    stores: Vec<(usize, u32)>,
}

impl SparseBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a register value without journaling a store.
    pub fn preload(&mut self, addr: usize, value: u32) {
        self.mem.insert(addr, value);
    }

    /// Current value at `addr` (zero if never written).
    pub fn value_at(&self, addr: usize) -> u32 {
        self.mem.get(&addr).copied().unwrap_or(0)
    }

    /// All stores, in issue order.
    pub fn stores(&self) -> &[(usize, u32)] {
        &self.stores
    }

    /// Values stored to `addr`, in issue order.
    pub fn stores_to(&self, addr: usize) -> Vec<u32> {
        self.stores
            .iter()
            .filter(|(a, _)| *a == addr)
            .map(|(_, v)| *v)
            .collect()
    }
}

impl Bus for SparseBus {
    fn load(&mut self, addr: usize) -> u32 {
        self.value_at(addr)
    }

    fn store(&mut self, addr: usize, value: u32) {
        self.stores.push((addr, value));
        self.mem.insert(addr, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_reads_zero() {
        let mut bus = SparseBus::new();
        assert_eq!(bus.load(0x3F20_0000), 0);
    }

    #[test]
    fn test_store_then_load() {
        let mut bus = SparseBus::new();
        bus.store(0x3F20_0004, 0x1234);
        assert_eq!(bus.load(0x3F20_0004), 0x1234);
        assert_eq!(bus.value_at(0x3F20_0004), 0x1234);
    }

    #[test]
    fn test_preload_is_not_journaled() {
        let mut bus = SparseBus::new();
        bus.preload(0x10, 7);
        bus.store(0x10, 8);
        assert_eq!(bus.stores(), &[(0x10, 8)]);
        assert_eq!(bus.stores_to(0x10), vec![8]);
    }
}
