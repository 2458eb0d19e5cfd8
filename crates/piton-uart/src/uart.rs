//! Polling driver for the mini UART.

use core::fmt;

use piton_mmio::{Bus, Mmio};

use crate::regs::{
    AuxEnables, AuxMuBaud, AuxMuCntl, AuxMuIer, AuxMuIir, AuxMuIo, AuxMuLcr, AuxMuLsr, AuxMuMcr,
    GpFsel1, GpPud, GpPudClk0,
};

/// Cycles to wait for the GPIO pull state to latch.
const PUD_SETTLE_CYCLES: u32 = 150;

/// Baudrate counter for 115200 baud at the 250 MHz core clock.
const BAUD_115200: u32 = 270;

/// GPIO function 5 (ALT5) routes pins 14/15 to the mini UART.
const FSEL_ALT5: u32 = 2;

/// Mini UART at 115200 8N1 on GPIO pins 14/15.
pub struct Uart<B> {
    mmio: Mmio<B>,
}

impl<B: Bus> Uart<B> {
    pub fn new(bus: B) -> Self {
        Self {
            mmio: Mmio::new(bus),
        }
    }

    /// Bring the UART up: 115200 8N1, mapped to GPIO 14/15.
    pub fn init(&mut self) {
        self.mmio.set(AuxEnables::EN_MINI_UART);
        self.mmio.zero::<AuxMuIer>();
        self.mmio.zero::<AuxMuCntl>();
        self.mmio.store::<AuxMuLcr>(AuxMuLcr::DATA_SIZE.mask());
        self.mmio.zero::<AuxMuMcr>();
        self.mmio.zero::<AuxMuIer>();
        self.mmio.store::<AuxMuIir>(0xC6);
        self.mmio.write(AuxMuBaud::BAUDRATE, BAUD_115200);

        // route the UART to GPIO pins 14/15
        self.mmio.write(GpFsel1::FSEL14, FSEL_ALT5);
        self.mmio.write(GpFsel1::FSEL15, FSEL_ALT5);

        // disable pull-up/down on both pins
        self.mmio.zero::<GpPud>();
        settle();
        self.mmio
            .store::<GpPudClk0>((GpPudClk0::PUDCLK14 | GpPudClk0::PUDCLK15).mask());
        settle();
        self.mmio.zero::<GpPudClk0>();

        self.mmio
            .store::<AuxMuCntl>((AuxMuCntl::EN_RX | AuxMuCntl::EN_TX).mask());
    }

    /// Push one byte to the TX FIFO, spinning until it has room.
    pub fn send(&mut self, byte: u8) {
        while self.mmio.read(AuxMuLsr::TX_EMPTY) == 0 {
            core::hint::spin_loop();
        }
        self.mmio.store::<AuxMuIo>(byte as u32);
    }

    /// Pop one byte from the RX FIFO, spinning until one arrives.
    ///
    /// Carriage return is mapped to newline.
    pub fn recv(&mut self) -> u8 {
        while self.mmio.read(AuxMuLsr::DATA_READY) == 0 {
            core::hint::spin_loop();
        }
        let byte = self.mmio.read(AuxMuIo::RX_READ) as u8;
        if byte == b'\r' {
            b'\n'
        } else {
            byte
        }
    }

    /// Send a string, expanding newline to CR+LF.
    pub fn puts(&mut self, s: &str) {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.send(b'\r');
            }
            self.send(byte);
        }
    }

    pub fn bus(&self) -> &B {
        self.mmio.bus()
    }

    pub fn into_bus(self) -> B {
        self.mmio.into_bus()
    }
}

impl<B: Bus> fmt::Write for Uart<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.puts(s);
        Ok(())
    }
}

fn settle() {
    for _ in 0..PUD_SETTLE_CYCLES {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use piton_mmio::{Register, SparseBus};
    use std::fmt::Write;

    fn ready_bus() -> SparseBus {
        let mut bus = SparseBus::new();
        bus.preload(AuxMuLsr::ADDR, AuxMuLsr::TX_EMPTY.mask());
        bus
    }

    #[test]
    fn test_init_programs_line_and_baud() {
        let mut uart = Uart::new(SparseBus::new());
        uart.init();
        let bus = uart.into_bus();

        assert_eq!(bus.value_at(AuxEnables::ADDR), 1);
        assert_eq!(bus.value_at(AuxMuLcr::ADDR), AuxMuLcr::DATA_SIZE.mask());
        assert_eq!(bus.value_at(AuxMuIir::ADDR), 0xC6);
        assert_eq!(bus.value_at(AuxMuBaud::ADDR), 270);
        assert_eq!(bus.value_at(AuxMuIer::ADDR), 0);
        assert_eq!(
            bus.value_at(AuxMuCntl::ADDR),
            (AuxMuCntl::EN_RX | AuxMuCntl::EN_TX).mask()
        );
    }

    #[test]
    fn test_init_routes_gpio_pins() {
        let mut uart = Uart::new(SparseBus::new());
        uart.init();
        let bus = uart.into_bus();

        assert_eq!(bus.value_at(GpFsel1::ADDR), (2 << 12) | (2 << 15));
        assert_eq!(bus.value_at(GpPud::ADDR), 0);
        // pull clock pulsed on pins 14/15, then released
        let clocks = bus.stores_to(GpPudClk0::ADDR);
        assert_eq!(clocks, vec![(1 << 14) | (1 << 15), 0]);
    }

    #[test]
    fn test_cntl_enabled_last() {
        let mut uart = Uart::new(SparseBus::new());
        uart.init();
        let bus = uart.into_bus();

        let (last_addr, last_value) = *bus.stores().last().unwrap();
        assert_eq!(last_addr, AuxMuCntl::ADDR);
        assert_eq!(last_value, 3);
    }

    #[test]
    fn test_send_pushes_byte_when_fifo_has_room() {
        let mut uart = Uart::new(ready_bus());
        uart.send(b'A');
        assert_eq!(uart.bus().stores_to(AuxMuIo::ADDR), vec![u32::from(b'A')]);
    }

    #[test]
    fn test_recv_maps_carriage_return_to_newline() {
        let mut bus = SparseBus::new();
        bus.preload(AuxMuLsr::ADDR, AuxMuLsr::DATA_READY.mask());
        bus.preload(AuxMuIo::ADDR, u32::from(b'\r'));
        let mut uart = Uart::new(bus);
        assert_eq!(uart.recv(), b'\n');
    }

    #[test]
    fn test_recv_masks_to_low_byte() {
        let mut bus = SparseBus::new();
        bus.preload(AuxMuLsr::ADDR, AuxMuLsr::DATA_READY.mask());
        bus.preload(AuxMuIo::ADDR, 0xFFFF_FF41);
        let mut uart = Uart::new(bus);
        assert_eq!(uart.recv(), b'A');
    }

    #[test]
    fn test_puts_expands_newline() {
        let mut uart = Uart::new(ready_bus());
        uart.puts("hi\n");
        let sent: Vec<u8> = uart
            .bus()
            .stores_to(AuxMuIo::ADDR)
            .into_iter()
            .map(|v| v as u8)
            .collect();
        assert_eq!(sent, b"hi\r\n");
    }

    #[test]
    fn test_fmt_write() {
        let mut uart = Uart::new(ready_bus());
        write!(uart, "baud={}", 115200).unwrap();
        let sent: Vec<u8> = uart
            .bus()
            .stores_to(AuxMuIo::ADDR)
            .into_iter()
            .map(|v| v as u8)
            .collect();
        assert_eq!(sent, b"baud=115200");
    }
}
