//! Register definitions for the AUX block and the GPIO registers the mini
//! UART bring-up touches.
//!
//! Addresses are physical, as seen by the ARM on a Raspberry Pi 3
//! (peripheral base 0x3F000000).

use piton_mmio::Access::{ReadOnly, ReadWrite, WriteOnly};
use piton_mmio::{describe, Field, FieldInfo, Register, RegisterDoc};

/// Auxiliary peripheral enables.
pub enum AuxEnables {}

impl AuxEnables {
    pub const EN_MINI_UART: Field<Self> =
        Field::bit("en_mini_uart", 0, ReadWrite, "Enable the mini UART");
    pub const EN_SPI1: Field<Self> = Field::bit("en_spi1", 1, ReadWrite, "Enable SPI 1");
    pub const EN_SPI2: Field<Self> = Field::bit("en_spi2", 2, ReadWrite, "Enable SPI 2");
}

impl Register for AuxEnables {
    const NAME: &'static str = "AUX_ENABLES";
    const ADDR: usize = 0x3F21_5004;
    const DOC: &'static str = "Enable UART, SPI1, SPI2";
    const FIELDS: &'static [FieldInfo] = &[
        Self::EN_MINI_UART.info(),
        Self::EN_SPI1.info(),
        Self::EN_SPI2.info(),
    ];
}

/// Mini UART FIFO data (and LS baudrate bits when DLAB=1).
pub enum AuxMuIo {}

impl AuxMuIo {
    pub const LS8_BAUDRATE: Field<Self> = Field::new(
        "ls8_baudrate",
        0,
        8,
        ReadWrite,
        "LS 8 bits of the baudrate counter when DLAB=1",
    );
    pub const TX_WRITE: Field<Self> =
        Field::new("tx_write", 0, 8, WriteOnly, "Byte pushed to the TX FIFO when DLAB=0");
    pub const RX_READ: Field<Self> =
        Field::new("rx_read", 0, 8, ReadOnly, "Byte popped from the RX FIFO when DLAB=0");
}

impl Register for AuxMuIo {
    const NAME: &'static str = "AUX_MU_IO_REG";
    const ADDR: usize = 0x3F21_5040;
    const DOC: &'static str = "Read and write the UART FIFOs";
    const FIELDS: &'static [FieldInfo] = &[
        Self::LS8_BAUDRATE.info(),
        Self::TX_WRITE.info(),
        Self::RX_READ.info(),
    ];
}

/// Mini UART interrupt enables.
pub enum AuxMuIer {}

impl AuxMuIer {
    pub const EN_RX_INT: Field<Self> =
        Field::bit("en_rx_int", 0, ReadWrite, "Enable receive interrupts when DLAB=0");
    pub const EN_TX_INT: Field<Self> =
        Field::bit("en_tx_int", 1, ReadWrite, "Enable transmit interrupts when DLAB=0");
    pub const MS8_BAUDRATE: Field<Self> = Field::new(
        "ms8_baudrate",
        0,
        8,
        ReadWrite,
        "MS 8 bits of the baudrate counter when DLAB=1",
    );
}

impl Register for AuxMuIer {
    const NAME: &'static str = "AUX_MU_IER_REG";
    const ADDR: usize = 0x3F21_5044;
    const DOC: &'static str = "Interrupt enables and baudrate";
    const FIELDS: &'static [FieldInfo] = &[
        Self::EN_RX_INT.info(),
        Self::EN_TX_INT.info(),
        Self::MS8_BAUDRATE.info(),
    ];
}

/// Mini UART interrupt status and FIFO control.
pub enum AuxMuIir {}

impl AuxMuIir {
    pub const INT_PENDING: Field<Self> =
        Field::bit("int_pending", 0, ReadOnly, "Clear while an interrupt is pending");
    pub const INT_ID: Field<Self> = Field::new("int_id", 1, 2, ReadOnly, "Interrupt id");
    pub const CLEAR_FIFO: Field<Self> =
        Field::new("clear_fifo", 1, 2, WriteOnly, "Clear the FIFOs (bit 1 RX, bit 2 TX)");
}

impl Register for AuxMuIir {
    const NAME: &'static str = "AUX_MU_IIR_REG";
    const ADDR: usize = 0x3F21_5048;
    const DOC: &'static str = "Interrupt status";
    const FIELDS: &'static [FieldInfo] = &[
        Self::INT_PENDING.info(),
        Self::INT_ID.info(),
        Self::CLEAR_FIFO.info(),
    ];
}

/// Mini UART line control.
pub enum AuxMuLcr {}

impl AuxMuLcr {
    pub const DATA_SIZE: Field<Self> =
        Field::bit("data_size", 0, ReadWrite, "7-bit (0) or 8-bit (1) mode");
    pub const BRK: Field<Self> = Field::bit("brk", 6, ReadWrite, "Pull the TX line low");
    pub const DLAB: Field<Self> =
        Field::bit("dlab", 7, ReadWrite, "Give IO/IER access to the baudrate");
}

impl Register for AuxMuLcr {
    const NAME: &'static str = "AUX_MU_LCR_REG";
    const ADDR: usize = 0x3F21_504C;
    const DOC: &'static str = "Line data format and baudrate access";
    const FIELDS: &'static [FieldInfo] =
        &[Self::DATA_SIZE.info(), Self::BRK.info(), Self::DLAB.info()];
}

/// Mini UART modem control.
pub enum AuxMuMcr {}

impl AuxMuMcr {
    pub const RTS: Field<Self> = Field::bit("rts", 1, ReadWrite, "RTS line level");
}

impl Register for AuxMuMcr {
    const NAME: &'static str = "AUX_MU_MCR_REG";
    const ADDR: usize = 0x3F21_5050;
    const DOC: &'static str = "Modem signals";
    const FIELDS: &'static [FieldInfo] = &[Self::RTS.info()];
}

/// Mini UART line status.
pub enum AuxMuLsr {}

impl AuxMuLsr {
    pub const DATA_READY: Field<Self> =
        Field::bit("data_ready", 0, ReadOnly, "RX FIFO holds at least one byte");
    pub const RX_OVERRUN: Field<Self> =
        Field::bit("rx_overrun", 1, ReadOnly, "RX FIFO overran");
    pub const TX_EMPTY: Field<Self> =
        Field::bit("tx_empty", 5, ReadOnly, "TX FIFO can accept at least one byte");
    pub const TX_IDLE: Field<Self> =
        Field::bit("tx_idle", 6, ReadOnly, "TX FIFO empty and line idle");
}

impl Register for AuxMuLsr {
    const NAME: &'static str = "AUX_MU_LSR_REG";
    const ADDR: usize = 0x3F21_5054;
    const DOC: &'static str = "Data status";
    const FIELDS: &'static [FieldInfo] = &[
        Self::DATA_READY.info(),
        Self::RX_OVERRUN.info(),
        Self::TX_EMPTY.info(),
        Self::TX_IDLE.info(),
    ];
}

/// Mini UART scratch byte.
pub enum AuxMuScratch {}

impl AuxMuScratch {
    pub const SCRATCH: Field<Self> =
        Field::new("scratch", 0, 8, ReadWrite, "Single byte of storage");
}

impl Register for AuxMuScratch {
    const NAME: &'static str = "AUX_MU_SCRATCH";
    const ADDR: usize = 0x3F21_505C;
    const DOC: &'static str = "Single byte storage";
    const FIELDS: &'static [FieldInfo] = &[Self::SCRATCH.info()];
}

/// Mini UART extra control.
pub enum AuxMuCntl {}

impl AuxMuCntl {
    pub const EN_RX: Field<Self> = Field::bit("en_rx", 0, ReadWrite, "Receiver enable");
    pub const EN_TX: Field<Self> = Field::bit("en_tx", 1, ReadWrite, "Transmitter enable");
    pub const RX_AUTOFLOW: Field<Self> =
        Field::bit("rx_autoflow", 2, ReadWrite, "RX autoflow via RTS");
    pub const TX_AUTOFLOW: Field<Self> =
        Field::bit("tx_autoflow", 3, ReadWrite, "TX autoflow via CTS");
    pub const RTS_AUTO_LEVEL: Field<Self> = Field::new(
        "rts_auto_level",
        4,
        2,
        ReadWrite,
        "FIFO level at which RTS de-asserts",
    );
    pub const RTS_LEVEL: Field<Self> = Field::bit("rts_level", 6, ReadWrite, "Invert RTS");
    pub const CTS_LEVEL: Field<Self> = Field::bit("cts_level", 7, ReadWrite, "Invert CTS");
}

impl Register for AuxMuCntl {
    const NAME: &'static str = "AUX_MU_CNTL_REG";
    const ADDR: usize = 0x3F21_5060;
    const DOC: &'static str = "Extra features beyond the 16550 register set";
    const FIELDS: &'static [FieldInfo] = &[
        Self::EN_RX.info(),
        Self::EN_TX.info(),
        Self::RX_AUTOFLOW.info(),
        Self::TX_AUTOFLOW.info(),
        Self::RTS_AUTO_LEVEL.info(),
        Self::RTS_LEVEL.info(),
        Self::CTS_LEVEL.info(),
    ];
}

/// Mini UART internal status.
pub enum AuxMuStat {}

impl Register for AuxMuStat {
    const NAME: &'static str = "AUX_MU_STAT_REG";
    const ADDR: usize = 0x3F21_5064;
    const DOC: &'static str = "Internal status of the mini UART";
    const FIELDS: &'static [FieldInfo] = &[];
}

/// Mini UART baudrate counter.
pub enum AuxMuBaud {}

impl AuxMuBaud {
    pub const BAUDRATE: Field<Self> =
        Field::new("baudrate", 0, 16, ReadWrite, "Baudrate counter");
}

impl Register for AuxMuBaud {
    const NAME: &'static str = "AUX_MU_BAUD";
    const ADDR: usize = 0x3F21_5068;
    const DOC: &'static str = "Baudrate counter";
    const FIELDS: &'static [FieldInfo] = &[Self::BAUDRATE.info()];
}

/// GPIO function select for pins 10..19.
pub enum GpFsel1 {}

impl GpFsel1 {
    pub const FSEL14: Field<Self> =
        Field::new("fsel14", 12, 3, ReadWrite, "Function select for pin 14");
    pub const FSEL15: Field<Self> =
        Field::new("fsel15", 15, 3, ReadWrite, "Function select for pin 15");
}

impl Register for GpFsel1 {
    const NAME: &'static str = "GPFSEL1";
    const ADDR: usize = 0x3F20_0004;
    const DOC: &'static str = "GPIO alternate function select 1";
    const FIELDS: &'static [FieldInfo] = &[Self::FSEL14.info(), Self::FSEL15.info()];
}

/// GPIO pull-up/down mode.
pub enum GpPud {}

impl GpPud {
    pub const PUD: Field<Self> =
        Field::new("pud", 0, 2, ReadWrite, "Pull mode: off, down, up");
}

impl Register for GpPud {
    const NAME: &'static str = "GPPUD";
    const ADDR: usize = 0x3F20_0094;
    const DOC: &'static str = "GPIO pull-up/down control";
    const FIELDS: &'static [FieldInfo] = &[Self::PUD.info()];
}

/// GPIO pull-up/down clock for pins 0..31.
pub enum GpPudClk0 {}

impl GpPudClk0 {
    pub const PUDCLK14: Field<Self> =
        Field::bit("pudclk14", 14, ReadWrite, "Assert pull clock on pin 14");
    pub const PUDCLK15: Field<Self> =
        Field::bit("pudclk15", 15, ReadWrite, "Assert pull clock on pin 15");
}

impl Register for GpPudClk0 {
    const NAME: &'static str = "GPPUDCLK0";
    const ADDR: usize = 0x3F20_0098;
    const DOC: &'static str = "GPIO pull-up/down clock 0";
    const FIELDS: &'static [FieldInfo] = &[Self::PUDCLK14.info(), Self::PUDCLK15.info()];
}

/// Every register defined above, ordered by address.
pub fn register_map() -> Vec<RegisterDoc> {
    let mut map = vec![
        describe::<AuxEnables>(),
        describe::<AuxMuIo>(),
        describe::<AuxMuIer>(),
        describe::<AuxMuIir>(),
        describe::<AuxMuLcr>(),
        describe::<AuxMuMcr>(),
        describe::<AuxMuLsr>(),
        describe::<AuxMuScratch>(),
        describe::<AuxMuCntl>(),
        describe::<AuxMuStat>(),
        describe::<AuxMuBaud>(),
        describe::<GpFsel1>(),
        describe::<GpPud>(),
        describe::<GpPudClk0>(),
    ];
    map.sort_by_key(|reg| reg.addr);
    map
}
