// src/common/config.rs

//! Configuration value objects and their register packing rules.
//!
//! The part driver consumes already-packed words: the main control word
//! ([`GyroConfig::ctrl_word`]) splits into CTRL_REG1 (low byte) and
//! CTRL_REG4 (high byte), the filter byte ([`FilterConfig::bits`]) lands in
//! CTRL_REG2 and the interrupt word ([`InterruptConfig::word`]) splits into
//! INT1_CFG (high byte) and CTRL_REG3 (low byte).

use core::ops::BitOr;

use super::registers::{
    FULL_SCALE_MASK, SENSITIVITY_245DPS, SENSITIVITY_2000DPS, SENSITIVITY_500DPS,
};

/// Power mode selection (CTRL_REG1 `PD` bit).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum PowerMode {
    PowerDown = 0x00,
    Active = 0x08,
}

/// Output data rate selection (CTRL_REG1 `DR` field).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum OutputDataRate {
    /// ~105 Hz
    Rate1 = 0x00,
    /// ~208 Hz
    Rate2 = 0x40,
    /// ~420 Hz
    Rate3 = 0x80,
    /// ~840 Hz
    Rate4 = 0xC0,
}

/// Low-pass bandwidth selection (CTRL_REG1 `BW` field).
///
/// The resulting cutoff frequency depends on the selected data rate; see
/// the datasheet table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Bandwidth {
    Bw1 = 0x00,
    Bw2 = 0x10,
    Bw3 = 0x20,
    Bw4 = 0x30,
}

/// Block data update policy (CTRL_REG4 `BDU` bit).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum BlockDataUpdate {
    /// Output registers update continuously.
    Continuous = 0x00,
    /// Output registers hold until both bytes are read.
    Single = 0x80,
}

/// Output register byte order (CTRL_REG4 `BLE` bit).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Endianness {
    LsbFirst = 0x00,
    MsbFirst = 0x40,
}

/// Full-scale range selection (CTRL_REG4 `FS` field).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum FullScale {
    Dps245 = 0x00,
    Dps500 = 0x10,
    Dps2000 = 0x20,
}

impl FullScale {
    /// Decodes the full-scale field of a raw CTRL_REG4 value.
    pub const fn from_ctrl_bits(ctrl4: u8) -> Self {
        match ctrl4 & FULL_SCALE_MASK {
            0x00 => FullScale::Dps245,
            0x10 => FullScale::Dps500,
            _ => FullScale::Dps2000,
        }
    }

    /// Angular rate sensitivity for this range, in mdps per digit.
    pub const fn sensitivity_mdps(self) -> f32 {
        match self {
            FullScale::Dps245 => SENSITIVITY_245DPS,
            FullScale::Dps500 => SENSITIVITY_500DPS,
            FullScale::Dps2000 => SENSITIVITY_2000DPS,
        }
    }
}

/// Measurement axis enable mask (CTRL_REG1 `Xen`/`Yen`/`Zen` bits).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Axes(u8);

impl Axes {
    pub const NONE: Axes = Axes(0x00);
    pub const Y: Axes = Axes(0x01);
    pub const X: Axes = Axes(0x02);
    pub const Z: Axes = Axes(0x04);
    pub const ALL: Axes = Axes(0x07);

    /// Raw CTRL_REG1 bits of this mask.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Axes {
    type Output = Axes;

    fn bitor(self, rhs: Axes) -> Axes {
        Axes(self.0 | rhs.0)
    }
}

/// Main control configuration, packed into a 16-bit control word.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GyroConfig {
    pub power_mode: PowerMode,
    pub data_rate: OutputDataRate,
    pub axes: Axes,
    pub bandwidth: Bandwidth,
    pub block_data_update: BlockDataUpdate,
    pub endianness: Endianness,
    pub full_scale: FullScale,
}

impl GyroConfig {
    /// Packs the configuration into the control word consumed by
    /// [`crate::driver::GyroDriver::init`].
    ///
    /// Low byte: power mode | data rate | axes | bandwidth (CTRL_REG1).
    /// High byte: block data update | endianness | full scale (CTRL_REG4).
    pub const fn ctrl_word(&self) -> u16 {
        let low = self.power_mode as u8
            | self.data_rate as u8
            | self.axes.bits()
            | self.bandwidth as u8;
        let high = self.block_data_update as u8 | self.endianness as u8 | self.full_scale as u8;
        ((high as u16) << 8) | low as u16
    }
}

impl Default for GyroConfig {
    /// The board defaults: active, lowest data rate, all axes, widest
    /// bandwidth selector, continuous update, LSB first, 500 dps.
    fn default() -> Self {
        Self {
            power_mode: PowerMode::Active,
            data_rate: OutputDataRate::Rate1,
            axes: Axes::ALL,
            bandwidth: Bandwidth::Bw4,
            block_data_update: BlockDataUpdate::Continuous,
            endianness: Endianness::LsbFirst,
            full_scale: FullScale::Dps500,
        }
    }
}

/// High-pass filter mode selection (CTRL_REG2 `HPM` field).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum HighPassMode {
    /// Normal mode, filter reset by reading the REFERENCE register.
    NormalModeReset = 0x00,
    /// Reference signal for filtering.
    ReferenceSignal = 0x10,
    NormalMode = 0x20,
    /// Autoreset on interrupt event.
    AutoresetOnInterrupt = 0x30,
}

/// High-pass filter cutoff selection (CTRL_REG2 `HPCF` field).
///
/// The actual cutoff frequency depends on the output data rate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum HighPassCutoff {
    Hpcf0 = 0x00,
    Hpcf1 = 0x01,
    Hpcf2 = 0x02,
    Hpcf3 = 0x03,
    Hpcf4 = 0x04,
    Hpcf5 = 0x05,
    Hpcf6 = 0x06,
    Hpcf7 = 0x07,
    Hpcf8 = 0x08,
    Hpcf9 = 0x09,
}

/// High-pass filter configuration, packed into a single CTRL_REG2 byte.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FilterConfig {
    pub mode: HighPassMode,
    pub cutoff: HighPassCutoff,
}

impl FilterConfig {
    /// Packs mode and cutoff into the CTRL_REG2 filter byte.
    pub const fn bits(&self) -> u8 {
        self.mode as u8 | self.cutoff as u8
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mode: HighPassMode::NormalModeReset,
            cutoff: HighPassCutoff::Hpcf0,
        }
    }
}

/// High-pass filter switch (CTRL_REG5 `HPen` bit).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum FilterState {
    Disabled = 0x00,
    Enabled = 0x10,
}

/// External interrupt pin selector.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InterruptPin {
    Int1,
    Int2,
}

/// Interrupt latch policy (INT1_CFG `LIR` bit).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum LatchRequest {
    NotLatched = 0x00,
    Latched = 0x20,
}

/// Interrupt active edge polarity (packed into the CTRL_REG3 byte).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum ActiveEdge {
    Low = 0x20,
    High = 0x80,
}

/// Per-axis interrupt event mask (INT1_CFG low bits).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InterruptAxes(u8);

impl InterruptAxes {
    pub const NONE: InterruptAxes = InterruptAxes(0x00);
    /// X axis low event.
    pub const X_LOW: InterruptAxes = InterruptAxes(0x01);
    /// X axis high event.
    pub const X_HIGH: InterruptAxes = InterruptAxes(0x02);
    /// Y axis low event.
    pub const Y_LOW: InterruptAxes = InterruptAxes(0x04);
    /// Y axis high event.
    pub const Y_HIGH: InterruptAxes = InterruptAxes(0x08);
    /// Z axis low event.
    pub const Z_LOW: InterruptAxes = InterruptAxes(0x10);
    /// Z axis high event.
    pub const Z_HIGH: InterruptAxes = InterruptAxes(0x20);

    /// Raw INT1_CFG bits of this mask.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for InterruptAxes {
    type Output = InterruptAxes;

    fn bitor(self, rhs: InterruptAxes) -> InterruptAxes {
        InterruptAxes(self.0 | rhs.0)
    }
}

/// INT1 interrupt configuration, packed into a 16-bit word.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InterruptConfig {
    pub latch_request: LatchRequest,
    pub axes: InterruptAxes,
    pub active_edge: ActiveEdge,
}

impl InterruptConfig {
    /// Packs the configuration into the word consumed by
    /// [`crate::driver::GyroDriver::configure_interrupt`].
    ///
    /// High byte: latch request | axis mask (INT1_CFG).
    /// Low byte: active edge (CTRL_REG3).
    pub const fn word(&self) -> u16 {
        let high = self.latch_request as u8 | self.axes.bits();
        ((high as u16) << 8) | self.active_edge as u8 as u16
    }
}
