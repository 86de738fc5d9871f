// src/common/registers.rs

//! Register map and bit constants of the I3G4250D.
//!
//! Only the registers the driver actually touches are listed; addresses and
//! field encodings follow the part datasheet.

/// Device identification register.
pub const WHO_AM_I: u8 = 0x0F;
/// Expected WHO_AM_I value.
pub const I_AM_I3G4250D: u8 = 0xD3;

/// Power mode, data rate, bandwidth and axis enables.
pub const CTRL_REG1: u8 = 0x20;
/// High-pass filter mode and cutoff selection.
pub const CTRL_REG2: u8 = 0x21;
/// Interrupt routing and polarity.
pub const CTRL_REG3: u8 = 0x22;
/// Block data update, endianness and full-scale selection.
pub const CTRL_REG4: u8 = 0x23;
/// Reboot, FIFO and high-pass filter enable.
pub const CTRL_REG5: u8 = 0x24;
/// First angular rate output register (X low byte).
pub const OUT_X_L: u8 = 0x28;
/// Interrupt-generator configuration.
pub const INT1_CFG: u8 = 0x30;

// SPI address flags
/// Read transaction flag (bit 7 of the address byte).
pub const SPI_READ: u8 = 0x80;
/// Address auto-increment flag for multi-byte transfers (bit 6).
pub const SPI_AUTO_INCREMENT: u8 = 0x40;

// CTRL_REG2
/// Reserved upper bits of CTRL_REG2, preserved on filter configuration.
pub const CTRL_REG2_RESERVED: u8 = 0xC0;

// CTRL_REG3
/// Interrupt enable on the INT1 pin.
pub const INT1_ENABLE: u8 = 0x80;
/// Data-ready interrupt enable on the INT2 pin.
pub const INT2_DRDY_ENABLE: u8 = 0x08;
/// Bits of CTRL_REG3 preserved when the interrupt active edge is written.
pub const CTRL_REG3_EDGE_PRESERVE: u8 = 0xDF;

// CTRL_REG4
/// Big/little endian data selection bit.
pub const BLE: u8 = 0x40;
/// Full-scale selection field.
pub const FULL_SCALE_MASK: u8 = 0x30;

// CTRL_REG5
/// Reboot memory content.
pub const BOOT: u8 = 0x80;
/// High-pass filter enable bit.
pub const HIGH_PASS_ENABLE: u8 = 0x10;

// INT1_CFG
/// AND/OR combination bit, preserved when interrupt axes are configured.
pub const INT1_CFG_AND_OR: u8 = 0x80;

// Angular rate sensitivities, in millidegrees per second per digit.
pub const SENSITIVITY_245DPS: f32 = 8.75;
pub const SENSITIVITY_500DPS: f32 = 17.50;
pub const SENSITIVITY_2000DPS: f32 = 70.0;
