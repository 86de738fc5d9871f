// src/lib.rs

//! Board-support driver for the ST I3G4250D MEMS gyroscope, as fitted to the
//! STM32F411E-Discovery board.
//!
//! The crate is split along the board/part seam:
//!
//! - [`Gyroscope`] is the board-level facade. It owns a part driver, verifies
//!   the device identity once at initialization and from then on forwards
//!   configuration and sample reads to it. Before a successful `init` every
//!   forwarding call is a defined no-op.
//! - [`GyroDriver`] is the capability seam a part driver implements. Optional
//!   capabilities have default no-op bodies, so a partial implementation is
//!   valid and simply degrades the corresponding facade calls.
//! - [`I3g4250d`] is the shipped part driver, generic over a small register
//!   access trait so it runs over real SPI hardware or a test double.
//! - [`SpiInterface`] (feature `spi`) adapts any `embedded-hal` 1.0
//!   `SpiDevice` to that register access trait.

#![no_std]

pub mod common;
pub mod driver;
pub mod gyro;

// Re-export key types for convenience
pub use common::config::{FilterConfig, GyroConfig, InterruptConfig, InterruptPin};
pub use common::error::Error;
pub use driver::i3g4250d::I3g4250d;
#[cfg(feature = "spi")]
pub use driver::spi::SpiInterface;
pub use driver::{GyroDriver, GyroInterface};
pub use gyro::Gyroscope;
