// src/driver/interface.rs

use core::fmt::Debug;

/// Abstraction over the register-level bus access required by the part
/// driver.
///
/// Implement this for a transport (the crate ships an `embedded-hal`
/// `SpiDevice` adapter behind the `spi` feature) to run
/// [`I3g4250d`](crate::driver::i3g4250d::I3g4250d) over it.
pub trait GyroInterface {
    /// Error type produced by the concrete bus implementation.
    type Error: Debug;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error>;

    /// Reads consecutive registers, starting at `register`, into `buf`.
    fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}
