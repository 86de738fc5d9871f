// src/driver/spi.rs

use embedded_hal::spi::{Operation, SpiDevice};

use super::interface::GyroInterface;
use crate::common::registers::{SPI_AUTO_INCREMENT, SPI_READ};

/// 4-wire SPI register interface.
///
/// Register addresses occupy the low six bits of the first transferred byte;
/// bit 7 selects read transactions and bit 6 auto-increments the address for
/// multi-byte transfers.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Wraps an `embedded-hal` SPI device (chip select owned by the device).
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Destroys the interface, returning the SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> GyroInterface for SpiInterface<SPI> {
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.spi.write(&[register, value])
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.spi.transaction(&mut [
            Operation::Write(&[register | SPI_READ]),
            Operation::Read(&mut value),
        ])?;
        Ok(value[0])
    }

    fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.spi.transaction(&mut [
            Operation::Write(&[register | SPI_READ | SPI_AUTO_INCREMENT]),
            Operation::Read(buf),
        ])
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    use super::*;
    use crate::common::registers::{CTRL_REG1, OUT_X_L, WHO_AM_I};

    #[test]
    fn write_register_frames_address_and_value() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![CTRL_REG1, 0x3F]),
            SpiTransaction::transaction_end(),
        ];
        let mut iface = SpiInterface::new(SpiMock::new(&expectations));

        iface.write_register(CTRL_REG1, 0x3F).unwrap();

        iface.release().done();
    }

    #[test]
    fn read_register_sets_read_flag() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![WHO_AM_I | 0x80]),
            SpiTransaction::read_vec(vec![0xD3]),
            SpiTransaction::transaction_end(),
        ];
        let mut iface = SpiInterface::new(SpiMock::new(&expectations));

        assert_eq!(iface.read_register(WHO_AM_I).unwrap(), 0xD3);

        iface.release().done();
    }

    #[test]
    fn read_registers_sets_read_and_auto_increment_flags() {
        let sample = vec![0x01, 0x00, 0xFF, 0xFF, 0x00, 0x01];
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![OUT_X_L | 0x80 | 0x40]),
            SpiTransaction::read_vec(sample.clone()),
            SpiTransaction::transaction_end(),
        ];
        let mut iface = SpiInterface::new(SpiMock::new(&expectations));

        let mut buf = [0u8; 6];
        iface.read_registers(OUT_X_L, &mut buf).unwrap();
        assert_eq!(buf, sample.as_slice());

        iface.release().done();
    }
}
