// src/driver/i3g4250d.rs

//! Part driver for the I3G4250D, generic over a [`GyroInterface`] bus.
//!
//! All capabilities are best-effort: a failed bus access aborts the
//! operation without reporting, read paths leave caller storage untouched
//! and the identity read falls back to the `0` sentinel. The only error the
//! board layer surfaces is the identity check performed on top of
//! [`read_id`](GyroDriver::read_id).

use super::interface::GyroInterface;
use super::GyroDriver;
use crate::common::config::{FilterState, FullScale, InterruptPin};
use crate::common::registers::{
    BLE, BOOT, CTRL_REG1, CTRL_REG2, CTRL_REG2_RESERVED, CTRL_REG3, CTRL_REG3_EDGE_PRESERVE,
    CTRL_REG4, CTRL_REG5, HIGH_PASS_ENABLE, INT1_CFG, INT1_CFG_AND_OR, INT1_ENABLE,
    INT2_DRDY_ENABLE, I_AM_I3G4250D, OUT_X_L, WHO_AM_I,
};

/// I3G4250D driver over a register-level bus interface.
pub struct I3g4250d<IFACE> {
    iface: IFACE,
}

impl<IFACE> I3g4250d<IFACE> {
    pub fn new(iface: IFACE) -> Self {
        Self { iface }
    }

    /// Destroys the driver, returning the bus interface.
    pub fn release(self) -> IFACE {
        self.iface
    }
}

impl<IFACE: GyroInterface> I3g4250d<IFACE> {
    /// Read-modify-write: keeps the bits selected by `preserve`, ORs in
    /// `set`. Skipped entirely when the initial read fails.
    fn update_register(&mut self, register: u8, preserve: u8, set: u8) {
        if let Ok(current) = self.iface.read_register(register) {
            let _ = self.iface.write_register(register, (current & preserve) | set);
        }
    }
}

impl<IFACE: GyroInterface> GyroDriver for I3g4250d<IFACE> {
    const DEVICE_ID: u8 = I_AM_I3G4250D;

    fn init(&mut self, ctrl: u16) {
        let _ = self.iface.write_register(CTRL_REG1, ctrl as u8);
        let _ = self.iface.write_register(CTRL_REG4, (ctrl >> 8) as u8);
    }

    fn read_id(&mut self) -> u8 {
        self.iface.read_register(WHO_AM_I).unwrap_or(0)
    }

    fn reset(&mut self) {
        self.update_register(CTRL_REG5, 0xFF, BOOT);
    }

    fn configure_filter(&mut self, config: u8) {
        self.update_register(CTRL_REG2, CTRL_REG2_RESERVED, config);
    }

    fn set_filter(&mut self, state: FilterState) {
        self.update_register(CTRL_REG5, !HIGH_PASS_ENABLE, state as u8);
    }

    fn configure_interrupt(&mut self, config: u16) {
        self.update_register(INT1_CFG, INT1_CFG_AND_OR, (config >> 8) as u8);
        self.update_register(CTRL_REG3, CTRL_REG3_EDGE_PRESERVE, config as u8);
    }

    fn enable_interrupt(&mut self, pin: InterruptPin) {
        match pin {
            InterruptPin::Int1 => self.update_register(CTRL_REG3, 0xFF, INT1_ENABLE),
            InterruptPin::Int2 => self.update_register(CTRL_REG3, 0xFF, INT2_DRDY_ENABLE),
        }
    }

    fn disable_interrupt(&mut self, pin: InterruptPin) {
        match pin {
            InterruptPin::Int1 => self.update_register(CTRL_REG3, !INT1_ENABLE, 0x00),
            InterruptPin::Int2 => self.update_register(CTRL_REG3, !INT2_DRDY_ENABLE, 0x00),
        }
    }

    fn read_rates(&mut self, rates: &mut [f32; 3]) {
        // Byte order and sensitivity follow whatever is currently configured.
        let Ok(ctrl4) = self.iface.read_register(CTRL_REG4) else {
            return;
        };
        let mut raw = [0u8; 6];
        if self.iface.read_registers(OUT_X_L, &mut raw).is_err() {
            return;
        }

        let sensitivity = FullScale::from_ctrl_bits(ctrl4).sensitivity_mdps();
        let msb_first = ctrl4 & BLE != 0;
        for (axis, rate) in rates.iter_mut().enumerate() {
            let pair = [raw[2 * axis], raw[2 * axis + 1]];
            let digits = if msb_first {
                i16::from_be_bytes(pair)
            } else {
                i16::from_le_bytes(pair)
            };
            *rate = digits as f32 * sensitivity;
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Expectation {
        Write { register: u8, value: u8 },
        Read { register: u8, value: u8 },
        ReadFails { register: u8 },
        ReadMany { register: u8, data: [u8; 6] },
    }

    struct FakeInterface {
        expectations: Vec<Expectation>,
        index: usize,
    }

    impl FakeInterface {
        fn new(expectations: impl Into<Vec<Expectation>>) -> Self {
            Self {
                expectations: expectations.into(),
                index: 0,
            }
        }

        fn next_expectation(&mut self) -> Expectation {
            if self.index >= self.expectations.len() {
                panic!("unexpected interface call");
            }
            let expectation = self.expectations[self.index].clone();
            self.index += 1;
            expectation
        }
    }

    impl Drop for FakeInterface {
        fn drop(&mut self) {
            assert_eq!(
                self.index,
                self.expectations.len(),
                "not all interface expectations consumed"
            );
        }
    }

    #[derive(Debug)]
    struct BusFault;

    impl GyroInterface for FakeInterface {
        type Error = BusFault;

        fn write_register(&mut self, register: u8, value: u8) -> Result<(), BusFault> {
            match self.next_expectation() {
                Expectation::Write {
                    register: expected_reg,
                    value: expected_value,
                } => {
                    assert_eq!(register, expected_reg, "write register mismatch");
                    assert_eq!(value, expected_value, "write value mismatch");
                    Ok(())
                }
                other => panic!("unexpected write_register call: {other:?}"),
            }
        }

        fn read_register(&mut self, register: u8) -> Result<u8, BusFault> {
            match self.next_expectation() {
                Expectation::Read {
                    register: expected_reg,
                    value,
                } => {
                    assert_eq!(register, expected_reg, "read register mismatch");
                    Ok(value)
                }
                Expectation::ReadFails {
                    register: expected_reg,
                } => {
                    assert_eq!(register, expected_reg, "read register mismatch");
                    Err(BusFault)
                }
                other => panic!("unexpected read_register call: {other:?}"),
            }
        }

        fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), BusFault> {
            match self.next_expectation() {
                Expectation::ReadMany {
                    register: expected_reg,
                    data,
                } => {
                    assert_eq!(register, expected_reg, "read_registers register mismatch");
                    assert_eq!(buf.len(), data.len(), "read_registers length mismatch");
                    buf.copy_from_slice(&data);
                    Ok(())
                }
                other => panic!("unexpected read_registers call: {other:?}"),
            }
        }
    }

    fn driver(expectations: impl Into<Vec<Expectation>>) -> I3g4250d<FakeInterface> {
        I3g4250d::new(FakeInterface::new(expectations))
    }

    #[test]
    fn init_splits_control_word_across_ctrl1_and_ctrl4() {
        let mut gyro = driver([
            Expectation::Write {
                register: CTRL_REG1,
                value: 0x3F,
            },
            Expectation::Write {
                register: CTRL_REG4,
                value: 0x10,
            },
        ]);
        gyro.init(0x103F);
    }

    #[test]
    fn read_id_reads_who_am_i() {
        let mut gyro = driver([Expectation::Read {
            register: WHO_AM_I,
            value: 0xD3,
        }]);
        assert_eq!(gyro.read_id(), 0xD3);
    }

    #[test]
    fn read_id_reports_sentinel_on_bus_fault() {
        let mut gyro = driver([Expectation::ReadFails { register: WHO_AM_I }]);
        assert_eq!(gyro.read_id(), 0);
    }

    #[test]
    fn reset_sets_boot_bit_preserving_ctrl5() {
        let mut gyro = driver([
            Expectation::Read {
                register: CTRL_REG5,
                value: 0x10,
            },
            Expectation::Write {
                register: CTRL_REG5,
                value: 0x90,
            },
        ]);
        gyro.reset();
    }

    #[test]
    fn configure_filter_preserves_reserved_ctrl2_bits() {
        let mut gyro = driver([
            Expectation::Read {
                register: CTRL_REG2,
                value: 0xFF,
            },
            Expectation::Write {
                register: CTRL_REG2,
                value: 0xC0 | 0x23,
            },
        ]);
        gyro.configure_filter(0x23);
    }

    #[test]
    fn set_filter_toggles_only_the_enable_bit() {
        let mut gyro = driver([
            Expectation::Read {
                register: CTRL_REG5,
                value: 0x80,
            },
            Expectation::Write {
                register: CTRL_REG5,
                value: 0x90,
            },
            Expectation::Read {
                register: CTRL_REG5,
                value: 0x90,
            },
            Expectation::Write {
                register: CTRL_REG5,
                value: 0x80,
            },
        ]);
        gyro.set_filter(FilterState::Enabled);
        gyro.set_filter(FilterState::Disabled);
    }

    #[test]
    fn configure_interrupt_writes_int1_cfg_then_ctrl3() {
        let mut gyro = driver([
            Expectation::Read {
                register: INT1_CFG,
                value: 0x80,
            },
            Expectation::Write {
                register: INT1_CFG,
                value: 0x80 | 0x21,
            },
            Expectation::Read {
                register: CTRL_REG3,
                value: 0x20,
            },
            Expectation::Write {
                register: CTRL_REG3,
                value: 0x80,
            },
        ]);
        gyro.configure_interrupt(0x2180);
    }

    #[test]
    fn enable_and_disable_interrupt_touch_the_right_ctrl3_bits() {
        let mut gyro = driver([
            Expectation::Read {
                register: CTRL_REG3,
                value: 0x00,
            },
            Expectation::Write {
                register: CTRL_REG3,
                value: 0x80,
            },
            Expectation::Read {
                register: CTRL_REG3,
                value: 0x88,
            },
            Expectation::Write {
                register: CTRL_REG3,
                value: 0x88,
            },
            Expectation::Read {
                register: CTRL_REG3,
                value: 0x88,
            },
            Expectation::Write {
                register: CTRL_REG3,
                value: 0x08,
            },
        ]);
        gyro.enable_interrupt(InterruptPin::Int1);
        gyro.enable_interrupt(InterruptPin::Int2);
        gyro.disable_interrupt(InterruptPin::Int1);
    }

    #[test]
    fn read_rates_scales_by_sensitivity_lsb_first() {
        // 245 dps, LSB first: 8.75 mdps per digit
        let mut gyro = driver([
            Expectation::Read {
                register: CTRL_REG4,
                value: 0x00,
            },
            Expectation::ReadMany {
                register: OUT_X_L,
                data: [0x01, 0x00, 0xFF, 0xFF, 0x00, 0x01],
            },
        ]);
        let mut rates = [0.0f32; 3];
        gyro.read_rates(&mut rates);
        assert_eq!(rates, [8.75, -8.75, 2240.0]);
    }

    #[test]
    fn read_rates_honors_msb_first_and_full_scale() {
        // 2000 dps, MSB first: 70 mdps per digit
        let mut gyro = driver([
            Expectation::Read {
                register: CTRL_REG4,
                value: 0x40 | 0x20,
            },
            Expectation::ReadMany {
                register: OUT_X_L,
                data: [0x00, 0x01, 0x00, 0x02, 0xFF, 0xFF],
            },
        ]);
        let mut rates = [0.0f32; 3];
        gyro.read_rates(&mut rates);
        assert_eq!(rates, [70.0, 140.0, -70.0]);
    }

    #[test]
    fn read_rates_leaves_buffer_untouched_on_bus_fault() {
        let mut gyro = driver([Expectation::ReadFails {
            register: CTRL_REG4,
        }]);
        let mut rates = [1.0f32, 2.0, 3.0];
        gyro.read_rates(&mut rates);
        assert_eq!(rates, [1.0, 2.0, 3.0]);
    }
}
