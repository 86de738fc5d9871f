// src/driver/mod.rs

// The capability seam between the board facade and a physical part, plus the
// shipped I3G4250D implementation and its bus adapters.

mod interface;

pub mod i3g4250d;
#[cfg(feature = "spi")]
pub mod spi;

pub use interface::GyroInterface;

use crate::common::config::{FilterState, InterruptPin};

/// Capability set of a gyroscope part driver.
///
/// This is the contract the board facade ([`crate::gyro::Gyroscope`])
/// delegates to. Only [`init`](GyroDriver::init) is mandatory; every other
/// capability has a default no-op body, so an implementation may legitimately
/// omit the operations its part does not support. An omitted capability makes
/// the corresponding facade call a silent no-op ([`read_id`](GyroDriver::read_id)
/// reports the sentinel `0`).
///
/// All operations are infallible by design: the board layer has no error
/// channel beyond the identity check at initialization, and implementations
/// are expected to abort silently on bus failures, leaving caller-visible
/// outputs untouched.
pub trait GyroDriver {
    /// Identity the device is expected to report from its WHO_AM_I register.
    const DEVICE_ID: u8;

    /// Writes the packed main control word (see
    /// [`crate::common::config::GyroConfig::ctrl_word`]).
    fn init(&mut self, ctrl: u16);

    /// Reads the device identity register. `0` means the capability is
    /// absent or the read failed.
    fn read_id(&mut self) -> u8 {
        0
    }

    /// Reboots the device memory content.
    fn reset(&mut self) {}

    /// Writes the packed high-pass filter configuration byte.
    fn configure_filter(&mut self, _config: u8) {}

    /// Switches the high-pass filter on or off.
    fn set_filter(&mut self, _state: FilterState) {}

    /// Writes the packed interrupt configuration word (see
    /// [`crate::common::config::InterruptConfig::word`]).
    fn configure_interrupt(&mut self, _config: u16) {}

    /// Enables interrupt generation on the given pin.
    fn enable_interrupt(&mut self, _pin: InterruptPin) {}

    /// Disables interrupt generation on the given pin.
    fn disable_interrupt(&mut self, _pin: InterruptPin) {}

    /// Reads one angular rate sample per axis, in mdps, into `rates`.
    ///
    /// Implementations must leave `rates` untouched when the sample cannot
    /// be produced; callers may not assume the buffer was written.
    fn read_rates(&mut self, _rates: &mut [f32; 3]) {}
}
