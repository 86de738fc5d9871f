// src/gyro/mod.rs

//! Board-level gyroscope facade.
//!
//! [`Gyroscope`] owns a part driver and gates every operation on a single
//! identity check performed at initialization. The facade has exactly two
//! states: unbound (the initial state) and bound (entered once, on a
//! successful `init`, never left). While unbound, every delegating call is
//! a defined no-op and [`read_id`](Gyroscope::read_id) reports the sentinel
//! `0`; only another `init` attempt can change that.

use crate::common::config::{FilterConfig, FilterState, GyroConfig, InterruptConfig, InterruptPin};
use crate::common::error::Error;
use crate::driver::GyroDriver;

/// Gyroscope facade over an owned part driver.
///
/// Constructing the facade is free of bus traffic; nothing is touched until
/// [`init`](Gyroscope::init). The driver is injected by value, so
/// independent instances (or test fakes) need no shared state, and `&mut
/// self` on every operation leaves serialization of concurrent access to
/// the caller.
pub struct Gyroscope<D> {
    driver: D,
    bound: bool,
}

impl<D: GyroDriver> Gyroscope<D> {
    /// Wraps a part driver. The facade starts unbound.
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            bound: false,
        }
    }

    /// Initializes the device with the board defaults and enables the
    /// high-pass filter.
    ///
    /// See [`init_with`](Gyroscope::init_with) for the identity-check
    /// semantics.
    pub fn init(&mut self) -> Result<(), Error> {
        self.init_with(&GyroConfig::default(), &FilterConfig::default())
    }

    /// Initializes the device with an explicit configuration.
    ///
    /// Reads the device identity first; a mismatch returns
    /// [`Error::IdentityMismatch`] and leaves the facade unbound without a
    /// retry (the caller decides whether to try again). On a match the
    /// facade binds, writes the packed control word and filter byte, and
    /// enables the high-pass filter.
    ///
    /// Calling this again on a bound facade rewrites the same register
    /// words; there is no accumulated state.
    pub fn init_with(&mut self, config: &GyroConfig, filter: &FilterConfig) -> Result<(), Error> {
        let found = self.driver.read_id();
        if found != D::DEVICE_ID {
            return Err(Error::IdentityMismatch {
                expected: D::DEVICE_ID,
                found,
            });
        }

        self.bound = true;
        self.driver.init(config.ctrl_word());
        self.driver.configure_filter(filter.bits());
        self.driver.set_filter(FilterState::Enabled);
        Ok(())
    }

    /// Whether a successful `init` has bound the facade to its driver.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Reads the device identity, or `0` while unbound (or when the driver
    /// omits the capability).
    pub fn read_id(&mut self) -> u8 {
        if self.bound {
            self.driver.read_id()
        } else {
            0
        }
    }

    /// Reboots the device memory content. No-op while unbound.
    pub fn reset(&mut self) {
        if self.bound {
            self.driver.reset();
        }
    }

    /// Configures the INT1 interrupt generator. No-op while unbound.
    pub fn configure_interrupt(&mut self, config: &InterruptConfig) {
        if self.bound {
            self.driver.configure_interrupt(config.word());
        }
    }

    /// Enables interrupt generation on `pin`. No-op while unbound.
    pub fn enable_interrupt(&mut self, pin: InterruptPin) {
        if self.bound {
            self.driver.enable_interrupt(pin);
        }
    }

    /// Disables interrupt generation on `pin`. No-op while unbound.
    pub fn disable_interrupt(&mut self, pin: InterruptPin) {
        if self.bound {
            self.driver.disable_interrupt(pin);
        }
    }

    /// Reads one angular rate sample per axis, in mdps, into `rates`.
    ///
    /// While unbound (or when the driver omits the capability) the buffer
    /// is left untouched; callers may not assume it was written.
    pub fn read_rates(&mut self, rates: &mut [f32; 3]) {
        if self.bound {
            self.driver.read_rates(rates);
        }
    }

    /// Destroys the facade, returning the part driver.
    pub fn release(self) -> D {
        self.driver
    }
}
