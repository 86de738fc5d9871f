// src/common/error.rs

/// Errors surfaced by the board-support layer.
///
/// Only initialization has an error channel; every other operation follows a
/// best-effort delegate policy and degrades to a no-op instead of failing
/// (see [`crate::gyro::Gyroscope`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The WHO_AM_I register did not return the expected device identity.
    ///
    /// The facade stays unbound; the caller decides whether to retry or
    /// fail upwards.
    #[error("identity mismatch: expected {expected:#04x}, found {found:#04x}")]
    IdentityMismatch {
        /// Identity the attached part driver expects.
        expected: u8,
        /// Identity actually read from the device.
        found: u8,
    },
}
