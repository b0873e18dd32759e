//! Error payload forwarded by failure callbacks.
//!
//! [`BleError`] is the value the host attaches to callbacks such as
//! `did_fail_to_connect` or `did_read_rssi`. It is carried through the
//! fan-out verbatim and is **not** a result type: no operation in this
//! crate returns `Result`.

use thiserror::Error;

/// Failure reported by the host API alongside a delegate callback.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BleError {
    /// The operation was cancelled before it completed.
    #[error("operation cancelled")]
    OperationCancelled,

    /// The connection attempt timed out.
    #[error("connection timed out")]
    ConnectionTimeout,

    /// The connection attempt failed for the given reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The remote peripheral closed the connection.
    #[error("peripheral disconnected")]
    PeripheralDisconnected,

    /// A GATT attribute-protocol error code.
    #[error("attribute error {0:#04x}")]
    Att(u8),

    /// Any other platform-level failure, kept as text.
    #[error("platform error: {0}")]
    Platform(String),
}

impl BleError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            BleError::OperationCancelled => "operation_cancelled",
            BleError::ConnectionTimeout => "connection_timeout",
            BleError::ConnectionFailed(_) => "connection_failed",
            BleError::PeripheralDisconnected => "peripheral_disconnected",
            BleError::Att(_) => "att_error",
            BleError::Platform(_) => "platform_error",
        }
    }
}
