//! Serial IR receiver abstraction

/// IR remote decoder attached to the board's serial port
pub trait IrReceiver {
    /// Check whether the receiver is enabled in the board's comms setup
    fn check(&mut self) -> bool;

    /// Next decoded key code, or -1 when no code is available
    ///
    /// Codes are returned without any preprocessing.
    fn next_code(&mut self) -> i32;
}
