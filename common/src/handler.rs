//! [`Handler`] abstractions.

/// Executable handler.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if this [`Handler`] fails to execute.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
