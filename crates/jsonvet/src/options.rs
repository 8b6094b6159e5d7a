/// Configuration options for a validation call.
///
/// Validation is otherwise stateless; the only tunable is the nesting depth
/// budget that bounds recursion on hostile input.
#[derive(Debug, Clone, Copy)]
pub struct ValidatorOptions {
    /// Maximum container nesting depth.
    ///
    /// Each object or array entered spends one unit of this budget; input
    /// nested deeper fails with [`ErrorKind::NestingTooDeep`] before the call
    /// stack is at risk. Scalars at any depth cost nothing extra.
    ///
    /// # Default
    ///
    /// `128`
    ///
    /// [`ErrorKind::NestingTooDeep`]: crate::ErrorKind::NestingTooDeep
    pub max_depth: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}
