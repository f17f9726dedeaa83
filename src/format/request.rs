//! The single value handed to a formatter

/// Everything needed to render one status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    /// Build step name, e.g. `CC` or `build`
    pub command: String,
    /// Module the step belongs to
    pub module: String,
    /// Status text or one line of tool output
    pub description: String,
    /// Custom style (`true`) or build-system style (`false`)
    pub is_custom: bool,
}

impl FormatRequest {
    /// Create a request
    #[inline]
    pub fn new<C, M, D>(command: C, module: M, description: D, is_custom: bool) -> Self
    where
        C: Into<String>,
        M: Into<String>,
        D: Into<String>,
    {
        Self {
            command: command.into(),
            module: module.into(),
            description: description.into(),
            is_custom,
        }
    }
}
