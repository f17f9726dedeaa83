//! The stock status-line formatter
//!
//! Custom style:
//! ```text
//!       CC [ff_fat] ff_fat.c
//! ```
//! Build-system style, where the description is raw tool output:
//! ```text
//!     make [ff_fat] | ff_fat.c:120: warning: unused variable
//! ```
//! Padding is applied before colouring so escape codes never shift columns.
//! Values wider than their column are printed in full.

use super::style::Painter;
use super::{FormatRequest, LineFormatter};
use crate::config::StyleConfig;

/// Separator between the prefix and tool output in build-system style
const BUILD_SEPARATOR: &str = "|";

/// Column-aligned formatter with optional ANSI colour
#[derive(Debug, Clone)]
pub struct PrettyFormatter {
    command_width: usize,
    module_width: usize,
    painter: Painter,
}

impl PrettyFormatter {
    /// Create a formatter from style settings and a resolved colour decision
    #[must_use]
    #[inline]
    pub const fn new(style: &StyleConfig, color: bool) -> Self {
        Self {
            command_width: style.command_width,
            module_width: style.module_width,
            painter: Painter::new(color),
        }
    }

    fn prefix(&self, request: &FormatRequest) -> String {
        let command = format!("{:>width$}", request.command, width = self.command_width);
        let module = format!(
            "{:<width$}",
            format!("[{}]", request.module),
            width = self.module_width
        );

        if request.is_custom {
            format!(
                "{} {}",
                self.painter.command(&command),
                self.painter.module(&module)
            )
        } else {
            format!(
                "{} {} {BUILD_SEPARATOR}",
                self.painter.dim(&command),
                self.painter.dim(&module)
            )
        }
    }
}

impl LineFormatter for PrettyFormatter {
    fn format_line(&self, request: &FormatRequest) -> String {
        let prefix = self.prefix(request);
        if request.description.is_empty() {
            prefix
        } else {
            format!("{prefix} {}", request.description)
        }
    }
}
