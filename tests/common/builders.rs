//! Test data builders for creating test objects

use luapad_rs::autocomplete::AutocompleteController;
use luapad_rs::config::{AutocompleteOptions, SurfaceMetrics};

/// Builder for controllers with non-default options
pub struct ControllerBuilder {
    options: AutocompleteOptions,
    metrics: SurfaceMetrics,
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self {
            options: AutocompleteOptions::default(),
            metrics: SurfaceMetrics::default(),
        }
    }

    pub fn max_candidates(mut self, max: usize) -> Self {
        self.options.max_candidates = max;
        self
    }

    pub fn min_prefix_length(mut self, len: usize) -> Self {
        self.options.min_prefix_length = len;
        self
    }

    /// Use a simple grid: 10pt cells, 20pt lines, no padding
    pub fn grid_metrics(mut self) -> Self {
        self.metrics = SurfaceMetrics {
            char_width: 10.0,
            line_height: 20.0,
            padding: 0.0,
        };
        self
    }

    pub fn build(self) -> AutocompleteController {
        AutocompleteController::new(self.options, self.metrics)
            .expect("builder options should be valid")
    }
}

/// Lua source declaring `count` locals `{prefix}1..={prefix}N`
pub fn numbered_locals(prefix: &str, count: usize) -> String {
    (1..=count)
        .map(|i| format!("local {}{} = {}\n", prefix, i, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_builder() {
        let controller = ControllerBuilder::new().max_candidates(3).build();
        assert_eq!(controller.options().max_candidates, 3);
    }

    #[test]
    fn test_numbered_locals() {
        assert_eq!(numbered_locals("x", 2), "local x1 = 1\nlocal x2 = 2\n");
    }
}
