//! Validation settings.

/// Longest line accepted from the input, terminator included.
pub const DEFAULT_MAX_LINE_LEN: usize = 1024 * 1024;

/// Identifiers reserved up front in each run's registry.
pub const DEFAULT_REGISTRY_CAPACITY: usize = 1 << 16;

/// Settings shared by every file validated in one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Promote fault diagnostics from DEBUG to WARN.
    pub verbose: bool,
    /// Lines longer than this make the input unreadable.
    pub max_line_len: usize,
    /// Initial capacity hint for the identifier registry.
    pub registry_capacity: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            max_line_len: DEFAULT_MAX_LINE_LEN,
            registry_capacity: DEFAULT_REGISTRY_CAPACITY,
        }
    }
}

impl ValidatorConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len.max(1);
        self
    }

    pub fn with_registry_capacity(mut self, capacity: usize) -> Self {
        self.registry_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert!(!config.verbose);
        assert_eq!(config.max_line_len, DEFAULT_MAX_LINE_LEN);
        assert_eq!(config.registry_capacity, DEFAULT_REGISTRY_CAPACITY);
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::default()
            .with_verbose(true)
            .with_max_line_len(0)
            .with_registry_capacity(10);
        assert!(config.verbose);
        assert_eq!(config.max_line_len, 1);
        assert_eq!(config.registry_capacity, 10);
    }
}
