//! Type-name parser configuration.

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Maximum depth of nested type argument lists (`A<B<C>>` has depth 2). `None` means unbounded.
    pub max_nesting_depth: Option<usize>,
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the nesting depth of type argument lists
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = Some(depth);
        self
    }

    /// Remove the nesting depth limit
    pub fn unbounded(mut self) -> Self {
        self.max_nesting_depth = None;
        self
    }

    /// Return `true` if `depth` nested argument lists are within the limit.
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_nesting_depth.is_none_or(|max| depth <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_unbounded() {
        let config = ParserConfig::default();
        assert_eq!(config.max_nesting_depth, None);
        assert!(config.allows_depth(usize::MAX));
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ParserConfig::new(), ParserConfig::default());
    }

    #[test]
    fn test_with_max_nesting_depth() {
        let config = ParserConfig::new().with_max_nesting_depth(2);
        assert_eq!(config.max_nesting_depth, Some(2));
        assert!(config.allows_depth(2));
        assert!(!config.allows_depth(3));
    }

    #[test]
    fn test_with_max_nesting_depth_zero() {
        let config = ParserConfig::new().with_max_nesting_depth(0);
        assert!(config.allows_depth(0));
        assert!(!config.allows_depth(1));
    }

    #[test]
    fn test_unbounded_clears_limit() {
        let config = ParserConfig::new().with_max_nesting_depth(4).unbounded();
        assert_eq!(config, ParserConfig::default());
    }
}
