//! Generator configuration.

/// Strictness of an unconfigured mock member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockBehavior {
    /// Unconfigured calls fail.
    #[default]
    Strict,
    /// Unconfigured calls return defaults.
    Loose,
}

impl MockBehavior {
    /// Fully qualified C# expression for this behavior value.
    pub fn qualified(&self) -> &'static str {
        match self {
            MockBehavior::Strict => "global::Moq.MockBehavior.Strict",
            MockBehavior::Loose => "global::Moq.MockBehavior.Loose",
        }
    }
}

/// Configuration threaded into the generator's entry point.
///
/// The process-wide default behavior consulted by parameterless constructors
/// in the emitted code is seeded from `default_behavior`; the engine itself
/// holds no global state. The fallback is [`MockBehavior::Strict`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Prefix for the shared support namespace, keeping generated names clear
    /// of host-project namespaces. Absent means no prefix.
    pub namespace_prefix: Option<String>,
    /// Initial value of the emitted process-wide default behavior.
    pub default_behavior: MockBehavior,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.namespace_prefix = Some(prefix.into());
        self
    }

    pub fn with_default_behavior(mut self, behavior: MockBehavior) -> Self {
        self.default_behavior = behavior;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavior_qualified_names() {
        assert_eq!(
            MockBehavior::Strict.qualified(),
            "global::Moq.MockBehavior.Strict"
        );
        assert_eq!(
            MockBehavior::Loose.qualified(),
            "global::Moq.MockBehavior.Loose"
        );
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(GeneratorOptions::default().default_behavior, MockBehavior::Strict);
    }
}
