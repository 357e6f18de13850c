//! The process-wide default behavior holder.

use crate::{CodeBuilder, MockBehavior};

/// The `MockSettings` support class. Its static field is the process-wide
/// default consulted by parameterless builder constructors; the initial value
/// comes from the generator options.
pub struct MockSettings {
    namespace: String,
    default_behavior: MockBehavior,
}

impl MockSettings {
    pub fn new(namespace: impl Into<String>, default_behavior: MockBehavior) -> Self {
        Self {
            namespace: namespace.into(),
            default_behavior,
        }
    }

    pub fn render(&self) -> String {
        CodeBuilder::csharp()
            .line(&format!("namespace {}", self.namespace))
            .block_with_close("{", "}", |b| {
                b.line("public static class MockSettings")
                    .block_with_close("{", "}", |b| {
                        b.line(&format!(
                            "public static global::Moq.MockBehavior DefaultMockBehavior = {};",
                            self.default_behavior.qualified()
                        ))
                    })
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_strict_default() {
        let text = MockSettings::new("Mocks", MockBehavior::Strict).render();
        assert!(text.contains(
            "public static global::Moq.MockBehavior DefaultMockBehavior = global::Moq.MockBehavior.Strict;"
        ));
    }

    #[test]
    fn test_render_loose_default() {
        let text = MockSettings::new("Mocks", MockBehavior::Loose).render();
        assert!(text.contains("= global::Moq.MockBehavior.Loose;"));
    }
}
