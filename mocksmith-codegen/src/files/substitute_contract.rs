//! The substitute-inspection contract implemented by buffer facades.

use crate::CodeBuilder;

/// The `ISubstitute` support interface, exposing both backing mocks of a
/// facade so the inspection helper can look through either.
pub struct SubstituteContract {
    namespace: String,
}

impl SubstituteContract {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn render(&self) -> String {
        CodeBuilder::csharp()
            .line(&format!("namespace {}", self.namespace))
            .block_with_close("{", "}", |b| {
                b.line("public interface ISubstitute")
                    .block_with_close("{", "}", |b| {
                        b.line("global::Moq.Mock ObjectMock { get; }")
                            .line("global::Moq.Mock SubstituteMock { get; }")
                    })
            })
            .build()
    }
}
