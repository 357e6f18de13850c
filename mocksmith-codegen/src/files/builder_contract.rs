//! The builder marker contract implemented by every generated builder.

use crate::CodeBuilder;

/// The `IBuilder<out T>` support interface.
pub struct BuilderContract {
    namespace: String,
}

impl BuilderContract {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn render(&self) -> String {
        CodeBuilder::csharp()
            .line(&format!("namespace {}", self.namespace))
            .block_with_close("{", "}", |b| {
                b.line("public interface IBuilder<out T>")
                    .block_with_close("{", "}", |b| b.line("T Build();"))
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let text = BuilderContract::new("Mocks").render();
        assert_eq!(
            text,
            "namespace Mocks\n{\n  public interface IBuilder<out T>\n  {\n    T Build();\n  }\n}\n"
        );
    }
}
