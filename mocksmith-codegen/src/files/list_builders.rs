//! The list-builder support utilities.
//!
//! `ListBuilder<T>` accumulates plain elements; `ListBuilder<T, TBuilder>`
//! additionally accepts per-element builder callbacks, with behavior-qualified
//! and derived-builder variants for polymorphic elements.

use crate::CodeBuilder;

/// The `ListBuilder` family of support classes.
pub struct ListBuilders {
    namespace: String,
}

impl ListBuilders {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn render(&self) -> String {
        CodeBuilder::csharp()
            .line(&format!("namespace {}", self.namespace))
            .block_with_close("{", "}", |b| {
                let b = Self::plain_base(b).blank();
                let b = Self::builder_base(b).blank();
                Self::sealed_builders(b)
            })
            .build()
    }

    fn plain_base(b: CodeBuilder) -> CodeBuilder {
        b.line("public abstract class __ListBuilderBase<T, TListBuilder>")
            .indent()
            .line("where TListBuilder : __ListBuilderBase<T, TListBuilder>, new()")
            .dedent()
            .block_with_close("{", "}", |b| {
                b.line("private readonly global::System.Collections.Generic.List<T> _list;")
                    .blank()
                    .line("protected __ListBuilderBase()")
                    .block_with_close("{", "}", |b| b.line("_list = new();"))
                    .blank()
                    .line("protected abstract TListBuilder This { get; }")
                    .blank()
                    .line("public global::System.Collections.Generic.IReadOnlyList<T> Build() => _list;")
                    .blank()
                    .line("public TListBuilder Add(T item)")
                    .block_with_close("{", "}", |b| {
                        b.line("_list.Add(item);").line("return This;")
                    })
                    .blank()
                    .line("public static global::System.Collections.Generic.IReadOnlyList<T> Build(global::System.Action<TListBuilder> buildAction)")
                    .block_with_close("{", "}", |b| {
                        b.line("TListBuilder builder = new TListBuilder();")
                            .line("buildAction(builder);")
                            .line("return builder.Build();")
                    })
            })
    }

    fn builder_base(b: CodeBuilder) -> CodeBuilder {
        b.line("public abstract class __ListBuilderBase<T, TBuilder, TListBuilder> : __ListBuilderBase<T, TListBuilder>")
            .indent()
            .line("where TBuilder : IBuilder<T>")
            .line("where TListBuilder : __ListBuilderBase<T, TBuilder, TListBuilder>, new()")
            .dedent()
            .block_with_close("{", "}", |b| {
                b.line("protected __ListBuilderBase()")
                    .line("{")
                    .line("}")
                    .blank()
                    .line("public TListBuilder Add(global::Moq.MockBehavior behavior, global::System.Action<TBuilder> buildAction)")
                    .block_with_close("{", "}", |b| {
                        b.line("TBuilder builder = (TBuilder)global::System.Activator.CreateInstance(typeof(TBuilder), new object[] { behavior })!;")
                            .line("buildAction(builder);")
                            .line("return Add(builder.Build());")
                    })
                    .blank()
                    .line("public TListBuilder Add<TDerivedBuilder>(global::Moq.MockBehavior behavior, global::System.Action<TDerivedBuilder> buildAction)")
                    .indent()
                    .line("where TDerivedBuilder : IBuilder<T>")
                    .dedent()
                    .block_with_close("{", "}", |b| {
                        b.line("TDerivedBuilder builder = (TDerivedBuilder)global::System.Activator.CreateInstance(typeof(TDerivedBuilder), new object[] { behavior })!;")
                            .line("buildAction(builder);")
                            .line("return Add(builder.Build());")
                    })
                    .blank()
                    .line("public TListBuilder Add(global::System.Action<TBuilder> buildAction)")
                    .block_with_close("{", "}", |b| {
                        b.line("return Add(MockSettings.DefaultMockBehavior, buildAction);")
                    })
                    .blank()
                    .line("public TListBuilder Add<TDerivedBuilder>(global::System.Action<TDerivedBuilder> buildAction)")
                    .indent()
                    .line("where TDerivedBuilder : IBuilder<T>")
                    .dedent()
                    .block_with_close("{", "}", |b| {
                        b.line("return Add<TDerivedBuilder>(MockSettings.DefaultMockBehavior, buildAction);")
                    })
            })
    }

    fn sealed_builders(b: CodeBuilder) -> CodeBuilder {
        b.line("public sealed class ListBuilder<T> : __ListBuilderBase<T, ListBuilder<T>>")
            .block_with_close("{", "}", |b| {
                b.line("public ListBuilder()")
                    .line("{")
                    .line("}")
                    .blank()
                    .line("protected override ListBuilder<T> This => this;")
            })
            .blank()
            .line("public sealed class ListBuilder<T, TBuilder> : __ListBuilderBase<T, TBuilder, ListBuilder<T, TBuilder>>")
            .indent()
            .line("where TBuilder : IBuilder<T>")
            .dedent()
            .block_with_close("{", "}", |b| {
                b.line("public ListBuilder()")
                    .line("{")
                    .line("}")
                    .blank()
                    .line("protected override ListBuilder<T, TBuilder> This => this;")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_declares_all_four_classes() {
        let text = ListBuilders::new("Mocks").render();
        assert!(text.contains("public abstract class __ListBuilderBase<T, TListBuilder>"));
        assert!(
            text.contains("public abstract class __ListBuilderBase<T, TBuilder, TListBuilder>")
        );
        assert!(text.contains("public sealed class ListBuilder<T> :"));
        assert!(text.contains("public sealed class ListBuilder<T, TBuilder> :"));
    }

    #[test]
    fn test_behavior_qualified_add_falls_back_to_settings() {
        let text = ListBuilders::new("Mocks").render();
        assert!(text.contains("return Add(MockSettings.DefaultMockBehavior, buildAction);"));
        assert!(
            text.contains("return Add<TDerivedBuilder>(MockSettings.DefaultMockBehavior, buildAction);")
        );
    }
}
