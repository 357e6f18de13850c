//! The reflection-based configured-property predicate.

use crate::CodeBuilder;

/// The `MockHelper` support class: `IsSetUp` answers whether a property of a
/// built mock (or of either side of a substitute facade) was configured.
pub struct MockHelper {
    namespace: String,
}

impl MockHelper {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn render(&self) -> String {
        CodeBuilder::csharp()
            .line(&format!("namespace {}", self.namespace))
            .block_with_close("{", "}", |b| {
                b.line("public static class MockHelper")
                    .block_with_close("{", "}", |b| {
                        let b = Self::object_overload(b).blank();
                        let b = Self::mock_overload(b).blank();
                        Self::name_overload(b)
                    })
            })
            .build()
    }

    fn object_overload(b: CodeBuilder) -> CodeBuilder {
        b.line("public static bool IsSetUp<T, TProperty>(T obj, global::System.Linq.Expressions.Expression<global::System.Func<T, TProperty>> propertyExpression)")
            .indent()
            .line("where T : class")
            .dedent()
            .block_with_close("{", "}", |b| {
                b.line("if (propertyExpression is not global::System.Linq.Expressions.MemberExpression memberExpr || memberExpr.Member is not global::System.Reflection.PropertyInfo property)")
                    .indent()
                    .line("return false;")
                    .dedent()
                    .blank()
                    .line("string propertyName = property.Name;")
                    .blank()
                    .line("if (obj is ISubstitute substitute)")
                    .block_with_close("{", "}", |b| {
                        b.line("return IsSetUp(substitute.ObjectMock, propertyName) || IsSetUp(substitute.SubstituteMock, propertyName);")
                    })
                    .blank()
                    .line("var mock = global::Moq.Mock.Get(obj);")
                    .line("return IsSetUp(mock, propertyName);")
            })
    }

    fn mock_overload(b: CodeBuilder) -> CodeBuilder {
        b.line("public static bool IsSetUp<T, TProperty>(global::Moq.Mock<T> mock, global::System.Linq.Expressions.Expression<global::System.Func<T, TProperty>> propertyExpression)")
            .indent()
            .line("where T : class")
            .dedent()
            .block_with_close("{", "}", |b| {
                b.line("if (propertyExpression is not global::System.Linq.Expressions.MemberExpression memberExpr || memberExpr.Member is not global::System.Reflection.PropertyInfo property)")
                    .indent()
                    .line("return false;")
                    .dedent()
                    .blank()
                    .line("return IsSetUp(mock, property.Name);")
            })
    }

    fn name_overload(b: CodeBuilder) -> CodeBuilder {
        b.line("public static bool IsSetUp(global::Moq.Mock mock, string propertyName)")
            .block_with_close("{", "}", |b| {
                b.line("return global::System.Linq.Enumerable.Any(mock.Setups, setup =>")
                    .indent()
                    .line("setup is global::System.Linq.Expressions.MemberExpression memberExpr &&")
                    .line("memberExpr.Member is global::System.Reflection.PropertyInfo property &&")
                    .line("property.Name == propertyName);")
                    .dedent()
            })
    }
}
