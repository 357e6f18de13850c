//! Per-target builder synthesis.
//!
//! One invocation renders the complete builder blob for one target: generated
//! delegates, the builder class with its constructors and accessors, the full
//! setter family of every member, the static `Build` entry points, and — when
//! the target has buffer-valued properties — the nested substitute facade.

use mocksmith_ir::{
    GenerationBatch, Method, Param, Property, TargetDescriptor, TypeId, TypeUniverse,
};

use crate::{
    BuilderInfo, BuilderRegistry, CodeBuilder,
    classify::{Classification, MethodPlan, classify_method, classify_property},
    naming::MOCKS_SEGMENT,
    substitute,
};

pub(crate) struct TargetEmitter<'a> {
    universe: &'a TypeUniverse,
    batch: &'a GenerationBatch,
    support_ns: &'a str,
    registry: &'a mut BuilderRegistry,
}

impl<'a> TargetEmitter<'a> {
    pub fn new(
        universe: &'a TypeUniverse,
        batch: &'a GenerationBatch,
        support_ns: &'a str,
        registry: &'a mut BuilderRegistry,
    ) -> Self {
        Self {
            universe,
            batch,
            support_ns,
            registry,
        }
    }

    /// Render the complete source blob for one target.
    pub fn render(&mut self, target: &TargetDescriptor) -> String {
        let universe = self.universe;
        let info = self.registry.info(universe, target.type_id);
        let builder_ns = builder_namespace(&info);

        let properties: Vec<Property> = universe
            .all_properties(target.type_id, &target.ignore)
            .into_iter()
            .cloned()
            .collect();
        let methods: Vec<Method> = universe
            .all_methods(target.type_id, &target.ignore)
            .into_iter()
            .cloned()
            .collect();
        let classifications: Vec<Classification> = properties
            .iter()
            .map(|property| classify_property(universe, self.batch, property))
            .collect();
        let behavioral: Vec<&Method> = methods
            .iter()
            .filter(|method| classify_method(universe, method) == MethodPlan::Behavioral)
            .collect();
        let has_buffers = classifications
            .iter()
            .any(|c| matches!(c, Classification::Buffer { .. }));

        let mut b = CodeBuilder::csharp()
            .line(&format!("namespace {}", builder_ns))
            .line("{")
            .indent();

        for method in &behavioral {
            b = b
                .line(&format!(
                    "public delegate {} _{}Delegate({});",
                    universe.full_name(method.return_type),
                    method.name,
                    declare_params(universe, &method.params)
                ))
                .blank();
        }

        b = b
            .line(&format!(
                "public class {} : global::{}.IBuilder<{}>",
                info.builder_name, self.support_ns, info.target_full_name
            ))
            .line("{")
            .indent();

        b = self.emit_fields(b, &info, has_buffers).blank();
        b = self.emit_constructors(b, &info, has_buffers).blank();
        b = b
            .line(&format!(
                "public global::Moq.Mock<{}> Mock => _mock;",
                info.target_full_name
            ))
            .blank();
        b = if has_buffers {
            b.line(&format!(
                "public {} Build() => new __Substitute(_substituteMock, _mock);",
                info.target_full_name
            ))
        } else {
            b.line(&format!(
                "public {} Build() => _mock.Object;",
                info.target_full_name
            ))
        }
        .blank();
        b = self.emit_setup(b, &info).blank();

        for (property, classification) in properties.iter().zip(&classifications) {
            b = self
                .emit_property_family(b, &info, property, classification)
                .blank();
        }
        for method in &behavioral {
            b = self
                .emit_method_setter(b, &info, &builder_ns, method)
                .blank();
        }

        b = self.emit_static_builds(b, &info);

        if has_buffers {
            b = b.blank();
            b = substitute::emit(
                b,
                universe,
                self.support_ns,
                &info,
                &properties,
                &classifications,
                &methods,
            );
        }

        b.dedent().line("}").dedent().line("}").build()
    }

    fn emit_fields(&self, b: CodeBuilder, info: &BuilderInfo, has_buffers: bool) -> CodeBuilder {
        b.line("private readonly global::Moq.MockBehavior _behavior;")
            .when(has_buffers, |b| {
                b.line("private readonly global::Moq.Mock<__ISubstitute> _substituteMock;")
            })
            .line(&format!(
                "private readonly global::Moq.Mock<{}> _mock;",
                info.target_full_name
            ))
    }

    fn emit_constructors(
        &self,
        b: CodeBuilder,
        info: &BuilderInfo,
        has_buffers: bool,
    ) -> CodeBuilder {
        b.line(&format!(
            "public {}(global::Moq.MockBehavior behavior)",
            info.builder_name
        ))
        .line("{")
        .indent()
        .line("_behavior = behavior;")
        .when(has_buffers, |b| {
            b.line("_substituteMock = new global::Moq.Mock<__ISubstitute>(behavior);")
        })
        .line(&format!(
            "_mock = new global::Moq.Mock<{}>(behavior);",
            info.target_full_name
        ))
        .dedent()
        .line("}")
        .blank()
        .line(&format!(
            "public {}() : this(global::{}.MockSettings.DefaultMockBehavior)",
            info.builder_name, self.support_ns
        ))
        .line("{")
        .line("}")
    }

    fn emit_setup(&self, b: CodeBuilder, info: &BuilderInfo) -> CodeBuilder {
        b.line(&format!(
            "public {} Setup(global::System.Action<global::Moq.Mock<{}>> setup)",
            info.builder_name, info.target_full_name
        ))
        .block_with_close("{", "}", |b| {
            b.line("setup(_mock);").line("return this;")
        })
    }

    fn emit_property_family(
        &mut self,
        b: CodeBuilder,
        info: &BuilderInfo,
        property: &Property,
        classification: &Classification,
    ) -> CodeBuilder {
        let universe = self.universe;
        match classification {
            Classification::Plain => self.emit_plain_setter(b, info, property),
            Classification::Nested { candidates } => {
                let mut b = self.emit_plain_setter(b, info, property);
                for candidate in candidates {
                    let nested = self.registry.info(universe, candidate.target);
                    b = emit_nested_overloads(b, info, &property.name, &nested, candidate.exact);
                }
                b
            }
            Classification::Sequence { element, builders } => {
                let element_name = universe.full_name(*element);
                let mut b = self
                    .emit_plain_setter(b, info, property)
                    .blank()
                    .line(&format!(
                        "public {} Set{}(params {}[] values)",
                        info.builder_name, property.name, element_name
                    ))
                    .block_with_close("{", "}", |b| {
                        b.line(&format!(
                            "return Set{}(values as global::System.Collections.Generic.IReadOnlyList<{}>);",
                            property.name, element_name
                        ))
                    });
                if builders.is_empty() {
                    let list_builder =
                        format!("global::{}.ListBuilder<{}>", self.support_ns, element_name);
                    b = emit_list_builder_overload(b, info, &property.name, &list_builder);
                } else {
                    for target in builders {
                        let element_builder = self.registry.info(universe, *target);
                        let list_builder = format!(
                            "global::{}.ListBuilder<{}, global::{}>",
                            self.support_ns, element_name, element_builder.builder_full_name
                        );
                        b = emit_list_builder_overload(b, info, &property.name, &list_builder);
                    }
                }
                b
            }
            Classification::Buffer {
                element,
                char_element,
            } => {
                let element_name = universe.full_name(*element);
                b.line(&format!(
                    "public {} Set{}({}[] value)",
                    info.builder_name, property.name, element_name
                ))
                .block_with_close("{", "}", |b| {
                    b.line(&format!(
                        "_substituteMock.Setup(x => x.{}).Returns(value);",
                        property.name
                    ))
                    .line("return this;")
                })
                .when(*char_element, |b| {
                    b.blank()
                        .line(&format!(
                            "public {} Set{}(string value)",
                            info.builder_name, property.name
                        ))
                        .block_with_close("{", "}", |b| {
                            b.line(&format!(
                                "_substituteMock.Setup(x => x.{}).Returns(value.ToCharArray());",
                                property.name
                            ))
                            .line("return this;")
                        })
                })
            }
        }
    }

    fn emit_plain_setter(
        &self,
        b: CodeBuilder,
        info: &BuilderInfo,
        property: &Property,
    ) -> CodeBuilder {
        b.line(&format!(
            "public {} Set{}({} value)",
            info.builder_name,
            property.name,
            self.universe.full_name(property.ty)
        ))
        .block_with_close("{", "}", |b| {
            b.line(&format!(
                "_mock.Setup(x => x.{}).Returns(value);",
                property.name
            ))
            .line("return this;")
        })
    }

    fn emit_method_setter(
        &self,
        b: CodeBuilder,
        info: &BuilderInfo,
        builder_ns: &str,
        method: &Method,
    ) -> CodeBuilder {
        let universe = self.universe;
        let delegate_full = format!("global::{}._{}Delegate", builder_ns, method.name);
        let matchers: Vec<String> = method
            .params
            .iter()
            .map(|param| wildcard_matcher(universe, param))
            .collect();
        let attach = if is_void(universe, method.return_type) {
            "Callback"
        } else {
            "Returns"
        };
        b.line(&format!(
            "public {} Set{}({} handler)",
            info.builder_name, method.name, delegate_full
        ))
        .block_with_close("{", "}", |b| {
            b.line(&format!(
                "_mock.Setup(x => x.{}({})).{}(handler);",
                method.name,
                matchers.join(", "),
                attach
            ))
            .line("return this;")
        })
    }

    fn emit_static_builds(&self, b: CodeBuilder, info: &BuilderInfo) -> CodeBuilder {
        b.line(&format!(
            "public static {} Build(global::Moq.MockBehavior behavior, global::System.Action<{}> buildAction)",
            info.target_full_name, info.builder_name
        ))
        .block_with_close("{", "}", |b| {
            b.line(&format!("var builder = new {}(behavior);", info.builder_name))
                .line("buildAction(builder);")
                .line("return builder.Build();")
        })
        .blank()
        .line(&format!(
            "public static {} Build(global::System.Action<{}> buildAction)",
            info.target_full_name, info.builder_name
        ))
        .block_with_close("{", "}", |b| {
            b.line(&format!(
                "return Build(global::{}.MockSettings.DefaultMockBehavior, buildAction);",
                self.support_ns
            ))
        })
    }
}

fn emit_nested_overloads(
    b: CodeBuilder,
    info: &BuilderInfo,
    property_name: &str,
    nested: &BuilderInfo,
    exact: bool,
) -> CodeBuilder {
    let type_param = if exact { "" } else { "<T>" };
    let emit_one = |b: CodeBuilder, behavior_arg: bool| {
        let params = if behavior_arg {
            format!(
                "global::Moq.MockBehavior behavior, global::System.Action<global::{}> buildAction",
                nested.builder_full_name
            )
        } else {
            format!(
                "global::System.Action<global::{}> buildAction",
                nested.builder_full_name
            )
        };
        let build_args = if behavior_arg {
            "behavior, buildAction"
        } else {
            "buildAction"
        };
        b.blank()
            .line(&format!(
                "public {} Set{}{}({})",
                info.builder_name, property_name, type_param, params
            ))
            .when(!exact, |b| {
                b.indent()
                    .line(&format!("where T : class, {}", nested.target_full_name))
                    .dedent()
            })
            .block_with_close("{", "}", |b| {
                b.line(&format!(
                    "return Set{}(global::{}.Build({}));",
                    property_name, nested.builder_full_name, build_args
                ))
            })
    };
    let b = emit_one(b, false);
    emit_one(b, true)
}

fn emit_list_builder_overload(
    b: CodeBuilder,
    info: &BuilderInfo,
    property_name: &str,
    list_builder: &str,
) -> CodeBuilder {
    b.blank()
        .line(&format!(
            "public {} Set{}(global::System.Action<{}> buildAction)",
            info.builder_name, property_name, list_builder
        ))
        .block_with_close("{", "}", |b| {
            b.line(&format!(
                "return Set{}({}.Build(buildAction));",
                property_name, list_builder
            ))
        })
}

/// Namespace the builder (and its generated delegates) are emitted into.
pub(crate) fn builder_namespace(info: &BuilderInfo) -> String {
    if info.target_namespace.is_empty() {
        MOCKS_SEGMENT.to_string()
    } else {
        format!("{}.{}", info.target_namespace, MOCKS_SEGMENT)
    }
}

/// Parameter list for a declaration site, with passing-mode modifiers.
pub(crate) fn declare_params(universe: &TypeUniverse, params: &[Param]) -> String {
    params
        .iter()
        .map(|param| {
            let ty = universe.full_name(param.ty);
            match param.mode.modifier() {
                Some(modifier) => format!("{} {} {}", modifier, ty, param.name),
                None => format!("{} {}", ty, param.name),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Argument list for a forwarding call site, with passing-mode modifiers.
pub(crate) fn forward_args(params: &[Param]) -> String {
    params
        .iter()
        .map(|param| match param.mode.modifier() {
            Some(modifier) => format!("{} {}", modifier, param.name),
            None => param.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn wildcard_matcher(universe: &TypeUniverse, param: &Param) -> String {
    let ty = universe.full_name(param.ty);
    match param.mode.modifier() {
        // Reference-aware wildcard for ref/out/in parameters.
        Some(modifier) => format!("{} global::Moq.It.Ref<{}>.IsAny", modifier, ty),
        None => format!("global::Moq.It.IsAny<{}>()", ty),
    }
}

fn is_void(universe: &TypeUniverse, id: TypeId) -> bool {
    let data = universe.get(id);
    data.namespace == "System" && data.name == "Void"
}
