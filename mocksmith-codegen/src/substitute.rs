//! Buffer adapter synthesis.
//!
//! Stack-only buffer properties cannot be served by a heap-backed mock, so a
//! target that declares any gets a nested companion surface (`__ISubstitute`,
//! exposing each buffer property as a plain array) and a private facade
//! (`__Substitute`) implementing the target against two backing mocks:
//! ordinary members forward to the primary proxy, buffer properties read the
//! secondary proxy's array and convert on every access.

use mocksmith_ir::{Method, Property, TypeUniverse};

use crate::{
    BuilderInfo, CodeBuilder,
    classify::Classification,
    target::{declare_params, forward_args},
};

pub(crate) fn emit(
    b: CodeBuilder,
    universe: &TypeUniverse,
    support_ns: &str,
    info: &BuilderInfo,
    properties: &[Property],
    classifications: &[Classification],
    methods: &[Method],
) -> CodeBuilder {
    let b = emit_companion_surface(b, universe, properties, classifications).blank();
    emit_facade(
        b,
        universe,
        support_ns,
        info,
        properties,
        classifications,
        methods,
    )
}

fn emit_companion_surface(
    b: CodeBuilder,
    universe: &TypeUniverse,
    properties: &[Property],
    classifications: &[Classification],
) -> CodeBuilder {
    b.line("public interface __ISubstitute")
        .block_with_close("{", "}", |b| {
            b.each(properties.iter().zip(classifications), |b, (property, c)| {
                let Classification::Buffer { element, .. } = c else {
                    return b;
                };
                b.line(&format!(
                    "{}[] {} {{ get; }}",
                    universe.full_name(*element),
                    property.name
                ))
            })
        })
}

fn emit_facade(
    b: CodeBuilder,
    universe: &TypeUniverse,
    support_ns: &str,
    info: &BuilderInfo,
    properties: &[Property],
    classifications: &[Classification],
    methods: &[Method],
) -> CodeBuilder {
    let mut b = b
        .line(&format!(
            "private class __Substitute : {}, global::{}.ISubstitute",
            info.target_full_name, support_ns
        ))
        .line("{")
        .indent()
        .line("private readonly global::Moq.Mock<__ISubstitute> _substituteMock;")
        .line(&format!(
            "private readonly global::Moq.Mock<{}> _objectMock;",
            info.target_full_name
        ))
        .blank()
        .line(&format!(
            "public __Substitute(global::Moq.Mock<__ISubstitute> substituteMock, global::Moq.Mock<{}> objectMock)",
            info.target_full_name
        ))
        .block_with_close("{", "}", |b| {
            b.line("_substituteMock = substituteMock;")
                .line("_objectMock = objectMock;")
        })
        .blank()
        .line("public global::Moq.Mock SubstituteMock => _substituteMock;")
        .line("public global::Moq.Mock ObjectMock => _objectMock;");

    for (property, classification) in properties.iter().zip(classifications) {
        // Buffer reads convert the configured array on every access; no caching.
        let source = if matches!(classification, Classification::Buffer { .. }) {
            "_substituteMock"
        } else {
            "_objectMock"
        };
        b = b.blank().line(&format!(
            "public {} {} => {}.Object.{};",
            universe.full_name(property.ty),
            property.name,
            source,
            property.name
        ));
    }

    // Every method forwards, including those skipped as setters: the facade
    // must structurally satisfy the full target interface.
    for method in methods {
        b = b.blank().line(&format!(
            "public {} {}({}) => _objectMock.Object.{}({});",
            universe.full_name(method.return_type),
            method.name,
            declare_params(universe, &method.params),
            method.name,
            forward_args(&method.params)
        ));
    }

    b.dedent().line("}")
}
