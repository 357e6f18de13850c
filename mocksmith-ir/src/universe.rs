//! Arena of resolved type descriptors.
//!
//! The universe owns every type referenced during one generation pass. Types
//! refer to each other through [`TypeId`], so mutually recursive interfaces
//! (A has a property of type B, B one of type A) are registered id-first and
//! filled in afterwards. Descriptors are produced once by the discovery
//! front end and never mutated during synthesis.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{SequenceKind, TypeId, TypeKind};

/// A property of an interface, as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub ty: TypeId,
}

/// A parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeId,
    pub mode: crate::PassingMode,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            mode: crate::PassingMode::Value,
        }
    }

    pub fn with_mode(mut self, mode: crate::PassingMode) -> Self {
        self.mode = mode;
        self
    }
}

/// An ordinary (non-property) interface member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub return_type: TypeId,
    #[serde(default)]
    pub params: Vec<Param>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: TypeId) -> Self {
        Self {
            name: name.into(),
            return_type,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

/// One resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeData {
    /// Declaring namespace; empty for the global namespace.
    pub namespace: String,
    /// Simple name, e.g. `IMachine` or `ReadOnlySpan`.
    pub name: String,
    /// Type arguments for generic instantiations.
    #[serde(default)]
    pub type_args: Vec<TypeId>,
    /// Language keyword alias for primitives (`string`, `char`, `void`).
    #[serde(default)]
    pub keyword: Option<String>,
    pub kind: TypeKind,
    /// True for stack-only types that can never be stored in a heap field.
    #[serde(default)]
    pub ref_like: bool,
    /// Directly implemented interfaces.
    #[serde(default)]
    pub implements: Vec<TypeId>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl TypeData {
    fn named(namespace: &str, name: &str, kind: TypeKind) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            type_args: Vec::new(),
            keyword: None,
            kind,
            ref_like: false,
            implements: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// The set of all types known to one generation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeUniverse {
    types: Vec<TypeData>,
}

impl TypeUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Register a raw descriptor and return its id.
    pub fn add(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    /// Descriptor for `id`. Ids handed out by this universe are always valid.
    pub fn get(&self, id: TypeId) -> &TypeData {
        &self.types[id.index()]
    }

    /// All registered descriptors in registration order.
    pub fn types(&self) -> &[TypeData] {
        &self.types
    }

    /// Register an interface shape, reusing an existing id when the same
    /// namespace-qualified name was registered before.
    pub fn interface(&mut self, namespace: &str, name: &str) -> TypeId {
        if let Some(id) = self.find_named(namespace, name, &[]) {
            return id;
        }
        self.add(TypeData::named(namespace, name, TypeKind::Interface))
    }

    /// Register an opaque value shape.
    pub fn value_type(&mut self, namespace: &str, name: &str) -> TypeId {
        if let Some(id) = self.find_named(namespace, name, &[]) {
            return id;
        }
        self.add(TypeData::named(namespace, name, TypeKind::Value))
    }

    /// Register a primitive with its language keyword alias.
    pub fn primitive(&mut self, namespace: &str, name: &str, keyword: &str) -> TypeId {
        if let Some(id) = self.find_named(namespace, name, &[]) {
            return id;
        }
        let mut data = TypeData::named(namespace, name, TypeKind::Value);
        data.keyword = Some(keyword.to_string());
        self.add(data)
    }

    /// Register one of the read-only sequence instantiations over `element`.
    pub fn sequence(&mut self, kind: SequenceKind, element: TypeId) -> TypeId {
        let name = kind.interface_name();
        if let Some(id) = self.find_named("System.Collections.Generic", name, &[element]) {
            return id;
        }
        let mut data = TypeData::named("System.Collections.Generic", name, TypeKind::Interface);
        data.type_args = vec![element];
        self.add(data)
    }

    /// Register `System.Span<element>`.
    pub fn span(&mut self, element: TypeId) -> TypeId {
        self.buffer("Span", element)
    }

    /// Register `System.ReadOnlySpan<element>`.
    pub fn read_only_span(&mut self, element: TypeId) -> TypeId {
        self.buffer("ReadOnlySpan", element)
    }

    fn buffer(&mut self, name: &str, element: TypeId) -> TypeId {
        if let Some(id) = self.find_named("System", name, &[element]) {
            return id;
        }
        let mut data = TypeData::named("System", name, TypeKind::Value);
        data.type_args = vec![element];
        data.ref_like = true;
        self.add(data)
    }

    /// Declare that `ty` directly implements `base`.
    pub fn add_base(&mut self, ty: TypeId, base: TypeId) {
        self.types[ty.index()].implements.push(base);
    }

    /// Declare a property on `ty`.
    pub fn add_property(&mut self, ty: TypeId, name: impl Into<String>, property_type: TypeId) {
        self.types[ty.index()].properties.push(Property {
            name: name.into(),
            ty: property_type,
        });
    }

    /// Declare a method on `ty`.
    pub fn add_method(&mut self, ty: TypeId, method: Method) {
        self.types[ty.index()].methods.push(method);
    }

    /// Declaring namespace of `id`.
    pub fn namespace_of(&self, id: TypeId) -> &str {
        &self.get(id).namespace
    }

    /// Fully qualified C# display name: `global::`-rooted, with the keyword
    /// alias substituted for non-generic primitives.
    pub fn full_name(&self, id: TypeId) -> String {
        let data = self.get(id);
        if let Some(keyword) = &data.keyword {
            if data.type_args.is_empty() {
                return keyword.clone();
            }
        }
        let mut name = if data.namespace.is_empty() {
            format!("global::{}", data.name)
        } else {
            format!("global::{}.{}", data.namespace, data.name)
        };
        if !data.type_args.is_empty() {
            let args: Vec<String> = data
                .type_args
                .iter()
                .map(|arg| self.full_name(*arg))
                .collect();
            name.push('<');
            name.push_str(&args.join(", "));
            name.push('>');
        }
        name
    }

    /// Namespace-qualified display name without the `global::` root, used to
    /// name emitted source blobs.
    pub fn display_name(&self, id: TypeId) -> String {
        let data = self.get(id);
        if data.namespace.is_empty() {
            data.name.clone()
        } else {
            format!("{}.{}", data.namespace, data.name)
        }
    }

    /// Every interface `id` implements, directly or transitively, in
    /// first-encounter order and without duplicates.
    pub fn transitive_interfaces(&self, id: TypeId) -> Vec<TypeId> {
        let mut seen = Vec::new();
        self.collect_interfaces(id, &mut seen);
        seen
    }

    fn collect_interfaces(&self, id: TypeId, seen: &mut Vec<TypeId>) {
        for base in &self.get(id).implements {
            if !seen.contains(base) {
                seen.push(*base);
                self.collect_interfaces(*base, seen);
            }
        }
    }

    /// Returns true when `id` transitively implements `base`.
    pub fn implements(&self, id: TypeId, base: TypeId) -> bool {
        self.transitive_interfaces(id).contains(&base)
    }

    /// Flattened property list of a target: own declarations first, then each
    /// transitively implemented interface's, de-duplicated by name alone
    /// (first occurrence wins; coinciding names across bases silently fold),
    /// minus the ignore set.
    pub fn all_properties(&self, id: TypeId, ignore: &BTreeSet<String>) -> Vec<&Property> {
        let mut names = Vec::new();
        let mut result = Vec::new();
        for owner in std::iter::once(id).chain(self.transitive_interfaces(id)) {
            for property in &self.get(owner).properties {
                if ignore.contains(&property.name) || names.contains(&property.name) {
                    continue;
                }
                names.push(property.name.clone());
                result.push(property);
            }
        }
        result
    }

    /// Flattened method list, with the same fold rules as [`Self::all_properties`].
    pub fn all_methods(&self, id: TypeId, ignore: &BTreeSet<String>) -> Vec<&Method> {
        let mut names = Vec::new();
        let mut result = Vec::new();
        for owner in std::iter::once(id).chain(self.transitive_interfaces(id)) {
            for method in &self.get(owner).methods {
                if ignore.contains(&method.name) || names.contains(&method.name) {
                    continue;
                }
                names.push(method.name.clone());
                result.push(method);
            }
        }
        result
    }

    fn find_named(&self, namespace: &str, name: &str, args: &[TypeId]) -> Option<TypeId> {
        self.types
            .iter()
            .position(|data| {
                data.namespace == namespace && data.name == name && data.type_args == args
            })
            .map(|index| TypeId(index as u32))
    }
}
