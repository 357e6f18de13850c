//! Naming conventions for emitted builders.

use mocksmith_ir::{TypeId, TypeUniverse};

/// Namespace segment under which generated types live, both for the shared
/// support definitions (`{prefix}Mocks`) and for per-target builders
/// (`{target namespace}.Mocks`).
pub const MOCKS_SEGMENT: &str = "Mocks";

/// Stable naming tuple for one target type.
///
/// Derived deterministically and memoized per type identity by
/// [`crate::BuilderRegistry`], so every reference to the same target resolves
/// to the same builder name regardless of call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderInfo {
    pub target_namespace: String,
    pub target_full_name: String,
    pub builder_name: String,
    pub builder_full_name: String,
}

impl BuilderInfo {
    /// Derive the naming tuple for `target`: the conventional `I` interface
    /// marker is stripped from the simple name and a `Builder` suffix added.
    pub fn derive(universe: &TypeUniverse, target: TypeId) -> Self {
        let target_namespace = universe.namespace_of(target).to_string();
        let target_full_name = universe.full_name(target);
        let simple = &universe.get(target).name;
        let builder_name = match simple.strip_prefix('I') {
            Some(rest) => format!("{}Builder", rest),
            None => format!("{}Builder", simple),
        };
        let builder_full_name = format!("{}.{}.{}", target_namespace, MOCKS_SEGMENT, builder_name);
        Self {
            target_namespace,
            target_full_name,
            builder_name,
            builder_full_name,
        }
    }
}

/// Namespace holding the shared support definitions, optionally prefixed to
/// keep generated names clear of host-project namespaces.
pub fn support_namespace(prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{}.{}", prefix, MOCKS_SEGMENT),
        None => MOCKS_SEGMENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_interface_marker() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("ClassLibrary", "IMyInterface");
        let info = BuilderInfo::derive(&universe, thing);
        assert_eq!(info.builder_name, "MyInterfaceBuilder");
        assert_eq!(info.target_namespace, "ClassLibrary");
        assert_eq!(info.target_full_name, "global::ClassLibrary.IMyInterface");
        assert_eq!(
            info.builder_full_name,
            "ClassLibrary.Mocks.MyInterfaceBuilder"
        );
    }

    #[test]
    fn test_keeps_unmarked_name() {
        let mut universe = TypeUniverse::new();
        let thing = universe.interface("ClassLibrary", "Machine");
        let info = BuilderInfo::derive(&universe, thing);
        assert_eq!(info.builder_name, "MachineBuilder");
    }

    #[test]
    fn test_support_namespace_prefixing() {
        assert_eq!(support_namespace(None), "Mocks");
        assert_eq!(support_namespace(Some("MyAssembly")), "MyAssembly.Mocks");
    }
}
