//! Directory role value object - structural role of a directory in a plugins tree

use std::fmt;

use super::Target;

/// Classification result for a directory.
///
/// Computed purely from path segments; carries no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryRole {
    /// The plugins directory itself, uploaded wholesale to staging
    GenericModuleRoot,
    /// A `REST` directory below an `input` segment
    RestInput,
    /// A `REST` directory below a `harmonize` segment
    RestHarmonize,
    /// A `REST` directory with neither an `input` nor a `harmonize` segment.
    ///
    /// Terminal like the other REST roles but has no target, so nothing is
    /// uploaded for it. Revisit if malformed REST trees should be reported.
    UnroutedRest,
    /// A direct child of the entities root
    EntityDefinitionsLeaf,
    /// Anything else; the walk continues into its children
    Unclassified,
}

impl DirectoryRole {
    /// Target tier for REST roles that have one
    pub fn target(&self) -> Option<Target> {
        match self {
            DirectoryRole::RestInput => Some(Target::Staging),
            DirectoryRole::RestHarmonize => Some(Target::Final),
            _ => None,
        }
    }

    /// Whether the walk must not descend below a directory with this role
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DirectoryRole::RestInput | DirectoryRole::RestHarmonize | DirectoryRole::UnroutedRest
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryRole::GenericModuleRoot => "generic-module-root",
            DirectoryRole::RestInput => "rest-input",
            DirectoryRole::RestHarmonize => "rest-harmonize",
            DirectoryRole::UnroutedRest => "unrouted-rest",
            DirectoryRole::EntityDefinitionsLeaf => "entity-definitions-leaf",
            DirectoryRole::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
