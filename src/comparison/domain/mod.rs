pub mod comparison;
pub mod component_version;
pub mod conflicts;
pub mod document;
pub mod identifier;

pub use comparison::{AppearanceViolation, ComponentComparisons, Comparison};
pub use component_version::ComponentVersion;
pub use conflicts::{
    ComponentConflict, ComponentConflictType, DiffReport, SbomConflict, SbomConflictType,
};
pub use document::{DocumentRef, DocumentSet};
pub use identifier::{Attributes, IdentifierKind, IdentifierPool, IdentifierPools};
