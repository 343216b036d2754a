/// Pure services over a received comparison
pub mod conflict_filter;
pub mod navigation;
pub mod summary;

pub use conflict_filter::{
    filter_conflicts, is_divergent_component, is_divergent_version, ComparisonView, ConflictFilter,
};
pub use navigation::{LeafEntry, LeafView, Location, NavigationState, ROOT_TITLE};
pub use summary::ComparisonSummary;
