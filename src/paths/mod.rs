pub mod enumerate;
pub mod path;
pub mod select;

pub use enumerate::{PathFinder, SearchMode};
pub use path::{Path, PathSet};
pub use select::SelectionStrategy;
