pub mod catalog;
pub mod template;
pub mod violation;

pub use catalog::{ResourceTypeCatalog, ResourceTypeSpec};
pub use template::{Resource, Template};
pub use violation::{Finding, Violation};
