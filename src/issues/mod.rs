//! Issue taxonomy: codes, severities and the definition registry.

mod registry;
mod types;

pub use registry::{definition, BuiltinRegistry, IssueDefinition, IssueRegistry, BUILTIN};
pub use types::{sort_by_severity, Category, Effort, Issue, IssueCode, Severity};
