//! Error types for permgraph

use thiserror::Error;

use crate::permission::Permission;

/// Errors from parsing permission strings and validating the dependency table.
///
/// Resolution itself never fails; only the string boundary and the
/// structural checks in [`crate::graph`] produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Well-formed `resource.action` string that is not in the catalog
    #[error("unknown permission: {0}")]
    Unknown(String),

    /// Not of the form `resource.action`
    #[error("malformed permission {0:?}: expected <resource>.<action>")]
    Malformed(String),

    #[error("permission {0} depends on itself")]
    SelfDependency(Permission),

    #[error("dependency cycle: {}", format_path(.0))]
    Cycle(Vec<Permission>),
}

fn format_path(path: &[Permission]) -> String {
    path.iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type alias for permgraph operations
pub type Result<T> = std::result::Result<T, PermissionError>;
