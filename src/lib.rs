//! permgraph - Permission dependency resolution
//!
//! A closed catalog of `resource.action` permissions, a static table of
//! direct dependencies between them, and pure queries over that table:
//! - closure: everything a selection implicitly requires
//! - auto-added: what the closure adds to a manual selection
//! - removal check: whether revoking one permission leaves the rest satisfied
//!
//! ```
//! use permgraph::{resolve_closure, Permission};
//!
//! let set = resolve_closure(&[Permission::OrderCreate]);
//! assert!(set.contains(&Permission::ProductRead));
//! ```

pub mod catalog;
pub mod error;
pub mod graph;
pub mod permission;
pub mod resolve;

pub use catalog::{by_resource, dependencies, dependents};
pub use error::{PermissionError, Result};
pub use permission::{parse_permissions, Permission, Resource};
pub use resolve::{
    add_permissions_related, auto_added_permissions, blocking_permissions, can_remove_permission,
    direct_dependencies, direct_dependencies_of, is_closed, missing_dependencies, resolve_closure,
    resolve_names, PermissionSet, RemovalCheck,
};
