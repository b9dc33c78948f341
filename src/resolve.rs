//! Closure and revocation queries over the static dependency table
//!
//! Every function here is pure: inputs are caller-owned, the table is
//! immutable, and each call builds its own working set.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::catalog::dependencies;
use crate::permission::Permission;

/// A resolved, deduplicated permission set. Iteration order is catalog order
/// but callers must not rely on it.
pub type PermissionSet = BTreeSet<Permission>;

/// Outcome of [`can_remove_permission`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalCheck {
    /// No remaining permission requires the removed one, directly or transitively
    pub can_remove: bool,
    /// Remaining permissions that list the removed one as a DIRECT dependency
    pub dependent_permissions: Vec<Permission>,
}

/// Direct dependencies of a catalog permission, in declaration order
#[inline]
pub fn direct_dependencies(p: Permission) -> &'static [Permission] {
    dependencies(p)
}

/// Direct dependencies for an externally sourced string.
/// Unknown identifiers have no dependencies.
pub fn direct_dependencies_of(name: &str) -> &'static [Permission] {
    match Permission::lookup(name) {
        Some(p) => dependencies(p),
        None => {
            debug!(permission = name, "unknown permission has no dependencies");
            &[]
        }
    }
}

/// Transitive closure of `permissions` under the dependency table.
///
/// Includes every input. A dependency is pushed only when it is first
/// inserted into the result, so each permission is expanded at most once;
/// this is what bounds the loop even if the table ever gained a cycle.
pub fn resolve_closure(permissions: &[Permission]) -> PermissionSet {
    closure_with(permissions, dependencies)
}

pub(crate) fn closure_with<'a, F>(permissions: &[Permission], edges: F) -> PermissionSet
where
    F: Fn(Permission) -> &'a [Permission],
{
    let mut resolved: PermissionSet = permissions.iter().copied().collect();
    let mut stack: Vec<Permission> = permissions.to_vec();

    while let Some(p) = stack.pop() {
        for &dep in edges(p) {
            if resolved.insert(dep) {
                trace!(%p, %dep, "dependency added");
                stack.push(dep);
            }
        }
    }

    debug!(input = permissions.len(), resolved = resolved.len(), "resolved closure");
    resolved
}

/// Alias kept for callers using the role-editor naming
#[inline]
pub fn add_permissions_related(permissions: &[Permission]) -> PermissionSet {
    resolve_closure(permissions)
}

/// Closure over raw identifiers; unknown strings are dropped
pub fn resolve_names<S: AsRef<str>>(names: &[S]) -> PermissionSet {
    let known: Vec<Permission> = names
        .iter()
        .filter_map(|n| {
            let n = n.as_ref();
            let p = Permission::lookup(n);
            if p.is_none() {
                warn!(permission = n, "dropping unknown permission");
            }
            p
        })
        .collect();
    resolve_closure(&known)
}

/// Permissions the closure adds on top of the manual selection
pub fn auto_added_permissions(manual: &[Permission]) -> Vec<Permission> {
    resolve_closure(manual)
        .into_iter()
        .filter(|p| !manual.contains(p))
        .collect()
}

/// Whether `to_remove` can be revoked from `current` without another held
/// permission pulling it back in.
///
/// `can_remove` is decided on the transitive closure of the remainder, while
/// `dependent_permissions` only lists direct dependents. A transitive-only
/// blocker therefore yields `can_remove == false` with an empty list; see
/// [`blocking_permissions`] for the transitive view.
pub fn can_remove_permission(to_remove: Permission, current: &[Permission]) -> RemovalCheck {
    let remaining: Vec<Permission> =
        current.iter().copied().filter(|&p| p != to_remove).collect();
    let can_remove = !resolve_closure(&remaining).contains(&to_remove);

    let dependent_permissions: Vec<Permission> = remaining
        .iter()
        .copied()
        .filter(|&p| direct_dependencies(p).contains(&to_remove))
        .collect();

    debug!(
        permission = %to_remove,
        can_remove,
        dependents = dependent_permissions.len(),
        "removal check"
    );
    RemovalCheck { can_remove, dependent_permissions }
}

/// Permissions in `current` (other than `target`) whose closure reaches `target`
pub fn blocking_permissions(target: Permission, current: &[Permission]) -> Vec<Permission> {
    let mut seen = PermissionSet::new();
    current
        .iter()
        .copied()
        .filter(|&p| p != target && seen.insert(p))
        .filter(|&p| resolve_closure(&[p]).contains(&target))
        .collect()
}

/// Dependencies implied by `current` but absent from it
pub fn missing_dependencies(current: &[Permission]) -> Vec<Permission> {
    auto_added_permissions(current)
}

/// True when `current` already equals its own closure
pub fn is_closed(current: &[Permission]) -> bool {
    missing_dependencies(current).is_empty()
}
