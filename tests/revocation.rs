//! Revocation guard tests
//!
//! These tests verify the removal check used before unchecking a permission,
//! including the split between the transitive `can_remove` flag and the
//! direct-only dependent list.

use permgraph::{
    blocking_permissions, can_remove_permission, is_closed, missing_dependencies, resolve_closure,
    Permission, RemovalCheck,
};
use Permission::*;

// ============================================================================
// Blocked Removals
// ============================================================================

/// Verify client.read cannot be dropped while appointment.create is held
#[test]
fn client_read_blocked_by_appointment_create() {
    let current = [AppointmentCreate, ClientRead];
    let check = can_remove_permission(ClientRead, &current);

    assert!(!check.can_remove);
    assert_eq!(check.dependent_permissions, vec![AppointmentCreate]);
}

/// Verify every direct dependent is reported
#[test]
fn multiple_direct_dependents() {
    let current = [ClientCreate, ClientUpdate, ClientDelete, ClientRead, OrderCreate];
    let check = can_remove_permission(ClientRead, &current);

    assert!(!check.can_remove);
    assert_eq!(
        check.dependent_permissions,
        vec![ClientCreate, ClientUpdate, ClientDelete, OrderCreate]
    );
}

/// Verify a transitive-only blocker gives can_remove == false with an empty
/// dependent list (appointment.delete -> appointment.read -> client.read)
#[test]
fn transitive_blocker_not_listed_as_dependent() {
    let current = [AppointmentDelete, ClientRead];
    let check = can_remove_permission(ClientRead, &current);

    assert!(!check.can_remove);
    assert!(check.dependent_permissions.is_empty());
    assert_eq!(blocking_permissions(ClientRead, &current), vec![AppointmentDelete]);
}

/// Verify the held set need not be closed for the check to block
#[test]
fn blocker_absent_intermediate() {
    // appointment.read is not held but is still implied
    let current = [AppointmentUpdate, EmployeeRead];
    assert!(!can_remove_permission(EmployeeRead, &current).can_remove);
}

// ============================================================================
// Allowed Removals
// ============================================================================

/// Verify a permission nobody depends on can be removed
#[test]
fn independent_permission_removable() {
    let current = [OrderCreate, OrderRead, ProductRead, ClientRead, TagRead];
    assert_eq!(
        can_remove_permission(TagRead, &current),
        RemovalCheck { can_remove: true, dependent_permissions: vec![] }
    );
}

/// Verify a top-level permission can always be removed from a closed set
#[test]
fn top_level_permission_removable() {
    let current: Vec<Permission> = resolve_closure(&[OrderCreate]).into_iter().collect();
    let check = can_remove_permission(OrderCreate, &current);
    assert!(check.can_remove);
    assert!(check.dependent_permissions.is_empty());
}

/// Verify removing something not held is trivially allowed
#[test]
fn removing_absent_permission() {
    let check = can_remove_permission(RoleDelete, &[TagRead]);
    assert!(check.can_remove);
    assert!(check.dependent_permissions.is_empty());
}

/// Verify duplicates of the removed permission are all filtered out
#[test]
fn duplicates_of_removed_permission() {
    let check = can_remove_permission(TagRead, &[TagRead, TagRead, RoleRead]);
    assert!(check.can_remove);
}

/// Verify once the dependent is gone the read becomes removable
#[test]
fn removal_order_matters() {
    let mut current = vec![ClientUpdate, ClientRead];
    assert!(!can_remove_permission(ClientRead, &current).can_remove);

    assert!(can_remove_permission(ClientUpdate, &current).can_remove);
    current.retain(|&p| p != ClientUpdate);
    assert!(can_remove_permission(ClientRead, &current).can_remove);
}

// ============================================================================
// Closed Sets
// ============================================================================

/// Verify missing dependencies of a partial selection
#[test]
fn missing_dependencies_of_partial_set() {
    assert_eq!(missing_dependencies(&[WhatsappWebQr]), vec![WhatsappWebConnect, WhatsappWebStatus]);
    assert!(!is_closed(&[WhatsappWebQr]));
    assert!(is_closed(&[WhatsappWebQr, WhatsappWebConnect, WhatsappWebStatus]));
    assert!(is_closed(&[]));
}

/// Verify the serialized shape consumed by the role editor
#[test]
fn removal_check_serializes_camel_case() {
    let check = can_remove_permission(ClientRead, &[ClientUpdate, ClientRead]);
    let json = serde_json::to_value(&check).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "canRemove": false, "dependentPermissions": ["client.update"] })
    );
}
