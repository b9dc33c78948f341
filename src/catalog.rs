//! Static dependency table
//!
//! An edge `p -> d` means holding `p` implicitly requires `d`. Writes on a
//! resource need its read plus whatever reads the editing form renders.
//! The table must stay acyclic; `graph::validate` checks it.

use crate::permission::{Permission, Resource};

/// Direct dependencies of `p`, in declaration order
pub const fn dependencies(p: Permission) -> &'static [Permission] {
    use Permission::*;

    match p {
        AppointmentCreate | AppointmentUpdate => &[
            AppointmentRead,
            ClientRead,
            EmployeeRead,
            ServiceRead,
            BusinessRead,
            ConsumableRead,
            EquipmentRead,
        ],
        AppointmentRead => &[ClientRead, EmployeeRead, ServiceRead],
        AppointmentDelete => &[AppointmentRead],

        BusinessRead => &[],
        BusinessUpdate => &[BusinessRead],

        ClientRead => &[],
        ClientCreate | ClientUpdate | ClientDelete => &[ClientRead],

        ConversationRead => &[],
        ConversationUpdate => &[ConversationRead, ClientRead, QuickReplyRead],

        EmployeeRead => &[],
        EmployeeCreate | EmployeeUpdate => &[EmployeeRead, ServiceRead, RoleRead],
        EmployeeDelete => &[EmployeeRead],

        BundleRead => &[],
        BundleCreate | BundleUpdate => &[BundleRead, ProductRead, ServiceRead],
        BundleDelete => &[BundleRead],

        ConsumableRead => &[],
        ConsumableCreate | ConsumableUpdate => &[ConsumableRead, UnitRead],
        ConsumableDelete => &[ConsumableRead],

        EquipmentRead => &[],
        EquipmentCreate | EquipmentUpdate | EquipmentDelete => &[EquipmentRead],

        ProductTagRead => &[],
        ProductTagCreate | ProductTagUpdate | ProductTagDelete => &[ProductTagRead],

        UnitRead => &[],
        UnitCreate | UnitUpdate | UnitDelete => &[UnitRead],

        QuickReplyRead => &[],
        QuickReplyCreate | QuickReplyUpdate | QuickReplyDelete => &[QuickReplyRead],

        EventRead => &[],
        EventCreate | EventUpdate => &[EventRead, EmployeeRead],
        EventDelete => &[EventRead],

        OrderRead => &[],
        OrderCreate | OrderUpdate => &[OrderRead, ProductRead, ClientRead],
        OrderDelete => &[OrderRead],

        ProductRead => &[],
        ProductCreate | ProductUpdate => &[ProductRead, CategoryRead, ProductTagRead, UnitRead],
        ProductDelete => &[ProductRead],

        CartRead => &[],
        CartCreate | CartUpdate => &[CartRead, ProductRead, ServiceRead, BundleRead, ClientRead],
        CartDelete => &[CartRead],

        SaleRead => &[],
        SaleCreate => &[SaleRead, CartRead, ClientRead, EmployeeRead],

        ServiceRead => &[],
        ServiceCreate | ServiceUpdate => &[
            ServiceRead,
            CategoryRead,
            TagRead,
            ConsumableRead,
            EquipmentRead,
        ],
        ServiceDelete => &[ServiceRead],

        TagRead => &[],
        TagCreate | TagUpdate | TagDelete => &[TagRead],

        CategoryRead => &[],
        CategoryCreate | CategoryUpdate | CategoryDelete => &[CategoryRead],

        ReceiptRead => &[],
        ReceiptCreate => &[ReceiptRead, SaleRead],

        RoleRead => &[],
        RoleCreate | RoleUpdate | RoleDelete => &[RoleRead],

        WhatsappWebStatus => &[],
        WhatsappWebConnect | WhatsappWebDisconnect => &[WhatsappWebStatus],
        WhatsappWebQr => &[WhatsappWebStatus, WhatsappWebConnect],

        WhatsappBusinessStatus => &[],
        WhatsappBusinessConnect | WhatsappBusinessDisconnect => &[WhatsappBusinessStatus],
    }
}

/// Permissions that list `p` as a direct dependency
pub fn dependents(p: Permission) -> Vec<Permission> {
    Permission::ALL
        .iter()
        .copied()
        .filter(|&q| dependencies(q).contains(&p))
        .collect()
}

/// The catalog grouped by resource, in catalog order
pub fn by_resource() -> Vec<(Resource, &'static [Permission])> {
    Resource::ALL.iter().map(|&r| (r, r.permissions())).collect()
}

/// Largest number of direct dependencies any permission has
pub fn max_out_degree() -> usize {
    Permission::ALL
        .iter()
        .map(|&p| dependencies(p).len())
        .max()
        .unwrap_or(0)
}
