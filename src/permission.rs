//! Permission catalog: the closed set of `resource.action` identifiers
//!
//! The string values are a stable contract with the backend authorization
//! layer. Renaming one requires a coordinated migration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PermissionError, Result};

macro_rules! catalog {
    ($(
        $resource:ident($prefix:literal) {
            $($variant:ident => $name:literal,)+
        }
    )+) => {
        /// Resource group a permission belongs to
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Resource {
            $($resource,)+
        }

        impl Resource {
            /// Every resource group, in catalog order
            pub const ALL: &'static [Resource] = &[$(Resource::$resource,)+];

            /// Prefix shared by all permissions of this resource
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Resource::$resource => $prefix,)+
                }
            }

            /// Permissions exposed by this resource, in declaration order
            pub const fn permissions(self) -> &'static [Permission] {
                match self {
                    $(Resource::$resource => &[$(Permission::$variant,)+],)+
                }
            }
        }

        /// A single catalog permission.
        ///
        /// Ordering follows declaration order, which groups permissions by
        /// resource.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum Permission {
            $($($variant,)+)+
        }

        impl Permission {
            /// The complete catalog, in declaration order
            pub const ALL: &'static [Permission] = &[$($(Permission::$variant,)+)+];

            /// Wire identifier, e.g. `"appointment.create"`
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($(Permission::$variant => $name,)+)+
                }
            }

            pub const fn resource(self) -> Resource {
                match self {
                    $($(Permission::$variant => Resource::$resource,)+)+
                }
            }
        }
    };
}

catalog! {
    Appointment("appointment") {
        AppointmentCreate => "appointment.create",
        AppointmentRead => "appointment.read",
        AppointmentUpdate => "appointment.update",
        AppointmentDelete => "appointment.delete",
    }
    Business("business") {
        BusinessRead => "business.read",
        BusinessUpdate => "business.update",
    }
    Client("client") {
        ClientCreate => "client.create",
        ClientRead => "client.read",
        ClientUpdate => "client.update",
        ClientDelete => "client.delete",
    }
    Conversation("conversation") {
        ConversationRead => "conversation.read",
        ConversationUpdate => "conversation.update",
    }
    Employee("employee") {
        EmployeeCreate => "employee.create",
        EmployeeRead => "employee.read",
        EmployeeUpdate => "employee.update",
        EmployeeDelete => "employee.delete",
    }
    Bundle("bundle") {
        BundleCreate => "bundle.create",
        BundleRead => "bundle.read",
        BundleUpdate => "bundle.update",
        BundleDelete => "bundle.delete",
    }
    Consumable("consumable") {
        ConsumableCreate => "consumable.create",
        ConsumableRead => "consumable.read",
        ConsumableUpdate => "consumable.update",
        ConsumableDelete => "consumable.delete",
    }
    Equipment("equipment") {
        EquipmentCreate => "equipment.create",
        EquipmentRead => "equipment.read",
        EquipmentUpdate => "equipment.update",
        EquipmentDelete => "equipment.delete",
    }
    ProductTag("product_tag") {
        ProductTagCreate => "product_tag.create",
        ProductTagRead => "product_tag.read",
        ProductTagUpdate => "product_tag.update",
        ProductTagDelete => "product_tag.delete",
    }
    Unit("unit") {
        UnitCreate => "unit.create",
        UnitRead => "unit.read",
        UnitUpdate => "unit.update",
        UnitDelete => "unit.delete",
    }
    QuickReply("quick_reply") {
        QuickReplyCreate => "quick_reply.create",
        QuickReplyRead => "quick_reply.read",
        QuickReplyUpdate => "quick_reply.update",
        QuickReplyDelete => "quick_reply.delete",
    }
    Event("event") {
        EventCreate => "event.create",
        EventRead => "event.read",
        EventUpdate => "event.update",
        EventDelete => "event.delete",
    }
    Order("order") {
        OrderCreate => "order.create",
        OrderRead => "order.read",
        OrderUpdate => "order.update",
        OrderDelete => "order.delete",
    }
    Product("product") {
        ProductCreate => "product.create",
        ProductRead => "product.read",
        ProductUpdate => "product.update",
        ProductDelete => "product.delete",
    }
    Cart("cart") {
        CartCreate => "cart.create",
        CartRead => "cart.read",
        CartUpdate => "cart.update",
        CartDelete => "cart.delete",
    }
    Sale("sale") {
        SaleCreate => "sale.create",
        SaleRead => "sale.read",
    }
    Service("service") {
        ServiceCreate => "service.create",
        ServiceRead => "service.read",
        ServiceUpdate => "service.update",
        ServiceDelete => "service.delete",
    }
    Tag("tag") {
        TagCreate => "tag.create",
        TagRead => "tag.read",
        TagUpdate => "tag.update",
        TagDelete => "tag.delete",
    }
    Category("category") {
        CategoryCreate => "category.create",
        CategoryRead => "category.read",
        CategoryUpdate => "category.update",
        CategoryDelete => "category.delete",
    }
    Receipt("receipt") {
        ReceiptCreate => "receipt.create",
        ReceiptRead => "receipt.read",
    }
    Role("role") {
        RoleCreate => "role.create",
        RoleRead => "role.read",
        RoleUpdate => "role.update",
        RoleDelete => "role.delete",
    }
    WhatsappWeb("whatsapp_web") {
        WhatsappWebConnect => "whatsapp_web.connect",
        WhatsappWebDisconnect => "whatsapp_web.disconnect",
        WhatsappWebStatus => "whatsapp_web.status",
        WhatsappWebQr => "whatsapp_web.qr",
    }
    WhatsappBusiness("whatsapp_business") {
        WhatsappBusinessConnect => "whatsapp_business.connect",
        WhatsappBusinessDisconnect => "whatsapp_business.disconnect",
        WhatsappBusinessStatus => "whatsapp_business.status",
    }
}

impl Permission {
    /// Action half of the identifier (`"create"`, `"qr"`, ...)
    pub fn action(self) -> &'static str {
        self.as_str()
            .split_once('.')
            .map(|(_, action)| action)
            .unwrap_or_default()
    }

    /// Lenient lookup: `None` for anything outside the catalog
    pub fn lookup(name: &str) -> Option<Permission> {
        Permission::ALL.iter().copied().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('.') {
            Some((resource, action)) if !resource.is_empty() && !action.is_empty() => {
                Permission::lookup(s).ok_or_else(|| PermissionError::Unknown(s.to_string()))
            }
            _ => Err(PermissionError::Malformed(s.to_string())),
        }
    }
}

impl TryFrom<String> for Permission {
    type Error = PermissionError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Permission> for &'static str {
    fn from(p: Permission) -> Self {
        p.as_str()
    }
}

/// Strict bulk parse; the first invalid entry is returned as the error
pub fn parse_permissions<I, S>(names: I) -> Result<Vec<Permission>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|n| n.as_ref().parse()).collect()
}
