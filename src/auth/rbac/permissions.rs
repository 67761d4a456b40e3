//! Permission keys and the permission catalogue

use super::types::PermissionDef;

pub const PATIENTS_READ: &str = "patients.read";
pub const PATIENTS_WRITE: &str = "patients.write";
pub const APPOINTMENTS_READ: &str = "appointments.read";
pub const APPOINTMENTS_WRITE: &str = "appointments.write";
pub const PROVIDERS_READ: &str = "providers.read";
pub const PROVIDERS_WRITE: &str = "providers.write";
pub const BILLING_READ: &str = "billing.read";
pub const BILLING_WRITE: &str = "billing.write";
pub const ADMIN_MANAGE: &str = "admin.manage";

/// Permissions seeded into every store
pub const PERMISSION_CATALOG: &[PermissionDef] = &[
    PermissionDef {
        key: PATIENTS_READ,
        description: "View patients",
    },
    PermissionDef {
        key: PATIENTS_WRITE,
        description: "Create/update patients",
    },
    PermissionDef {
        key: APPOINTMENTS_READ,
        description: "View appointments",
    },
    PermissionDef {
        key: APPOINTMENTS_WRITE,
        description: "Create/update appointments",
    },
    PermissionDef {
        key: PROVIDERS_READ,
        description: "View providers",
    },
    PermissionDef {
        key: PROVIDERS_WRITE,
        description: "Create/update providers",
    },
    PermissionDef {
        key: BILLING_READ,
        description: "View billing",
    },
    PermissionDef {
        key: BILLING_WRITE,
        description: "Create/update billing",
    },
    PermissionDef {
        key: ADMIN_MANAGE,
        description: "Manage users and roles",
    },
];
