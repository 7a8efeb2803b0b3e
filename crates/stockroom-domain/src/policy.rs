//! Authorization policy
//!
//! The single permission table mapping (role, action) to allow/deny.
//! Every permission check in the system routes through [`can_perform`];
//! no other code compares roles directly.

use crate::entities::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Actions gated by the authorization policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Read the product catalog
    ViewProducts,
    /// Render the dashboard
    ViewDashboard,
    /// Add a product to the catalog
    CreateProduct,
    /// Replace an existing product record
    EditProduct,
    /// Remove a product from the catalog
    DeleteProduct,
}

impl Action {
    /// All policy-gated actions, for exhaustive checks
    pub const ALL: [Action; 5] = [
        Action::ViewProducts,
        Action::ViewDashboard,
        Action::CreateProduct,
        Action::EditProduct,
        Action::DeleteProduct,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::ViewProducts => "ViewProducts",
            Action::ViewDashboard => "ViewDashboard",
            Action::CreateProduct => "CreateProduct",
            Action::EditProduct => "EditProduct",
            Action::DeleteProduct => "DeleteProduct",
        };
        f.write_str(name)
    }
}

/// Decide whether `role` may perform `action`
///
/// Pure and total: no I/O, no side effects. Managers hold every
/// permission; store keepers are strictly read-only over products and
/// have no dashboard access.
pub fn can_perform(role: Role, action: Action) -> bool {
    match (role, action) {
        (_, Action::ViewProducts) => true,
        (Role::Manager, _) => true,
        (Role::StoreKeeper, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_holds_every_permission() {
        for action in Action::ALL {
            assert!(can_perform(Role::Manager, action), "{action} denied");
        }
    }

    #[test]
    fn store_keeper_is_read_only() {
        assert!(can_perform(Role::StoreKeeper, Action::ViewProducts));
        assert!(!can_perform(Role::StoreKeeper, Action::ViewDashboard));
        assert!(!can_perform(Role::StoreKeeper, Action::CreateProduct));
        assert!(!can_perform(Role::StoreKeeper, Action::EditProduct));
        assert!(!can_perform(Role::StoreKeeper, Action::DeleteProduct));
    }
}
