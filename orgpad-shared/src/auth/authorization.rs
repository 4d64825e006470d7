/// Authorization policy
///
/// Access control is a pure function of the authenticated caller, the
/// target resource, and the operation. It is evaluated fresh on every
/// request, never cached, because a user's role can change between
/// requests.
///
/// # Policy
///
/// 1. **Organization isolation** (every operation): the resource's
///    `organization_id` must equal the caller's. A mismatch is a
///    `Forbidden`, not a `NotFound`; since existence is checked first, a
///    cross-organization probe on a real id receives the same 403 as a
///    same-organization denial. That existence leak is an accepted
///    trade-off, kept deliberately.
/// 2. **Delete** (notes, todos): additionally requires the `Admin` role,
///    even within the caller's own organization.
/// 3. **Create/Read/Update**: any member of the organization; there is no
///    per-resource ownership check, so members may edit each other's
///    resources.
///
/// # Example
///
/// ```
/// use orgpad_shared::auth::authorization::{ensure_same_organization, ensure_admin, CurrentUser};
/// use orgpad_shared::models::user::UserRole;
/// use uuid::Uuid;
///
/// let org = Uuid::new_v4();
/// let caller = CurrentUser { id: Uuid::new_v4(), organization_id: org, role: UserRole::Member };
///
/// assert!(ensure_same_organization(&caller, org).is_ok());
/// assert!(ensure_admin(&caller).is_err());
/// ```

use serde::Serialize;
use uuid::Uuid;

use crate::models::user::{User, UserRole};

/// Error type for authorization checks
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthzError {
    /// Resource belongs to a different organization
    #[error("not enough permissions")]
    OrganizationMismatch,

    /// Operation requires the admin role
    #[error("only admins may delete")]
    AdminRequired,
}

/// Identity context for an authenticated request
///
/// Produced only by `services::auth::authenticate`, with role and
/// organization read fresh from the store. This is the value threaded into
/// every resource-service call; handlers never see the raw token.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    /// Authenticated user ID
    pub id: Uuid,

    /// The caller's organization
    pub organization_id: Uuid,

    /// The caller's role at the time of this request
    pub role: UserRole,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            organization_id: user.organization_id,
            role: user.role,
        }
    }
}

/// Denies access unless the resource belongs to the caller's organization
///
/// # Errors
///
/// Returns `AuthzError::OrganizationMismatch` on a cross-organization access
pub fn ensure_same_organization(
    caller: &CurrentUser,
    resource_organization_id: Uuid,
) -> Result<(), AuthzError> {
    if caller.organization_id != resource_organization_id {
        return Err(AuthzError::OrganizationMismatch);
    }

    Ok(())
}

/// Denies access unless the caller holds the admin role
///
/// # Errors
///
/// Returns `AuthzError::AdminRequired` for non-admin callers
pub fn ensure_admin(caller: &CurrentUser) -> Result<(), AuthzError> {
    if !caller.role.can_delete() {
        return Err(AuthzError::AdminRequired);
    }

    Ok(())
}
