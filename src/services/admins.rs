//! Admin account management.

use crate::domain::admin::{Admin, AdminRole};
use crate::forms::admins::ChangeRoleForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{AdminReader, AdminWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

pub fn list_admins<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Admin>>
where
    R: AdminReader + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;
    Ok(repo.list_admins()?)
}

/// Changes another account's role; admins cannot demote themselves.
pub fn change_role<R>(
    repo: &R,
    user: &AuthenticatedUser,
    admin_id: i32,
    form: ChangeRoleForm,
) -> ServiceResult<Admin>
where
    R: AdminReader + AdminWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    if user.admin_id() == Some(admin_id) {
        return Err(ServiceError::Form(
            "You cannot change your own role.".to_string(),
        ));
    }

    if repo.get_admin_by_id(admin_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.update_admin_role(admin_id, form.role()).map_err(|err| {
        log::error!("Failed to change role for admin {admin_id}: {err}");
        ServiceError::from(err)
    })
}

/// Removes an account; self-deletion is refused.
pub fn delete_admin<R>(repo: &R, user: &AuthenticatedUser, admin_id: i32) -> ServiceResult<()>
where
    R: AdminReader + AdminWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    if user.admin_id() == Some(admin_id) {
        return Err(ServiceError::Form(
            "You cannot delete your own account.".to_string(),
        ));
    }

    if repo.get_admin_by_id(admin_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_admin(admin_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn admin_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".into(),
            email: "root@example.com".into(),
            name: "Root".into(),
            role: AdminRole::Admin,
            exp: 0,
        }
    }

    #[test]
    fn self_deletion_is_refused() {
        let mut repo = MockRepository::new();
        repo.expect_delete_admin().times(0);

        assert!(matches!(
            delete_admin(&repo, &admin_user(), 1),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn self_demotion_is_refused() {
        let mut repo = MockRepository::new();
        repo.expect_update_admin_role().times(0);

        let form = ChangeRoleForm {
            role: "viewer".into(),
        };
        assert!(matches!(
            change_role(&repo, &admin_user(), 1, form),
            Err(ServiceError::Form(_))
        ));
    }
}
