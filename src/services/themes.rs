//! Admin workflows for color themes.

use crate::domain::admin::AdminRole;
use crate::domain::theme::{NewTheme, Theme};
use crate::forms::themes::AddThemeForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ThemeReader, ThemeWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

pub fn list_themes<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Theme>>
where
    R: ThemeReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;
    Ok(repo.list_themes()?)
}

pub fn add_theme<R>(repo: &R, user: &AuthenticatedUser, form: AddThemeForm) -> ServiceResult<Theme>
where
    R: ThemeWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    let new_theme =
        NewTheme::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_theme(&new_theme).map_err(|err| {
        log::error!("Failed to add theme: {err}");
        ServiceError::from(err)
    })
}

/// Switches the site to the given palette.
pub fn activate_theme<R>(repo: &R, user: &AuthenticatedUser, theme_id: i32) -> ServiceResult<()>
where
    R: ThemeWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;
    repo.activate_theme(theme_id).map_err(ServiceError::from)
}

pub fn delete_theme<R>(repo: &R, user: &AuthenticatedUser, theme_id: i32) -> ServiceResult<()>
where
    R: ThemeReader + ThemeWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    // Deleting the active palette would leave the site unstyled.
    if let Some(theme) = repo.get_theme_by_id(theme_id)?
        && theme.is_active
    {
        return Err(ServiceError::Form(
            "Deactivate the theme before deleting it.".to_string(),
        ));
    }

    repo.delete_theme(theme_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::types::HexColor;
    use crate::repository::mock::MockRepository;
    use std::collections::BTreeMap;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".into(),
            email: "root@example.com".into(),
            name: "Root".into(),
            role: AdminRole::Admin,
            exp: 0,
        }
    }

    fn active_theme() -> Theme {
        let now = chrono::Utc::now().naive_utc();
        let colors: BTreeMap<String, HexColor> = crate::domain::theme::PALETTE_SLOTS
            .iter()
            .map(|slot| (slot.to_string(), HexColor::new("#d4a373").unwrap()))
            .collect();
        Theme {
            id: 1,
            name: "Autumn".into(),
            colors,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn active_theme_cannot_be_deleted() {
        let mut repo = MockRepository::new();
        repo.expect_get_theme_by_id()
            .returning(|_| Ok(Some(active_theme())));
        repo.expect_delete_theme().times(0);

        assert!(matches!(
            delete_theme(&repo, &admin(), 1),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn editor_cannot_manage_themes() {
        let repo = MockRepository::new();
        let mut user = admin();
        user.role = AdminRole::Editor;
        assert!(matches!(
            activate_theme(&repo, &user, 1),
            Err(ServiceError::Unauthorized)
        ));
    }
}
