//! Admin workflow for the singleton site settings.

use crate::domain::admin::AdminRole;
use crate::domain::settings::{SiteSettings, UpdateSettings};
use crate::forms::settings::SettingsForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{SettingsReader, SettingsWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

pub fn load_settings<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<SiteSettings>
where
    R: SettingsReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;
    Ok(repo.get_settings()?.unwrap_or_default())
}

pub fn save_settings<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SettingsForm,
) -> ServiceResult<SiteSettings>
where
    R: SettingsWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    let updates =
        UpdateSettings::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.upsert_settings(&updates).map_err(|err| {
        log::error!("Failed to save settings: {err}");
        ServiceError::from(err)
    })
}
