//! Admin workflows for the services catalog.

use crate::domain::admin::AdminRole;
use crate::domain::service::Service;
use crate::forms::catalog::SaveServiceForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ServiceReader, ServiceWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

pub fn list_catalog<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Service>>
where
    R: ServiceReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;
    Ok(repo.list_services(false)?)
}

pub fn add_service<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveServiceForm,
) -> ServiceResult<Service>
where
    R: ServiceWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    let new_service = form
        .into_new_service()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_service(&new_service).map_err(|err| {
        log::error!("Failed to add service: {err}");
        ServiceError::from(err)
    })
}

pub fn save_service<R>(
    repo: &R,
    user: &AuthenticatedUser,
    service_id: i32,
    form: SaveServiceForm,
) -> ServiceResult<Service>
where
    R: ServiceReader + ServiceWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    if repo.get_service_by_id(service_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let updates = form
        .into_update_service()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_service(service_id, &updates).map_err(|err| {
        log::error!("Failed to update service {service_id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_service<R>(
    repo: &R,
    user: &AuthenticatedUser,
    service_id: i32,
) -> ServiceResult<()>
where
    R: ServiceWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;
    repo.delete_service(service_id)?;
    Ok(())
}
