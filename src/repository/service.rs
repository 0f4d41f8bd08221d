//! Repository implementation for the services catalog.

use diesel::prelude::*;

use crate::domain::service::{NewService, Service, UpdateService};
use crate::models::service::{
    NewService as DbNewService, Service as DbService, UpdateService as DbUpdateService,
};
use crate::repository::{
    DieselRepository, ServiceReader, ServiceWriter, errors::RepositoryResult,
};

impl ServiceReader for DieselRepository {
    fn get_service_by_id(&self, id: i32) -> RepositoryResult<Option<Service>> {
        use crate::schema::services;

        let mut conn = self.conn()?;
        let service = services::table
            .find(id)
            .first::<DbService>(&mut conn)
            .optional()?;

        Ok(service.map(Into::into))
    }

    fn list_services(&self, active_only: bool) -> RepositoryResult<Vec<Service>> {
        use crate::schema::services;

        let mut conn = self.conn()?;

        let mut items = services::table.into_boxed::<diesel::sqlite::Sqlite>();
        if active_only {
            items = items.filter(services::is_active.eq(true));
        }

        let services = items
            .order((services::display_order.asc(), services::id.asc()))
            .load::<DbService>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(services)
    }
}

impl ServiceWriter for DieselRepository {
    fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service> {
        use crate::schema::services;

        let mut conn = self.conn()?;
        let db_new_service: DbNewService = new_service.into();

        let created = diesel::insert_into(services::table)
            .values(&db_new_service)
            .get_result::<DbService>(&mut conn)?;

        Ok(created.into())
    }

    fn update_service(
        &self,
        service_id: i32,
        updates: &UpdateService,
    ) -> RepositoryResult<Service> {
        use crate::schema::services;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateService = updates.into();

        let updated = diesel::update(services::table.find(service_id))
            .set(&db_updates)
            .get_result::<DbService>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_service(&self, service_id: i32) -> RepositoryResult<()> {
        use crate::schema::services;

        let mut conn = self.conn()?;
        diesel::delete(services::table.find(service_id)).execute(&mut conn)?;
        Ok(())
    }
}
