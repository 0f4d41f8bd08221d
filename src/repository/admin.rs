//! Repository implementation for back-office accounts.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::admin::{Admin, AdminRole, NewAdmin};
use crate::models::admin::{
    Admin as DbAdmin, NewAdmin as DbNewAdmin, UpdateAdminRole as DbUpdateAdminRole,
};
use crate::repository::{AdminReader, AdminWriter, DieselRepository, errors::RepositoryResult};

impl AdminReader for DieselRepository {
    fn get_admin_by_id(&self, id: i32) -> RepositoryResult<Option<Admin>> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let admin = admins::table
            .find(id)
            .first::<DbAdmin>(&mut conn)
            .optional()?;

        Ok(admin.map(Into::into))
    }

    fn get_admin_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let admin = admins::table
            .filter(admins::email.eq(email))
            .first::<DbAdmin>(&mut conn)
            .optional()?;

        Ok(admin.map(Into::into))
    }

    fn list_admins(&self) -> RepositoryResult<Vec<Admin>> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let admins = admins::table
            .order(admins::id.asc())
            .load::<DbAdmin>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(admins)
    }

    fn any_admin_exists(&self) -> RepositoryResult<bool> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let count: i64 = admins::table.count().get_result(&mut conn)?;

        Ok(count > 0)
    }
}

impl AdminWriter for DieselRepository {
    fn create_admin(&self, new_admin: &NewAdmin) -> RepositoryResult<Admin> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let db_new_admin: DbNewAdmin = new_admin.into();

        let created = diesel::insert_into(admins::table)
            .values(&db_new_admin)
            .get_result::<DbAdmin>(&mut conn)?;

        Ok(created.into())
    }

    fn update_admin_role(&self, admin_id: i32, role: AdminRole) -> RepositoryResult<Admin> {
        use crate::schema::admins;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateAdminRole {
            role: role.to_string(),
            updated_at: Utc::now().naive_utc(),
        };

        let updated = diesel::update(admins::table.find(admin_id))
            .set(&db_updates)
            .get_result::<DbAdmin>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_admin(&self, admin_id: i32) -> RepositoryResult<()> {
        use crate::schema::{admins, consultations};

        let mut conn = self.conn()?;

        // Leads assigned to the removed account fall back to unassigned.
        diesel::update(consultations::table.filter(consultations::assigned_to.eq(admin_id)))
            .set(consultations::assigned_to.eq(None::<i32>))
            .execute(&mut conn)?;
        diesel::delete(admins::table.find(admin_id)).execute(&mut conn)?;
        Ok(())
    }
}
