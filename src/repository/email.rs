//! Repository implementation for email templates and the delivery log.

use diesel::prelude::*;

use crate::domain::email::{
    EmailLog, EmailTemplate, NewEmailLog, NewEmailTemplate, UpdateEmailTemplate,
};
use crate::models::email::{
    EmailLog as DbEmailLog, EmailTemplate as DbEmailTemplate, NewEmailLog as DbNewEmailLog,
    NewEmailTemplate as DbNewEmailTemplate, UpdateEmailTemplate as DbUpdateEmailTemplate,
};
use crate::repository::{
    DieselRepository, EmailLogReader, EmailLogWriter, EmailTemplateReader, EmailTemplateWriter,
    errors::RepositoryResult,
};

impl EmailTemplateReader for DieselRepository {
    fn get_email_template_by_id(&self, id: i32) -> RepositoryResult<Option<EmailTemplate>> {
        use crate::schema::email_templates;

        let mut conn = self.conn()?;
        let template = email_templates::table
            .find(id)
            .first::<DbEmailTemplate>(&mut conn)
            .optional()?;

        Ok(template.map(Into::into))
    }

    fn get_active_template_by_kind(
        &self,
        kind: &str,
    ) -> RepositoryResult<Option<EmailTemplate>> {
        use crate::schema::email_templates;

        let mut conn = self.conn()?;
        let template = email_templates::table
            .filter(email_templates::kind.eq(kind))
            .filter(email_templates::is_active.eq(true))
            .order(email_templates::id.asc())
            .first::<DbEmailTemplate>(&mut conn)
            .optional()?;

        Ok(template.map(Into::into))
    }

    fn list_email_templates(&self) -> RepositoryResult<Vec<EmailTemplate>> {
        use crate::schema::email_templates;

        let mut conn = self.conn()?;
        let templates = email_templates::table
            .order(email_templates::id.asc())
            .load::<DbEmailTemplate>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(templates)
    }
}

impl EmailTemplateWriter for DieselRepository {
    fn create_email_template(
        &self,
        new_template: &NewEmailTemplate,
    ) -> RepositoryResult<EmailTemplate> {
        use crate::schema::email_templates;

        let mut conn = self.conn()?;
        let db_new_template: DbNewEmailTemplate = new_template.into();

        let created = diesel::insert_into(email_templates::table)
            .values(&db_new_template)
            .get_result::<DbEmailTemplate>(&mut conn)?;

        Ok(created.into())
    }

    fn update_email_template(
        &self,
        template_id: i32,
        updates: &UpdateEmailTemplate,
    ) -> RepositoryResult<EmailTemplate> {
        use crate::schema::email_templates;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateEmailTemplate = updates.into();

        let updated = diesel::update(email_templates::table.find(template_id))
            .set(&db_updates)
            .get_result::<DbEmailTemplate>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_email_template(&self, template_id: i32) -> RepositoryResult<()> {
        use crate::schema::email_templates;

        let mut conn = self.conn()?;
        diesel::delete(email_templates::table.find(template_id)).execute(&mut conn)?;
        Ok(())
    }
}

impl EmailLogReader for DieselRepository {
    fn list_email_logs(&self, consultation_id: Option<i32>) -> RepositoryResult<Vec<EmailLog>> {
        use crate::schema::email_logs;

        let mut conn = self.conn()?;

        let mut items = email_logs::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(consultation_id) = consultation_id {
            items = items.filter(email_logs::consultation_id.eq(consultation_id));
        }

        let logs = items
            .order(email_logs::created_at.desc())
            .load::<DbEmailLog>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(logs)
    }
}

impl EmailLogWriter for DieselRepository {
    fn create_email_log(&self, new_log: &NewEmailLog) -> RepositoryResult<EmailLog> {
        use crate::schema::email_logs;

        let mut conn = self.conn()?;
        let db_new_log: DbNewEmailLog = new_log.into();

        let created = diesel::insert_into(email_logs::table)
            .values(&db_new_log)
            .get_result::<DbEmailLog>(&mut conn)?;

        Ok(created.into())
    }
}
