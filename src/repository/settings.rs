//! Repository implementation for the singleton settings row.

use diesel::prelude::*;

use crate::domain::settings::{SiteSettings, UpdateSettings};
use crate::models::settings::{
    SETTINGS_ROW_ID, Settings as DbSettings, UpsertSettings as DbUpsertSettings,
};
use crate::repository::{
    DieselRepository, SettingsReader, SettingsWriter, errors::RepositoryResult,
};

impl SettingsReader for DieselRepository {
    fn get_settings(&self) -> RepositoryResult<Option<SiteSettings>> {
        use crate::schema::settings;

        let mut conn = self.conn()?;
        let row = settings::table
            .find(SETTINGS_ROW_ID)
            .first::<DbSettings>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }
}

impl SettingsWriter for DieselRepository {
    fn upsert_settings(&self, updates: &UpdateSettings) -> RepositoryResult<SiteSettings> {
        use crate::schema::settings;

        let mut conn = self.conn()?;
        let db_upsert: DbUpsertSettings = updates.into();

        let row = diesel::insert_into(settings::table)
            .values(&db_upsert)
            .on_conflict(settings::id)
            .do_update()
            .set(&db_upsert)
            .get_result::<DbSettings>(&mut conn)?;

        Ok(row.into())
    }
}
