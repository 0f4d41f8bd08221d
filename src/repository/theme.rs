//! Repository implementation for color themes.

use diesel::prelude::*;

use crate::domain::theme::{NewTheme, Theme};
use crate::models::theme::{NewTheme as DbNewTheme, Theme as DbTheme};
use crate::repository::{
    DieselRepository, ThemeReader, ThemeWriter,
    errors::{RepositoryError, RepositoryResult},
};

impl ThemeReader for DieselRepository {
    fn get_theme_by_id(&self, id: i32) -> RepositoryResult<Option<Theme>> {
        use crate::schema::themes;

        let mut conn = self.conn()?;
        let theme = themes::table
            .find(id)
            .first::<DbTheme>(&mut conn)
            .optional()?;

        Ok(theme.map(Into::into))
    }

    fn get_active_theme(&self) -> RepositoryResult<Option<Theme>> {
        use crate::schema::themes;

        let mut conn = self.conn()?;
        let theme = themes::table
            .filter(themes::is_active.eq(true))
            .first::<DbTheme>(&mut conn)
            .optional()?;

        Ok(theme.map(Into::into))
    }

    fn list_themes(&self) -> RepositoryResult<Vec<Theme>> {
        use crate::schema::themes;

        let mut conn = self.conn()?;
        let themes = themes::table
            .order(themes::id.asc())
            .load::<DbTheme>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(themes)
    }
}

impl ThemeWriter for DieselRepository {
    fn create_theme(&self, new_theme: &NewTheme) -> RepositoryResult<Theme> {
        use crate::schema::themes;

        let mut conn = self.conn()?;
        let db_new_theme: DbNewTheme = new_theme.into();

        let created = diesel::insert_into(themes::table)
            .values(&db_new_theme)
            .get_result::<DbTheme>(&mut conn)?;

        Ok(created.into())
    }

    fn activate_theme(&self, theme_id: i32) -> RepositoryResult<()> {
        use crate::schema::themes;

        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::update(themes::table)
                .set(themes::is_active.eq(false))
                .execute(conn)?;

            let affected = diesel::update(themes::table.find(theme_id))
                .set(themes::is_active.eq(true))
                .execute(conn)?;

            if affected == 0 {
                return Err(diesel::result::Error::NotFound);
            }

            Ok(())
        })
        .map_err(RepositoryError::from)
    }

    fn delete_theme(&self, theme_id: i32) -> RepositoryResult<()> {
        use crate::schema::themes;

        let mut conn = self.conn()?;
        diesel::delete(themes::table.find(theme_id)).execute(&mut conn)?;
        Ok(())
    }
}
