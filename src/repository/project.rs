//! Repository implementation for portfolio projects.

use diesel::prelude::*;

use crate::domain::project::{NewProject, Project, UpdateProject};
use crate::models::project::{
    NewProject as DbNewProject, Project as DbProject, UpdateProject as DbUpdateProject,
};
use crate::repository::{
    DieselRepository, ProjectListQuery, ProjectReader, ProjectWriter, errors::RepositoryResult,
};

impl ProjectReader for DieselRepository {
    fn get_project_by_id(&self, id: i32) -> RepositoryResult<Option<Project>> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let project = projects::table
            .find(id)
            .first::<DbProject>(&mut conn)
            .optional()?;

        Ok(project.map(Into::into))
    }

    fn list_projects(&self, query: ProjectListQuery) -> RepositoryResult<(usize, Vec<Project>)> {
        use crate::schema::projects;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = projects::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(project_type) = &query.project_type {
                items = items.filter(projects::project_type.eq(project_type.to_string()));
            }
            if let Some(status) = &query.status {
                items = items.filter(projects::status.eq(status.clone()));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items.filter(
                    projects::title
                        .like(pattern.clone())
                        .or(projects::description.like(pattern)),
                );
            }

            items
        };

        let total: i64 = query_builder().count().get_result(&mut conn)?;

        let mut items = query_builder().order(projects::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1);
            let offset = (page - 1) * pagination.per_page;
            items = items
                .limit(pagination.per_page as i64)
                .offset(offset as i64);
        }

        let projects = items
            .load::<DbProject>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, projects))
    }
}

impl ProjectWriter for DieselRepository {
    fn create_project(&self, new_project: &NewProject) -> RepositoryResult<Project> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let db_new_project: DbNewProject = new_project.into();

        let created = diesel::insert_into(projects::table)
            .values(&db_new_project)
            .get_result::<DbProject>(&mut conn)?;

        Ok(created.into())
    }

    fn update_project(
        &self,
        project_id: i32,
        updates: &UpdateProject,
    ) -> RepositoryResult<Project> {
        use crate::schema::projects;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateProject = updates.into();

        let updated = diesel::update(projects::table.find(project_id))
            .set(&db_updates)
            .get_result::<DbProject>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_project(&self, project_id: i32) -> RepositoryResult<()> {
        use crate::schema::{projects, reviews};

        let mut conn = self.conn()?;

        // Reviews keep existing but lose their project link.
        diesel::update(reviews::table.filter(reviews::project_id.eq(project_id)))
            .set(reviews::project_id.eq(None::<i32>))
            .execute(&mut conn)?;
        diesel::delete(projects::table.find(project_id)).execute(&mut conn)?;
        Ok(())
    }
}
