//! Repository implementation for team members.

use diesel::prelude::*;

use crate::domain::team_member::{NewTeamMember, TeamMember, UpdateTeamMember};
use crate::models::team_member::{
    NewTeamMember as DbNewTeamMember, TeamMember as DbTeamMember,
    UpdateTeamMember as DbUpdateTeamMember,
};
use crate::repository::{
    DieselRepository, TeamMemberReader, TeamMemberWriter, errors::RepositoryResult,
};

impl TeamMemberReader for DieselRepository {
    fn get_team_member_by_id(&self, id: i32) -> RepositoryResult<Option<TeamMember>> {
        use crate::schema::team_members;

        let mut conn = self.conn()?;
        let member = team_members::table
            .find(id)
            .first::<DbTeamMember>(&mut conn)
            .optional()?;

        Ok(member.map(Into::into))
    }

    fn list_team_members(&self, active_only: bool) -> RepositoryResult<Vec<TeamMember>> {
        use crate::schema::team_members;

        let mut conn = self.conn()?;

        let mut items = team_members::table.into_boxed::<diesel::sqlite::Sqlite>();
        if active_only {
            items = items.filter(team_members::is_active.eq(true));
        }

        let members = items
            .order((team_members::display_order.asc(), team_members::id.asc()))
            .load::<DbTeamMember>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(members)
    }
}

impl TeamMemberWriter for DieselRepository {
    fn create_team_member(&self, new_member: &NewTeamMember) -> RepositoryResult<TeamMember> {
        use crate::schema::team_members;

        let mut conn = self.conn()?;
        let db_new_member: DbNewTeamMember = new_member.into();

        let created = diesel::insert_into(team_members::table)
            .values(&db_new_member)
            .get_result::<DbTeamMember>(&mut conn)?;

        Ok(created.into())
    }

    fn update_team_member(
        &self,
        member_id: i32,
        updates: &UpdateTeamMember,
    ) -> RepositoryResult<TeamMember> {
        use crate::schema::team_members;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateTeamMember = updates.into();

        let updated = diesel::update(team_members::table.find(member_id))
            .set(&db_updates)
            .get_result::<DbTeamMember>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_team_member(&self, member_id: i32) -> RepositoryResult<()> {
        use crate::schema::team_members;

        let mut conn = self.conn()?;
        diesel::delete(team_members::table.find(member_id)).execute(&mut conn)?;
        Ok(())
    }
}
