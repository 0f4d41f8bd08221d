//! Repository implementation for client reviews.

use diesel::prelude::*;

use crate::domain::review::{NewReview, Review, ReviewModeration};
use crate::models::review::{
    ModerateReview as DbModerateReview, NewReview as DbNewReview, Review as DbReview,
};
use crate::repository::{
    DieselRepository, ReviewListQuery, ReviewReader, ReviewWriter, errors::RepositoryResult,
};

impl ReviewReader for DieselRepository {
    fn get_review_by_id(&self, id: i32) -> RepositoryResult<Option<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let review = reviews::table
            .find(id)
            .first::<DbReview>(&mut conn)
            .optional()?;

        Ok(review.map(Into::into))
    }

    fn list_reviews(&self, query: ReviewListQuery) -> RepositoryResult<(usize, Vec<Review>)> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = reviews::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(status) = &query.status {
                items = items.filter(reviews::status.eq(status.to_string()));
            }
            items
        };

        let total: i64 = query_builder().count().get_result(&mut conn)?;

        let mut items = query_builder().order(reviews::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1);
            let offset = (page - 1) * pagination.per_page;
            items = items
                .limit(pagination.per_page as i64)
                .offset(offset as i64);
        }

        let reviews = items
            .load::<DbReview>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, reviews))
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_new_review: DbNewReview = new_review.into();

        let created = diesel::insert_into(reviews::table)
            .values(&db_new_review)
            .get_result::<DbReview>(&mut conn)?;

        Ok(created.into())
    }

    fn moderate_review(
        &self,
        review_id: i32,
        moderation: &ReviewModeration,
    ) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_moderation: DbModerateReview = moderation.into();

        let updated = diesel::update(reviews::table.find(review_id))
            .set(&db_moderation)
            .get_result::<DbReview>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_review(&self, review_id: i32) -> RepositoryResult<()> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        diesel::delete(reviews::table.find(review_id)).execute(&mut conn)?;
        Ok(())
    }
}
