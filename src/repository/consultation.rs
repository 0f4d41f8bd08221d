//! Repository implementation for consultations, including the quote and
//! client-approval bookkeeping.

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::consultation::{
    ApprovalDecision, ApprovalStatus, Consultation, ConsultationStatus, NewConsultation,
    QuoteOffer, UpdateConsultation,
};
use crate::domain::types::ApprovalToken;
use crate::models::consultation::{
    ApprovalDecisionUpdate, Consultation as DbConsultation,
    NewConsultation as DbNewConsultation, QuoteSentUpdate,
    UpdateConsultation as DbUpdateConsultation,
};
use crate::repository::{
    ConsultationListQuery, ConsultationReader, ConsultationWriter, DieselRepository,
    errors::RepositoryResult,
};

impl ConsultationReader for DieselRepository {
    fn get_consultation_by_id(&self, id: i32) -> RepositoryResult<Option<Consultation>> {
        use crate::schema::consultations;

        let mut conn = self.conn()?;
        let consultation = consultations::table
            .find(id)
            .first::<DbConsultation>(&mut conn)
            .optional()?;

        Ok(consultation.map(Into::into))
    }

    fn get_consultation_by_token(
        &self,
        token: &ApprovalToken,
    ) -> RepositoryResult<Option<Consultation>> {
        use crate::schema::consultations;

        let mut conn = self.conn()?;
        let consultation = consultations::table
            .filter(consultations::approval_token.eq(token.to_string()))
            .first::<DbConsultation>(&mut conn)
            .optional()?;

        Ok(consultation.map(Into::into))
    }

    fn list_consultations(
        &self,
        query: ConsultationListQuery,
    ) -> RepositoryResult<(usize, Vec<Consultation>)> {
        use crate::schema::consultations;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = consultations::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(status) = &query.status {
                items = items.filter(consultations::status.eq(status.to_string()));
            }
            if let Some(admin_id) = query.assigned_to {
                items = items.filter(consultations::assigned_to.eq(admin_id));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items.filter(
                    consultations::name
                        .like(pattern.clone())
                        .or(consultations::email.like(pattern.clone()))
                        .or(consultations::company_name.like(pattern.clone()))
                        .or(consultations::description.like(pattern)),
                );
            }

            items
        };

        let total: i64 = query_builder().count().get_result(&mut conn)?;

        let mut items = query_builder().order(consultations::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1);
            let offset = (page - 1) * pagination.per_page;
            items = items
                .limit(pagination.per_page as i64)
                .offset(offset as i64);
        }

        let consultations = items
            .load::<DbConsultation>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, consultations))
    }

    fn count_consultations_by_status(
        &self,
    ) -> RepositoryResult<Vec<(ConsultationStatus, usize)>> {
        use crate::schema::consultations;

        let mut conn = self.conn()?;
        let counts = consultations::table
            .group_by(consultations::status)
            .select((consultations::status, diesel::dsl::count_star()))
            .load::<(String, i64)>(&mut conn)?;

        Ok(counts
            .into_iter()
            .map(|(status, count)| (status.into(), count as usize))
            .collect())
    }
}

impl ConsultationWriter for DieselRepository {
    fn create_consultation(
        &self,
        new_consultation: &NewConsultation,
    ) -> RepositoryResult<Consultation> {
        use crate::schema::consultations;

        let mut conn = self.conn()?;
        let db_new_consultation: DbNewConsultation = new_consultation.into();

        let created = diesel::insert_into(consultations::table)
            .values(&db_new_consultation)
            .get_result::<DbConsultation>(&mut conn)?;

        Ok(created.into())
    }

    fn update_consultation(
        &self,
        consultation_id: i32,
        updates: &UpdateConsultation,
    ) -> RepositoryResult<Consultation> {
        use crate::schema::consultations;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateConsultation = updates.into();

        let updated = diesel::update(consultations::table.find(consultation_id))
            .set(&db_updates)
            .get_result::<DbConsultation>(&mut conn)?;

        Ok(updated.into())
    }

    fn record_quote_sent(
        &self,
        consultation_id: i32,
        offer: &QuoteOffer,
        token: ApprovalToken,
        template_name: &str,
    ) -> RepositoryResult<Consultation> {
        use crate::schema::consultations;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let db_updates = QuoteSentUpdate {
            quote_amount: Some(offer.amount),
            quote_currency: Some(offer.currency.clone()),
            quote_validity_days: Some(offer.validity_days),
            quote_notes: offer.notes.clone(),
            email_sent: true,
            email_sent_at: Some(now),
            email_template_used: Some(template_name.to_string()),
            status: ConsultationStatus::InProgress.to_string(),
            approval_status: ApprovalStatus::Pending.to_string(),
            approval_token: Some(token.to_string()),
            approval_date: None,
            approval_notes: None,
            rejection_reason: None,
            project_assigned: false,
            project_assignment_date: None,
            updated_at: now,
        };

        let updated = diesel::update(consultations::table.find(consultation_id))
            .set(&db_updates)
            .get_result::<DbConsultation>(&mut conn)?;

        Ok(updated.into())
    }

    fn apply_approval_decision(
        &self,
        consultation_id: i32,
        decision: &ApprovalDecision,
    ) -> RepositoryResult<Consultation> {
        use crate::schema::consultations;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let db_updates = match decision {
            ApprovalDecision::Approve { notes } => ApprovalDecisionUpdate {
                approval_status: ApprovalStatus::Approved.to_string(),
                approval_date: Some(now),
                approval_notes: notes.clone(),
                rejection_reason: None,
                project_assigned: true,
                project_assignment_date: Some(now),
                status: ConsultationStatus::InProgress.to_string(),
                updated_at: now,
            },
            ApprovalDecision::Reject { reason } => ApprovalDecisionUpdate {
                approval_status: ApprovalStatus::Rejected.to_string(),
                approval_date: Some(now),
                approval_notes: None,
                rejection_reason: reason.clone(),
                project_assigned: false,
                project_assignment_date: None,
                status: ConsultationStatus::Cancelled.to_string(),
                updated_at: now,
            },
        };

        let updated = diesel::update(consultations::table.find(consultation_id))
            .set(&db_updates)
            .get_result::<DbConsultation>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_consultation(&self, consultation_id: i32) -> RepositoryResult<()> {
        use crate::schema::{chats, consultations, email_logs};

        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(chats::table.filter(chats::consultation_id.eq(consultation_id)))
                .execute(conn)?;
            diesel::delete(
                email_logs::table.filter(email_logs::consultation_id.eq(consultation_id)),
            )
            .execute(conn)?;
            diesel::delete(consultations::table.find(consultation_id)).execute(conn)?;
            Ok(())
        })?;

        Ok(())
    }
}
