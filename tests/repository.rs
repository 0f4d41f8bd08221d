use std::collections::BTreeMap;

use havoc_site::domain::admin::{AdminRole, NewAdmin};
use havoc_site::domain::chat::{ChatSender, NewChatMessage};
use havoc_site::domain::consultation::{
    ApprovalDecision, ApprovalStatus, ConsultationStatus, LeadSource, NewConsultation, Ownership,
    QuoteOffer, UpdateConsultation,
};
use havoc_site::domain::email::{
    EmailStatus, KIND_CONSULTATION_APPROVAL, NewEmailLog, NewEmailTemplate,
};
use havoc_site::domain::project::{NewProject, ProjectType, UpdateProject};
use havoc_site::domain::review::{NewReview, ReviewModeration, ReviewStatus};
use havoc_site::domain::service::NewService;
use havoc_site::domain::settings::UpdateSettings;
use havoc_site::domain::team_member::NewTeamMember;
use havoc_site::domain::theme::{NewTheme, PALETTE_SLOTS};
use havoc_site::domain::types::{ApprovalToken, EmailAddress, Rating, SanitizedText};
use havoc_site::repository::{
    AdminReader, AdminWriter, ChatReader, ChatWriter, ConsultationListQuery, ConsultationReader,
    ConsultationWriter, DieselRepository, EmailLogReader, EmailLogWriter, EmailTemplateReader,
    EmailTemplateWriter, ProjectListQuery, ProjectReader, ProjectWriter, ReviewListQuery,
    ReviewReader, ReviewWriter, ServiceReader, ServiceWriter, SettingsReader, SettingsWriter,
    TeamMemberReader, TeamMemberWriter, ThemeReader, ThemeWriter,
};

mod common;

fn new_project(title: &str, project_type: ProjectType) -> NewProject {
    NewProject::new(
        title.to_string(),
        Some("A showcase project".to_string()),
        project_type,
        vec!["/uploads/shot.png".to_string()],
        vec!["Rust".to_string(), "Actix".to_string()],
        "completed".to_string(),
    )
}

fn new_consultation(name: &str, email: &str) -> NewConsultation {
    NewConsultation::new(
        name.to_string(),
        email.to_string(),
        None,
        Some("Acme".to_string()),
        None,
        vec!["web".to_string(), "ai".to_string()],
        None,
        "We need a customer portal with AI-assisted search.".to_string(),
        Some("$10,000 - $25,000".to_string()),
        Some("3 months".to_string()),
        None,
        Some(Ownership::Representing),
        None,
        vec!["https://example.com".to_string()],
        LeadSource::Website,
    )
}

#[test]
fn test_project_repository_crud() {
    let test_db = common::TestDb::new("test_project_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let web = repo.create_project(&new_project("Portal", ProjectType::Web)).unwrap();
    let mobile = repo
        .create_project(&new_project("Fitness app", ProjectType::Mobile))
        .unwrap();

    assert_eq!(web.project_type, ProjectType::Web);
    assert_eq!(web.images, vec!["/uploads/shot.png"]);

    let (total, all) = repo.list_projects(ProjectListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    let (web_total, web_only) = repo
        .list_projects(ProjectListQuery::new().project_type(ProjectType::Web))
        .unwrap();
    assert_eq!(web_total, 1);
    assert_eq!(web_only[0].id, web.id);

    let (search_total, found) = repo
        .list_projects(ProjectListQuery::new().search("Fitness"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(found[0].id, mobile.id);

    let updates = UpdateProject {
        title: "Portal v2".to_string(),
        description: None,
        project_type: ProjectType::Fullstack,
        images: Vec::new(),
        technologies: vec!["Rust".to_string()],
        status: "in_development".to_string(),
    };
    let updated = repo.update_project(web.id, &updates).unwrap();
    assert_eq!(updated.title, "Portal v2");
    assert_eq!(updated.project_type, ProjectType::Fullstack);
    assert!(updated.images.is_empty());

    repo.delete_project(mobile.id).unwrap();
    assert!(repo.get_project_by_id(mobile.id).unwrap().is_none());
}

#[test]
fn test_service_repository_crud_and_ordering() {
    let test_db = common::TestDb::new("test_service_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let second = NewService {
        title: "Mobile development".to_string(),
        description: None,
        icon: None,
        category: Some("Mobile".to_string()),
        is_active: true,
        display_order: 2,
        what_included: vec!["Design".to_string()],
        technologies: vec!["Flutter".to_string()],
        show_request_button: true,
        show_contact_button: false,
    };
    let first = NewService {
        title: "Web development".to_string(),
        display_order: 1,
        ..second.clone()
    };
    let hidden = NewService {
        title: "Legacy rescue".to_string(),
        is_active: false,
        display_order: 0,
        ..second.clone()
    };

    repo.create_service(&second).unwrap();
    repo.create_service(&first).unwrap();
    repo.create_service(&hidden).unwrap();

    let active = repo.list_services(true).unwrap();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].title, "Web development");
    assert_eq!(active[1].title, "Mobile development");

    let all = repo.list_services(false).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn test_team_member_repository_crud() {
    let test_db = common::TestDb::new("test_team_member_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let member = repo
        .create_team_member(&NewTeamMember::new(
            "Ada".to_string(),
            Some("Lead engineer".to_string()),
            None,
            None,
            Some("Ada@Example.com".to_string()),
            None,
            None,
            None,
            true,
            1,
        ))
        .unwrap();

    // Email was normalized at construction time.
    assert_eq!(member.email.as_deref(), Some("ada@example.com"));

    let active = repo.list_team_members(true).unwrap();
    assert_eq!(active.len(), 1);

    repo.delete_team_member(member.id).unwrap();
    assert!(repo.get_team_member_by_id(member.id).unwrap().is_none());
}

#[test]
fn test_review_moderation_flow() {
    let test_db = common::TestDb::new("test_review_moderation_flow.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let review = repo
        .create_review(&NewReview::new(
            "Ada".to_string(),
            Some("Acme".to_string()),
            Some("ada@example.com".to_string()),
            SanitizedText::new("Delivered on time, great team.").unwrap(),
            Rating::new(5).unwrap(),
            None,
        ))
        .unwrap();
    assert_eq!(review.status, ReviewStatus::Pending);

    let (approved_total, _) = repo
        .list_reviews(ReviewListQuery::new().status(ReviewStatus::Approved))
        .unwrap();
    assert_eq!(approved_total, 0);

    let moderated = repo
        .moderate_review(
            review.id,
            &ReviewModeration {
                status: ReviewStatus::Approved,
                admin_notes: Some("verified client".to_string()),
            },
        )
        .unwrap();
    assert_eq!(moderated.status, ReviewStatus::Approved);
    assert_eq!(moderated.admin_notes.as_deref(), Some("verified client"));

    let (approved_total, approved) = repo
        .list_reviews(ReviewListQuery::new().status(ReviewStatus::Approved))
        .unwrap();
    assert_eq!(approved_total, 1);
    assert_eq!(approved[0].id, review.id);
}

#[test]
fn test_consultation_lifecycle() {
    let test_db = common::TestDb::new("test_consultation_lifecycle.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let lead = repo
        .create_consultation(&new_consultation("Ada", "Ada@Example.com"))
        .unwrap();
    assert_eq!(lead.status, ConsultationStatus::New);
    assert_eq!(lead.approval_status, ApprovalStatus::Pending);
    assert_eq!(lead.email, "ada@example.com");
    assert_eq!(lead.project_type, vec!["web", "ai"]);
    assert!(lead.approval_token.is_none());

    // Back-office edit.
    let updated = repo
        .update_consultation(
            lead.id,
            &UpdateConsultation::new(
                ConsultationStatus::InProgress,
                None,
                Some("high".to_string()),
                Some("promising lead".to_string()),
            ),
        )
        .unwrap();
    assert_eq!(updated.status, ConsultationStatus::InProgress);
    assert_eq!(updated.priority.as_deref(), Some("high"));

    // Quote mailing stamps figures and a token.
    let offer = QuoteOffer {
        amount: 12_500.0,
        currency: "USD".to_string(),
        validity_days: 30,
        notes: None,
    };
    let token = ApprovalToken::new();
    let quoted = repo
        .record_quote_sent(lead.id, &offer, token, "Quote template")
        .unwrap();
    assert!(quoted.email_sent);
    assert_eq!(quoted.quote_amount, Some(12_500.0));
    assert_eq!(quoted.approval_token, Some(token));
    assert_eq!(quoted.approval_status, ApprovalStatus::Pending);

    // The emailed token finds the same consultation.
    let by_token = repo.get_consultation_by_token(&token).unwrap().unwrap();
    assert_eq!(by_token.id, lead.id);
    assert!(
        repo.get_consultation_by_token(&ApprovalToken::new())
            .unwrap()
            .is_none()
    );

    // Client approves; the project becomes officially assigned.
    let approved = repo
        .apply_approval_decision(
            lead.id,
            &ApprovalDecision::Approve {
                notes: Some("let's go".to_string()),
            },
        )
        .unwrap();
    assert_eq!(approved.approval_status, ApprovalStatus::Approved);
    assert!(approved.project_assigned);
    assert!(approved.approval_date.is_some());
    assert_eq!(approved.status, ConsultationStatus::InProgress);

    let counts = repo.count_consultations_by_status().unwrap();
    assert_eq!(counts, vec![(ConsultationStatus::InProgress, 1)]);
}

#[test]
fn test_consultation_rejection_cancels() {
    let test_db = common::TestDb::new("test_consultation_rejection.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let lead = repo
        .create_consultation(&new_consultation("Bob", "bob@example.com"))
        .unwrap();

    let rejected = repo
        .apply_approval_decision(
            lead.id,
            &ApprovalDecision::Reject {
                reason: Some("budget too high".to_string()),
            },
        )
        .unwrap();
    assert_eq!(rejected.approval_status, ApprovalStatus::Rejected);
    assert_eq!(rejected.status, ConsultationStatus::Cancelled);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("budget too high"));
    assert!(!rejected.project_assigned);
}

#[test]
fn test_consultation_search_and_pagination() {
    let test_db = common::TestDb::new("test_consultation_search.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 0..25 {
        repo.create_consultation(&new_consultation(
            &format!("Lead {i}"),
            &format!("lead{i}@example.com"),
        ))
        .unwrap();
    }

    let (total, page_one) = repo
        .list_consultations(ConsultationListQuery::new().paginate(1, 20))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(page_one.len(), 20);

    let (_, page_two) = repo
        .list_consultations(ConsultationListQuery::new().paginate(2, 20))
        .unwrap();
    assert_eq!(page_two.len(), 5);

    let (found_total, found) = repo
        .list_consultations(ConsultationListQuery::new().search("lead7@"))
        .unwrap();
    assert_eq!(found_total, 1);
    assert_eq!(found[0].email, "lead7@example.com");
}

#[test]
fn test_chat_thread() {
    let test_db = common::TestDb::new("test_chat_thread.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let lead = repo
        .create_consultation(&new_consultation("Ada", "ada@example.com"))
        .unwrap();

    repo.create_chat_message(&NewChatMessage {
        consultation_id: lead.id,
        sender: ChatSender::Client,
        message: SanitizedText::new("Is the quote negotiable?").unwrap(),
    })
    .unwrap();
    repo.create_chat_message(&NewChatMessage {
        consultation_id: lead.id,
        sender: ChatSender::Team,
        message: SanitizedText::new("Happy to discuss scope.").unwrap(),
    })
    .unwrap();

    let thread = repo.list_chat_messages(lead.id).unwrap();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].sender, ChatSender::Client);
    assert!(!thread[0].read);

    let marked = repo.mark_chat_read(lead.id, ChatSender::Client).unwrap();
    assert_eq!(marked, 1);

    let thread = repo.list_chat_messages(lead.id).unwrap();
    assert!(thread[0].read);
    assert!(!thread[1].read);
}

#[test]
fn test_theme_activation_is_exclusive() {
    let test_db = common::TestDb::new("test_theme_activation.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let palette: BTreeMap<String, String> = PALETTE_SLOTS
        .iter()
        .map(|slot| (slot.to_string(), "#d4a373".to_string()))
        .collect();

    let autumn = repo
        .create_theme(&NewTheme::new("Autumn".to_string(), palette.clone()).unwrap())
        .unwrap();
    let winter = repo
        .create_theme(&NewTheme::new("Winter".to_string(), palette).unwrap())
        .unwrap();

    assert!(repo.get_active_theme().unwrap().is_none());

    repo.activate_theme(autumn.id).unwrap();
    assert_eq!(repo.get_active_theme().unwrap().unwrap().id, autumn.id);

    repo.activate_theme(winter.id).unwrap();
    let active = repo.get_active_theme().unwrap().unwrap();
    assert_eq!(active.id, winter.id);

    let themes = repo.list_themes().unwrap();
    assert_eq!(themes.iter().filter(|t| t.is_active).count(), 1);

    assert!(repo.activate_theme(9999).is_err());
}

#[test]
fn test_settings_upsert() {
    let test_db = common::TestDb::new("test_settings_upsert.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert!(repo.get_settings().unwrap().is_none());

    let first = UpdateSettings::new(
        "Havoc Solutions".to_string(),
        vec!["hello@havoc.dev".to_string()],
        BTreeMap::new(),
        None,
        Some("We build software.".to_string()),
    );
    let saved = repo.upsert_settings(&first).unwrap();
    assert_eq!(saved.company_name, "Havoc Solutions");

    let second = UpdateSettings::new(
        "Havoc Solutions Ltd".to_string(),
        vec!["hello@havoc.dev".to_string(), "sales@havoc.dev".to_string()],
        BTreeMap::from([("github".to_string(), "https://github.com/havoc".to_string())]),
        Some("Berlin".to_string()),
        None,
    );
    let saved = repo.upsert_settings(&second).unwrap();
    assert_eq!(saved.company_name, "Havoc Solutions Ltd");
    assert_eq!(saved.emails.len(), 2);
    assert_eq!(saved.address.as_deref(), Some("Berlin"));
    // A second upsert must not create a second row.
    assert!(repo.get_settings().unwrap().is_some());
}

#[test]
fn test_email_templates_and_logs() {
    let test_db = common::TestDb::new("test_email_templates_logs.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let template = repo
        .create_email_template(&NewEmailTemplate {
            name: "Quote".to_string(),
            subject: "Your quote, {{name}}".to_string(),
            body: "Approve: {{approval_url}}".to_string(),
            kind: KIND_CONSULTATION_APPROVAL.to_string(),
            is_active: true,
        })
        .unwrap();

    let active = repo
        .get_active_template_by_kind(KIND_CONSULTATION_APPROVAL)
        .unwrap()
        .unwrap();
    assert_eq!(active.id, template.id);
    assert!(
        repo.get_active_template_by_kind("unknown_kind")
            .unwrap()
            .is_none()
    );

    let lead = repo
        .create_consultation(&new_consultation("Ada", "ada@example.com"))
        .unwrap();

    let log = repo
        .create_email_log(&NewEmailLog {
            consultation_id: lead.id,
            template_id: template.id,
            recipient_email: lead.email.clone(),
            subject: "Your quote, Ada".to_string(),
            status: EmailStatus::Sent,
            sent_at: Some(chrono::Utc::now().naive_utc()),
            error_message: None,
        })
        .unwrap();
    assert_eq!(log.status, EmailStatus::Sent);

    let logs = repo.list_email_logs(Some(lead.id)).unwrap();
    assert_eq!(logs.len(), 1);
    assert!(repo.list_email_logs(Some(lead.id + 1)).unwrap().is_empty());

    // Deleting the consultation removes its log entries too.
    repo.delete_consultation(lead.id).unwrap();
    assert!(repo.list_email_logs(Some(lead.id)).unwrap().is_empty());
}

#[test]
fn test_admin_accounts() {
    let test_db = common::TestDb::new("test_admin_accounts.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert!(!repo.any_admin_exists().unwrap());

    let admin = repo
        .create_admin(&NewAdmin::new(
            "Root".to_string(),
            EmailAddress::new("Root@Example.com").unwrap(),
            "$argon2id$stub".to_string(),
            AdminRole::Admin,
        ))
        .unwrap();
    assert!(repo.any_admin_exists().unwrap());
    assert_eq!(admin.email, "root@example.com");

    let found = repo.get_admin_by_email("root@example.com").unwrap();
    assert_eq!(found.map(|a| a.id), Some(admin.id));

    // Unique email constraint.
    assert!(
        repo.create_admin(&NewAdmin::new(
            "Clone".to_string(),
            EmailAddress::new("root@example.com").unwrap(),
            "$argon2id$stub".to_string(),
            AdminRole::Viewer,
        ))
        .is_err()
    );

    let demoted = repo.update_admin_role(admin.id, AdminRole::Editor).unwrap();
    assert_eq!(demoted.role, AdminRole::Editor);

    repo.delete_admin(admin.id).unwrap();
    assert!(repo.get_admin_by_id(admin.id).unwrap().is_none());
}
