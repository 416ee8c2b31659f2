
use portfolio_api::{
    client::{
        render::{dispatch, render_messages, render_projects, Actions, Control},
        ApiClient, ClientError, Dashboard, Notice, PublicSite, Session,
    },
    entities::{
        contact::NewContactMessage,
        option_fields::OptionField,
        project::{NewProject, UpdateProject},
        site_settings::{SettingsUpdate, SocialLinks},
    },
};
use test_utils::*;

fn new_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: "Built with actix-web".to_string(),
        tags: vec!["rust".to_string()],
        ..Default::default()
    }
}

fn contact_form() -> NewContactMessage {
    NewContactMessage {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Nice portfolio".to_string(),
    }
}

async fn logged_in_dashboard(app: &TestApp) -> Dashboard {
    let mut dashboard = Dashboard::new(ApiClient::new(&app.api_base()).unwrap());
    dashboard.login(ADMIN_USERNAME, ADMIN_PASSWORD).await.unwrap();
    dashboard
}

#[actix_rt::test]
async fn login_loads_every_kind() {
    let app = TestApp::spawn().await;
    let mut site = PublicSite::new(ApiClient::new(&app.api_base()).unwrap());
    site.submit_contact(&contact_form()).await.unwrap();

    let dashboard = logged_in_dashboard(&app).await;

    assert!(dashboard.is_logged_in());
    assert_eq!(dashboard.store().messages.len(), 1);
    assert!(dashboard.store().projects.is_empty());
    assert!(dashboard.store().settings.is_some());
}

#[actix_rt::test]
async fn failed_login_stays_logged_out_and_alerts() {
    let app = TestApp::spawn().await;
    let mut dashboard = Dashboard::new(ApiClient::new(&app.api_base()).unwrap());

    let err = dashboard.login(ADMIN_USERNAME, "wrong").await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 400, .. }));
    assert!(!dashboard.is_logged_in());
    assert_eq!(dashboard.take_notices().len(), 1);
}

#[actix_rt::test]
async fn mutations_reload_the_affected_list() {
    let app = TestApp::spawn().await;
    let mut dashboard = logged_in_dashboard(&app).await;

    dashboard.create_project(&new_project("CLI Tool")).await.unwrap();
    assert_eq!(dashboard.store().projects.len(), 1);

    let id = dashboard.store().projects[0].id.to_string();
    let changes = UpdateProject {
        featured: Some(true),
        category: OptionField::SetToValue("Tools".to_string()),
        ..Default::default()
    };
    dashboard.update_project(&id, &changes).await.unwrap();
    assert!(dashboard.store().projects[0].featured);
    assert_eq!(dashboard.store().projects[0].category.as_deref(), Some("Tools"));

    dashboard.delete_project(&id).await.unwrap();
    assert!(dashboard.store().projects.is_empty());
}

#[actix_rt::test]
async fn failed_write_leaves_store_unchanged() {
    let app = TestApp::spawn().await;
    let mut dashboard = logged_in_dashboard(&app).await;
    dashboard.create_project(&new_project("Kept")).await.unwrap();
    let before = dashboard.store().clone();

    let err = dashboard.create_project(&new_project("")).await.unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 400, .. }));
    assert_eq!(dashboard.store(), &before);
    assert!(matches!(dashboard.take_notices().as_slice(), [Notice::Alert(_)]));
}

#[actix_rt::test]
async fn server_401_drops_the_session() {
    let app = TestApp::spawn().await;
    let mut dashboard = logged_in_dashboard(&app).await;
    dashboard.create_project(&new_project("Kept")).await.unwrap();
    let before = dashboard.store().clone();

    // The token stays well-formed but no longer names an account.
    app.repo.remove_account(ADMIN_USERNAME);
    let err = dashboard.create_project(&new_project("Rejected")).await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)));
    assert!(!dashboard.is_logged_in());
    assert_eq!(dashboard.api().session(), &Session::LoggedOut);
    assert_eq!(dashboard.store(), &before);
    assert_eq!(app.repo.project_count(), 1);
}

#[actix_rt::test]
async fn settings_round_trip_through_dashboard_and_public_site() {
    let app = TestApp::spawn().await;
    let mut dashboard = logged_in_dashboard(&app).await;

    let update = SettingsUpdate {
        contact_email: Some("me@example.com".to_string()),
        social_links: SocialLinks {
            github: Some("https://github.com/me".to_string()),
            ..Default::default()
        },
    };
    dashboard.save_settings(&update).await.unwrap();

    let mut site = PublicSite::new(ApiClient::new(&app.api_base()).unwrap());
    site.load().await.unwrap();

    let settings = site.store().settings.as_ref().unwrap();
    assert_eq!(settings.contact_email.as_deref(), Some("me@example.com"));
    assert_eq!(settings.social_links.entries(), vec![("github", "https://github.com/me")]);
}

#[actix_rt::test]
async fn public_site_toasts_on_submit() {
    let app = TestApp::spawn().await;
    let mut site = PublicSite::new(ApiClient::new(&app.api_base()).unwrap());

    site.submit_contact(&contact_form()).await.unwrap();
    let mut bad = contact_form();
    bad.email = "nope".to_string();
    site.submit_contact(&bad).await.unwrap_err();

    let notices = site.take_notices();
    assert!(matches!(notices[0], Notice::Toast { success: true, .. }));
    assert!(matches!(notices[1], Notice::Toast { success: false, .. }));
    assert_eq!(app.repo.message_count(), 1);
}

struct DashboardActions<'a> {
    dashboard: &'a mut Dashboard,
    pending: Vec<(Control, String)>,
}

impl Actions for DashboardActions<'_> {
    fn on_edit(&mut self, id: &str) {
        self.pending.push((Control::Edit, id.to_string()));
    }
    fn on_delete(&mut self, id: &str) {
        self.pending.push((Control::Delete, id.to_string()));
    }
    fn on_mark_read(&mut self, id: &str) {
        self.pending.push((Control::MarkRead, id.to_string()));
    }
}

impl DashboardActions<'_> {
    async fn flush(&mut self) {
        for (control, id) in std::mem::take(&mut self.pending) {
            match control {
                Control::Delete => self.dashboard.delete_message(&id).await.unwrap(),
                Control::MarkRead => self.dashboard.mark_read(&id).await.unwrap(),
                Control::Edit => {}
            }
        }
    }
}

#[actix_rt::test]
async fn rendered_controls_dispatch_to_dashboard() {
    let app = TestApp::spawn().await;
    let mut site = PublicSite::new(ApiClient::new(&app.api_base()).unwrap());
    site.submit_contact(&contact_form()).await.unwrap();
    let mut dashboard = logged_in_dashboard(&app).await;

    let row = render_messages(dashboard.store()).remove(0);
    assert_eq!(row.controls, vec![Control::MarkRead, Control::Delete]);

    let mut actions = DashboardActions { dashboard: &mut dashboard, pending: Vec::new() };
    assert!(dispatch(&row, Control::MarkRead, &mut actions));
    actions.flush().await;

    assert!(dashboard.store().messages[0].read);
    assert!(render_projects(dashboard.store()).is_empty());
}

#[actix_rt::test]
async fn logged_out_client_never_sends_protected_calls() {
    let app = TestApp::spawn().await;
    let mut api = ApiClient::new(&app.api_base()).unwrap();

    assert_eq!(api.session(), &Session::LoggedOut);
    assert_eq!(api.list_messages().await.unwrap_err(), ClientError::NotLoggedIn);
    assert!(api.list_projects().await.unwrap().is_empty());
}
