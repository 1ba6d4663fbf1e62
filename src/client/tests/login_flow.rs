use career_center_test_utils::prelude::*;
use serde_json::json;

use crate::{
    client::{
        api::Method,
        router::{dispatch, Dispatch, Screen, View},
        state::{
            auth::{sign_in, LoginForm},
            student::StudentData,
        },
        store::{storage::MemoryStorage, SessionState, SessionStorage},
        util::test::MockTransport,
    },
    model::{id::Id, user::UserType},
};

fn credentials() -> LoginForm {
    LoginForm {
        email: "a@b.com".to_string(),
        password: "x".to_string(),
    }
}

fn mock_login(transport: &MockTransport) {
    transport.mock(
        Method::Post,
        "/api/auth/login",
        200,
        factory::auth_response(factory::user("7", "student"), "t1"),
    );
}

#[tokio::test]
/// Tests a student logging in.
///
/// Verifies the session is persisted, the student dashboard opens and its data loads with the new token.
///
/// Expected: four dashboard requests carrying `Bearer t1`
async fn student_login_opens_dashboard() -> Result<(), TestError> {
    let transport = MockTransport::new();
    let storage = MemoryStorage::new();
    mock_login(&transport);
    transport.mock(Method::Get, "/api/resumes/student/7", 200, json!([factory::resume("r1", "7", "Backend")]));
    transport.mock(Method::Get, "/api/appointments/student/7", 200, json!([]));
    transport.mock(Method::Get, "/api/vacancies", 200, json!([factory::vacancy("v1", "Intern")]));

    let session = sign_in(&transport.client(None), &storage, &credentials()).await?;

    let login = transport.last_request();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(login.body.as_deref().unwrap_or_default())?,
        json!({ "email": "a@b.com", "password": "x" })
    );
    assert_eq!(storage.get("token").as_deref(), Some("t1"));
    let stored: serde_json::Value =
        serde_json::from_str(&storage.get("user").unwrap_or_default())?;
    assert_eq!(stored["id"], 7);
    assert_eq!(stored["user_type"], "student");

    // a reload sees the same session
    let restored = SessionState::restore(&storage);
    assert_eq!(restored, session);

    let user = restored.user().cloned().expect("signed-in user");
    assert_eq!(user.id, Id::from(7));
    assert_eq!(user.user_type, Some(UserType::Student));
    assert_eq!(
        dispatch(Screen::Dashboard, restored.user()),
        Dispatch::Render(View::StudentDashboard(user.clone()))
    );

    let data = StudentData::load(&transport.client(restored.token()), &user.id).await;

    assert_eq!(transport.hits(Method::Get, "/api/students/profile/7"), 1);
    assert_eq!(transport.hits(Method::Get, "/api/resumes/student/7"), 1);
    assert_eq!(transport.hits(Method::Get, "/api/appointments/student/7"), 1);
    assert_eq!(transport.hits(Method::Get, "/api/vacancies"), 1);
    assert!(transport
        .requests()
        .iter()
        .any(|request| request.url.ends_with("/api/vacancies?limit=10")));
    assert!(transport
        .requests()
        .iter()
        .filter(|request| request.method == Method::Get)
        .all(|request| request.header("Authorization") == Some("Bearer t1")));

    // the missing profile degrades on its own
    assert_eq!(data.profile, None);
    assert_eq!(data.resumes.len(), 1);
    assert_eq!(data.vacancies.len(), 1);

    Ok(())
}

#[tokio::test]
/// Tests logging out from the dashboard.
///
/// Verifies storage is emptied and the dashboard is gated again.
///
/// Expected: Dispatch::Redirect(Screen::Login)
async fn logout_returns_to_login() -> Result<(), TestError> {
    let transport = MockTransport::new();
    let storage = MemoryStorage::new();
    mock_login(&transport);

    let mut session = sign_in(&transport.client(None), &storage, &credentials()).await?;
    assert!(!storage.is_empty());

    session.logout(&storage)?;

    assert!(storage.is_empty());
    let restored = SessionState::restore(&storage);
    assert!(restored.user().is_none());
    assert_eq!(
        dispatch(Screen::Dashboard, restored.user()),
        Dispatch::Redirect(Screen::Login)
    );

    Ok(())
}

#[tokio::test]
/// Tests a login the server rejects.
///
/// Verifies the visitor stays signed out and sees the server's message.
///
/// Expected: Err with the detail and empty storage
async fn rejected_login_keeps_visitor_signed_out() {
    let transport = MockTransport::new();
    let storage = MemoryStorage::new();
    transport.mock(
        Method::Post,
        "/api/auth/login",
        401,
        json!({ "detail": "Invalid credentials" }),
    );

    let result = sign_in(&transport.client(None), &storage, &credentials()).await;

    let Err(e) = result else {
        panic!("expected the login to be rejected");
    };
    assert_eq!(e.message("Login failed"), "Invalid credentials");
    assert!(storage.is_empty());
    assert_eq!(
        dispatch(Screen::Dashboard, SessionState::restore(&storage).user()),
        Dispatch::Redirect(Screen::Login)
    );
}
