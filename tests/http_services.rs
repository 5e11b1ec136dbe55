// HTTP service tests
//
// Runs the services on ephemeral ports against an in-memory SurrealDB and
// drives them through the real reqwest clients.

use chrono::NaiveDate;
use term_planner::api::app_state::{ScheduleState, TrackerState};
use term_planner::api::{create_schedule_app, create_tracker_app};
use term_planner::client::{BannerKind, HttpScheduleApi, ScheduleController, TrackerClient};
use term_planner::config::config::DatabaseConfig;
use term_planner::models::tracker::{Assignment, AssignmentDraft, Exam, ExamDraft};
use term_planner::planner::{CourseDraft, PlannerError, VisibilityPolicy, WeekView};
use term_planner::storage::surrealdb::SurrealPool;
use tokio::net::TcpListener;

async fn pool(name: &str) -> SurrealPool {
    SurrealPool::new(DatabaseConfig::in_memory(name))
        .await
        .unwrap()
}

/// Serve `app` on an ephemeral port, returning its base URL
async fn serve(app: axum::Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn cs101() -> CourseDraft {
    CourseDraft {
        name: "CS101".into(),
        instructor: "Dr. Ada".into(),
        start_time: "09:00".into(),
        end_time: "10:00".into(),
        days: vec!["Monday".into(), "Wednesday".into()],
    }
}

#[tokio::test]
async fn test_schedule_page_flow() {
    let pool = pool("schedule_flow").await;
    let base_url = serve(create_schedule_app(ScheduleState::from_pool(&pool))).await;

    let mut controller = ScheduleController::new(HttpScheduleApi::new(base_url))
        .with_visibility(VisibilityPolicy::Immediate);
    controller.init().await.unwrap();
    assert!(controller.state().terms.is_empty());
    assert_eq!(controller.state().current_term_id, None);

    let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let term = controller.create_term("Spring", 3, monday).await.unwrap();
    assert_eq!(
        controller.state().current_term_id.as_deref(),
        Some(term.id.as_str())
    );
    assert_eq!(
        controller.banners().last().unwrap().message,
        "New term created successfully"
    );

    assert_eq!(controller.add_course(&cs101()).await.unwrap(), 6);
    assert_eq!(controller.state().visible_entries().len(), 6);

    // nothing new the second time round
    assert_eq!(controller.add_course(&cs101()).await.unwrap(), 0);
    assert_eq!(controller.state().visible_entries().len(), 6);

    controller.select_week(WeekView::Week(2));
    let first_id = controller.state().visible_entries()[0].id.clone();
    controller.save_notice(&first_id, "  Quiz  ").await.unwrap();
    controller.load_schedules().await.unwrap();
    assert_eq!(controller.state().visible_entries()[0].notice, "Quiz");

    assert_eq!(controller.clear_week_notices().await.unwrap(), 2);
    controller.load_schedules().await.unwrap();
    assert!(
        controller
            .state()
            .visible_entries()
            .iter()
            .all(|e| e.notice.is_empty())
    );

    controller.remove_course(0).await.unwrap();
    assert_eq!(controller.state().visible_entries().len(), 1);
    assert!(matches!(
        controller.remove_course(5).await,
        Err(PlannerError::Validation(_))
    ));

    let warning = controller.change_term_length(5).await.unwrap();
    assert_eq!(warning, None);
    assert_eq!(controller.state().term_length, 5);
    assert_eq!(controller.state().current_term().unwrap().term_length, 5);
    assert_eq!(
        controller.banners().last().map(|b| b.kind),
        Some(BannerKind::Success)
    );
}

#[tokio::test]
async fn test_service_errors_surface_as_status() {
    let pool = pool("schedule_errors").await;
    let base_url = serve(create_schedule_app(ScheduleState::from_pool(&pool))).await;
    let api = HttpScheduleApi::new(base_url);

    use term_planner::client::ScheduleApi;
    let err = api.update_term_length("missing", 10).await.unwrap_err();
    match err {
        PlannerError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Term not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_assignment_tracker_flow() {
    let pool = pool("assignment_flow").await;
    let base_url = serve(create_tracker_app(TrackerState::<Assignment>::from_pool(&pool))).await;
    let client = TrackerClient::<Assignment>::new(base_url);

    let essay = client
        .add(&AssignmentDraft {
            title: Some("Essay".into()),
            due_date: Some("2025-02-01".into()),
            done: None,
        })
        .await
        .unwrap();
    client
        .add(&AssignmentDraft {
            title: Some("Lab report".into()),
            due_date: Some("2025-01-20".into()),
            done: None,
        })
        .await
        .unwrap();
    assert!(client.add(&AssignmentDraft::default()).await.is_err());

    let items = client.list().await.unwrap();
    let titles: Vec<&str> = items.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Lab report", "Essay"]);

    assert_eq!(client.remove_done(&items).await.unwrap(), 0);

    let done = client.set_done(&essay.id, true).await.unwrap();
    assert!(done.done);
    let items = client.list().await.unwrap();
    assert_eq!(client.remove_done(&items).await.unwrap(), 1);
    assert_eq!(client.list().await.unwrap().len(), 1);

    assert_eq!(
        client.notices().await.unwrap(),
        vec![
            "Assignment \"Essay\" added!",
            "Assignment \"Lab report\" added!",
            "Failed to add assignment.",
            "No assignments selected for removal.",
            "Assignment \"Essay\" marked as done.",
            "Removed all done assignments.",
        ]
    );

    client.clear_notices().await.unwrap();
    assert!(client.notices().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_exam_tracker_delete() {
    let pool = pool("exam_flow").await;
    let base_url = serve(create_tracker_app(TrackerState::<Exam>::from_pool(&pool))).await;
    let client = TrackerClient::<Exam>::new(base_url);

    let midterm = client
        .add(&ExamDraft {
            title: Some("Midterm".into()),
            subject: Some("Algebra".into()),
            date: Some("2025-03-03".into()),
            time: Some("10:00".into()),
            done: None,
        })
        .await
        .unwrap();
    assert_eq!(midterm.subject.as_deref(), Some("Algebra"));

    client.delete(&midterm.id, &midterm.title).await.unwrap();
    assert!(client.delete(&midterm.id, &midterm.title).await.is_err());
    assert!(client.list().await.unwrap().is_empty());

    assert_eq!(
        client.notices().await.unwrap(),
        vec!["Exam \"Midterm\" added!", "Exam \"Midterm\" deleted.", "Failed to delete exam."]
    );
}
