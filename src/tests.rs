//! Integration tests for the Ideaboard client core.
//!
//! Every scenario drives the public workflow (dashboard, form, commands)
//! against the in-memory store, the same way the embedding shell would.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::cache::QueryCache;
use crate::dashboard::{Dashboard, ListState};
use crate::form::{FormState, NewIdeaForm};
use crate::models::{FileRef, IdeaStatus, VoteKind};
use crate::notify::{Notifier, RecordingNotifier};
use crate::store::{MemoryStore, RemoteStore};
use crate::views::CardIntent;

/// Test fixture wiring a dashboard to an in-memory store with one seeded user.
struct TestFixture {
    store: Arc<MemoryStore>,
    notifier: Arc<RecordingNotifier>,
    dashboard: Dashboard,
}

const USER_ID: &str = "user-1";

impl TestFixture {
    async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(QueryCache::new());
        let notifier = Arc::new(RecordingNotifier::new());

        store
            .insert(
                "users",
                json!({
                    "id": USER_ID,
                    "email": "ada@example.com",
                    "full_name": "Ada Lovelace",
                    "department": "Engineering",
                    "role": "user"
                }),
            )
            .await
            .expect("Failed to seed user");

        let dashboard = Dashboard::new(
            store.clone() as Arc<dyn RemoteStore>,
            cache,
            notifier.clone() as Arc<dyn Notifier>,
            USER_ID,
        );

        TestFixture {
            store,
            notifier,
            dashboard,
        }
    }

    /// Insert an idea row directly, optionally with a fixed creation time.
    async fn seed_idea(&self, title: &str, created_at: Option<&str>) -> String {
        let mut row = json!({
            "title": title,
            "description": "seeded",
            "category": "other",
            "user_id": USER_ID
        });
        if let Some(ts) = created_at {
            row["created_at"] = json!(ts);
        }
        let created = self
            .store
            .insert("ideas", row)
            .await
            .expect("Failed to seed idea");
        created["id"].as_str().unwrap().to_string()
    }

    fn idea_titles(&self) -> Vec<String> {
        self.dashboard
            .ideas()
            .iter()
            .map(|i| i.title.clone())
            .collect()
    }
}

fn filled_form() -> NewIdeaForm {
    let mut form = NewIdeaForm::new();
    form.title = "Better coffee".to_string();
    form.description = "Upgrade the break room machine".to_string();
    form.category = "employee-experience".to_string();
    form
}

#[tokio::test]
async fn test_end_to_end_submission() {
    let mut fixture = TestFixture::new().await;
    fixture
        .seed_idea("Old idea", Some("2020-01-01T00:00:00.000000Z"))
        .await;

    fixture.dashboard.refresh().await;
    assert_eq!(fixture.idea_titles(), vec!["Old idea"]);

    fixture.dashboard.open_new_idea_modal();
    assert!(fixture.dashboard.is_modal_open());

    let mut form = filled_form();
    fixture.dashboard.submit_idea(&mut form).await;

    // Modal closed, success toast, form cleared
    assert!(!fixture.dashboard.is_modal_open());
    assert_eq!(
        fixture.notifier.successes(),
        vec!["Idea submitted successfully!"]
    );
    assert!(form.title.is_empty());
    assert_eq!(form.state, FormState::Editing);

    // The re-fetch shows the new idea exactly once, at the top
    let titles = fixture.idea_titles();
    assert_eq!(titles, vec!["Better coffee", "Old idea"]);
    assert_eq!(titles.iter().filter(|t| *t == "Better coffee").count(), 1);

    let new_idea = &fixture.dashboard.ideas()[0];
    assert_eq!(new_idea.status, IdeaStatus::Pending);
    assert_eq!(new_idea.votes, 0);
    assert_eq!(new_idea.user.full_name, "Ada Lovelace");
}

#[tokio::test]
async fn test_invalid_payloads_never_reach_the_store() {
    let mut fixture = TestFixture::new().await;
    fixture.dashboard.open_new_idea_modal();

    let invalid_forms: Vec<(&str, NewIdeaForm)> = vec![
        ("empty title", {
            let mut f = filled_form();
            f.title = String::new();
            f
        }),
        ("101-char title", {
            let mut f = filled_form();
            f.title = "x".repeat(101);
            f
        }),
        ("empty description", {
            let mut f = filled_form();
            f.description = String::new();
            f
        }),
        ("empty category", {
            let mut f = filled_form();
            f.category = String::new();
            f
        }),
        ("unknown category", {
            let mut f = filled_form();
            f.category = "snacks".to_string();
            f
        }),
    ];

    for (case, mut form) in invalid_forms {
        fixture.dashboard.submit_idea(&mut form).await;
        assert!(!form.errors().is_empty(), "no field errors for {}", case);
    }

    // No remote write was attempted and no toast fired
    assert!(fixture.store.rows("ideas").is_empty());
    assert!(fixture.notifier.messages().is_empty());
    assert!(fixture.dashboard.is_modal_open());
}

#[tokio::test]
async fn test_n_vote_actions_insert_exactly_n_rows() {
    let mut fixture = TestFixture::new().await;
    let idea_id = fixture.seed_idea("Votable", None).await;
    fixture.dashboard.refresh().await;

    for _ in 0..3 {
        fixture
            .dashboard
            .handle_intent(CardIntent::Vote {
                idea_id: idea_id.clone(),
                direction: VoteKind::Up,
            })
            .await;
    }

    assert_eq!(fixture.store.rows("votes").len(), 3);
    // The re-fetched total is consistent with three up-votes
    assert_eq!(fixture.dashboard.ideas()[0].votes, 3);
    assert!(fixture.notifier.errors().is_empty());
}

#[tokio::test]
async fn test_vote_totals_reflect_direction() {
    let mut fixture = TestFixture::new().await;
    let idea_id = fixture.seed_idea("Contested", None).await;
    fixture.dashboard.refresh().await;

    for direction in [VoteKind::Up, VoteKind::Up, VoteKind::Down] {
        fixture
            .dashboard
            .handle_intent(CardIntent::Vote {
                idea_id: idea_id.clone(),
                direction,
            })
            .await;
    }

    assert_eq!(fixture.store.rows("votes").len(), 3);
    assert_eq!(fixture.dashboard.ideas()[0].votes, 1);
}

#[tokio::test]
async fn test_list_is_ordered_newest_first() {
    let mut fixture = TestFixture::new().await;
    fixture
        .seed_idea("T1", Some("2026-08-01T00:00:00.000000Z"))
        .await;
    fixture
        .seed_idea("T3", Some("2026-08-03T00:00:00.000000Z"))
        .await;
    fixture
        .seed_idea("T2", Some("2026-08-02T00:00:00.000000Z"))
        .await;

    fixture.dashboard.refresh().await;

    assert_eq!(fixture.idea_titles(), vec!["T3", "T2", "T1"]);
}

#[tokio::test]
async fn test_failed_submission_retains_form_values() {
    let mut fixture = TestFixture::new().await;
    fixture.dashboard.open_new_idea_modal();
    fixture.store.fail_next_insert("network unreachable");

    let mut form = filled_form();
    fixture.dashboard.submit_idea(&mut form).await;

    assert_eq!(
        fixture.notifier.errors(),
        vec!["Failed to submit idea. Please try again."]
    );
    // Previously entered values are not silently cleared
    assert_eq!(form.title, "Better coffee");
    assert_eq!(form.description, "Upgrade the break room machine");
    assert_eq!(form.state, FormState::Editing);
    assert!(fixture.store.rows("ideas").is_empty());
}

#[tokio::test]
async fn test_failed_vote_notifies_without_rollback() {
    let mut fixture = TestFixture::new().await;
    let idea_id = fixture.seed_idea("Votable", None).await;
    fixture.dashboard.refresh().await;

    fixture.store.fail_next_insert("network unreachable");
    fixture
        .dashboard
        .handle_intent(CardIntent::Vote {
            idea_id,
            direction: VoteKind::Up,
        })
        .await;

    assert_eq!(
        fixture.notifier.errors(),
        vec!["Failed to vote. Please try again."]
    );
    assert!(fixture.store.rows("votes").is_empty());
    // Nothing was applied optimistically, so the list still shows zero votes
    assert_eq!(fixture.dashboard.ideas()[0].votes, 0);
}

#[tokio::test]
async fn test_list_query_fails_closed() {
    let mut fixture = TestFixture::new().await;
    fixture.seed_idea("Hidden", None).await;
    fixture.store.set_fail_reads(true);

    fixture.dashboard.refresh().await;

    assert!(matches!(fixture.dashboard.list_state(), ListState::Failed));
    assert!(fixture.dashboard.ideas().is_empty());
    assert!(fixture.dashboard.cards().is_empty());
}

#[tokio::test]
async fn test_cache_serves_reads_until_invalidated() {
    let mut fixture = TestFixture::new().await;
    let idea_id = fixture.seed_idea("Cached", None).await;
    fixture.dashboard.refresh().await;

    // With reads failing, the cached list still serves
    fixture.store.set_fail_reads(true);
    fixture.dashboard.refresh().await;
    assert_eq!(fixture.idea_titles(), vec!["Cached"]);

    // A successful vote invalidates the list; the vote total only changes
    // once the forced re-fetch pulls fresh rows
    fixture.store.set_fail_reads(false);
    fixture
        .dashboard
        .handle_intent(CardIntent::Vote {
            idea_id,
            direction: VoteKind::Up,
        })
        .await;
    assert_eq!(fixture.dashboard.ideas()[0].votes, 1);
}

#[tokio::test]
async fn test_attachments_are_persisted_with_the_idea() {
    let mut fixture = TestFixture::new().await;
    fixture.dashboard.open_new_idea_modal();

    let mut form = filled_form();
    form.attachments.push(FileRef {
        file_name: "quote.pdf".to_string(),
        file_url: "https://files.example.com/quote.pdf".to_string(),
        file_type: "application/pdf".to_string(),
    });
    fixture.dashboard.submit_idea(&mut form).await;

    let ideas = fixture.store.rows("ideas");
    let attachments = fixture.store.rows("attachments");
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0]["idea_id"], ideas[0]["id"]);

    // The re-fetched card exposes the attachment link
    let cards = fixture.dashboard.cards();
    assert_eq!(cards[0].attachments.len(), 1);
    assert_eq!(cards[0].attachments[0].file_name, "quote.pdf");
}

#[tokio::test]
async fn test_attachment_write_failure_is_surfaced() {
    let mut fixture = TestFixture::new().await;
    fixture.dashboard.open_new_idea_modal();
    fixture
        .store
        .fail_next_insert_into("attachments", "storage quota exceeded");

    let mut form = filled_form();
    form.attachments.push(FileRef {
        file_name: "quote.pdf".to_string(),
        file_url: "https://files.example.com/quote.pdf".to_string(),
        file_type: "application/pdf".to_string(),
    });
    fixture.dashboard.submit_idea(&mut form).await;

    // The idea write already landed; the attachment failure is not silent
    assert_eq!(fixture.store.rows("ideas").len(), 1);
    assert!(fixture.store.rows("attachments").is_empty());
    assert_eq!(
        fixture.notifier.errors(),
        vec!["Failed to submit idea. Please try again."]
    );
    assert_eq!(form.title, "Better coffee");
}

#[tokio::test]
async fn test_modal_opens_and_closes_on_explicit_intent_only() {
    let mut fixture = TestFixture::new().await;
    assert!(!fixture.dashboard.is_modal_open());

    fixture.dashboard.open_new_idea_modal();
    assert!(fixture.dashboard.is_modal_open());

    // A refresh does not touch modal state
    fixture.dashboard.refresh().await;
    assert!(fixture.dashboard.is_modal_open());

    fixture.dashboard.close_new_idea_modal();
    assert!(!fixture.dashboard.is_modal_open());
}

#[tokio::test]
async fn test_comment_intent_is_a_logged_noop() {
    let mut fixture = TestFixture::new().await;
    let idea_id = fixture.seed_idea("Quiet", None).await;
    fixture.dashboard.refresh().await;

    fixture
        .dashboard
        .handle_intent(CardIntent::Comment { idea_id })
        .await;

    assert!(fixture.notifier.messages().is_empty());
    assert!(fixture.store.rows("comments").is_empty());
}

#[tokio::test]
async fn test_unknown_status_row_does_not_fail_the_list() {
    let mut fixture = TestFixture::new().await;
    fixture
        .store
        .insert(
            "ideas",
            json!({
                "title": "Future status",
                "description": "seeded",
                "category": "other",
                "status": "archived",
                "user_id": USER_ID
            }),
        )
        .await
        .unwrap();

    fixture.dashboard.refresh().await;

    let ideas = fixture.dashboard.ideas();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].status, IdeaStatus::Unknown);
    assert_eq!(
        fixture.dashboard.cards()[0].badge.css_class(),
        "badge-neutral"
    );
}

#[tokio::test]
async fn test_seeded_rows_decode_through_the_full_query() {
    let mut fixture = TestFixture::new().await;
    let idea_id = fixture.seed_idea("With comment", None).await;
    fixture
        .store
        .insert(
            "comments",
            json!({ "content": "Nice", "user_id": USER_ID, "idea_id": idea_id }),
        )
        .await
        .unwrap();

    fixture.dashboard.refresh().await;

    let idea = &fixture.dashboard.ideas()[0];
    assert_eq!(idea.comments.len(), 1);
    assert_eq!(idea.comments[0].content, "Nice");
    let _: Value = serde_json::to_value(idea).unwrap();
}
