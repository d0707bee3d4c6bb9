//! Dashboard orchestrator.
//!
//! Owns the modal-open flag and the list state, and wires card intents and
//! form submissions to the query/command layer. All server interaction goes
//! through the store handle; the views stay free of effects.

use std::sync::Arc;

use crate::cache::QueryCache;
use crate::commands::{cast_vote, create_idea};
use crate::form::{FormState, NewIdeaForm};
use crate::models::Idea;
use crate::notify::Notifier;
use crate::queries::fetch_ideas;
use crate::store::RemoteStore;
use crate::views::{CardIntent, IdeaCard};

/// State of the idea list subscription.
#[derive(Debug, Default)]
pub enum ListState {
    /// Query in flight; render a loading indicator
    #[default]
    Loading,
    /// Query succeeded; render the cards
    Ready(Vec<Idea>),
    /// Query failed; render a generic error state, never a partial list
    Failed,
}

/// Composition root for the ideas dashboard.
pub struct Dashboard {
    store: Arc<dyn RemoteStore>,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notifier>,
    /// Identity of the signed-in employee, owned by the auth subsystem
    user_id: String,
    modal_open: bool,
    list: ListState,
}

impl Dashboard {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        cache: Arc<QueryCache>,
        notifier: Arc<dyn Notifier>,
        user_id: &str,
    ) -> Self {
        Self {
            store,
            cache,
            notifier,
            user_id: user_id.to_string(),
            modal_open: false,
            list: ListState::Loading,
        }
    }

    /// Run the idea list query and settle the list state.
    pub async fn refresh(&mut self) {
        self.list = ListState::Loading;
        match fetch_ideas(self.store.as_ref(), &self.cache).await {
            Ok(ideas) => self.list = ListState::Ready(ideas),
            Err(e) => {
                tracing::error!("Error loading ideas: {}", e);
                self.list = ListState::Failed;
            }
        }
    }

    pub fn list_state(&self) -> &ListState {
        &self.list
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.list, ListState::Loading)
    }

    /// The currently loaded ideas, empty while loading or failed.
    pub fn ideas(&self) -> &[Idea] {
        match &self.list {
            ListState::Ready(ideas) => ideas,
            _ => &[],
        }
    }

    /// View-models for the currently loaded ideas, newest first.
    pub fn cards(&self) -> Vec<IdeaCard> {
        self.ideas().iter().map(IdeaCard::from_idea).collect()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Open the submission modal. Explicit user intent only.
    pub fn open_new_idea_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_new_idea_modal(&mut self) {
        self.modal_open = false;
    }

    /// Submit the new-idea form.
    ///
    /// Validation failures stay on the form as field errors and no remote
    /// write is attempted. On command success the modal closes, the form
    /// resets, a success notification fires, and the list re-fetches. On
    /// command failure the entered values are retained and an error
    /// notification fires.
    pub async fn submit_idea(&mut self, form: &mut NewIdeaForm) {
        let payload = match form.validate(&self.user_id) {
            Ok(payload) => payload,
            Err(_) => return,
        };
        let files = form.attachments.clone();

        form.state = FormState::Submitting;
        let result = create_idea(self.store.as_ref(), &self.cache, payload, files).await;
        form.state = FormState::Editing;

        match result {
            Ok(_) => {
                self.close_new_idea_modal();
                self.notifier.success("Idea submitted successfully!");
                form.reset();
                self.refresh().await;
            }
            Err(_) => {
                // Entered values stay in the form for the user to retry
                self.notifier.error("Failed to submit idea. Please try again.");
            }
        }
    }

    /// Handle an intent emitted by an idea card.
    pub async fn handle_intent(&mut self, intent: CardIntent) {
        match intent {
            CardIntent::Vote { idea_id, direction } => {
                match cast_vote(
                    self.store.as_ref(),
                    &self.cache,
                    &idea_id,
                    &self.user_id,
                    direction,
                )
                .await
                {
                    Ok(()) => self.refresh().await,
                    Err(_) => {
                        // No rollback needed: nothing was applied optimistically
                        self.notifier.error("Failed to vote. Please try again.");
                    }
                }
            }
            CardIntent::Comment { idea_id } => {
                // Comment composition lives outside this workflow
                tracing::info!(idea_id = %idea_id, "Comment intent received");
            }
        }
    }
}
