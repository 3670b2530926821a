//! Optimistic like/unlike with rollback.
//!
//! Each tracked entity is either `Idle` or `Pending`. A toggle flips the local
//! state before the confirmation request is sent; a failed confirmation
//! restores the exact pre-toggle state. While an entity is `Pending`, further
//! toggles for it are ignored rather than queued. Entities are independent of
//! each other.

use super::dto::{ToggleOutcome, TogglePhase};
use crate::domain::auth::credentials::CredentialStore;
use crate::domain::shared::errors::DomainError;
use crate::domain::shared::notice::{Action, Notice, NoticeSink};
use crate::domain::social::like::{LikeState, LikeTarget, Likeable};
use crate::domain::social::repository::LikeApi;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Entry {
    state: LikeState,
    phase: TogglePhase,
    /// Fresh for every insert; an in-flight toggle only settles the entry it
    /// started on.
    generation: u64,
}

pub struct LikeToggleController {
    api: Arc<dyn LikeApi>,
    credentials: Arc<dyn CredentialStore>,
    notices: Arc<dyn NoticeSink>,
    confirm_timeout: Option<Duration>,
    entries: Mutex<HashMap<LikeTarget, Entry>>,
    generations: AtomicU64,
}

impl LikeToggleController {
    pub fn new(
        api: Arc<dyn LikeApi>,
        credentials: Arc<dyn CredentialStore>,
        notices: Arc<dyn NoticeSink>,
    ) -> Self {
        Self {
            api,
            credentials,
            notices,
            confirm_timeout: None,
            entries: Mutex::new(HashMap::new()),
            generations: AtomicU64::new(0),
        }
    }

    /// Bounds how long a confirmation may take. Expiry is treated as a failed
    /// request and rolls the entity back.
    pub fn with_confirm_timeout(mut self, timeout: Duration) -> Self {
        self.confirm_timeout = Some(timeout);
        self
    }

    /// Seeds or refreshes the local copy from an authoritative snapshot.
    ///
    /// Returns `false` and leaves the entry untouched while a toggle for it is
    /// in flight, so a late snapshot cannot break the rollback.
    pub fn seed(&self, target: LikeTarget, state: LikeState) -> bool {
        let mut entries = self.entries();
        match entries.get_mut(&target) {
            Some(entry) if entry.phase == TogglePhase::Pending => false,
            Some(entry) => {
                entry.state = state;
                true
            }
            None => {
                entries.insert(
                    target,
                    Entry {
                        state,
                        phase: TogglePhase::Idle,
                        generation: self.generations.fetch_add(1, Ordering::Relaxed),
                    },
                );
                true
            }
        }
    }

    pub fn seed_all<'a, L>(&self, items: impl IntoIterator<Item = &'a L>)
    where
        L: Likeable + 'a,
    {
        for item in items {
            self.seed(item.like_target(), item.like_state());
        }
    }

    /// Drops the entry. A toggle still in flight for it settles nothing, even
    /// if the target is seeded again before the confirmation arrives.
    pub fn forget(&self, target: LikeTarget) -> Option<LikeState> {
        self.entries().remove(&target).map(|entry| entry.state)
    }

    pub fn state(&self, target: LikeTarget) -> Option<LikeState> {
        self.entries().get(&target).map(|entry| entry.state)
    }

    pub fn phase(&self, target: LikeTarget) -> Option<TogglePhase> {
        self.entries().get(&target).map(|entry| entry.phase)
    }

    pub fn is_pending(&self, target: LikeTarget) -> bool {
        self.phase(target) == Some(TogglePhase::Pending)
    }

    /// Toggles the like state of `target`.
    ///
    /// The optimistic state is applied before the first await point. Failures
    /// are reported through the notice sink and never returned as errors.
    pub async fn toggle(&self, target: LikeTarget) -> ToggleOutcome {
        let Some(token) = self.credentials.access_token() else {
            tracing::info!(entity = %target, "like toggle attempted without credential");
            self.notices.notify(Notice::LoginRequired(Action::Like));
            return ToggleOutcome::Unauthenticated;
        };

        let mut in_flight = match self.begin(target) {
            Ok(in_flight) => in_flight,
            Err(outcome) => return outcome,
        };

        match self.confirm(target, &token).await {
            Ok(()) => {
                in_flight.commit();
                tracing::debug!(
                    entity = %target,
                    state = ?in_flight.optimistic,
                    "like confirmed"
                );
                ToggleOutcome::Confirmed(in_flight.optimistic)
            }
            Err(error) => {
                let restored = in_flight.roll_back();
                tracing::warn!(
                    entity = %target,
                    error = %error,
                    "like confirmation failed, rolled back"
                );
                self.notices.notify(Notice::LikeFailed);
                ToggleOutcome::RolledBack { restored, error }
            }
        }
    }

    fn begin(&self, target: LikeTarget) -> Result<InFlight<'_>, ToggleOutcome> {
        let mut entries = self.entries();
        let Some(entry) = entries.get_mut(&target) else {
            tracing::warn!(entity = %target, "like toggle for an entity that was never seeded");
            return Err(ToggleOutcome::Untracked);
        };
        if entry.phase == TogglePhase::Pending {
            tracing::debug!(entity = %target, "like toggle ignored, confirmation in flight");
            return Err(ToggleOutcome::Ignored);
        }

        let previous = entry.state;
        let optimistic = previous.toggled();
        entry.state = optimistic;
        entry.phase = TogglePhase::Pending;

        Ok(InFlight {
            controller: self,
            target,
            generation: entry.generation,
            previous,
            optimistic,
            settled: false,
        })
    }

    async fn confirm(&self, target: LikeTarget, token: &str) -> Result<(), DomainError> {
        let request = self.api.toggle_like(target, token);
        let result = match self.confirm_timeout {
            Some(limit) => match tokio::time::timeout(limit, request).await {
                Ok(result) => result,
                Err(_) => Err(DomainError::RequestFailed(format!(
                    "no confirmation within {:?}",
                    limit
                ))),
            },
            None => request.await,
        };

        result.map_err(|error| match error {
            DomainError::RequestFailed(_) => error,
            other => DomainError::RequestFailed(other.to_string()),
        })
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<LikeTarget, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// An optimistic update awaiting its confirmation. Dropping it unsettled
/// (the toggle future was cancelled) rolls the entity back.
struct InFlight<'a> {
    controller: &'a LikeToggleController,
    target: LikeTarget,
    generation: u64,
    previous: LikeState,
    optimistic: LikeState,
    settled: bool,
}

impl InFlight<'_> {
    fn commit(&mut self) {
        self.settle(None);
    }

    fn roll_back(&mut self) -> LikeState {
        let previous = self.previous;
        self.settle(Some(previous));
        previous
    }

    fn settle(&mut self, restore: Option<LikeState>) {
        self.settled = true;
        let mut entries = self.controller.entries();
        match entries.get_mut(&self.target) {
            Some(entry) if entry.generation == self.generation => {
                entry.phase = TogglePhase::Idle;
                if let Some(state) = restore {
                    entry.state = state;
                }
            }
            // Forgotten, or forgotten and seeded again, while in flight.
            _ => tracing::debug!(entity = %self.target, "like settled for a replaced entry"),
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!(entity = %self.target, "like toggle cancelled, rolling back");
            self.roll_back();
        }
    }
}
