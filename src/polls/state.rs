/**
 * Poll Store
 *
 * This module implements the in-memory poll store. It is the single owner
 * of the domain's uniqueness constraints:
 *
 * - poll titles are unique across the store (the stand-in for a database
 *   unique index)
 * - each voter casts at most one vote per poll
 *
 * Violations surface as registry errors through `DomainResult`; the store
 * never panics on expected failures.
 *
 * # Thread Safety
 *
 * The store itself is a plain struct. `AppState` shares it across request
 * handlers behind `Arc<RwLock<_>>`; see `server::state`.
 */

use std::collections::HashMap;

use uuid::Uuid;

use crate::shared::error::{poll, vote};
use crate::shared::poll::{NewPoll, Poll};
use crate::shared::result::DomainResult;

/// In-memory poll storage with uniqueness enforcement
#[derive(Debug, Default)]
pub struct PollStore {
    polls: HashMap<Uuid, Poll>,
}

impl PollStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a new poll.
    ///
    /// # Errors
    ///
    /// Validation failures from [`NewPoll::validate`], or
    /// `Poll.DuplicatedTitle` when a poll with the same trimmed title
    /// already exists.
    pub fn create(&mut self, new_poll: NewPoll) -> DomainResult<Poll> {
        new_poll.validate()?;

        let title = new_poll.title.trim();
        if self.polls.values().any(|p| p.title == title) {
            return Err(poll::DUPLICATED_TITLE);
        }

        let created = new_poll.into_poll();
        self.polls.insert(created.id, created.clone());
        Ok(created)
    }

    /// Fetch a poll by ID.
    ///
    /// # Errors
    ///
    /// `Poll.NotFound` when no poll has the identifier.
    pub fn get(&self, id: Uuid) -> DomainResult<Poll> {
        self.polls.get(&id).cloned().ok_or(poll::NOT_FOUND)
    }

    /// All polls, oldest first.
    pub fn list(&self) -> Vec<Poll> {
        let mut polls: Vec<Poll> = self.polls.values().cloned().collect();
        polls.sort_by_key(|p| p.created_at);
        polls
    }

    /// Remove a poll by ID.
    ///
    /// # Errors
    ///
    /// `Poll.NotFound` when no poll has the identifier.
    pub fn remove(&mut self, id: Uuid) -> DomainResult<()> {
        self.polls.remove(&id).ok_or(poll::NOT_FOUND)?;
        Ok(())
    }

    /// Cast a vote on a poll option and return the updated poll.
    ///
    /// # Errors
    ///
    /// - `Poll.NotFound` - no poll has the identifier
    /// - `Vote.OptionNotFound` - the option does not belong to the poll
    /// - `Vote.AlreadyCast` - the voter already voted on this poll
    pub fn cast_vote(&mut self, poll_id: Uuid, option_id: Uuid, voter: &str) -> DomainResult<Poll> {
        let stored = self.polls.get_mut(&poll_id).ok_or(poll::NOT_FOUND)?;

        let option = stored
            .options
            .iter_mut()
            .find(|o| o.id == option_id)
            .ok_or(vote::OPTION_NOT_FOUND)?;

        if stored.voters.contains(voter) {
            return Err(vote::ALREADY_CAST);
        }

        option.votes += 1;
        stored.voters.insert(voter.to_string());
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn submission(title: &str) -> NewPoll {
        NewPoll {
            title: title.to_string(),
            options: vec!["Yes".to_string(), "No".to_string()],
        }
    }

    #[test]
    fn test_create_returns_poll_with_generated_id() {
        let mut store = PollStore::new();
        let created = store.create(submission("Team lunch")).expect("create failed");

        assert_eq!(created.title, "Team lunch");
        assert_eq!(store.get(created.id).expect("get failed").id, created.id);
    }

    #[test]
    fn test_duplicate_title_is_a_conflict() {
        let mut store = PollStore::new();
        store.create(submission("Team lunch")).expect("create failed");

        let second = store.create(submission("Team lunch"));
        assert_eq!(second, Err(poll::DUPLICATED_TITLE));
    }

    #[test]
    fn test_duplicate_title_detection_trims_whitespace() {
        let mut store = PollStore::new();
        store.create(submission("Team lunch")).expect("create failed");

        let second = store.create(submission("  Team lunch  "));
        assert_eq!(second, Err(poll::DUPLICATED_TITLE));
    }

    #[test]
    fn test_invalid_submission_is_rejected_before_insertion() {
        let mut store = PollStore::new();
        let result = store.create(NewPoll {
            title: "Solo".to_string(),
            options: vec!["Only".to_string()],
        });

        assert_eq!(result, Err(poll::TOO_FEW_OPTIONS));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = PollStore::new();
        assert_eq!(store.get(Uuid::new_v4()), Err(poll::NOT_FOUND));
    }

    #[test]
    fn test_list_returns_oldest_first() {
        let mut store = PollStore::new();
        let first = store.create(submission("First")).expect("create failed");
        let second = store.create(submission("Second")).expect("create failed");

        let ids: Vec<Uuid> = store.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_remove_then_get_is_not_found() {
        let mut store = PollStore::new();
        let created = store.create(submission("Ephemeral")).expect("create failed");

        assert_eq!(store.remove(created.id), Ok(()));
        assert_eq!(store.get(created.id), Err(poll::NOT_FOUND));
        assert_eq!(store.remove(created.id), Err(poll::NOT_FOUND));
    }

    #[test]
    fn test_cast_vote_increments_tally() {
        let mut store = PollStore::new();
        let created = store.create(submission("Team lunch")).expect("create failed");
        let option_id = created.options[0].id;

        let updated = store
            .cast_vote(created.id, option_id, "alice")
            .expect("vote failed");

        assert_eq!(updated.options[0].votes, 1);
        assert_eq!(updated.options[1].votes, 0);
    }

    #[test]
    fn test_second_vote_by_same_voter_is_a_conflict() {
        let mut store = PollStore::new();
        let created = store.create(submission("Team lunch")).expect("create failed");
        let option_id = created.options[1].id;

        store
            .cast_vote(created.id, option_id, "alice")
            .expect("vote failed");
        let second = store.cast_vote(created.id, option_id, "alice");

        assert_eq!(second, Err(vote::ALREADY_CAST));
        assert_eq!(
            store.get(created.id).expect("get failed").options[1].votes,
            1
        );
    }

    #[test]
    fn test_distinct_voters_both_count() {
        let mut store = PollStore::new();
        let created = store.create(submission("Team lunch")).expect("create failed");
        let option_id = created.options[0].id;

        store
            .cast_vote(created.id, option_id, "alice")
            .expect("vote failed");
        let updated = store
            .cast_vote(created.id, option_id, "bob")
            .expect("vote failed");

        assert_eq!(updated.options[0].votes, 2);
    }

    #[test]
    fn test_vote_on_unknown_poll_or_option() {
        let mut store = PollStore::new();
        let created = store.create(submission("Team lunch")).expect("create failed");

        assert_matches!(
            store.cast_vote(Uuid::new_v4(), created.options[0].id, "alice"),
            Err(e) if e == poll::NOT_FOUND
        );
        assert_matches!(
            store.cast_vote(created.id, Uuid::new_v4(), "alice"),
            Err(e) if e == vote::OPTION_NOT_FOUND
        );
    }
}
