/**
 * Poll Models
 *
 * This module defines the poll domain types and their validation rules.
 */

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::error::poll;
use crate::shared::result::DomainResult;

/// A poll with its options and vote bookkeeping
///
/// The `voters` set records who has already voted and is never serialized;
/// responses expose only the per-option tallies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poll {
    /// Unique poll ID (UUID, generated on creation)
    pub id: Uuid,
    /// Poll title (unique across the store, trimmed)
    pub title: String,
    /// The options voters can choose between (at least two)
    pub options: Vec<PollOption>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Voters who have already cast a vote on this poll
    #[serde(skip)]
    pub voters: HashSet<String>,
}

/// A single poll option with its running tally
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollOption {
    /// Unique option ID (UUID, generated on creation)
    pub id: Uuid,
    /// Option label as submitted (trimmed)
    pub label: String,
    /// Number of votes cast for this option
    pub votes: u64,
}

impl PollOption {
    fn new(label: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            votes: 0,
        }
    }
}

/// A poll submission, validated before it becomes a [`Poll`]
#[derive(Debug, Clone)]
pub struct NewPoll {
    /// Requested poll title
    pub title: String,
    /// Requested option labels
    pub options: Vec<String>,
}

impl NewPoll {
    /// Validate the submission against the poll rules.
    ///
    /// # Errors
    ///
    /// - `Poll.EmptyTitle` - the trimmed title is empty
    /// - `Poll.TooFewOptions` - fewer than two options were submitted
    /// - `Poll.DuplicatedOption` - two trimmed labels are equal
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(poll::EMPTY_TITLE);
        }

        if self.options.len() < 2 {
            return Err(poll::TOO_FEW_OPTIONS);
        }

        let mut seen = HashSet::new();
        for label in &self.options {
            if !seen.insert(label.trim()) {
                return Err(poll::DUPLICATED_OPTION);
            }
        }

        Ok(())
    }

    /// Consume the validated submission and build a poll with a generated
    /// identifier and zeroed tallies. Title and labels are trimmed.
    pub fn into_poll(self) -> Poll {
        Poll {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            options: self
                .options
                .into_iter()
                .map(|label| PollOption::new(label.trim().to_string()))
                .collect(),
            created_at: Utc::now(),
            voters: HashSet::new(),
        }
    }
}
