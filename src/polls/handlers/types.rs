/**
 * Poll Handler Types
 *
 * This module defines the request and response types used by the poll
 * handlers. These types are shared across the create, get, delete, and
 * vote handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::poll::{Poll, PollOption};

/// Create-poll request
///
/// Contains the title and option labels for a new poll.
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePollRequest {
    /// Poll title (must be unique across the service)
    pub title: String,
    /// Option labels (at least two, pairwise distinct)
    pub options: Vec<String>,
}

/// Cast-vote request
///
/// Identifies the option being voted for and the voter casting the vote.
#[derive(Deserialize, Serialize, Debug)]
pub struct CastVoteRequest {
    /// ID of the option to vote for
    pub option_id: Uuid,
    /// Voter identity (one vote per voter per poll)
    pub voter: String,
}

/// Poll response
///
/// The client-facing view of a poll: identifiers, labels, and tallies.
/// Voter identities are never exposed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PollResponse {
    /// Poll ID (UUID)
    pub id: String,
    /// Poll title
    pub title: String,
    /// Options with their running tallies
    pub options: Vec<PollOptionResponse>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Sum of all option tallies
    pub total_votes: u64,
}

/// A single option in a poll response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PollOptionResponse {
    /// Option ID (UUID)
    pub id: String,
    /// Option label
    pub label: String,
    /// Votes cast for this option
    pub votes: u64,
}

/// Poll list response
#[derive(Serialize, Deserialize, Debug)]
pub struct PollListResponse {
    /// All polls, oldest first
    pub polls: Vec<PollResponse>,
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        let total_votes = poll.options.iter().map(|o| o.votes).sum();
        Self {
            id: poll.id.to_string(),
            title: poll.title,
            options: poll.options.into_iter().map(PollOptionResponse::from).collect(),
            created_at: poll.created_at,
            total_votes,
        }
    }
}

impl From<PollOption> for PollOptionResponse {
    fn from(option: PollOption) -> Self {
        Self {
            id: option.id.to_string(),
            label: option.label,
            votes: option.votes,
        }
    }
}
