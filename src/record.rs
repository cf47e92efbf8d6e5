//! Serializable records handed to callers that store or print issued tokens.

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::config::TokenConfig;
use crate::errors::TokenError;
use crate::token::{validate_identifier, validate_vote, Person, VoteToken};

/// Why a record was produced by the demonstration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    DeclaredVote,
    RandomTest,
}

/// One issued token with the voter it was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub person_id: String,
    pub person_name: String,
    pub vote: u8,
    pub token: String,
    pub payload_hash: String,
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl TokenRecord {
    /// `vote` must be the value the token was issued with.
    pub fn new(person: &Person, vote: u8, issued: VoteToken) -> Self {
        Self {
            person_id: person.identifier.clone(),
            person_name: person.name.clone(),
            vote,
            token: issued.token,
            payload_hash: issued.payload_hash,
            nonce: issued.nonce,
            source: None,
        }
    }

    /// Issues a token and records it in one step.
    ///
    /// `nonce_len` is taken as typed by a user and checked last, after the
    /// vote and the identifier.
    pub fn issue<R>(
        vote: i64,
        person: &Person,
        nonce_len: i64,
        csrng: &mut R,
    ) -> Result<Self, TokenError>
    where
        R: RngCore + CryptoRng,
    {
        let checked_vote = validate_vote(vote)?;
        validate_identifier(&person.identifier)?;
        let issued = TokenConfig::from_signed(nonce_len)?.issue(vote, person, csrng)?;
        Ok(Self::new(person, checked_vote, issued))
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }
}

/// Layout of the demonstration output file: `{"tokens": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLog {
    pub tokens: Vec<TokenRecord>,
}

impl TokenLog {
    pub fn push(&mut self, record: TokenRecord) {
        self.tokens.push(record);
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
