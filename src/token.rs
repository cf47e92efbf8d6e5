use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

type Blake2b256 = Blake2b<U32>;

/// Number of random bytes drawn for a nonce when the caller does not say otherwise.
pub const DEFAULT_NONCE_LEN: usize = 6;

/// Literal placed between the identifier and the nonce in the hashed payload.
///
/// Part of the wire format: changing it breaks recomputation by third parties.
pub const PAYLOAD_SEPARATOR: char = '-';

pub const MAX_VOTE: i64 = 99;

/// A voter. Only the identifier takes part in hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub identifier: String,
    pub name: String,
}

impl Person {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

/// The output of a single issuance.
///
/// `token` is the two-digit vote followed by `payload_hash`; `nonce` is the
/// hex string that was hashed together with the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteToken {
    pub token: String,
    pub payload_hash: String,
    pub nonce: String,
}

impl VoteToken {
    /// Rebuilds the token for an already known nonce.
    ///
    /// This is the deterministic half of [`create_vote_token`]: anyone holding
    /// the identifier and the nonce obtains the same `payload_hash`.
    pub fn from_nonce(vote: i64, person: &Person, nonce: &str) -> Result<Self, TokenError> {
        let vote = validate_vote(vote)?;
        validate_identifier(&person.identifier)?;
        validate_nonce(nonce)?;
        Ok(Self::assemble(vote, &person.identifier, nonce.to_owned()))
    }

    fn assemble(vote: u8, identifier: &str, nonce: String) -> Self {
        let payload_hash = payload_hash(identifier, &nonce);
        let token = format_token(vote, &payload_hash);
        Self {
            token,
            payload_hash,
            nonce,
        }
    }

    /// The two-digit prefix of the token, if the token is long enough to have one.
    pub fn vote_prefix(&self) -> Option<&str> {
        self.token.get(..2)
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(&self)
    }

    pub fn from_bytes(s: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(s)
    }
}

/// Issues a fresh vote token for `person`.
///
/// Inputs are checked in order (vote, identifier, nonce length) and the first
/// violation is returned before `csrng` is touched. On success `nonce_len`
/// bytes are drawn from `csrng`.
pub fn create_vote_token<R>(
    vote: i64,
    person: &Person,
    nonce_len: usize,
    csrng: &mut R,
) -> Result<VoteToken, TokenError>
where
    R: RngCore + CryptoRng,
{
    let vote = validate_vote(vote)?;
    validate_identifier(&person.identifier)?;
    if nonce_len == 0 {
        return Err(TokenError::InvalidConfiguration(
            "nonce length must be a positive number of bytes".into(),
        ));
    }

    let mut nonce = vec![0u8; nonce_len];
    csrng.fill_bytes(&mut nonce);
    Ok(VoteToken::assemble(
        vote,
        &person.identifier,
        hex::encode(nonce),
    ))
}

/// Lowercase hex BLAKE2b-256 of `"{identifier}-{nonce}"`.
pub fn payload_hash(identifier: &str, nonce: &str) -> String {
    let payload = format!("{}{}{}", identifier, PAYLOAD_SEPARATOR, nonce);
    hex::encode(Blake2b256::digest(payload.as_bytes()))
}

/// Prefixes `payload_hash` with the vote, zero-padded to two digits.
pub fn format_token(vote: u8, payload_hash: &str) -> String {
    format!("{:02}{}", vote, payload_hash)
}

pub(crate) fn validate_vote(vote: i64) -> Result<u8, TokenError> {
    if (0..=MAX_VOTE).contains(&vote) {
        Ok(vote as u8)
    } else {
        Err(TokenError::InvalidVote(vote))
    }
}

// ASCII only: `char::is_numeric` would accept other numeral systems.
pub(crate) fn validate_identifier(identifier: &str) -> Result<(), TokenError> {
    if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(TokenError::InvalidIdentifier(identifier.to_owned()))
    }
}

// A replayed nonce must look like one `create_vote_token` would have drawn.
fn validate_nonce(nonce: &str) -> Result<(), TokenError> {
    let lower_hex = nonce
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !nonce.is_empty() && nonce.len() % 2 == 0 && lower_hex {
        Ok(())
    } else {
        Err(TokenError::InvalidConfiguration(format!(
            "nonce must be a non-empty lowercase hex string, got {:?}",
            nonce
        )))
    }
}
