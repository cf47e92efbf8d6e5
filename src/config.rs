use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;
use crate::token::{create_vote_token, Person, VoteToken, DEFAULT_NONCE_LEN};

/// Issuance parameters that stay fixed across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Random bytes per nonce; the hex nonce is twice as long.
    pub nonce_len: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            nonce_len: DEFAULT_NONCE_LEN,
        }
    }
}

impl TokenConfig {
    pub fn new(nonce_len: usize) -> Result<Self, TokenError> {
        if nonce_len == 0 {
            return Err(TokenError::InvalidConfiguration(
                "nonce length must be a positive number of bytes".into(),
            ));
        }
        Ok(Self { nonce_len })
    }

    /// Accepts a signed length, as typed on a command line.
    pub fn from_signed(nonce_len: i64) -> Result<Self, TokenError> {
        let len = usize::try_from(nonce_len).map_err(|_| {
            TokenError::InvalidConfiguration(format!(
                "nonce length must be a positive number of bytes, got {}",
                nonce_len
            ))
        })?;
        Self::new(len)
    }

    pub fn issue<R>(&self, vote: i64, person: &Person, csrng: &mut R) -> Result<VoteToken, TokenError>
    where
        R: RngCore + CryptoRng,
    {
        create_vote_token(vote, person, self.nonce_len, csrng)
    }
}
