//! Built-in demonstration scenario.
//!
//! Three voters declare a vote and receive several tokens each; then every
//! voter receives a couple of tokens for a vote drawn at random.

use rand::Rng;
use rand_core::{CryptoRng, RngCore};

use crate::config::TokenConfig;
use crate::errors::TokenError;
use crate::record::{Source, TokenLog, TokenRecord};
use crate::token::{Person, MAX_VOTE};

pub const TOKENS_PER_DECLARED_VOTE: usize = 3;
pub const TOKENS_PER_RANDOM_TEST: usize = 2;

/// The demo voters, each with their declared vote.
pub fn declared_votes() -> Vec<(Person, u8)> {
    vec![
        (Person::new("846392134567", "Alice Durand"), 1),
        (Person::new("932145678903", "Bilal Moreau"), 2),
        (Person::new("785430129876", "Chloe Martin"), 0),
    ]
}

pub fn run<R>(config: &TokenConfig, csrng: &mut R) -> Result<TokenLog, TokenError>
where
    R: RngCore + CryptoRng,
{
    let voters = declared_votes();
    let mut log = TokenLog::default();

    for (person, vote) in &voters {
        for _ in 0..TOKENS_PER_DECLARED_VOTE {
            let issued = config.issue(i64::from(*vote), person, csrng)?;
            log.push(TokenRecord::new(person, *vote, issued).with_source(Source::DeclaredVote));
        }
    }

    for (person, _) in &voters {
        for _ in 0..TOKENS_PER_RANDOM_TEST {
            let vote: u8 = csrng.gen_range(0, MAX_VOTE as u8 + 1);
            let issued = config.issue(i64::from(vote), person, csrng)?;
            log.push(TokenRecord::new(person, vote, issued).with_source(Source::RandomTest));
        }
    }

    Ok(log)
}
