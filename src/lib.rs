//! Pseudonymous vote tokens.
//!
//! A vote token is the two-digit vote value followed by the BLAKE2b-256 hash
//! of the voter identifier and a random nonce. Whoever holds both the
//! identifier and the nonce can recompute the hash and check the token; the
//! token alone does not reveal the identifier.
//!
//! ```
//! use vote_tokens::{create_vote_token, payload_hash, Person, DEFAULT_NONCE_LEN};
//!
//! let mut csrng = rand::rngs::OsRng;
//! let person = Person::new("846392134567", "Alice Durand");
//! let issued = create_vote_token(1, &person, DEFAULT_NONCE_LEN, &mut csrng).unwrap();
//!
//! assert!(issued.token.starts_with("01"));
//! assert_eq!(issued.payload_hash, payload_hash(&person.identifier, &issued.nonce));
//! ```

mod errors;
pub use errors::TokenError;

pub mod cli;
pub mod config;
pub mod demo;
pub mod record;
pub mod token;

pub use config::TokenConfig;
pub use record::{Source, TokenLog, TokenRecord};
pub use token::{
    create_vote_token, format_token, payload_hash, Person, VoteToken, DEFAULT_NONCE_LEN,
    PAYLOAD_SEPARATOR,
};
