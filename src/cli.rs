//! Command-line arguments and mode selection for the `vote-tokens` binary.

use std::path::PathBuf;

use clap::Parser;
use rand_core::{CryptoRng, RngCore};

use crate::config::TokenConfig;
use crate::demo;
use crate::errors::TokenError;
use crate::record::{TokenLog, TokenRecord};
use crate::token::{Person, DEFAULT_NONCE_LEN};

/// Vote token generator
#[derive(Debug, Parser)]
#[command(name = "vote-tokens", version)]
pub struct Args {
    /// Person identifier (digits only)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Optional full name of the person
    #[arg(long)]
    pub name: Option<String>,

    /// Vote value between 0 and 99
    #[arg(long, allow_negative_numbers = true)]
    pub vote: Option<i64>,

    /// Number of random bytes used for the nonce
    #[arg(long, default_value_t = DEFAULT_NONCE_LEN as i64, allow_negative_numbers = true)]
    pub random_bytes: i64,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Run the built-in demonstration scenario
    #[arg(long)]
    pub demo: bool,

    /// Where the demonstration writes its tokens
    #[arg(long, default_value = "tokens.json")]
    pub output: PathBuf,
}

/// What a run produced, left to the binary to print or store.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Single(TokenRecord),
    Demo(TokenLog),
}

/// Issues one token, or runs the demo when asked to or when the identifier
/// or the vote is missing.
pub fn dispatch<R>(args: &Args, csrng: &mut R) -> Result<Outcome, TokenError>
where
    R: RngCore + CryptoRng,
{
    match (&args.identifier, args.vote) {
        (Some(identifier), Some(vote)) if !args.demo => {
            let person = Person::new(identifier.as_str(), args.name.clone().unwrap_or_default());
            TokenRecord::issue(vote, &person, args.random_bytes, csrng).map(Outcome::Single)
        }
        _ => {
            let config = TokenConfig::from_signed(args.random_bytes)?;
            demo::run(&config, csrng).map(Outcome::Demo)
        }
    }
}
