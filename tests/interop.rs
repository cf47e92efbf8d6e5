use std::fs;

use rand_chacha::ChaChaRng;
use rand_core::SeedableRng;
use vote_tokens::{
    create_vote_token, demo, format_token, payload_hash, Person, TokenConfig, TokenError,
    TokenLog, VoteToken,
};

#[test]
fn third_party_recomputation() {
    let mut csrng = rand::thread_rng();
    let person = Person::new("932145678903", "Bilal Moreau");
    let issued = create_vote_token(2, &person, 6, &mut csrng).unwrap();

    // A verifier only learns the identifier and the nonce.
    let recomputed = payload_hash("932145678903", &issued.nonce);
    assert_eq!(recomputed, issued.payload_hash);
    assert_eq!(format_token(2, &recomputed), issued.token);
}

#[test]
fn fixed_nonce_vector() {
    let person = Person::new("932145678903", "");
    let token = VoteToken::from_nonce(99, &person, "000000000000").unwrap();
    assert_eq!(
        token.payload_hash,
        "9e45b8b0b7a40a32310e7ce2e30934993028276f162e21fffcf0a6f71cd91dd7"
    );
    assert_eq!(&token.token[..2], "99");
    assert_eq!(token.token.len(), 66);
}

#[test]
fn from_nonce_validates_inputs() {
    let person = Person::new("12a3", "");
    assert_eq!(
        VoteToken::from_nonce(1, &person, "00"),
        Err(TokenError::InvalidIdentifier("12a3".into()))
    );
    assert_eq!(
        VoteToken::from_nonce(-1, &Person::new("1", ""), "00"),
        Err(TokenError::InvalidVote(-1))
    );
}

#[test]
fn demo_log_survives_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.json");

    let mut csrng = ChaChaRng::seed_from_u64(1);
    let log = demo::run(&TokenConfig::default(), &mut csrng).unwrap();
    fs::write(&path, log.to_json_pretty().unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["tokens"].as_array().unwrap().len(), log.tokens.len());
    let parsed: TokenLog = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, log);
}

#[test]
fn concurrent_issuance() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut csrng = rand::rngs::OsRng;
                let person = Person::new("785430129876", "Chloe Martin");
                create_vote_token(i, &person, 6, &mut csrng).unwrap()
            })
        })
        .collect();
    let tokens: Vec<VoteToken> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(&token.token[..2], format!("{:02}", i));
    }
}
