#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::thread_rng;
use vote_tokens::{create_vote_token, payload_hash, Person, VoteToken, DEFAULT_NONCE_LEN};

fn bench_issue(c: &mut Criterion) {
    c.bench_function("Token.Issue", move |b| {
        let mut csrng = thread_rng();
        let person = Person::new("846392134567", "Alice Durand");

        b.iter(|| {
            create_vote_token(1, &person, DEFAULT_NONCE_LEN, &mut csrng).unwrap();
        });
    });
}

fn bench_issue_os(c: &mut Criterion) {
    c.bench_function("Token.Issue (OsRng)", move |b| {
        let mut csrng = rand::rngs::OsRng;
        let person = Person::new("846392134567", "Alice Durand");

        b.iter(|| {
            create_vote_token(1, &person, DEFAULT_NONCE_LEN, &mut csrng).unwrap();
        });
    });
}

fn bench_recompute(c: &mut Criterion) {
    c.bench_function("Token.Recompute", move |b| {
        let mut csrng = thread_rng();
        let person = Person::new("846392134567", "Alice Durand");
        let issued = create_vote_token(1, &person, DEFAULT_NONCE_LEN, &mut csrng).unwrap();

        b.iter(|| {
            let _hash = payload_hash(&person.identifier, &issued.nonce);
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("Token.FromBytes", move |b| {
        let person = Person::new("846392134567", "Alice Durand");
        let bytes = VoteToken::from_nonce(1, &person, "aabbccddeeff")
            .unwrap()
            .to_bytes()
            .unwrap();

        b.iter(|| {
            let _token = VoteToken::from_bytes(&bytes);
        });
    });
}

criterion_group! {
    name = token_benchmarks;
    config = Criterion::default();
    targets = bench_issue, bench_issue_os, bench_recompute, bench_decode,
}
criterion_main!(token_benchmarks);
