//! Benchmarks for token codec hot paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use warden_core::{AuthConfig, TokenCodec};
use warden_types::Role;

fn bench_token_codec(c: &mut Criterion) {
    let config = AuthConfig::try_new("b".repeat(64)).unwrap();
    let codec = TokenCodec::new(&config);

    c.bench_function("token_issue", |b| {
        b.iter(|| codec.issue(black_box("user"), vec![Role::User]).unwrap());
    });

    let token = codec.issue("user", vec![Role::User, Role::Admin]).unwrap();
    c.bench_function("token_decode", |b| {
        b.iter(|| codec.decode(black_box(&token)).unwrap());
    });
}

criterion_group!(benches, bench_token_codec);
criterion_main!(benches);
