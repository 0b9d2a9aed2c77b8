use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use strsearch::string::{naive, RabinKarp};

fn bench_substring_search(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    // Four-letter alphabet: long stretches of near-misses for both searchers.
    let text: Vec<u8> = (0..1 << 16).map(|_| rng.gen_range(b'a'..=b'd')).collect();
    let pattern: Vec<u8> = text[32_768..32_784].to_vec();
    let searcher = RabinKarp::with_modulus(1_000_000_007).unwrap();

    let mut group = c.benchmark_group("substring_search");
    group.bench_function("rabin_karp", |b| {
        b.iter(|| searcher.find_all(black_box(&text), black_box(&pattern)))
    });
    group.bench_function("naive", |b| {
        b.iter(|| naive::find_all(black_box(&text), black_box(&pattern)))
    });
    group.finish();
}

criterion_group!(benches, bench_substring_search);
criterion_main!(benches);
