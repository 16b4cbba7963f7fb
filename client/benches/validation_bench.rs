// Identifier validation benchmarks for the VELA client.
//
// Covers single-hash checks, batch validation at various sizes, the
// full-scan worst case where the offending character sits last, and
// checksum stripping. Validation runs on every hash-taking call, so it
// has to stay cheap next to a network round trip.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use vela_client::trytes::{is_array_of_hashes, is_hash, strip_checksum, TRYTE_ALPHABET};

/// A uniformly random 81-tryte hash.
fn random_hash(rng: &mut impl Rng) -> String {
    let alphabet = TRYTE_ALPHABET.as_bytes();
    (0..81)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

fn bench_single_hash(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let hash = random_hash(&mut rng);

    c.bench_function("trytes/is_hash", |b| {
        b.iter(|| is_hash(&hash));
    });
}

fn bench_reject_on_last_character(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut almost = random_hash(&mut rng);
    almost.pop();
    almost.push('a');

    // Rejection after scanning the whole string, the slowest honest "no".
    c.bench_function("trytes/is_hash_reject_last", |b| {
        b.iter(|| is_hash(&almost));
    });
}

fn bench_array_validation(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut group = c.benchmark_group("trytes/is_array_of_hashes");

    for size in [10, 100, 1_000, 10_000] {
        let hashes: Vec<String> = (0..size).map(|_| random_hash(&mut rng)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &hashes, |b, hashes| {
            b.iter(|| is_array_of_hashes(hashes));
        });
    }

    group.finish();
}

fn bench_checksum_strip(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let address = format!("{}{}", random_hash(&mut rng), "QXLICVETO");

    c.bench_function("trytes/strip_checksum", |b| {
        b.iter(|| strip_checksum(&address));
    });
}

criterion_group!(
    benches,
    bench_single_hash,
    bench_reject_on_last_character,
    bench_array_validation,
    bench_checksum_strip,
);
criterion_main!(benches);
