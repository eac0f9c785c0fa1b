use chainalign_core::{semi_global_align, AlignParams, SeedParams};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sequence(rng: &mut StdRng, length: usize) -> Vec<u8> {
    const BASES: [u8; 4] = *b"ACGT";
    (0..length).map(|_| BASES[rng.gen_range(0..4)]).collect()
}

fn mutate(rng: &mut StdRng, seq: &[u8], rate: f64) -> Vec<u8> {
    const BASES: [u8; 4] = *b"ACGT";
    seq.iter()
        .map(|&base| {
            if rng.gen_bool(rate) {
                BASES[rng.gen_range(0..4)]
            } else {
                base
            }
        })
        .collect()
}

fn align_params(k: usize) -> AlignParams {
    AlignParams {
        seed: SeedParams {
            kmer_size: k,
            ..Default::default()
        },
        band_width: 25,
        allowed_length_discrepancy: 0.1,
        ..Default::default()
    }
}

fn bench_identical_pair(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let seq = random_sequence(&mut rng, 10_000);
    let params = align_params(12);

    c.bench_function("identical_10kb", |b| {
        b.iter(|| black_box(semi_global_align(black_box(&seq), black_box(&seq), &params)))
    });
}

fn bench_divergent_pair(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let seq1 = random_sequence(&mut rng, 10_000);
    let seq2 = mutate(&mut rng, &seq1, 0.02);
    let params = align_params(12);

    c.bench_function("divergent_10kb", |b| {
        b.iter(|| black_box(semi_global_align(black_box(&seq1), black_box(&seq2), &params)))
    });
}

fn bench_different_k_sizes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let seq1 = random_sequence(&mut rng, 5_000);
    let seq2 = mutate(&mut rng, &seq1, 0.02);

    let mut group = c.benchmark_group("align_k_sizes");
    for k in [10, 12, 16, 20] {
        let params = align_params(k);
        group.bench_with_input(format!("k_{}", k), &k, |b, _| {
            b.iter(|| black_box(semi_global_align(black_box(&seq1), black_box(&seq2), &params)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_identical_pair,
    bench_divergent_pair,
    bench_different_k_sizes
);
criterion_main!(benches);
