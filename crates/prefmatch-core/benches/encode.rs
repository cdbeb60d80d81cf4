use criterion::{Criterion, black_box, criterion_group, criterion_main};
use prefmatch_core::{
    Attr, AttributeConfig, Policy, ProfileConfig, UnknownHandling, check_compatibility,
    encode_profile, export_json,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_config(rng: &mut SmallRng) -> ProfileConfig {
    Attr::ALL
        .iter()
        .copied()
        .filter_map(|attr| {
            if !rng.random_bool(0.7) {
                return None;
            }
            let policy = match rng.random_range(0..3) {
                0 => Policy::None,
                1 => Policy::Dealbreaker,
                _ => Policy::Criteria,
            };
            let handling = if rng.random_bool(0.5) {
                UnknownHandling::Strict
            } else {
                UnknownHandling::Lenient
            };
            let cfg = if attr.kind() == prefmatch_core::AttrKind::Numeric {
                let lo = rng.random_range(18..40);
                AttributeConfig::new(rng.random_range(18..80), policy, handling)
                    .with_range(lo, lo + rng.random_range(0..20))
            } else {
                let accepted: Vec<u8> = (1..=14).filter(|_| rng.random_bool(0.3)).collect();
                AttributeConfig::new(rng.random_range(1..=14), policy, handling)
                    .accepting(&accepted)
            };
            Some((attr, cfg))
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let configs: Vec<ProfileConfig> = (0..64).map(|_| random_config(&mut rng)).collect();

    let mut group = c.benchmark_group("encode");
    group.bench_function("profile", |b| {
        b.iter(|| {
            for cfg in &configs {
                let _ = black_box(encode_profile(black_box(cfg)));
            }
        })
    });
    group.bench_function("profile-to-json", |b| {
        b.iter(|| {
            for cfg in &configs {
                if let Ok(enc) = encode_profile(cfg) {
                    let _ = black_box(export_json(&enc));
                }
            }
        })
    });
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let encoded: Vec<_> = (0..64)
        .filter_map(|_| encode_profile(&random_config(&mut rng)).ok())
        .collect();

    c.bench_function("match/all-pairs", |b| {
        b.iter(|| {
            let mut mutual = 0usize;
            for a in &encoded {
                for other in &encoded {
                    if check_compatibility(a, other).is_mutual() {
                        mutual += 1;
                    }
                }
            }
            black_box(mutual)
        })
    });
}

criterion_group!(benches, bench_encode, bench_match);
criterion_main!(benches);
