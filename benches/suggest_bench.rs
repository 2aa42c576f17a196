use complement_core::{CompletionEngine, EngineConfig, FuzzyOptions, MatchMode, Word, WordType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Deterministic pseudo-words so runs stay comparable.
fn vocabulary(n: usize) -> Vec<String> {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..n)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let len = 4 + (seed % 9) as usize;
            (0..len)
                .map(|i| ALPHABET[((seed >> (i * 5)) % 26) as usize] as char)
                .collect()
        })
        .collect()
}

fn build_engine(config: EngineConfig) -> CompletionEngine {
    let mut engine = CompletionEngine::new(config, None).unwrap();
    let words = vocabulary(20_000);
    let (file, vault) = words.split_at(2_000);
    engine.build_index(
        WordType::CurrentFile,
        file.iter().map(|w| Word::new(w.as_str(), WordType::CurrentFile)).collect(),
    );
    engine.build_index(
        WordType::CurrentVault,
        vault.iter().map(|w| Word::new(w.as_str(), WordType::CurrentVault)).collect(),
    );
    engine
}

fn bench_prefix(c: &mut Criterion) {
    let engine = build_engine(EngineConfig::default());
    c.bench_function("suggest_prefix", |b| b.iter(|| engine.suggest(black_box("mar"))));

    let mut config = EngineConfig::default();
    config.matching.fuzzy = Some(FuzzyOptions { min_match_score: 0.0 });
    let fuzzy = build_engine(config);
    c.bench_function("suggest_prefix_fuzzy", |b| b.iter(|| fuzzy.suggest(black_box("mrk"))));
}

fn bench_partial(c: &mut Criterion) {
    let mut config = EngineConfig::default();
    config.matching.mode = MatchMode::Partial;
    let engine = build_engine(config);
    c.bench_function("suggest_partial", |b| b.iter(|| engine.suggest(black_box("ark"))));
}

fn bench_phrase(c: &mut Criterion) {
    let engine = build_engine(EngineConfig::default());
    let line = "the quick brown fox jumps over the lazy dog and then mar";
    c.bench_function("suggest_at_cursor", |b| b.iter(|| engine.suggest_at_cursor(black_box(line))));
}

criterion_group!(benches, bench_prefix, bench_partial, bench_phrase);
criterion_main!(benches);
