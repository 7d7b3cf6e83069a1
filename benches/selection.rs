use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_entropy::{
    default_answers, default_words, entropy, FeedbackPattern, SolverConfig, WordleSolver,
};

fn feedback(c: &mut Criterion) {
    let words = default_words();
    c.bench_function("feedback all pairs", |b| {
        b.iter(|| {
            let mut wins = 0usize;
            for &guess in &words {
                for &solution in &words {
                    let pattern = FeedbackPattern::calculate(black_box(guess), black_box(solution));
                    wins += pattern.is_win() as usize;
                }
            }
            wins
        })
    });
}

fn selection(c: &mut Criterion) {
    let answers = default_answers();
    let words = default_words();
    let solver = WordleSolver::new(SolverConfig::default()).expect("worker pool");

    c.bench_function("single entropy", |b| {
        b.iter(|| entropy(black_box(words[0]), black_box(&answers)))
    });

    c.bench_function("select opening guess", |b| {
        b.iter(|| solver.select_guess(black_box(&answers), black_box(&words), 0))
    });

    let pool: Vec<_> = answers.iter().copied().take(60).collect();
    let mut group = c.benchmark_group("lookahead");
    group.sample_size(10);
    group.bench_function("depth 2 on 60 candidates", |b| {
        b.iter(|| solver.select_guess(black_box(&pool), black_box(&words), 2))
    });
    group.finish();
}

criterion_group!(benches, feedback, selection);
criterion_main!(benches);
