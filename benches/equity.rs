use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use holdem_bot::core::CardSet;
use holdem_bot::holdem::{EquityConfig, EquityEstimator};

fn eval_stages(c: &mut Criterion) {
    let estimator = EquityEstimator::new(EquityConfig::default());
    let mut group = c.benchmark_group("eval");
    for hand in ["AsKd", "TsTcAsAc4d", "TsTcAsAc4d9h", "TsTcAsAc4d9h2c"] {
        let cards = CardSet::new_from_str(hand).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(hand), &cards, |b, cards| {
            b.iter(|| estimator.eval(cards))
        });
    }
    group.finish();
}

criterion_group!(benches, eval_stages);
criterion_main!(benches);
