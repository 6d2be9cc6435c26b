//! Benchmarks for the question interpreter.
//!
//! Measures one full `answer` call (key extraction, store lookup, rule
//! classification, rendering) across the question shapes the dashboard sends.

use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use smelter_chat::QuestionInterpreter;
use smelter_core::config::InterpreterConfig;
use smelter_store::BatchStore;

/// Build a question by index so every code path is exercised.
fn generate_question(index: usize) -> String {
    let ids = ["700001", "700003", "800006", "800010"];
    let stamps = ["2024-09-02T00:10:00Z", "2024-09-02T05:53:00Z"];
    match index % 6 {
        0 => format!("What is the UTS of batch {}?", ids[index % ids.len()]),
        1 => format!("elongation at {}", stamps[index % stamps.len()]),
        2 => format!("Show me the composition of batch {}", ids[index % ids.len()]),
        3 => format!("tell me about {}", ids[index % ids.len()]),
        4 => "Batch 999999 conductivity".to_string(),
        _ => "what is the tensile strength today".to_string(),
    }
}

fn bench_answer(c: &mut Criterion) {
    let store = Arc::new(BatchStore::seeded().expect("seed dataset is valid"));
    let interpreter = QuestionInterpreter::new(store, &InterpreterConfig::default());

    let questions: Vec<String> = (0..600).map(generate_question).collect();

    let mut group = c.benchmark_group("interpreter");
    group.sample_size(200);
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("answer_mixed", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let q = &questions[idx % questions.len()];
            idx += 1;
            interpreter.answer(q)
        });
    });

    group.bench_function("answer_fallback", |b| {
        b.iter(|| interpreter.answer("what is the tensile strength today"));
    });

    group.finish();
}

criterion_group!(benches, bench_answer);
criterion_main!(benches);
