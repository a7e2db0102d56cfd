//! Summarization benchmarks
//!
//! The summarizer is the only per-request CPU hot path that scales with
//! document size, so it gets the benchmark.
//!
//! Run with: `cargo bench --bench summarize`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use audiobrief_server::summarize::Summarizer;

/// Build a synthetic document of `paragraphs` paragraphs with a skewed
/// word distribution, so scoring has real work to do.
fn synthetic_document(paragraphs: usize) -> String {
    let sentences = [
        "Compilers translate source code into machine instructions.",
        "The borrow checker enforces aliasing rules at compile time.",
        "Asynchronous runtimes schedule tasks across worker threads.",
        "Memory safety and performance are not mutually exclusive.",
        "Iterators compose into pipelines without intermediate allocations.",
    ];

    let mut doc = String::new();
    for i in 0..paragraphs {
        for sentence in &sentences {
            doc.push_str(sentence);
            doc.push(' ');
        }
        if i % 3 == 0 {
            doc.push_str("Compilers dominate this paragraph because compilers repeat. ");
        }
        doc.push('\n');
    }
    doc
}

fn bench_summarize(c: &mut Criterion) {
    let summarizer = Summarizer::default();

    let mut group = c.benchmark_group("summarize");
    for paragraphs in [10usize, 100, 500] {
        let doc = synthetic_document(paragraphs);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &doc,
            |b, doc| b.iter(|| summarizer.summarize(black_box(doc))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_summarize);
criterion_main!(benches);
