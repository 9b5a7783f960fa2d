use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use emojigate::parse_document;

mod common;

/// Benchmark YAML parsing and node tree conversion for growing workflows
fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for jobs in [1, 10, 50, 200] {
        let content = common::generate_workflow(jobs, 10, 0);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("jobs", jobs), &content, |b, content| {
            b.iter(|| parse_document(black_box(content)).expect("valid workflow"))
        });
    }
    group.finish();
}

fn bench_parse_empty(c: &mut Criterion) {
    c.bench_function("parse_comment_only", |b| {
        b.iter(|| parse_document(black_box("# nothing here\n\n# at all\n")))
    });
}

criterion_group!(benches, bench_parse_document, bench_parse_empty);
criterion_main!(benches);
