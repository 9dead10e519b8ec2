//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package qlex-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use qlex_lex::lex;

fn lexer_token_count(source: &str) -> usize {
    lex(source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "SELECT * from table WHEre id = 123 and 123abc = 'something' and :foo = :bar1";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("select_star", |b| {
        b.iter(|| lexer_token_count(black_box("SELECT *")))
    });

    group.bench_function("full_query", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    let clause = "a_column = :param_1 AND `quoted value` = 'text' AND ";
    let source = format!("SELECT * FROM big_table WHERE {}x = 1", clause.repeat(500));
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("long_where_clause", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    let multiline = "SELECT *\nFROM t\nWHERE id = :id\n".repeat(500);
    group.throughput(Throughput::Bytes(multiline.len() as u64));

    group.bench_function("many_lines", |b| {
        b.iter(|| lexer_token_count(black_box(&multiline)))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_simple, bench_lexer_large);
criterion_main!(benches);
