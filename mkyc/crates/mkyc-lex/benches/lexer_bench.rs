//! Scanner Benchmarks
//!
//! Measures throughput of the lexical scanner.
//! Run with: `cargo bench --package mkyc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mkyc_lex::{tokenize, Scanner};

fn scanner_token_count(source: &str) -> usize {
    // Scanner implements Iterator, so we can use it directly
    Scanner::new(source).count()
}

fn bench_scanner_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "let x = 42; let add = fn(a, b) { return a + b; };";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| scanner_token_count(black_box("let x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| scanner_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_program");

    let source = r#"
        // Recursive fibonacci
        let fibonacci = fn(n) {
            if (n < 2) {
                return n;
            } else {
                return fibonacci(n - 1) + fibonacci(n - 2);
            }
        };

        /* map applies f to every element
           of arr, returning a new array */
        let map = fn(arr, f) {
            let iter = fn(acc, i) {
                if (i == len(arr)) { acc } else { iter(push(acc, f(arr[i])), i + 1) }
            };
            iter([], 0);
        };

        let result = fibonacci(15) * 2 / 3;
        let ok = !(result != 0) == false;
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("program", |b| {
        b.iter(|| scanner_token_count(black_box(source)))
    });

    group.bench_function("program_tokenize", |b| {
        b.iter(|| tokenize(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_comments");

    group.bench_function("line_comment", |b| {
        b.iter(|| scanner_token_count(black_box("// a short line comment\nx")))
    });

    group.bench_function("block_comment", |b| {
        let source = "/* This is a longer block comment\n that spans a few lines\n for benchmarking purposes. */ x";
        b.iter(|| scanner_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_scanner_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| scanner_token_count(black_box("let x = 42;")))
    });

    group.bench_function("long_ident", |b| {
        b.iter(|| scanner_token_count(black_box("let very_long_variable_name = 42;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| {
            scanner_token_count(black_box(
                "let a = 1; let b = 2; let c = 3; let d = 4; let e = 5;",
            ))
        })
    });

    group.finish();
}

fn bench_scanner_large_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_large");

    let source = "let value = fn(x) { x * 2 + 1 >= 10 };\n".repeat(1000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_lines", |b| {
        b.iter(|| scanner_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scanner_keywords,
    bench_scanner_program,
    bench_scanner_comments,
    bench_scanner_identifiers,
    bench_scanner_large_input
);
criterion_main!(benches);
