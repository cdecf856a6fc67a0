//! Performance benchmarks for signature normalization

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sigtidy::config::RuleSet;
use sigtidy::pipeline::{clean_typestring, normalize};
use sigtidy::tree::{depth, parse, BracketSpec};
use std::hint::black_box;

const LIBCXX_MAP: &str = "std::__1::map<std::__1::basic_string<char, std::__1::char_traits<char>, \
    std::__1::allocator<char> >, std::__1::vector<int, std::__1::allocator<int> >, \
    std::__1::less<std::__1::basic_string<char, std::__1::char_traits<char>, std::__1::allocator<char> > >, \
    std::__1::allocator<std::__1::pair<const std::__1::basic_string<char, std::__1::char_traits<char>, \
    std::__1::allocator<char> >, std::__1::vector<int, std::__1::allocator<int> > > > >";

fn nested_signature(levels: usize) -> String {
    let mut sig = "int".to_string();
    for i in 0..levels {
        sig = format!("std::__1::vector<T{i}<{sig}>, std::__1::allocator<{sig}> >");
    }
    sig
}

fn bench_normalize_map(c: &mut Criterion) {
    let rules = RuleSet::default();
    c.bench_function("normalize_libcxx_map", |b| {
        b.iter(|| normalize(black_box(LIBCXX_MAP), &rules))
    });
}

fn bench_nesting_depth(c: &mut Criterion) {
    let rules = RuleSet::default();
    let mut group = c.benchmark_group("clean_typestring_by_depth");
    for levels in [2, 4, 6] {
        let sig = nested_signature(levels);
        group.bench_with_input(BenchmarkId::from_parameter(levels), &sig, |b, sig| {
            b.iter(|| clean_typestring(black_box(sig), &rules))
        });
    }
    group.finish();
}

fn bench_parse_and_depth(c: &mut Criterion) {
    let sig = nested_signature(6);
    c.bench_function("parse_and_depth", |b| {
        b.iter(|| {
            let tree = parse(black_box(&sig), BracketSpec::template(), true);
            tree.map(|t| depth(&t))
        })
    });
}

criterion_group!(benches, bench_normalize_map, bench_nesting_depth, bench_parse_and_depth);

criterion_main!(benches);
