//! Benchmarks for command parsing.

use chatd_proto::{parse_registration, Command};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const REGISTRATION: &str = "USER alice";
const JOIN: &str = "JOIN #general";
const KICK: &str = "KICK #general bob";
const INVALID: &str = "NICK someone_else";

fn long_privmsg() -> String {
    format!("PRIVMSG #general {}", "x".repeat(512))
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Command Parsing");

    group.bench_function("registration", |b| {
        b.iter(|| black_box(parse_registration(black_box(REGISTRATION))))
    });

    group.bench_function("join", |b| b.iter(|| black_box(Command::parse(black_box(JOIN)))));

    group.bench_function("kick", |b| b.iter(|| black_box(Command::parse(black_box(KICK)))));

    let privmsg = long_privmsg();
    group.bench_function("privmsg_512", |b| {
        b.iter(|| black_box(Command::parse(black_box(&privmsg))))
    });

    group.bench_function("invalid_verb", |b| {
        b.iter(|| black_box(Command::parse(black_box(INVALID))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_parsing);
criterion_main!(benches);
