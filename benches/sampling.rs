//! Sampling Benchmark
//!
//! Parse, evaluate and plot costs for general and closed-form formulas.

use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;
use signal_plot::{Sampler, parse, parse_formula, plot, plot_closed_form};

// =============================================================================
// Formula Generators
// =============================================================================

/// A sum of N shifted terms cycling through the built-ins
fn generate_general(n: usize) -> String {
    let fns = ["rect", "tri", "sinc", "gauss", "exp", "step"];
    let mut s = String::with_capacity(n * 24);
    for i in 0..n {
        if i > 0 {
            s.push_str(if i % 2 == 0 { " + " } else { " - " });
        }
        let f = fns[i % fns.len()];
        write!(s, "{}*{}((f - {})/{})", i % 5 + 1, f, i, i % 3 + 1).unwrap();
    }
    s
}

/// A sum of N closed-form pulses
fn generate_pulses(n: usize) -> String {
    let mut s = String::with_capacity(n * 20);
    for i in 0..n {
        if i > 0 {
            s.push_str(" + ");
        }
        let kind = if i % 2 == 0 { "rect" } else { "tri" };
        write!(s, "{}*{}((f-{})/{})", i % 4 + 1, kind, i * 2, i % 3 + 1).unwrap();
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let small = "2*rect(f-1) + sinc(f)*gauss(f/3)";
    let large = generate_general(100);
    let pulses = generate_pulses(100);

    group.bench_function("general/small", |b| b.iter(|| parse(black_box(small))));
    group.bench_function("general/100_terms", |b| {
        b.iter(|| parse(black_box(&large)))
    });
    group.bench_function("closed_form/100_terms", |b| {
        b.iter(|| parse_formula(black_box(&pulses)))
    });

    group.finish();
}

fn bench_plot(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot");
    group.sample_size(20);

    let large = generate_general(20);
    let pulses = generate_pulses(20);
    let coarse = Sampler::new().search_steps(800);

    group.bench_function("general/sinc", |b| b.iter(|| plot(black_box("sinc(f)"))));
    group.bench_function("general/20_terms", |b| b.iter(|| plot(black_box(&large))));
    group.bench_function("general/20_terms_coarse", |b| {
        b.iter(|| coarse.plot(black_box(&large)))
    });
    group.bench_function("closed_form/20_pulses", |b| {
        b.iter(|| plot_closed_form(black_box(&pulses)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_plot);

criterion_main!(benches);
