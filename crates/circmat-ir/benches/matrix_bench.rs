//! Benchmarks for circuit matrix operations
//!
//! Run with: cargo bench -p circmat-ir

use circmat_ir::{CellCode, CircuitMatrix};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Ladder of CNOTs between neighbouring qubits, separated by wire columns.
fn cnot_ladder(num_qubits: usize, depth: usize) -> CircuitMatrix {
    let mut lines = vec![vec![CellCode::INPUT]; num_qubits];
    for step in 0..depth {
        let control = step % num_qubits;
        let target = (step + 1) % num_qubits;
        let group = u32::try_from(step).unwrap();
        for (q, line) in lines.iter_mut().enumerate() {
            let code = if q == control {
                CellCode::control(group).unwrap()
            } else if q == target {
                CellCode::target(group).unwrap()
            } else {
                CellCode::WIRE
            };
            line.push(code);
            line.push(CellCode::WIRE);
        }
    }
    for line in &mut lines {
        line.push(CellCode::OUTPUT);
    }
    CircuitMatrix::from_lines(lines)
}

/// Benchmark linkage lookups
fn bench_linkage(c: &mut Criterion) {
    let mut group = c.benchmark_group("linkage");

    for num_qubits in &[2, 10, 50] {
        let m = cnot_ladder(*num_qubits, 200);
        group.bench_with_input(
            BenchmarkId::new("find_target", num_qubits),
            &m,
            |b, m| {
                b.iter(|| {
                    for step in 0..200 {
                        let row = step % m.num_lines();
                        black_box(m.find_target(row, 1 + 2 * step).unwrap());
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("validate_linkage", num_qubits),
            &m,
            |b, m| b.iter(|| m.validate_linkage().unwrap()),
        );
    }

    group.finish();
}

/// Benchmark structural edits
fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    for depth in &[100, 1000] {
        let m = cnot_ladder(20, *depth);
        group.bench_with_input(
            BenchmarkId::new("remove_empty_columns", depth),
            &m,
            |b, m| {
                b.iter(|| {
                    let mut m = m.clone();
                    black_box(m.remove_empty_columns())
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("insert_columns", depth),
            &m,
            |b, m| {
                b.iter(|| {
                    let mut m = m.clone();
                    m.insert_columns(black_box(depth / 2), black_box(4));
                    m
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_linkage, bench_edits);
criterion_main!(benches);
