//! This bench sorts a large, shuffled column of mixed-depth hierarchy codes, the
//! way a report orders respondents by business unit.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use elastic_calculator::{CodeColumn, HierarchyCode};

/// Generates every code of a 20 x 10 x 5 tree, interleaved by depth.
fn preseed_cells() -> Vec<String> {
    let mut cells = Vec::new();
    for a in 1..=20u64 {
        let unit = HierarchyCode::try_from(vec![a]).unwrap();
        for b in (0..10).rev() {
            let team = unit.child(b);
            for c in (0..5).rev() {
                cells.push(team.child(c).to_string());
            }
            cells.push(team.to_string());
        }
        cells.push(unit.to_string());
    }
    cells.reverse();
    cells
}

fn sort_codes(c: &mut Criterion) {
    let cells = preseed_cells();

    c.bench_function("parse column", |b| {
        b.iter(|| CodeColumn::parse("org_node", &cells).unwrap());
    });

    let column = CodeColumn::parse("org_node", &cells).unwrap();
    c.bench_function("sort codes", |b| {
        b.iter_batched(
            || column.codes().to_vec(),
            |mut codes| codes.sort(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, sort_codes);
criterion_main!(benches);
