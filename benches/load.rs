use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use delimtab::{ColumnType, Table, TableOptions};

fn synthetic(rows: usize) -> String {
    let mut text = String::from("id\tflag\tamount\tlabel\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{i}\t{}\t{}.{:02}\titem-{}\n",
            i % 2,
            i * 3,
            i % 100,
            i % 17
        ));
    }
    text
}

fn bench_load(c: &mut Criterion) {
    let text = synthetic(10_000);
    c.bench_function("load_10k_rows", |b| {
        b.iter(|| Table::from_text(black_box(&text), &TableOptions::default()).unwrap())
    });
}

fn bench_access(c: &mut Criterion) {
    let table = Table::from_text(&synthetic(10_000), &TableOptions::default()).unwrap();
    c.bench_function("amount_as_string", |b| {
        b.iter(|| table.get_column(black_box("amount"), ColumnType::String).unwrap())
    });
    c.bench_function("id_as_f64", |b| {
        b.iter(|| table.column::<f64>(black_box(1)).unwrap())
    });
}

criterion_group!(benches, bench_load, bench_access);
criterion_main!(benches);
