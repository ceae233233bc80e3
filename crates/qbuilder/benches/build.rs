use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qbuilder::{QueryBuilder, Record};

/// A record with `n` filter fields alternating text, nullable int and list values.
fn build_record(n: usize) -> Record {
    let mut record = Record::new();
    for i in 0..n {
        let col = format!("col{i}");
        match i % 3 {
            0 => record.push(col.clone(), col, format!("value{i}")),
            1 => record.push(format!("{col}__gte"), col, Some(i as i64)),
            _ => record.push(format!("{col}__nin"), col, vec![1_i64, 2, 3]),
        };
    }
    record
        .field("page", "", 3_i64)
        .field("limit", "", 50_i64)
        .field("short_by", "", vec!["-col0", "col1"])
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("qbuilder/build");

    for n in [1, 5, 10, 50, 100] {
        let record = build_record(n);
        let qb = QueryBuilder::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &record, |b, record| {
            b.iter(|| black_box(qb.build(record).unwrap()));
        });
    }

    group.finish();
}

fn bench_build_with_custom_where(c: &mut Criterion) {
    let mut group = c.benchmark_group("qbuilder/build_with_custom_where");

    for n in [1, 10, 50] {
        let record = build_record(10);
        let mut qb = QueryBuilder::new();
        for i in 0..n {
            qb.add_where_clause(format!("(a{i} = ? OR b{i} = ?)"), [i as i64, -(i as i64)]);
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &record, |b, record| {
            b.iter(|| black_box(qb.build(record).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_build_with_custom_where);
criterion_main!(benches);
