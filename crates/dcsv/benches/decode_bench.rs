use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use dcsv::Delimiters;

fn document(rows: usize, columns: usize, sep: &str, quote: &str) -> String {
    let mut out = String::new();
    for r in 0..rows {
        for c in 0..columns {
            if c > 0 {
                out.push_str(sep);
            }
            if (r + c) % 3 == 0 {
                out.push_str(&format!("{quote}cell{sep}{r}{quote}{quote}{c}{quote}"));
            } else {
                out.push_str(&format!("cell_{r}_{c}_with_a_longer_plain_run"));
            }
        }
        out.push('\n');
    }
    out
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let cases = [
        ("office_1k_x8", document(1000, 8, ",", "\""), Delimiters::office()),
        (
            "bracket_1k_x8",
            document(1000, 8, "[F]", "[T]"),
            Delimiters::new("[F]", "[T]").unwrap(),
        ),
    ];
    let mut group = c.benchmark_group("decode_table");
    for (name, text, delims) in cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("from_str::{name}"), |b| {
            b.iter(|| black_box(dcsv::decode_from_str(black_box(&text), delims.clone()).unwrap()))
        });
        group.bench_function(format!("from_reader::{name}"), |b| {
            b.iter(|| {
                black_box(dcsv::decode_from_reader(black_box(text.as_bytes()), delims.clone()).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, decode_benchmarks);
criterion_main!(benches);
