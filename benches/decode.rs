use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use objson::{decode, decode_with_options, DecodeOptions, Value, Whitespace};

const USER: &str = r#"{"id": 123, "name": "Alice", "email": "alice@example.com", "active": true}"#;

const NESTED: &str = r#"{"id": 42, "metadata": {"created": "2023-01-01T00:00:00Z", "updated": "2023-12-31T23:59:59Z", "version": 3}, "tags": ["important", "verified", "production"]}"#;

fn products(size: u32) -> String {
    let items: Vec<String> = (0..size)
        .map(|i| {
            format!(
                r#"{{"sku": "SKU{i}", "name": "Product {i}", "price": {:.2}, "quantity": {i}}}"#,
                9.99 + f64::from(i)
            )
        })
        .collect();
    format!(r#"{{"products": [{}]}}"#, items.join(", "))
}

fn benchmark_decode_simple(c: &mut Criterion) {
    c.bench_function("decode_simple_object", |b| {
        b.iter(|| decode(black_box(USER.as_bytes())))
    });
}

fn benchmark_decode_nested(c: &mut Criterion) {
    c.bench_function("decode_nested_object", |b| {
        b.iter(|| decode(black_box(NESTED.as_bytes())))
    });
}

fn benchmark_decode_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_array");

    for size in [10, 50, 100, 500].iter() {
        let input = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| decode(black_box(input.as_bytes())))
        });
    }
    group.finish();
}

fn benchmark_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_numbers");

    let integers: Vec<String> = (0..100).map(|i| (i * 7919).to_string()).collect();
    let floats: Vec<String> = (0..100).map(|i| format!("{:.3}", f64::from(i) * 1.5)).collect();
    let long: Vec<String> = (0..100).map(|i| format!("1234567890123456{i:02}")).collect();

    for (name, numbers) in [("integers", integers), ("floats", floats), ("long_integers", long)] {
        let input = format!(r#"{{"n": [{}]}}"#, numbers.join(", "));
        group.bench_function(name, |b| b.iter(|| decode(black_box(input.as_bytes()))));
    }
    group.finish();
}

fn benchmark_whitespace_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("whitespace");
    let input = products(100);
    let json = DecodeOptions::new().with_whitespace(Whitespace::Json);

    group.bench_function("space", |b| b.iter(|| decode(black_box(input.as_bytes()))));
    group.bench_function("json", |b| {
        b.iter(|| decode_with_options(black_box(input.as_bytes()), json))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");
    let input = products(100);

    group.bench_function("objson", |b| b.iter(|| decode(black_box(input.as_bytes()))));
    group.bench_function("serde_json", |b| {
        b.iter(|| serde_json::from_str::<Value>(black_box(&input)))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_decode_simple,
    benchmark_decode_nested,
    benchmark_decode_array,
    benchmark_numbers,
    benchmark_whitespace_modes,
    benchmark_comparison_with_json
);
criterion_main!(benches);
