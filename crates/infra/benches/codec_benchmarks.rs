use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use stockroom_core::{Price, ProductId};
use stockroom_infra::codec;
use stockroom_inventory::Inventory;
use stockroom_products::Product;

fn build_inventory(size: usize) -> Inventory {
    let expiry = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();
    let mut inv = Inventory::new();
    for n in 0..size {
        let id = ProductId::new(format!("P{n}")).unwrap();
        let price = Price::new(1.0 + n as f64 * 0.25).unwrap();
        let product = match n % 3 {
            0 => Product::electronics(id, "Monitor", price, 10, 2, "Acme"),
            1 => Product::grocery(id, "Apples", price, 50, expiry),
            _ => Product::clothing(id, "Socks", price, 25, "M", "Cotton"),
        }
        .unwrap();
        inv.add_product(product).unwrap();
    }
    inv
}

fn bench_encode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_throughput");

    for size in [10usize, 100, 1_000, 10_000].iter() {
        let inv = build_inventory(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inv, |b, inv| {
            b.iter(|| black_box(codec::encode_json(inv).unwrap()));
        });
    }

    group.finish();
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");

    for size in [10usize, 100, 1_000, 10_000].iter() {
        let text = codec::encode_json(&build_inventory(*size)).unwrap();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(codec::decode_json(text).unwrap()));
        });
    }

    group.finish();
}

fn bench_expiry_pruning(c: &mut Criterion) {
    let mut group = c.benchmark_group("expiry_pruning");
    let reference = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();

    for size in [100usize, 10_000].iter() {
        let inv = build_inventory(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &inv, |b, inv| {
            b.iter(|| {
                let mut working = inv.clone();
                black_box(working.remove_expired_products_as_of(reference))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_throughput,
    bench_decode_throughput,
    bench_expiry_pruning
);
criterion_main!(benches);
