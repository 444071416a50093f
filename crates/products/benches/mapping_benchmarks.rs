use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use serde_json::{json, Value};
use storefront_catalog::ProductsResponse;
use storefront_products::{reconcile_color_media, PocketBaseFiles, RecordMapper, StockPolicy};

const COLORS: [&str; 4] = ["black", "grey", "navy", "sand"];
const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

/// A product with `variants` variants cycling through colours; only the first
/// size of each colour carries a gallery, as in typical catalog data.
fn product_json(variants: usize) -> Value {
    let variants: Vec<Value> = (0..variants)
        .map(|i| {
            let color = COLORS[i / SIZES.len() % COLORS.len()];
            let gallery: Vec<String> = if i % SIZES.len() == 0 {
                (0..4).map(|n| format!("{color}_{n}.jpg")).collect()
            } else {
                Vec::new()
            };
            json!({
                "id": format!("v{i:05}"),
                "collectionId": "pbc_vars",
                "collectionName": "product_variants",
                "product": "p1",
                "color": color,
                "size": SIZES[i % SIZES.len()],
                "sku": format!("SKU-{i}"),
                "stock_quantity": (i % 7) as i64,
                "gallery_images": gallery,
            })
        })
        .collect();

    json!({
        "id": "p1",
        "collectionId": "pbc_prod",
        "collectionName": "products",
        "title": "Bench Tee",
        "slug": "bench-tee",
        "category": ["c1"],
        "attributes": { "fit": "regular" },
        "expand": {
            "product_variants(product)": variants,
            "category": [{
                "id": "c1",
                "collectionId": "pbc_cats",
                "collectionName": "categories",
                "name": "Mens",
                "slug": "mens"
            }]
        }
    })
}

fn mapper() -> RecordMapper {
    RecordMapper::new(PocketBaseFiles::new("http://127.0.0.1:8090"), StockPolicy::default())
}

fn bench_map_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_product");
    let mapper = mapper();

    for variants in [0usize, 5, 20, 100] {
        let record: ProductsResponse =
            serde_json::from_value(product_json(variants)).expect("bench fixture");
        group.throughput(Throughput::Elements(variants.max(1) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(variants), &record, |b, record| {
            b.iter(|| black_box(mapper.map_product(black_box(record))));
        });
    }

    group.finish();
}

fn bench_reconcile_color_media(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile_color_media");
    let mapper = mapper();

    for variants in [20usize, 200] {
        let record: ProductsResponse =
            serde_json::from_value(product_json(variants)).expect("bench fixture");
        let expanded = record.expand.as_ref().and_then(|e| e.variants.as_deref());
        let mapped = mapper.map_variants_from_expand(expanded);
        group.throughput(Throughput::Elements(variants as u64));
        group.bench_with_input(BenchmarkId::from_parameter(variants), &mapped, |b, mapped| {
            b.iter(|| black_box(reconcile_color_media(mapped.clone())));
        });
    }

    group.finish();
}

fn bench_deserialize_and_map(c: &mut Criterion) {
    let raw = serde_json::to_string(&product_json(20)).expect("bench fixture");
    let mapper = mapper();

    c.bench_function("deserialize_and_map_20_variants", |b| {
        b.iter(|| {
            let record: ProductsResponse =
                serde_json::from_str(black_box(&raw)).expect("valid product");
            black_box(mapper.map_product(&record))
        });
    });
}

criterion_group!(
    benches,
    bench_map_product,
    bench_reconcile_color_media,
    bench_deserialize_and_map
);
criterion_main!(benches);
