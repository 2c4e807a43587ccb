use criterion::{criterion_group, criterion_main, Criterion};
use salesq_core::criteria::{selection, AgeRange, FilterCriteria};
use salesq_core::record::Record;
use salesq_core::sort::{SortField, SortSpec};
use salesq_exec::QueryPipeline;

fn make_dataset(rows: usize) -> Vec<Record> {
    let regions = ["North", "South", "East", "West"];
    (0..rows)
        .map(|i| Record {
            transaction_id: format!("TX{i}"),
            date: format!("2023-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            customer_name: format!("Customer {}", (i * 7919) % rows),
            phone_number: format!("98{:08}", i),
            age: 18 + (i % 50) as u32,
            customer_region: regions[i % 4].to_string(),
            tags: if i % 3 == 0 { vec!["vip".into()] } else { vec![] },
            quantity: (i % 9) as u32 + 1,
            total_amount: 100.0,
            final_amount: 95.0,
            ..Default::default()
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let data = make_dataset(10_000);
    let pipeline = QueryPipeline::default();
    let criteria = FilterCriteria {
        regions: selection(["North", "East"]),
        age_range: Some(AgeRange::new(25, 45)),
        ..Default::default()
    };
    let sort = SortSpec::asc(SortField::CustomerName);

    c.bench_function("query_filter_sort_page", |b| {
        b.iter(|| {
            let out = pipeline.query(&data, "", &criteria, &sort, 1);
            assert_eq!(out.records.len(), 10);
        })
    });

    c.bench_function("query_search_phone", |b| {
        b.iter(|| pipeline.query(&data, "98 0000 12", &FilterCriteria::default(), &sort, 1))
    });
}

criterion_group!(queries, bench_query);
criterion_main!(queries);
