use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use report_rs::core::{ChartElement, ReportCollection, ReportFamily};
use report_rs::export::{XmlExportVisitor, export_fragments, export_fragments_parallel};
use report_rs::factory::ReportFactory;
use report_rs::legacy::LegacyAnalyticsLibrary;
use report_rs::render::BufferSink;
use std::hint::black_box;

fn build_collection(len: usize) -> ReportCollection {
    let factory = ReportFamily::Html.factory();
    let source = Arc::new(LegacyAnalyticsLibrary::with_series((0..32).collect::<Vec<i64>>()));
    let mut collection = ReportCollection::for_family(ReportFamily::Html);
    for i in 0..len {
        let content = format!("block {i}");
        let pushed = match i % 3 {
            0 => collection.push(factory.create_header(&content).expect("header")),
            1 => collection.push(factory.create_text(&content).expect("text")),
            _ => collection.push(ChartElement::new(source.clone())),
        };
        pushed.expect("push element");
    }
    collection
}

fn bench_xml_export_10k(c: &mut Criterion) {
    let collection = build_collection(10_000);

    c.bench_function("xml_export_10k", |b| {
        b.iter(|| {
            let fragments = export_fragments(black_box(&collection), &mut XmlExportVisitor::new());
            black_box(fragments);
        })
    });
}

fn bench_xml_export_parallel_10k(c: &mut Criterion) {
    let collection = build_collection(10_000);
    let visitor = XmlExportVisitor::new();

    c.bench_function("xml_export_parallel_10k", |b| {
        b.iter(|| {
            let fragments = export_fragments_parallel(black_box(&collection), &visitor);
            black_box(fragments);
        })
    });
}

fn bench_render_10k(c: &mut Criterion) {
    let collection = build_collection(10_000);

    c.bench_function("render_10k", |b| {
        b.iter(|| {
            let mut sink = BufferSink::new();
            collection.render(&mut sink).expect("render");
            black_box(sink);
        })
    });
}

criterion_group!(
    benches,
    bench_xml_export_10k,
    bench_xml_export_parallel_10k,
    bench_render_10k
);
criterion_main!(benches);
