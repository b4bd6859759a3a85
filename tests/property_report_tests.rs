use std::fmt;
use std::sync::Arc;

use proptest::prelude::*;
use report_rs::core::{ChartElement, ElementKind, ReportCollection, ReportElement, ReportFamily};
use report_rs::export::{JsonExportVisitor, XmlExportVisitor, export_fragments};
use report_rs::factory::ReportFactory;
use report_rs::legacy::LegacyAnalytics;
use report_rs::render::BufferSink;

struct StubSource(String);

impl LegacyAnalytics for StubSource {
    fn draw_complex_graph(&self, canvas: &mut dyn fmt::Write) -> fmt::Result {
        canvas.write_str("stub")
    }

    fn raw_graph_data(&self) -> String {
        self.0.clone()
    }
}

fn family_strategy() -> impl Strategy<Value = ReportFamily> {
    prop_oneof![Just(ReportFamily::Html), Just(ReportFamily::Pdf)]
}

fn content_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,.:;!?-]{0,48}"
}

fn build_element(family: ReportFamily, kind: u8, content: &str) -> ReportElement {
    let factory = family.factory();
    match kind % 3 {
        0 => factory.create_header(content).expect("header").into(),
        1 => factory.create_text(content).expect("text").into(),
        _ => ChartElement::new(Arc::new(StubSource(content.to_owned()))).into(),
    }
}

proptest! {
    #[test]
    fn factory_content_roundtrips(family in family_strategy(), content in content_strategy()) {
        let factory = family.factory();
        let header = factory.create_header(&content).expect("header");
        let text = factory.create_text(&content).expect("text");
        prop_assert_eq!(header.text(), content.as_str());
        prop_assert_eq!(text.content(), content.as_str());
    }

    #[test]
    fn adapter_passes_raw_data_through(data in ".{0,64}") {
        let source = Arc::new(StubSource(data.clone()));
        let chart = ChartElement::new(source.clone());
        prop_assert_eq!(chart.data(), source.raw_graph_data());
    }

    #[test]
    fn render_twice_yields_identical_output(
        family in family_strategy(),
        kind in any::<u8>(),
        content in content_strategy()
    ) {
        let element = build_element(family, kind, &content);
        let mut first = BufferSink::new();
        let mut second = BufferSink::new();
        element.render(&mut first).expect("first render");
        element.render(&mut second).expect("second render");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn export_preserves_order_for_any_mix(
        family in family_strategy(),
        items in prop::collection::vec((any::<u8>(), content_strategy()), 0..24)
    ) {
        let mut collection = ReportCollection::for_family(family);
        for (kind, content) in &items {
            collection.push(build_element(family, *kind, content)).expect("push");
        }

        let fragments = export_fragments(&collection, &mut JsonExportVisitor);
        prop_assert_eq!(fragments.len(), items.len());
        for (fragment, (kind, content)) in fragments.iter().zip(&items) {
            let expected_kind = match kind % 3 {
                0 => ElementKind::Header,
                1 => ElementKind::Text,
                _ => ElementKind::Chart,
            };
            prop_assert_eq!(fragment.kind, expected_kind);
            prop_assert_eq!(&fragment.value, content);
        }
    }

    #[test]
    fn export_is_family_independent(
        items in prop::collection::vec((any::<u8>(), content_strategy()), 1..16)
    ) {
        let mut html = ReportCollection::for_family(ReportFamily::Html);
        let mut pdf = ReportCollection::for_family(ReportFamily::Pdf);
        for (kind, content) in &items {
            html.push(build_element(ReportFamily::Html, *kind, content)).expect("push html");
            pdf.push(build_element(ReportFamily::Pdf, *kind, content)).expect("push pdf");
        }

        let html_xml = export_fragments(&html, &mut XmlExportVisitor::new());
        let pdf_xml = export_fragments(&pdf, &mut XmlExportVisitor::new());
        prop_assert_eq!(html_xml, pdf_xml);
    }
}
