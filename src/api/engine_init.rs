use tracing::debug;

use crate::core::ReportCollection;
use crate::error::ReportResult;
use crate::export::XmlExportVisitor;
use crate::factory::ReportFactory;
use crate::render::RenderSink;

use super::{ReportEngine, ReportEngineConfig};

impl<S: RenderSink> ReportEngine<S> {
    /// Creates an engine whose factory is selected by `config.family`.
    pub fn new(sink: S, config: ReportEngineConfig) -> ReportResult<Self> {
        let factory = config.family.factory();
        Self::with_factory(sink, factory, config)
    }

    /// Creates an engine around a caller-provided factory.
    ///
    /// The factory's own family wins over `config.family` when locking the
    /// collection.
    pub fn with_factory(
        sink: S,
        factory: Box<dyn ReportFactory + Send + Sync>,
        config: ReportEngineConfig,
    ) -> ReportResult<Self> {
        config.validate()?;

        let family = factory.family();
        let collection = if config.enforce_family {
            ReportCollection::for_family(family)
        } else {
            ReportCollection::new()
        };
        debug!(
            %family,
            enforce_family = config.enforce_family,
            indent = config.indent,
            "init report engine"
        );

        Ok(Self {
            sink,
            factory,
            collection,
            xml: XmlExportVisitor::new().with_indent(config.indent),
        })
    }
}
