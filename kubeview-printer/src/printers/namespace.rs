use k8s_openapi::api::core::v1::Namespace;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{age, labels, name_link, row, text, Configuration, Printer, UNKNOWN};

const COLUMNS: &[&str] = &["Name", "Labels", "Status", "Age"];

fn status(ns: &Namespace) -> &str {
    ns.status
        .as_ref()
        .and_then(|s| s.phase.as_deref())
        .unwrap_or(UNKNOWN)
}

#[derive(Debug, Clone)]
pub struct NamespacePrinter;

impl Printer for NamespacePrinter {
    type Object = Namespace;
    type Configuration = NamespaceConfiguration;

    fn title(&self) -> &'static str {
        "Namespaces"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any namespaces"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, ns: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        Ok(row([
            ("Name", name_link(ns, options)),
            ("Labels", labels(ns)),
            ("Status", text(status(ns))),
            ("Age", age(ns)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        NamespaceConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct NamespaceConfiguration {
    ns: Option<Namespace>,
}

impl NamespaceConfiguration {
    pub fn new(ns: Option<Namespace>) -> Self {
        Self { ns }
    }
}

impl Configuration for NamespaceConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let ns = self
            .ns
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("namespace is nil".into()))?;

        let mut sections = SummarySections::new();
        sections.add_text("Status", status(ns));

        Ok(sections.into_summary("Configuration"))
    }
}
