use k8s_openapi::api::apps::v1::DaemonSet;

use crate::component::{Component, Selectors, Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, int_or_string, labels, name_link, row, selectors, text, Configuration, Printer, NONE,
};

pub const DEFAULT_UPDATE_STRATEGY: &str = "RollingUpdate";
pub const DEFAULT_MAX_UNAVAILABLE: &str = "1";
pub const DEFAULT_MIN_READY_SECONDS: i32 = 0;
pub const DEFAULT_REVISION_HISTORY_LIMIT: i32 = 10;

const COLUMNS: &[&str] = &[
    "Name",
    "Labels",
    "Desired",
    "Current",
    "Ready",
    "Up-To-Date",
    "Available",
    "Node Selector",
    "Age",
];

fn node_selector(ds: &DaemonSet) -> Component {
    ds.spec
        .as_ref()
        .and_then(|s| s.template.spec.as_ref())
        .and_then(|pod| pod.node_selector.as_ref())
        .map(Selectors::from_labels)
        .unwrap_or_default()
        .into()
}

fn update_strategy(ds: &DaemonSet) -> String {
    ds.spec
        .as_ref()
        .and_then(|s| s.update_strategy.as_ref())
        .and_then(|u| u.type_.clone())
        .unwrap_or_else(|| DEFAULT_UPDATE_STRATEGY.to_string())
}

fn max_unavailable(ds: &DaemonSet) -> String {
    if update_strategy(ds) != DEFAULT_UPDATE_STRATEGY {
        return NONE.to_string();
    }

    ds.spec
        .as_ref()
        .and_then(|s| s.update_strategy.as_ref())
        .and_then(|u| u.rolling_update.as_ref())
        .and_then(|r| r.max_unavailable.as_ref())
        .map(int_or_string)
        .unwrap_or_else(|| DEFAULT_MAX_UNAVAILABLE.to_string())
}

#[derive(Debug, Clone)]
pub struct DaemonSetPrinter;

impl Printer for DaemonSetPrinter {
    type Object = DaemonSet;
    type Configuration = DaemonSetConfiguration;

    fn title(&self) -> &'static str {
        "Daemon Sets"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any daemon sets"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, ds: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        let status = ds.status.as_ref();
        let desired = status.map(|s| s.desired_number_scheduled).unwrap_or(0);
        let current = status.map(|s| s.current_number_scheduled).unwrap_or(0);
        let ready = status.map(|s| s.number_ready).unwrap_or(0);
        let up_to_date = status.and_then(|s| s.updated_number_scheduled).unwrap_or(0);
        let available = status.and_then(|s| s.number_available).unwrap_or(0);

        Ok(row([
            ("Name", name_link(ds, options)),
            ("Labels", labels(ds)),
            ("Desired", text(desired)),
            ("Current", text(current)),
            ("Ready", text(ready)),
            ("Up-To-Date", text(up_to_date)),
            ("Available", text(available)),
            ("Node Selector", node_selector(ds)),
            ("Age", age(ds)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        DaemonSetConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct DaemonSetConfiguration {
    ds: Option<DaemonSet>,
}

impl DaemonSetConfiguration {
    pub fn new(ds: Option<DaemonSet>) -> Self {
        Self { ds }
    }
}

impl Configuration for DaemonSetConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let ds = self
            .ds
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("daemon set is nil".into()))?;
        let spec = ds.spec.as_ref();

        let mut sections = SummarySections::new();
        sections.add_text("Update Strategy", update_strategy(ds));
        sections.add_text("Max Unavailable", max_unavailable(ds));
        sections.add_text(
            "Min Ready Seconds",
            spec.and_then(|s| s.min_ready_seconds)
                .unwrap_or(DEFAULT_MIN_READY_SECONDS)
                .to_string(),
        );
        sections.add_text(
            "Revision History Limit",
            spec.and_then(|s| s.revision_history_limit)
                .unwrap_or(DEFAULT_REVISION_HISTORY_LIMIT)
                .to_string(),
        );
        sections.add("Selectors", selectors(spec.map(|s| &s.selector)));
        sections.add("Node Selector", node_selector(ds));

        Ok(sections.into_summary("Configuration"))
    }
}
