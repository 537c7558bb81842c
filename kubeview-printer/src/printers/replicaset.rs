use k8s_openapi::api::apps::v1::ReplicaSet;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, controlled_by, join_or_none, labels, name_link, row, selectors, text, Configuration,
    Printer,
};

pub const DEFAULT_REPLICAS: i32 = 1;

const COLUMNS: &[&str] = &["Name", "Labels", "Status", "Age", "Containers", "Selector"];

pub fn desired_replicas(rs: &ReplicaSet) -> i32 {
    rs.spec
        .as_ref()
        .and_then(|s| s.replicas)
        .unwrap_or(DEFAULT_REPLICAS)
}

fn current_replicas(rs: &ReplicaSet) -> i32 {
    rs.status.as_ref().map(|s| s.replicas).unwrap_or(0)
}

fn ready_replicas(rs: &ReplicaSet) -> i32 {
    rs.status
        .as_ref()
        .and_then(|s| s.ready_replicas)
        .unwrap_or(0)
}

fn container_names(rs: &ReplicaSet) -> String {
    join_or_none(
        rs.spec
            .as_ref()
            .and_then(|s| s.template.as_ref())
            .and_then(|tpl| tpl.spec.as_ref())
            .into_iter()
            .flat_map(|pod| pod.containers.iter().map(|c| c.name.as_str())),
    )
}

#[derive(Debug, Clone)]
pub struct ReplicaSetPrinter;

impl Printer for ReplicaSetPrinter {
    type Object = ReplicaSet;
    type Configuration = ReplicaSetConfiguration;

    fn title(&self) -> &'static str {
        "ReplicaSets"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any replica sets"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, rs: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        let status = format!("{}/{}", ready_replicas(rs), desired_replicas(rs));

        Ok(row([
            ("Name", name_link(rs, options)),
            ("Labels", labels(rs)),
            ("Status", text(status)),
            ("Age", age(rs)),
            ("Containers", text(container_names(rs))),
            ("Selector", selectors(rs.spec.as_ref().map(|s| &s.selector))),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        ReplicaSetConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct ReplicaSetConfiguration {
    rs: Option<ReplicaSet>,
}

impl ReplicaSetConfiguration {
    pub fn new(rs: Option<ReplicaSet>) -> Self {
        Self { rs }
    }
}

impl Configuration for ReplicaSetConfiguration {
    fn create(&self, options: &PrinterOptions) -> PrintResult<Summary> {
        let rs = self
            .rs
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("replica set is nil".into()))?;

        let mut sections = SummarySections::new();
        sections.add("Controlled By", controlled_by(rs, options)?);
        sections.add_text(
            "Replica Status",
            format!(
                "Current {} / Desired {}",
                current_replicas(rs),
                desired_replicas(rs)
            ),
        );
        sections.add_text("Replicas", desired_replicas(rs).to_string());
        sections.add("Selectors", selectors(rs.spec.as_ref().map(|s| &s.selector)));

        Ok(sections.into_summary("Configuration"))
    }
}
