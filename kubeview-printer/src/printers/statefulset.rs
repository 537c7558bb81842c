use k8s_openapi::api::apps::v1::StatefulSet;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, labels, name_link, row, selectors, text, Configuration, Printer,
};

pub const DEFAULT_REPLICAS: i32 = 1;
pub const DEFAULT_UPDATE_STRATEGY: &str = "RollingUpdate";
pub const DEFAULT_POD_MANAGEMENT_POLICY: &str = "OrderedReady";

const COLUMNS: &[&str] = &["Name", "Labels", "Desired", "Current", "Age", "Selector"];

pub fn desired_replicas(sts: &StatefulSet) -> i32 {
    sts.spec
        .as_ref()
        .and_then(|s| s.replicas)
        .unwrap_or(DEFAULT_REPLICAS)
}

#[derive(Debug, Clone)]
pub struct StatefulSetPrinter;

impl Printer for StatefulSetPrinter {
    type Object = StatefulSet;
    type Configuration = StatefulSetConfiguration;

    fn title(&self) -> &'static str {
        "StatefulSets"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any stateful sets"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, sts: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        let current = sts.status.as_ref().map_or(0, |s| s.replicas);

        Ok(row([
            ("Name", name_link(sts, options)),
            ("Labels", labels(sts)),
            ("Desired", text(desired_replicas(sts))),
            ("Current", text(current)),
            ("Age", age(sts)),
            ("Selector", selectors(sts.spec.as_ref().map(|s| &s.selector))),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        StatefulSetConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct StatefulSetConfiguration {
    sts: Option<StatefulSet>,
}

impl StatefulSetConfiguration {
    pub fn new(sts: Option<StatefulSet>) -> Self {
        Self { sts }
    }
}

impl Configuration for StatefulSetConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let sts = self
            .sts
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("stateful set is nil".into()))?;
        let spec = sts.spec.as_ref();

        let update_strategy = spec
            .and_then(|s| s.update_strategy.as_ref())
            .and_then(|u| u.type_.clone())
            .unwrap_or_else(|| DEFAULT_UPDATE_STRATEGY.to_string());
        let pod_management = spec
            .and_then(|s| s.pod_management_policy.clone())
            .unwrap_or_else(|| DEFAULT_POD_MANAGEMENT_POLICY.to_string());

        let mut sections = SummarySections::new();
        sections.add_text("Update Strategy", update_strategy);
        sections.add_text("Pod Management Policy", pod_management);
        sections.add("Selectors", selectors(spec.map(|s| &s.selector)));
        sections.add_text("Replicas", desired_replicas(sts).to_string());

        Ok(sections.into_summary("Configuration"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, Text};
    use crate::printers::testing::{options, FailingLinks};
    use k8s_openapi::api::apps::v1::{StatefulSetSpec, StatefulSetStatus};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    #[test]
    fn test_build_row() {
        let sts = StatefulSet {
            metadata: ObjectMeta {
                name: Some("db".into()),
                ..Default::default()
            },
            spec: Some(StatefulSetSpec {
                replicas: Some(3),
                ..Default::default()
            }),
            status: Some(StatefulSetStatus {
                replicas: 2,
                ready_replicas: Some(2),
                ..Default::default()
            }),
        };

        let row = StatefulSetPrinter.build_row(&sts, &options(FailingLinks)).unwrap();
        assert_eq!(row["Desired"], Component::from(Text::new("3")));
        assert_eq!(row["Current"], Component::from(Text::new("2")));
    }

    #[test]
    fn test_current_counts_pods_not_ready() {
        let sts = StatefulSet {
            status: Some(StatefulSetStatus {
                replicas: 3,
                current_replicas: Some(3),
                ready_replicas: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        };

        let row = StatefulSetPrinter.build_row(&sts, &options(FailingLinks)).unwrap();
        assert_eq!(row["Current"], Component::from(Text::new("3")));
    }

    #[test]
    fn test_current_without_status() {
        let row = StatefulSetPrinter
            .build_row(&StatefulSet::default(), &options(FailingLinks))
            .unwrap();
        assert_eq!(row["Current"], Component::from(Text::new("0")));
    }

    #[test]
    fn test_configuration_defaults() {
        let got = StatefulSetConfiguration::new(Some(StatefulSet::default()))
            .create(&options(FailingLinks))
            .unwrap();

        assert_eq!(
            got.section("Update Strategy"),
            Some(&Component::from(Text::new("RollingUpdate")))
        );
        assert_eq!(
            got.section("Pod Management Policy"),
            Some(&Component::from(Text::new("OrderedReady")))
        );
        assert_eq!(got.section("Replicas"), Some(&Component::from(Text::new("1"))));
    }
}
