use k8s_openapi::api::autoscaling::v1::HorizontalPodAutoscaler;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, labels, name_link, resolve, row, text, Configuration, Printer, NONE,
};

/// Kubernetes defaults `spec.minReplicas` to 1.
pub const DEFAULT_MIN_REPLICAS: i32 = 1;

/// Live metrics are not wired in; the column carries this text.
pub const TARGETS_PLACEHOLDER: &str = "placeholder";

const COLUMNS: &[&str] = &[
    "Name",
    "Labels",
    "Targets",
    "Minimum Pods",
    "Maximum Pods",
    "Replicas",
    "Age",
];

pub fn min_replicas(hpa: &HorizontalPodAutoscaler) -> i32 {
    hpa.spec
        .as_ref()
        .and_then(|s| s.min_replicas)
        .unwrap_or(DEFAULT_MIN_REPLICAS)
}

pub fn max_replicas(hpa: &HorizontalPodAutoscaler) -> i32 {
    hpa.spec.as_ref().map(|s| s.max_replicas).unwrap_or(0)
}

fn current_replicas(hpa: &HorizontalPodAutoscaler) -> i32 {
    hpa.status.as_ref().map(|s| s.current_replicas).unwrap_or(0)
}

#[derive(Debug, Clone)]
pub struct HorizontalPodAutoscalerPrinter;

impl Printer for HorizontalPodAutoscalerPrinter {
    type Object = HorizontalPodAutoscaler;
    type Configuration = HorizontalPodAutoscalerConfiguration;

    fn title(&self) -> &'static str {
        "Horizontal Pod Autoscalers"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any horizontal pod autoscalers"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, hpa: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        Ok(row([
            ("Name", name_link(hpa, options)),
            ("Labels", labels(hpa)),
            ("Targets", text(TARGETS_PLACEHOLDER)),
            ("Minimum Pods", text(min_replicas(hpa))),
            ("Maximum Pods", text(max_replicas(hpa))),
            ("Replicas", text(current_replicas(hpa))),
            ("Age", age(hpa)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        HorizontalPodAutoscalerConfiguration::new(obj)
    }
}

/// Configuration summary: scale target, then replica bounds.
#[derive(Debug, Clone)]
pub struct HorizontalPodAutoscalerConfiguration {
    hpa: Option<HorizontalPodAutoscaler>,
}

impl HorizontalPodAutoscalerConfiguration {
    pub fn new(hpa: Option<HorizontalPodAutoscaler>) -> Self {
        Self { hpa }
    }
}

impl Configuration for HorizontalPodAutoscalerConfiguration {
    fn create(&self, options: &PrinterOptions) -> PrintResult<Summary> {
        let hpa = self
            .hpa
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("horizontal pod autoscaler is nil".into()))?;

        let reference = match hpa.spec.as_ref() {
            Some(spec) => {
                let target = &spec.scale_target_ref;
                resolve(
                    options,
                    target.api_version.as_deref().unwrap_or_default(),
                    &target.kind,
                    &target.name,
                )?
            }
            None => text(NONE),
        };

        let mut sections = SummarySections::new();
        sections.add("Reference", reference);
        sections.add_text("Min Replicas", min_replicas(hpa).to_string());
        sections.add_text("Max Replicas", max_replicas(hpa).to_string());

        Ok(sections.into_summary("Configuration"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::component::{table_cols, Component, Labels, Link, Table, Text, Timestamp};
    use crate::printers::testing::{fixed_time, options, FailingLinks, StaticLinks};
    use k8s_openapi::api::autoscaling::v1::{
        CrossVersionObjectReference, HorizontalPodAutoscalerSpec, HorizontalPodAutoscalerStatus,
    };
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};

    fn hpa(min: Option<i32>) -> HorizontalPodAutoscaler {
        HorizontalPodAutoscaler {
            metadata: ObjectMeta {
                name: Some("horizontalpodautoscaler".into()),
                namespace: Some("default".into()),
                creation_timestamp: Some(Time(fixed_time())),
                labels: Some(BTreeMap::from([("foo".to_string(), "bar".to_string())])),
                ..Default::default()
            },
            spec: Some(HorizontalPodAutoscalerSpec {
                min_replicas: min,
                max_replicas: 10,
                scale_target_ref: CrossVersionObjectReference {
                    api_version: Some("apps/v1".into()),
                    kind: "Deployment".into(),
                    name: "deployment".into(),
                },
                ..Default::default()
            }),
            status: Some(HorizontalPodAutoscalerStatus {
                current_replicas: 2,
                ..Default::default()
            }),
        }
    }

    fn deployment_links() -> StaticLinks {
        StaticLinks::new().with("namespace", "apps/v1", "Deployment", "deployment", "/deployment")
    }

    #[test]
    fn test_list_handler() {
        let got = HorizontalPodAutoscalerPrinter
            .list_handler(&[hpa(Some(1))], &options(FailingLinks))
            .unwrap();

        let mut expected = Table::new(
            "Horizontal Pod Autoscalers",
            "We couldn't find any horizontal pod autoscalers",
            table_cols(COLUMNS),
        );
        expected
            .add(row([
                (
                    "Name",
                    Link::new("", "horizontalpodautoscaler", "/path").into(),
                ),
                (
                    "Labels",
                    Labels::new(BTreeMap::from([("foo".to_string(), "bar".to_string())])).into(),
                ),
                ("Targets", Text::new("placeholder").into()),
                ("Minimum Pods", Text::new("1").into()),
                ("Maximum Pods", Text::new("10").into()),
                ("Replicas", Text::new("2").into()),
                ("Age", Timestamp::new(fixed_time()).into()),
            ]))
            .unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn test_list_handler_empty_list() {
        let got = HorizontalPodAutoscalerPrinter
            .list_handler(&[], &options(FailingLinks))
            .unwrap();
        assert!(got.is_empty());
        assert_eq!(got.columns, table_cols(COLUMNS));
    }

    #[test]
    fn test_list_handler_defaults_unset_fields() {
        let mut bare = hpa(None);
        bare.status = None;
        bare.metadata.labels = None;

        let got = HorizontalPodAutoscalerPrinter
            .list_handler(&[bare], &options(FailingLinks))
            .unwrap();
        let row = &got.rows[0];

        assert_eq!(row["Minimum Pods"], Component::from(Text::new("1")));
        assert_eq!(row["Replicas"], Component::from(Text::new("0")));
        assert_eq!(row["Labels"], Component::from(Labels::default()));
    }

    #[test]
    fn test_list_handler_is_idempotent() {
        let items = vec![hpa(Some(1)), hpa(Some(3))];
        let opts = options(FailingLinks);
        let first = HorizontalPodAutoscalerPrinter.list_handler(&items, &opts).unwrap();
        let second = HorizontalPodAutoscalerPrinter.list_handler(&items, &opts).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.rows[1]["Minimum Pods"], Component::from(Text::new("3")));
    }

    #[test]
    fn test_configuration() {
        let got = HorizontalPodAutoscalerConfiguration::new(Some(hpa(Some(1))))
            .create(&options(deployment_links()))
            .unwrap();

        let mut expected = SummarySections::new();
        expected.add("Reference", Link::new("", "deployment", "/deployment"));
        expected.add_text("Min Replicas", "1");
        expected.add_text("Max Replicas", "10");

        assert_eq!(got, expected.into_summary("Configuration"));
    }

    #[test]
    fn test_configuration_default_min_matches_list() {
        let got = HorizontalPodAutoscalerConfiguration::new(Some(hpa(None)))
            .create(&options(deployment_links()))
            .unwrap();
        assert_eq!(got.section("Min Replicas"), Some(&Component::from(Text::new("1"))));
    }

    #[test]
    fn test_configuration_nil_object() {
        let err = HorizontalPodAutoscalerConfiguration::new(None)
            .create(&options(deployment_links()))
            .unwrap_err();
        assert!(matches!(err, PrinterError::InvalidInput(_)));
    }

    #[test]
    fn test_configuration_resolver_failure() {
        let err = HorizontalPodAutoscalerConfiguration::new(Some(hpa(Some(1))))
            .create(&options(FailingLinks))
            .unwrap_err();
        assert!(matches!(err, PrinterError::Link(_)));
    }

    #[test]
    fn test_configuration_resolves_in_current_namespace() {
        let config = HorizontalPodAutoscalerConfiguration::new(Some(hpa(Some(1))));
        let opts = options(deployment_links());

        assert!(config.create(&opts).is_ok());
        let err = config.create(&opts.with_namespace("other")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_configuration_without_spec() {
        let mut bare = hpa(None);
        bare.spec = None;
        let got = HorizontalPodAutoscalerConfiguration::new(Some(bare))
            .create(&options(FailingLinks))
            .unwrap();
        let headers: Vec<_> = got.sections.iter().map(|s| s.header.as_str()).collect();
        assert_eq!(headers, vec!["Reference", "Min Replicas", "Max Replicas"]);
        assert_eq!(got.section("Reference"), Some(&Component::from(Text::new(NONE))));
        assert_eq!(got.section("Max Replicas"), Some(&Component::from(Text::new("0"))));
    }
}
