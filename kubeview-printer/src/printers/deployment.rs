use k8s_openapi::api::apps::v1::Deployment;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, int_or_string, labels, name_link, row, selectors, text, Configuration, Printer, NONE,
};

pub const DEFAULT_REPLICAS: i32 = 1;
pub const DEFAULT_STRATEGY: &str = "RollingUpdate";
pub const DEFAULT_MAX_SURGE: &str = "25%";
pub const DEFAULT_MAX_UNAVAILABLE: &str = "25%";
pub const DEFAULT_MIN_READY_SECONDS: i32 = 0;
pub const DEFAULT_REVISION_HISTORY_LIMIT: i32 = 10;

const COLUMNS: &[&str] = &[
    "Name",
    "Labels",
    "Status",
    "Up-To-Date",
    "Available",
    "Age",
    "Selector",
];

pub fn replicas(deployment: &Deployment) -> i32 {
    deployment
        .spec
        .as_ref()
        .and_then(|s| s.replicas)
        .unwrap_or(DEFAULT_REPLICAS)
}

pub fn strategy(deployment: &Deployment) -> String {
    deployment
        .spec
        .as_ref()
        .and_then(|s| s.strategy.as_ref())
        .and_then(|s| s.type_.clone())
        .unwrap_or_else(|| DEFAULT_STRATEGY.to_string())
}

fn rolling_update(deployment: &Deployment) -> String {
    if strategy(deployment) != DEFAULT_STRATEGY {
        return NONE.to_string();
    }

    let rolling = deployment
        .spec
        .as_ref()
        .and_then(|s| s.strategy.as_ref())
        .and_then(|s| s.rolling_update.as_ref());
    let max_surge = rolling
        .and_then(|r| r.max_surge.as_ref())
        .map(int_or_string)
        .unwrap_or_else(|| DEFAULT_MAX_SURGE.to_string());
    let max_unavailable = rolling
        .and_then(|r| r.max_unavailable.as_ref())
        .map(int_or_string)
        .unwrap_or_else(|| DEFAULT_MAX_UNAVAILABLE.to_string());

    format!("Max Surge {max_surge}, Max Unavailable {max_unavailable}")
}

fn status(deployment: &Deployment) -> String {
    let available = deployment
        .status
        .as_ref()
        .and_then(|s| s.available_replicas)
        .unwrap_or(0);
    format!("{}/{}", available, replicas(deployment))
}

#[derive(Debug, Clone)]
pub struct DeploymentPrinter;

impl Printer for DeploymentPrinter {
    type Object = Deployment;
    type Configuration = DeploymentConfiguration;

    fn title(&self) -> &'static str {
        "Deployments"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any deployments"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, deployment: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        let up_to_date = deployment
            .status
            .as_ref()
            .and_then(|s| s.updated_replicas)
            .unwrap_or(0);
        let available = deployment
            .status
            .as_ref()
            .and_then(|s| s.available_replicas)
            .unwrap_or(0);

        Ok(row([
            ("Name", name_link(deployment, options)),
            ("Labels", labels(deployment)),
            ("Status", text(status(deployment))),
            ("Up-To-Date", text(up_to_date)),
            ("Available", text(available)),
            ("Age", age(deployment)),
            ("Selector", selectors(deployment.spec.as_ref().map(|s| &s.selector))),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        DeploymentConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct DeploymentConfiguration {
    deployment: Option<Deployment>,
}

impl DeploymentConfiguration {
    pub fn new(deployment: Option<Deployment>) -> Self {
        Self { deployment }
    }
}

impl Configuration for DeploymentConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let deployment = self
            .deployment
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("deployment is nil".into()))?;
        let spec = deployment.spec.as_ref();

        let mut sections = SummarySections::new();
        sections.add_text("Deployment Strategy", strategy(deployment));
        sections.add_text("Rolling Update Strategy", rolling_update(deployment));
        sections.add("Selectors", selectors(spec.map(|s| &s.selector)));
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
        sections.add_text("Replicas", replicas(deployment).to_string());

        Ok(sections.into_summary("Configuration"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::component::{Component, Selector, Selectors, Text};
    use crate::printers::testing::{options, FailingLinks};
    use k8s_openapi::api::apps::v1::{
        DeploymentSpec, DeploymentStatus, DeploymentStrategy, RollingUpdateDeployment,
    };
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
    use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

    fn deployment() -> Deployment {
        Deployment {
            metadata: ObjectMeta {
                name: Some("web".into()),
                namespace: Some("default".into()),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                replicas: Some(3),
                selector: LabelSelector {
                    match_labels: Some(BTreeMap::from([("app".to_string(), "web".to_string())])),
                    ..Default::default()
                },
                ..Default::default()
            }),
            status: Some(DeploymentStatus {
                available_replicas: Some(2),
                updated_replicas: Some(3),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_build_row() {
        let row = DeploymentPrinter
            .build_row(&deployment(), &options(FailingLinks))
            .unwrap();

        assert_eq!(row["Status"], Component::from(Text::new("2/3")));
        assert_eq!(row["Up-To-Date"], Component::from(Text::new("3")));
        assert_eq!(row["Available"], Component::from(Text::new("2")));
        assert_eq!(
            row["Selector"],
            Component::from(Selectors::new(vec![Selector::Label {
                key: "app".into(),
                value: "web".into(),
            }]))
        );
    }

    #[test]
    fn test_configuration_defaults() {
        let mut bare = deployment();
        if let Some(spec) = bare.spec.as_mut() {
            spec.replicas = None;
        }

        let got = DeploymentConfiguration::new(Some(bare))
            .create(&options(FailingLinks))
            .unwrap();

        let headers: Vec<_> = got.sections.iter().map(|s| s.header.as_str()).collect();
        assert_eq!(
            headers,
            vec![
                "Deployment Strategy",
                "Rolling Update Strategy",
                "Selectors",
                "Min Ready Seconds",
                "Revision History Limit",
                "Replicas",
            ]
        );
        assert_eq!(
            got.section("Rolling Update Strategy"),
            Some(&Component::from(Text::new(
                "Max Surge 25%, Max Unavailable 25%"
            )))
        );
        assert_eq!(got.section("Revision History Limit"), Some(&Component::from(Text::new("10"))));
        assert_eq!(got.section("Replicas"), Some(&Component::from(Text::new("1"))));
    }

    #[test]
    fn test_configuration_recreate_strategy() {
        let mut recreate = deployment();
        if let Some(spec) = recreate.spec.as_mut() {
            spec.strategy = Some(DeploymentStrategy {
                type_: Some("Recreate".into()),
                rolling_update: Some(RollingUpdateDeployment {
                    max_surge: Some(IntOrString::Int(1)),
                    ..Default::default()
                }),
            });
        }

        let got = DeploymentConfiguration::new(Some(recreate))
            .create(&options(FailingLinks))
            .unwrap();
        assert_eq!(got.section("Deployment Strategy"), Some(&Component::from(Text::new("Recreate"))));
        assert_eq!(got.section("Rolling Update Strategy"), Some(&Component::from(Text::new(NONE))));
    }

    #[test]
    fn test_configuration_nil_object() {
        let err = DeploymentConfiguration::new(None)
            .create(&options(FailingLinks))
            .unwrap_err();
        assert!(matches!(err, PrinterError::InvalidInput(_)));
    }
}
