use std::collections::BTreeSet;

use k8s_openapi::api::networking::v1::{HTTPIngressPath, Ingress};

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, join_or_none, labels, name_link, resolve, row, text, Configuration, Printer, NONE,
};

const COLUMNS: &[&str] = &["Name", "Labels", "Class", "Hosts", "Address", "Ports", "Age"];

/// Hosts shown in a row before the rest collapse into a count.
const MAX_LISTED_HOSTS: usize = 4;

fn class(ing: &Ingress) -> String {
    let by_spec = ing.spec.as_ref().and_then(|s| s.ingress_class_name.clone());
    let by_annotation = ing
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get("kubernetes.io/ingress.class").cloned());

    by_spec.or(by_annotation).unwrap_or_else(|| NONE.to_string())
}

fn hosts(ing: &Ingress) -> String {
    let hosts: Vec<&str> = ing
        .spec
        .as_ref()
        .and_then(|s| s.rules.as_ref())
        .into_iter()
        .flatten()
        .filter_map(|rule| rule.host.as_deref())
        .collect();

    if hosts.len() > MAX_LISTED_HOSTS {
        format!(
            "{}, +{} more...",
            hosts[..MAX_LISTED_HOSTS].join(", "),
            hosts.len() - MAX_LISTED_HOSTS
        )
    } else {
        join_or_none(hosts)
    }
}

fn address(ing: &Ingress) -> String {
    join_or_none(
        ing.status
            .as_ref()
            .and_then(|s| s.load_balancer.as_ref())
            .and_then(|lb| lb.ingress.as_ref())
            .into_iter()
            .flatten()
            .filter_map(|item| item.hostname.as_deref().or(item.ip.as_deref())),
    )
}

fn ports(ing: &Ingress) -> String {
    let mut ports = BTreeSet::new();

    if let Some(spec) = &ing.spec {
        for rule in spec.rules.iter().flatten() {
            let Some(http) = &rule.http else { continue };
            for HTTPIngressPath { backend, .. } in &http.paths {
                if let Some(svc) = &backend.service {
                    ports.insert(svc.port.as_ref().and_then(|p| p.number).unwrap_or(80));
                }
            }
        }
        if spec.tls.as_ref().is_some_and(|tls| !tls.is_empty()) {
            ports.insert(443);
        }
    }

    join_or_none(ports.into_iter().map(|p| p.to_string()))
}

fn tls_hosts(ing: &Ingress) -> String {
    join_or_none(
        ing.spec
            .as_ref()
            .and_then(|s| s.tls.as_ref())
            .into_iter()
            .flatten()
            .flat_map(|tls| tls.hosts.iter().flatten()),
    )
}

#[derive(Debug, Clone)]
pub struct IngressPrinter;

impl Printer for IngressPrinter {
    type Object = Ingress;
    type Configuration = IngressConfiguration;

    fn title(&self) -> &'static str {
        "Ingresses"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any ingresses"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, ing: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        Ok(row([
            ("Name", name_link(ing, options)),
            ("Labels", labels(ing)),
            ("Class", text(class(ing))),
            ("Hosts", text(hosts(ing))),
            ("Address", text(address(ing))),
            ("Ports", text(ports(ing))),
            ("Age", age(ing)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        IngressConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct IngressConfiguration {
    ing: Option<Ingress>,
}

impl IngressConfiguration {
    pub fn new(ing: Option<Ingress>) -> Self {
        Self { ing }
    }
}

impl Configuration for IngressConfiguration {
    fn create(&self, options: &PrinterOptions) -> PrintResult<Summary> {
        let ing = self
            .ing
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("ingress is nil".into()))?;

        let backend = ing
            .spec
            .as_ref()
            .and_then(|s| s.default_backend.as_ref())
            .and_then(|b| b.service.as_ref());
        let default_backend = match backend {
            Some(svc) => resolve(options, "v1", "Service", &svc.name)?,
            None => text(NONE),
        };

        let mut sections = SummarySections::new();
        sections.add("Default Backend", default_backend);
        sections.add_text("TLS Hosts", tls_hosts(ing));

        Ok(sections.into_summary("Configuration"))
    }
}
