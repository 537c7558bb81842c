use k8s_openapi::api::core::v1::Service;

use crate::component::{Component, Selectors, Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, int_or_string, join_or_none, labels, name_link, row, text, Configuration, Printer, NONE,
};

pub const DEFAULT_TYPE: &str = "ClusterIP";
pub const DEFAULT_SESSION_AFFINITY: &str = "None";

const COLUMNS: &[&str] = &[
    "Name",
    "Labels",
    "Type",
    "Cluster IP",
    "External IP",
    "Ports",
    "Age",
    "Selector",
];

pub fn service_type(svc: &Service) -> String {
    svc.spec
        .as_ref()
        .and_then(|s| s.type_.clone())
        .unwrap_or_else(|| DEFAULT_TYPE.to_string())
}

fn cluster_ip(svc: &Service) -> String {
    match svc.spec.as_ref().and_then(|s| s.cluster_ip.as_deref()) {
        None | Some("") | Some("None") => NONE.to_string(),
        Some(ip) => ip.to_string(),
    }
}

fn external_ip(svc: &Service) -> String {
    let Some(spec) = svc.spec.as_ref() else {
        return NONE.to_string();
    };
    let external_ips = spec.external_ips.iter().flatten().cloned();

    match service_type(svc).as_str() {
        "NodePort" => join_or_none(external_ips),
        "LoadBalancer" => {
            let ingress = svc
                .status
                .as_ref()
                .and_then(|st| st.load_balancer.as_ref())
                .and_then(|lb| lb.ingress.clone())
                .unwrap_or_default()
                .into_iter()
                .filter_map(|i| i.ip.or(i.hostname));
            join_or_none(ingress.chain(external_ips))
        }
        "ExternalName" => spec
            .external_name
            .clone()
            .unwrap_or_else(|| NONE.to_string()),
        _ => NONE.to_string(),
    }
}

fn ports(svc: &Service) -> String {
    join_or_none(
        svc.spec
            .as_ref()
            .and_then(|s| s.ports.as_ref())
            .into_iter()
            .flatten()
            .map(|p| {
                let protocol = p.protocol.as_deref().unwrap_or("TCP");
                match p.node_port {
                    Some(node_port) => format!("{}:{}/{}", p.port, node_port, protocol),
                    None => format!("{}/{}", p.port, protocol),
                }
            }),
    )
}

fn target_ports(svc: &Service) -> String {
    join_or_none(
        svc.spec
            .as_ref()
            .and_then(|s| s.ports.as_ref())
            .into_iter()
            .flatten()
            .map(|p| {
                let target = p
                    .target_port
                    .as_ref()
                    .map(int_or_string)
                    .unwrap_or_else(|| p.port.to_string());
                format!("{}/{} -> {}", p.port, p.protocol.as_deref().unwrap_or("TCP"), target)
            }),
    )
}

fn selector(svc: &Service) -> Component {
    svc.spec
        .as_ref()
        .and_then(|s| s.selector.as_ref())
        .map(Selectors::from_labels)
        .unwrap_or_default()
        .into()
}

#[derive(Debug, Clone)]
pub struct ServicePrinter;

impl Printer for ServicePrinter {
    type Object = Service;
    type Configuration = ServiceConfiguration;

    fn title(&self) -> &'static str {
        "Services"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any services"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, svc: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        Ok(row([
            ("Name", name_link(svc, options)),
            ("Labels", labels(svc)),
            ("Type", text(service_type(svc))),
            ("Cluster IP", text(cluster_ip(svc))),
            ("External IP", text(external_ip(svc))),
            ("Ports", text(ports(svc))),
            ("Age", age(svc)),
            ("Selector", selector(svc)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        ServiceConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfiguration {
    svc: Option<Service>,
}

impl ServiceConfiguration {
    pub fn new(svc: Option<Service>) -> Self {
        Self { svc }
    }
}

impl Configuration for ServiceConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let svc = self
            .svc
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("service is nil".into()))?;
        let spec = svc.spec.as_ref();

        let mut sections = SummarySections::new();
        sections.add("Selectors", selector(svc));
        sections.add_text("Type", service_type(svc));
        sections.add_text("Ports", target_ports(svc));
        sections.add_text(
            "Session Affinity",
            spec.and_then(|s| s.session_affinity.clone())
                .unwrap_or_else(|| DEFAULT_SESSION_AFFINITY.to_string()),
        );
        sections.add_text("Cluster IP", cluster_ip(svc));
        sections.add_text(
            "External Name",
            spec.and_then(|s| s.external_name.clone())
                .unwrap_or_else(|| NONE.to_string()),
        );

        Ok(sections.into_summary("Configuration"))
    }
}
