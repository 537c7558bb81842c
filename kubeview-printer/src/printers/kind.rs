use std::collections::HashMap;
use std::sync::OnceLock;

use kube::core::{DynamicObject, GroupVersionKind, Resource};

use crate::component::{Summary, Table};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;

use super::{
    configmap::ConfigMapPrinter, cronjob::CronJobPrinter, daemonset::DaemonSetPrinter,
    deployment::DeploymentPrinter, horizontalpodautoscaler::HorizontalPodAutoscalerPrinter,
    ingress::IngressPrinter, job::JobPrinter, namespace::NamespacePrinter,
    persistentvolumeclaim::PersistentVolumeClaimPrinter, printer::Printer,
    replicaset::ReplicaSetPrinter, secret::SecretPrinter, service::ServicePrinter,
    serviceaccount::ServiceAccountPrinter, statefulset::StatefulSetPrinter,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PrinterKind {
    ConfigMap,
    CronJob,
    DaemonSet,
    Deployment,
    HorizontalPodAutoscaler,
    Ingress,
    Job,
    Namespace,
    PersistentVolumeClaim,
    ReplicaSet,
    Secret,
    Service,
    ServiceAccount,
    StatefulSet,
}

/// Binds `$p` to the concrete printer for `$kind` and evaluates `$body`.
macro_rules! dispatch {
    ($kind:expr, $p:ident => $body:expr) => {
        match $kind {
            PrinterKind::ConfigMap => { let $p = &ConfigMapPrinter; $body }
            PrinterKind::CronJob => { let $p = &CronJobPrinter; $body }
            PrinterKind::DaemonSet => { let $p = &DaemonSetPrinter; $body }
            PrinterKind::Deployment => { let $p = &DeploymentPrinter; $body }
            PrinterKind::HorizontalPodAutoscaler => {
                let $p = &HorizontalPodAutoscalerPrinter;
                $body
            }
            PrinterKind::Ingress => { let $p = &IngressPrinter; $body }
            PrinterKind::Job => { let $p = &JobPrinter; $body }
            PrinterKind::Namespace => { let $p = &NamespacePrinter; $body }
            PrinterKind::PersistentVolumeClaim => {
                let $p = &PersistentVolumeClaimPrinter;
                $body
            }
            PrinterKind::ReplicaSet => { let $p = &ReplicaSetPrinter; $body }
            PrinterKind::Secret => { let $p = &SecretPrinter; $body }
            PrinterKind::Service => { let $p = &ServicePrinter; $body }
            PrinterKind::ServiceAccount => { let $p = &ServiceAccountPrinter; $body }
            PrinterKind::StatefulSet => { let $p = &StatefulSetPrinter; $body }
        }
    };
}

fn gvk_of<P: Printer>(_printer: &P) -> GroupVersionKind {
    GroupVersionKind::gvk(
        &<P::Object as Resource>::group(&()),
        &<P::Object as Resource>::version(&()),
        &<P::Object as Resource>::kind(&()),
    )
}

static REGISTRY: OnceLock<HashMap<GroupVersionKind, PrinterKind>> = OnceLock::new();

fn registry() -> &'static HashMap<GroupVersionKind, PrinterKind> {
    REGISTRY.get_or_init(|| PrinterKind::ALL.iter().map(|k| (k.gvk(), *k)).collect())
}

impl PrinterKind {
    pub const ALL: [PrinterKind; 14] = [
        Self::ConfigMap,
        Self::CronJob,
        Self::DaemonSet,
        Self::Deployment,
        Self::HorizontalPodAutoscaler,
        Self::Ingress,
        Self::Job,
        Self::Namespace,
        Self::PersistentVolumeClaim,
        Self::ReplicaSet,
        Self::Secret,
        Self::Service,
        Self::ServiceAccount,
        Self::StatefulSet,
    ];

    /// Group, version and kind of the object this printer renders.
    pub fn gvk(&self) -> GroupVersionKind {
        dispatch!(self, p => gvk_of(p))
    }

    pub fn for_gvk(gvk: &GroupVersionKind) -> Option<Self> {
        registry().get(gvk).copied()
    }

    /// Lookup by a `group/version` (or bare core `version`) string.
    pub fn for_api_version(api_version: &str, kind: &str) -> Option<Self> {
        let (group, version) = api_version.split_once('/').unwrap_or(("", api_version));
        Self::for_gvk(&GroupVersionKind::gvk(group, version, kind))
    }

    pub fn title(&self) -> &'static str {
        dispatch!(self, p => p.title())
    }

    pub fn columns(&self) -> &'static [&'static str] {
        dispatch!(self, p => p.columns())
    }

    #[tracing::instrument(skip(items, options), fields(item_count = items.len()))]
    pub fn print_list(
        &self,
        items: &[DynamicObject],
        options: &PrinterOptions,
    ) -> PrintResult<Table> {
        dispatch!(self, p => p.print_dynamic(items, options))
    }

    #[tracing::instrument(skip(object, options))]
    pub fn print_configuration(
        &self,
        object: Option<&DynamicObject>,
        options: &PrinterOptions,
    ) -> PrintResult<Summary> {
        dispatch!(self, p => p.configure_dynamic(object, options))
    }
}

#[tracing::instrument]
pub fn printer_for(api_version: &str, kind: &str) -> PrintResult<PrinterKind> {
    PrinterKind::for_api_version(api_version, kind).ok_or_else(|| PrinterError::Unregistered {
        api_version: api_version.to_string(),
        kind: kind.to_string(),
    })
}
