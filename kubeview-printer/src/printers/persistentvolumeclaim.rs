use k8s_openapi::api::core::v1::PersistentVolumeClaim;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, join_or_none, labels, name_link, resolve, row, text, Configuration, Printer, NONE,
};

pub const DEFAULT_VOLUME_MODE: &str = "Filesystem";

const COLUMNS: &[&str] = &[
    "Name",
    "Labels",
    "Status",
    "Volume",
    "Capacity",
    "Access Modes",
    "Storage Class",
    "Age",
];

fn phase(pvc: &PersistentVolumeClaim) -> String {
    pvc.status
        .as_ref()
        .and_then(|s| s.phase.clone())
        .unwrap_or_else(|| "Pending".to_string())
}

fn volume_name(pvc: &PersistentVolumeClaim) -> Option<&str> {
    pvc.spec
        .as_ref()
        .and_then(|s| s.volume_name.as_deref())
        .filter(|name| !name.is_empty())
}

/// Bound capacity from status, falling back to the requested size.
fn capacity(pvc: &PersistentVolumeClaim) -> String {
    pvc.status
        .as_ref()
        .and_then(|s| s.capacity.as_ref())
        .and_then(|c| c.get("storage"))
        .or_else(|| {
            pvc.spec
                .as_ref()
                .and_then(|s| s.resources.as_ref())
                .and_then(|r| r.requests.as_ref())
                .and_then(|r| r.get("storage"))
        })
        .map(|q| q.0.clone())
        .unwrap_or_else(|| NONE.to_string())
}

fn access_modes(pvc: &PersistentVolumeClaim) -> String {
    join_or_none(
        pvc.spec
            .as_ref()
            .and_then(|s| s.access_modes.as_ref())
            .into_iter()
            .flatten()
            .map(|mode| match mode.as_str() {
                "ReadWriteOnce" => "RWO",
                "ReadOnlyMany" => "ROX",
                "ReadWriteMany" => "RWX",
                "ReadWriteOncePod" => "RWOP",
                other => other,
            }),
    )
}

fn storage_class(pvc: &PersistentVolumeClaim) -> String {
    pvc.spec
        .as_ref()
        .and_then(|s| s.storage_class_name.clone())
        .unwrap_or_else(|| NONE.to_string())
}

#[derive(Debug, Clone)]
pub struct PersistentVolumeClaimPrinter;

impl Printer for PersistentVolumeClaimPrinter {
    type Object = PersistentVolumeClaim;
    type Configuration = PersistentVolumeClaimConfiguration;

    fn title(&self) -> &'static str {
        "Persistent Volume Claims"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any persistent volume claims"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, pvc: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        Ok(row([
            ("Name", name_link(pvc, options)),
            ("Labels", labels(pvc)),
            ("Status", text(phase(pvc))),
            ("Volume", text(volume_name(pvc).unwrap_or(NONE))),
            ("Capacity", text(capacity(pvc))),
            ("Access Modes", text(access_modes(pvc))),
            ("Storage Class", text(storage_class(pvc))),
            ("Age", age(pvc)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        PersistentVolumeClaimConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct PersistentVolumeClaimConfiguration {
    pvc: Option<PersistentVolumeClaim>,
}

impl PersistentVolumeClaimConfiguration {
    pub fn new(pvc: Option<PersistentVolumeClaim>) -> Self {
        Self { pvc }
    }
}

impl Configuration for PersistentVolumeClaimConfiguration {
    fn create(&self, options: &PrinterOptions) -> PrintResult<Summary> {
        let pvc = self
            .pvc
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("persistent volume claim is nil".into()))?;

        let bound = match volume_name(pvc) {
            Some(name) => resolve(options, "v1", "PersistentVolume", name)?,
            None => text(NONE),
        };

        let mut sections = SummarySections::new();
        sections.add_text(
            "Volume Mode",
            pvc.spec
                .as_ref()
                .and_then(|s| s.volume_mode.clone())
                .unwrap_or_else(|| DEFAULT_VOLUME_MODE.to_string()),
        );
        sections.add_text("Access Modes", access_modes(pvc));
        sections.add_text("Capacity", capacity(pvc));
        sections.add_text("Storage Class", storage_class(pvc));
        sections.add("Bound Volume", bound);

        Ok(sections.into_summary("Configuration"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::component::{Component, Link, Text};
    use crate::printers::testing::{options, FailingLinks, StaticLinks};
    use k8s_openapi::api::core::v1::{
        PersistentVolumeClaimSpec, PersistentVolumeClaimStatus, VolumeResourceRequirements,
    };
    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

    fn claim(volume: Option<&str>) -> PersistentVolumeClaim {
        PersistentVolumeClaim {
            spec: Some(PersistentVolumeClaimSpec {
                access_modes: Some(vec!["ReadWriteOnce".into(), "ReadOnlyMany".into()]),
                resources: Some(VolumeResourceRequirements {
                    requests: Some(BTreeMap::from([(
                        "storage".to_string(),
                        Quantity("5Gi".into()),
                    )])),
                    ..Default::default()
                }),
                storage_class_name: Some("standard".into()),
                volume_name: volume.map(str::to_string),
                ..Default::default()
            }),
            status: volume.map(|_| PersistentVolumeClaimStatus {
                phase: Some("Bound".into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_row_pending_claim() {
        let row = PersistentVolumeClaimPrinter
            .build_row(&claim(None), &options(FailingLinks))
            .unwrap();

        assert_eq!(row["Status"], Component::from(Text::new("Pending")));
        assert_eq!(row["Volume"], Component::from(Text::new(NONE)));
        assert_eq!(row["Capacity"], Component::from(Text::new("5Gi")));
        assert_eq!(row["Access Modes"], Component::from(Text::new("RWO, ROX")));
    }

    #[test]
    fn test_configuration_bound_volume() {
        let links = StaticLinks::new().with("namespace", "v1", "PersistentVolume", "pv-1", "/pv-1");
        let got = PersistentVolumeClaimConfiguration::new(Some(claim(Some("pv-1"))))
            .create(&options(links))
            .unwrap();

        assert_eq!(
            got.section("Bound Volume"),
            Some(&Component::from(Link::new("", "pv-1", "/pv-1")))
        );
        assert_eq!(got.section("Volume Mode"), Some(&Component::from(Text::new("Filesystem"))));
    }

    #[test]
    fn test_configuration_unbound_skips_resolver() {
        let got = PersistentVolumeClaimConfiguration::new(Some(claim(None)))
            .create(&options(FailingLinks))
            .unwrap();
        assert_eq!(got.section("Bound Volume"), Some(&Component::from(Text::new(NONE))));
    }
}
