use k8s_openapi::api::core::v1::ConfigMap;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, join_or_none, labels, name_link, row, text, Configuration, Printer,
};

const COLUMNS: &[&str] = &["Name", "Labels", "Data", "Age"];

fn data_len(map: &ConfigMap) -> usize {
    map.data.as_ref().map_or(0, |d| d.len()) + map.binary_data.as_ref().map_or(0, |d| d.len())
}

#[derive(Debug, Clone)]
pub struct ConfigMapPrinter;

impl Printer for ConfigMapPrinter {
    type Object = ConfigMap;
    type Configuration = ConfigMapConfiguration;

    fn title(&self) -> &'static str {
        "Config Maps"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any config maps"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, map: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        Ok(row([
            ("Name", name_link(map, options)),
            ("Labels", labels(map)),
            ("Data", text(data_len(map))),
            ("Age", age(map)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        ConfigMapConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigMapConfiguration {
    map: Option<ConfigMap>,
}

impl ConfigMapConfiguration {
    pub fn new(map: Option<ConfigMap>) -> Self {
        Self { map }
    }
}

impl Configuration for ConfigMapConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let map = self
            .map
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("config map is nil".into()))?;

        let mut keys: Vec<&str> = map
            .data
            .iter()
            .flat_map(|d| d.keys())
            .chain(map.binary_data.iter().flat_map(|d| d.keys()))
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        let mut sections = SummarySections::new();
        sections.add_text("Data Keys", join_or_none(keys));

        Ok(sections.into_summary("Configuration"))
    }
}
