use k8s_openapi::api::core::v1::Secret;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, join_or_none, labels, name_link, row, text, Configuration, Printer,
};

pub const DEFAULT_TYPE: &str = "Opaque";

const COLUMNS: &[&str] = &["Name", "Labels", "Type", "Data", "Age"];

pub fn secret_type(secret: &Secret) -> String {
    secret
        .type_
        .clone()
        .unwrap_or_else(|| DEFAULT_TYPE.to_string())
}

#[derive(Debug, Clone)]
pub struct SecretPrinter;

impl Printer for SecretPrinter {
    type Object = Secret;
    type Configuration = SecretConfiguration;

    fn title(&self) -> &'static str {
        "Secrets"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any secrets"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, secret: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        let data = secret.data.as_ref().map_or(0, |d| d.len());

        Ok(row([
            ("Name", name_link(secret, options)),
            ("Labels", labels(secret)),
            ("Type", text(secret_type(secret))),
            ("Data", text(data)),
            ("Age", age(secret)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        SecretConfiguration::new(obj)
    }
}

/// Key names only; secret values never reach a component.
#[derive(Debug, Clone)]
pub struct SecretConfiguration {
    secret: Option<Secret>,
}

impl SecretConfiguration {
    pub fn new(secret: Option<Secret>) -> Self {
        Self { secret }
    }
}

impl Configuration for SecretConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("secret is nil".into()))?;

        let mut sections = SummarySections::new();
        sections.add_text("Type", secret_type(secret));
        sections.add_text(
            "Data Keys",
            join_or_none(secret.data.iter().flat_map(|d| d.keys())),
        );

        Ok(sections.into_summary("Configuration"))
    }
}
