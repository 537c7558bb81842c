use k8s_openapi::api::core::v1::ServiceAccount;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, labels, name_link, object_reference_names, row, text, Configuration, Printer,
};

pub const DEFAULT_AUTOMOUNT_TOKEN: bool = true;

const COLUMNS: &[&str] = &["Name", "Labels", "Secrets", "Age"];

#[derive(Debug, Clone)]
pub struct ServiceAccountPrinter;

impl Printer for ServiceAccountPrinter {
    type Object = ServiceAccount;
    type Configuration = ServiceAccountConfiguration;

    fn title(&self) -> &'static str {
        "Service Accounts"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any service accounts"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, sa: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        let secrets = sa.secrets.as_ref().map_or(0, Vec::len);

        Ok(row([
            ("Name", name_link(sa, options)),
            ("Labels", labels(sa)),
            ("Secrets", text(secrets)),
            ("Age", age(sa)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        ServiceAccountConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct ServiceAccountConfiguration {
    sa: Option<ServiceAccount>,
}

impl ServiceAccountConfiguration {
    pub fn new(sa: Option<ServiceAccount>) -> Self {
        Self { sa }
    }
}

impl Configuration for ServiceAccountConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let sa = self
            .sa
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("service account is nil".into()))?;

        let mut sections = SummarySections::new();
        sections.add_text("Mountable Secrets", object_reference_names(sa.secrets.as_ref()));
        sections.add_text(
            "Automount Token",
            sa.automount_service_account_token
                .unwrap_or(DEFAULT_AUTOMOUNT_TOKEN)
                .to_string(),
        );

        Ok(sections.into_summary("Configuration"))
    }
}
