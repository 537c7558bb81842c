use k8s_openapi::api::batch::v1::Job;

use crate::component::{Summary, SummarySections, TableRow};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{
    age, controlled_by, labels, name_link, row, text, Configuration, Printer,
};

pub const DEFAULT_COMPLETIONS: i32 = 1;
pub const DEFAULT_PARALLELISM: i32 = 1;
pub const DEFAULT_BACKOFF_LIMIT: i32 = 6;

const COLUMNS: &[&str] = &["Name", "Labels", "Completions", "Succeeded", "Age"];

pub fn completions(job: &Job) -> i32 {
    job.spec
        .as_ref()
        .and_then(|s| s.completions)
        .unwrap_or(DEFAULT_COMPLETIONS)
}

#[derive(Debug, Clone)]
pub struct JobPrinter;

impl Printer for JobPrinter {
    type Object = Job;
    type Configuration = JobConfiguration;

    fn title(&self) -> &'static str {
        "Jobs"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any jobs"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, job: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        let succeeded = job.status.as_ref().and_then(|s| s.succeeded).unwrap_or(0);

        Ok(row([
            ("Name", name_link(job, options)),
            ("Labels", labels(job)),
            ("Completions", text(completions(job))),
            ("Succeeded", text(succeeded)),
            ("Age", age(job)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        JobConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct JobConfiguration {
    job: Option<Job>,
}

impl JobConfiguration {
    pub fn new(job: Option<Job>) -> Self {
        Self { job }
    }
}

impl Configuration for JobConfiguration {
    fn create(&self, options: &PrinterOptions) -> PrintResult<Summary> {
        let job = self
            .job
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("job is nil".into()))?;
        let spec = job.spec.as_ref();

        let mut sections = SummarySections::new();
        sections.add("Controlled By", controlled_by(job, options)?);
        sections.add_text(
            "Back Off Limit",
            spec.and_then(|s| s.backoff_limit)
                .unwrap_or(DEFAULT_BACKOFF_LIMIT)
                .to_string(),
        );
        sections.add_text("Completions", completions(job).to_string());
        sections.add_text(
            "Parallelism",
            spec.and_then(|s| s.parallelism)
                .unwrap_or(DEFAULT_PARALLELISM)
                .to_string(),
        );

        Ok(sections.into_summary("Configuration"))
    }
}
