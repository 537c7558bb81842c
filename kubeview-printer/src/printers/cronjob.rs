use k8s_openapi::api::batch::v1::CronJob;

use crate::component::{Component, Summary, SummarySections, TableRow, Timestamp};
use crate::error::{PrintResult, PrinterError};
use crate::options::PrinterOptions;
use crate::printers::printer::{age, labels, name_link, row, text, Configuration, Printer, NONE};

pub const DEFAULT_CONCURRENCY_POLICY: &str = "Allow";
pub const DEFAULT_SUCCESSFUL_JOBS_HISTORY_LIMIT: i32 = 3;
pub const DEFAULT_FAILED_JOBS_HISTORY_LIMIT: i32 = 1;

const COLUMNS: &[&str] = &[
    "Name",
    "Labels",
    "Schedule",
    "Suspend",
    "Active",
    "Last Schedule",
    "Age",
];

fn schedule(cj: &CronJob) -> String {
    cj.spec
        .as_ref()
        .map(|s| s.schedule.clone())
        .unwrap_or_else(|| NONE.to_string())
}

pub fn suspended(cj: &CronJob) -> bool {
    cj.spec.as_ref().and_then(|s| s.suspend).unwrap_or(false)
}

fn last_schedule(cj: &CronJob) -> Component {
    cj.status
        .as_ref()
        .and_then(|s| s.last_schedule_time.as_ref())
        .map(|t| Component::from(Timestamp::new(t.0)))
        .unwrap_or_else(|| text(NONE))
}

#[derive(Debug, Clone)]
pub struct CronJobPrinter;

impl Printer for CronJobPrinter {
    type Object = CronJob;
    type Configuration = CronJobConfiguration;

    fn title(&self) -> &'static str {
        "CronJobs"
    }

    fn placeholder(&self) -> &'static str {
        "We couldn't find any cron jobs"
    }

    fn columns(&self) -> &'static [&'static str] {
        COLUMNS
    }

    fn build_row(&self, cj: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow> {
        let active = cj
            .status
            .as_ref()
            .and_then(|s| s.active.as_ref())
            .map_or(0, Vec::len);

        Ok(row([
            ("Name", name_link(cj, options)),
            ("Labels", labels(cj)),
            ("Schedule", text(schedule(cj))),
            ("Suspend", text(suspended(cj))),
            ("Active", text(active)),
            ("Last Schedule", last_schedule(cj)),
            ("Age", age(cj)),
        ]))
    }

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration {
        CronJobConfiguration::new(obj)
    }
}

#[derive(Debug, Clone)]
pub struct CronJobConfiguration {
    cj: Option<CronJob>,
}

impl CronJobConfiguration {
    pub fn new(cj: Option<CronJob>) -> Self {
        Self { cj }
    }
}

impl Configuration for CronJobConfiguration {
    fn create(&self, _options: &PrinterOptions) -> PrintResult<Summary> {
        let cj = self
            .cj
            .as_ref()
            .ok_or_else(|| PrinterError::InvalidInput("cron job is nil".into()))?;
        let spec = cj.spec.as_ref();

        let mut sections = SummarySections::new();
        sections.add_text("Schedule", schedule(cj));
        sections.add_text(
            "Concurrency Policy",
            spec.and_then(|s| s.concurrency_policy.clone())
                .unwrap_or_else(|| DEFAULT_CONCURRENCY_POLICY.to_string()),
        );
        sections.add_text("Suspend", suspended(cj).to_string());
        sections.add_text(
            "Starting Deadline Seconds",
            spec.and_then(|s| s.starting_deadline_seconds)
                .map_or_else(|| NONE.to_string(), |s| s.to_string()),
        );
        sections.add_text(
            "Successful Job History Limit",
            spec.and_then(|s| s.successful_jobs_history_limit)
                .unwrap_or(DEFAULT_SUCCESSFUL_JOBS_HISTORY_LIMIT)
                .to_string(),
        );
        sections.add_text(
            "Failed Job History Limit",
            spec.and_then(|s| s.failed_jobs_history_limit)
                .unwrap_or(DEFAULT_FAILED_JOBS_HISTORY_LIMIT)
                .to_string(),
        );

        Ok(sections.into_summary("Configuration"))
    }
}
