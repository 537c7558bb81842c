//! Printers that turn Kubernetes object snapshots into dashboard view
//! components: a table for a list of objects, a configuration summary for one.

use k8s_openapi::serde_json;
use kube::core::DynamicObject;
use tracing::{span, Level};

pub mod component;
pub mod error;
pub mod link;
pub mod log;
pub mod options;
pub mod printers;
pub mod structs;

pub use component::Component;
pub use error::{PrintResult, PrinterError};
pub use link::{LinkError, LinkResolver, ObjectRef, PathProvider};
pub use options::PrinterOptions;
pub use printers::{printer_for, Configuration, Printer, PrinterKind};

use structs::{PrintSummaryArgs, PrintTableArgs};

fn scoped(options: &PrinterOptions, namespace: Option<String>) -> PrinterOptions {
    match namespace {
        Some(ns) => options.with_namespace(ns),
        None => options.clone(),
    }
}

fn to_json(component: Component) -> PrintResult<String> {
    let _json_span = span!(Level::INFO, "json_convert").entered();
    serde_json::to_string(&component).map_err(PrinterError::Serialize)
}

fn logged<T>(op: &'static str, result: PrintResult<T>) -> PrintResult<T> {
    if let Err(err) = &result {
        tracing::error!(op, error = %err, "render failed");
    }
    result
}

fn table_json(
    json: &str,
    items: &[DynamicObject],
    options: &PrinterOptions,
) -> PrintResult<String> {
    let args: PrintTableArgs = serde_json::from_str(json).map_err(PrinterError::Args)?;
    let kind = printer_for(&args.gvk.api_version(), &args.gvk.k)?;
    let table = kind.print_list(items, &scoped(options, args.namespace))?;
    to_json(table.into())
}

fn summary_json(
    json: &str,
    object: Option<&DynamicObject>,
    options: &PrinterOptions,
) -> PrintResult<String> {
    let args: PrintSummaryArgs = serde_json::from_str(json).map_err(PrinterError::Args)?;
    let kind = printer_for(&args.gvk.api_version(), &args.gvk.k)?;
    let summary = kind.print_configuration(object, &scoped(options, args.namespace))?;
    to_json(summary.into())
}

/// Render `items` as the list table for the kind named in `json`.
#[tracing::instrument(skip(items, options), fields(item_count = items.len()))]
pub fn print_table(
    json: &str,
    items: &[DynamicObject],
    options: &PrinterOptions,
) -> PrintResult<String> {
    logged("print_table", table_json(json, items, options))
}

/// Render the configuration summary of `object` for the kind named in `json`.
#[tracing::instrument(skip(object, options))]
pub fn print_summary(
    json: &str,
    object: Option<&DynamicObject>,
    options: &PrinterOptions,
) -> PrintResult<String> {
    logged("print_summary", summary_json(json, object, options))
}
