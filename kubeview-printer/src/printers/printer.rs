use std::fmt::Debug;

use k8s_openapi::api::core::v1::ObjectReference;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use k8s_openapi::serde_json::{self, Value};
use kube::core::DynamicObject;
use kube::core::{Resource, ResourceExt};
use rayon::prelude::*;
use serde::de::DeserializeOwned;

use crate::component::{
    table_cols, Component, Labels, Selectors, Summary, Table, TableRow, Text, Timestamp,
};
use crate::error::{PrintResult, PrinterError};
use crate::link::ObjectRef;
use crate::options::PrinterOptions;

/// Cell text for an absent optional value.
pub const NONE: &str = "<none>";
/// Cell text for a value that exists but cannot be determined.
pub const UNKNOWN: &str = "<unknown>";

/// Detail view of one bound object.
///
/// Binding happens in each kind's `new`; `create` can then run any number of
/// times under different options.
pub trait Configuration {
    fn create(&self, options: &PrinterOptions) -> PrintResult<Summary>;
}

pub trait Printer: Debug + Send + Sync {
    type Object: Resource<DynamicType = ()> + DeserializeOwned + Clone + Debug + Send + Sync;
    type Configuration: Configuration;

    fn title(&self) -> &'static str;

    /// Empty-state message for the list table.
    fn placeholder(&self) -> &'static str;

    fn columns(&self) -> &'static [&'static str];

    fn build_row(&self, obj: &Self::Object, options: &PrinterOptions) -> PrintResult<TableRow>;

    fn configuration(&self, obj: Option<Self::Object>) -> Self::Configuration;

    #[tracing::instrument(skip(self, items, options), fields(item_count = items.len()))]
    fn list_handler(&self, items: &[Self::Object], options: &PrinterOptions) -> PrintResult<Table> {
        let rows = items
            .par_iter()
            .map(|obj| self.build_row(obj, options))
            .collect::<PrintResult<Vec<_>>>()?;

        let mut table = Table::new(self.title(), self.placeholder(), table_cols(self.columns()));
        for row in rows {
            table.add(row)?;
        }

        Ok(table)
    }

    #[tracing::instrument(skip(self, items, options), fields(item_count = items.len()))]
    fn print_dynamic(&self, items: &[DynamicObject], options: &PrinterOptions) -> PrintResult<Table> {
        let typed = items
            .iter()
            .map(dynamic_to_typed::<Self::Object>)
            .collect::<PrintResult<Vec<_>>>()?;

        self.list_handler(&typed, options)
    }

    #[tracing::instrument(skip(self, obj, options))]
    fn configure_dynamic(
        &self,
        obj: Option<&DynamicObject>,
        options: &PrinterOptions,
    ) -> PrintResult<Summary> {
        let typed = obj.map(dynamic_to_typed::<Self::Object>).transpose()?;
        self.configuration(typed).create(options)
    }
}

/// Convert a dynamic object into the typed resource `K`.
///
/// Objects without type information are assumed to be a `K`.
pub fn dynamic_to_typed<K>(obj: &DynamicObject) -> PrintResult<K>
where
    K: Resource<DynamicType = ()> + DeserializeOwned,
{
    let api_version = K::api_version(&());
    let kind = K::kind(&());
    let expected = format!("{api_version} {kind}");
    let actual = match &obj.types {
        Some(types) => format!("{} {}", types.api_version, types.kind),
        None => "untyped object".to_string(),
    };

    if obj.types.is_some() && actual != expected {
        return Err(PrinterError::TypeMismatch { expected, actual });
    }

    let malformed = |source| PrinterError::Malformed {
        expected: expected.clone(),
        actual: actual.clone(),
        source,
    };

    let mut value = serde_json::to_value(obj).map_err(malformed)?;
    if let Value::Object(map) = &mut value {
        map.entry("apiVersion")
            .or_insert_with(|| Value::String(api_version.to_string()));
        map.entry("kind")
            .or_insert_with(|| Value::String(kind.to_string()));
    }

    serde_json::from_value(value).map_err(malformed)
}

pub fn text(value: impl ToString) -> Component {
    Text::new(value.to_string()).into()
}

pub fn name_link<K>(obj: &K, options: &PrinterOptions) -> Component
where
    K: Resource<DynamicType = ()>,
{
    options
        .paths()
        .path_for_object(&ObjectRef::from_resource(obj), &obj.name_any())
        .into()
}

pub fn labels<K: Resource>(obj: &K) -> Component {
    Labels::new(obj.labels().clone()).into()
}

pub fn age<K: Resource>(obj: &K) -> Component {
    match obj.meta().creation_timestamp.as_ref() {
        Some(ts) => Timestamp::new(ts.0).into(),
        None => text(UNKNOWN),
    }
}

pub fn selectors(selector: Option<&LabelSelector>) -> Component {
    selector
        .map(Selectors::from_label_selector)
        .unwrap_or_default()
        .into()
}

pub fn int_or_string(value: &IntOrString) -> String {
    match value {
        IntOrString::Int(n) => n.to_string(),
        IntOrString::String(s) => s.clone(),
    }
}

/// Comma-joined list, or [`NONE`] when empty.
pub fn join_or_none<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NONE.to_string()
    } else {
        joined
    }
}

/// Resolve a reference through the options' link resolver, scoped to the
/// options' namespace. Failure is returned as is.
#[tracing::instrument(skip(options), fields(namespace = options.namespace()))]
pub fn resolve(
    options: &PrinterOptions,
    api_version: &str,
    kind: &str,
    name: &str,
) -> PrintResult<Component> {
    let link = options
        .link()
        .for_gvk(options.namespace(), api_version, kind, name, name)?;
    tracing::debug!(reference = %link.reference, "resolved reference");
    Ok(link.into())
}

/// Link to the object's controlling owner, or [`NONE`] when it has none.
pub fn controlled_by<K: Resource>(obj: &K, options: &PrinterOptions) -> PrintResult<Component> {
    match obj.owner_references().iter().find(|r| r.controller == Some(true)) {
        Some(owner) => resolve(options, &owner.api_version, &owner.kind, &owner.name),
        None => Ok(text(NONE)),
    }
}

pub fn object_reference_names(refs: Option<&Vec<ObjectReference>>) -> String {
    join_or_none(refs.into_iter().flatten().filter_map(|r| r.name.as_deref()))
}

/// Shorthand used by printers to build a row in column order.
pub fn row<const N: usize>(cells: [(&str, Component); N]) -> TableRow {
    cells
        .into_iter()
        .map(|(col, cell)| (col.to_string(), cell))
        .collect()
}
