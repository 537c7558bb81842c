//! Renderable view components.
//!
//! Printers produce trees of these values; the web layer serializes them into
//! the UI payload. Every component is a plain value: built once, compared
//! structurally, never mutated after a printer hands it back.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use serde::Serialize;

use crate::error::{PrintResult, PrinterError};

/// A single renderable node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "config", rename_all = "camelCase")]
pub enum Component {
    Text(Text),
    Link(Link),
    Labels(Labels),
    Selectors(Selectors),
    Timestamp(Timestamp),
    Table(Table),
    Summary(Summary),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Navigable reference to another view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub text: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

impl Link {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            reference: reference.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub labels: BTreeMap<String, String>,
}

impl Labels {
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Selector {
    Label {
        key: String,
        value: String,
    },
    Expression {
        key: String,
        operator: String,
        values: Vec<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selectors {
    pub selectors: Vec<Selector>,
}

impl Selectors {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    /// Plain `key=value` selectors, as found on services and pod templates.
    pub fn from_labels(labels: &BTreeMap<String, String>) -> Self {
        Self::new(
            labels
                .iter()
                .map(|(key, value)| Selector::Label {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        )
    }

    /// Match labels first, then match expressions, both in declaration order.
    pub fn from_label_selector(selector: &LabelSelector) -> Self {
        let mut out = selector
            .match_labels
            .as_ref()
            .map(|labels| Self::from_labels(labels).selectors)
            .unwrap_or_default();

        for expr in selector.match_expressions.iter().flatten() {
            out.push(Selector::Expression {
                key: expr.key.clone(),
                operator: expr.operator.clone(),
                values: expr.values.clone().unwrap_or_default(),
            });
        }

        Self::new(out)
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// An instant; formatting it ("3d", "2019-01-01 ...") is left to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timestamp {
    pub timestamp: DateTime<Utc>,
}

impl Timestamp {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCol {
    pub name: String,
    pub accessor: String,
}

/// Build a column list where each accessor equals the header text.
pub fn table_cols(names: &[&str]) -> Vec<TableCol> {
    names
        .iter()
        .map(|name| TableCol {
            name: (*name).to_string(),
            accessor: (*name).to_string(),
        })
        .collect()
}

/// One table row, keyed by column accessor.
pub type TableRow = BTreeMap<String, Component>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    /// Shown instead of the table body when there are no rows.
    pub placeholder: String,
    pub columns: Vec<TableCol>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(
        title: impl Into<String>,
        placeholder: impl Into<String>,
        columns: Vec<TableCol>,
    ) -> Self {
        Self {
            title: title.into(),
            placeholder: placeholder.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. The row must carry exactly the declared columns.
    pub fn add(&mut self, row: TableRow) -> PrintResult<()> {
        if let Some(col) = self
            .columns
            .iter()
            .find(|col| !row.contains_key(&col.accessor))
        {
            return Err(PrinterError::RowShape {
                table: self.title.clone(),
                detail: format!("missing column {:?}", col.accessor),
            });
        }

        if let Some(key) = row
            .keys()
            .find(|key| !self.columns.iter().any(|col| &col.accessor == *key))
        {
            return Err(PrinterError::RowShape {
                table: self.title.clone(),
                detail: format!("undeclared column {key:?}"),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySection {
    pub header: String,
    pub content: Component,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub title: String,
    pub sections: Vec<SummarySection>,
}

impl Summary {
    pub fn new(title: impl Into<String>, sections: Vec<SummarySection>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    pub fn section(&self, header: &str) -> Option<&Component> {
        self.sections
            .iter()
            .find(|s| s.header == header)
            .map(|s| &s.content)
    }
}

/// Ordered builder for summary sections.
#[derive(Debug, Default)]
pub struct SummarySections(Vec<SummarySection>);

impl SummarySections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, header: impl Into<String>, content: impl Into<Component>) {
        self.0.push(SummarySection {
            header: header.into(),
            content: content.into(),
        });
    }

    pub fn add_text(&mut self, header: impl Into<String>, text: impl Into<String>) {
        self.add(header, Text::new(text));
    }

    pub fn into_summary(self, title: impl Into<String>) -> Summary {
        Summary::new(title, self.0)
    }
}

macro_rules! impl_from_component {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Component {
                fn from(value: $variant) -> Self {
                    Component::$variant(value)
                }
            }
        )*
    };
}

impl_from_component!(Text, Link, Labels, Selectors, Timestamp, Table, Summary);
