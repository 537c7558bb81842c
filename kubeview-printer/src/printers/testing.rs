//! Test doubles for the link capabilities.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::component::Link;
use crate::link::{LinkError, LinkResolver, ObjectRef, PathProvider};
use crate::options::PrinterOptions;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap()
}

/// Every object links to the same path.
#[derive(Debug, Clone)]
pub struct FixedPath(pub &'static str);

impl PathProvider for FixedPath {
    fn path_for_object(&self, _object: &ObjectRef, title: &str) -> Link {
        Link::new("", title, self.0)
    }
}

type LinkKey = (String, String, String, String);

/// Answers only the references it was told about; anything else is not found.
#[derive(Debug, Clone, Default)]
pub struct StaticLinks {
    links: HashMap<LinkKey, Link>,
}

impl StaticLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        namespace: &str,
        api_version: &str,
        kind: &str,
        name: &str,
        reference: &str,
    ) -> Self {
        self.links.insert(
            (
                namespace.to_string(),
                api_version.to_string(),
                kind.to_string(),
                name.to_string(),
            ),
            Link::new("", name, reference),
        );
        self
    }
}

impl LinkResolver for StaticLinks {
    fn for_gvk(
        &self,
        namespace: &str,
        api_version: &str,
        kind: &str,
        name: &str,
        title: &str,
    ) -> Result<Link, LinkError> {
        let key = (
            namespace.to_string(),
            api_version.to_string(),
            kind.to_string(),
            name.to_string(),
        );
        match self.links.get(&key) {
            Some(link) if link.text == title => Ok(link.clone()),
            _ => Err(LinkError::NotFound {
                kind: kind.to_string(),
                name: name.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FailingLinks;

impl LinkResolver for FailingLinks {
    fn for_gvk(
        &self,
        _namespace: &str,
        _api_version: &str,
        _kind: &str,
        _name: &str,
        _title: &str,
    ) -> Result<Link, LinkError> {
        Err(LinkError::Resolution("resolver unavailable".into()))
    }
}

/// Options in namespace `namespace` with every object at `/path`.
pub fn options(link: impl LinkResolver + 'static) -> PrinterOptions {
    PrinterOptions::new("namespace", Arc::new(link), Arc::new(FixedPath("/path")))
}
