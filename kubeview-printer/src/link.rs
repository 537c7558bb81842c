//! Capabilities printers use to turn object coordinates into links.
//!
//! Both traits are implemented outside this crate by whatever knows the
//! dashboard's URL layout. Printers only ever call through them.

use kube::core::{Resource, ResourceExt};
use thiserror::Error;

use crate::component::Link;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("{kind} {name:?} not found")]
    NotFound { kind: String, name: String },

    #[error("unable to resolve link: {0}")]
    Resolution(String),
}

/// Coordinates of an object a printer wants a link for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub api_version: String,
    pub kind: String,
    pub namespace: Option<String>,
    pub name: String,
}

impl ObjectRef {
    pub fn from_resource<K>(obj: &K) -> Self
    where
        K: Resource<DynamicType = ()>,
    {
        Self {
            api_version: K::api_version(&()).into_owned(),
            kind: K::kind(&()).into_owned(),
            namespace: obj.namespace(),
            name: obj.name_any(),
        }
    }
}

/// Resolves a cross-object reference (apiVersion/kind/name) into a link.
///
/// Implementations may perform I/O and own their timeout and retry policy.
pub trait LinkResolver: Send + Sync {
    fn for_gvk(
        &self,
        namespace: &str,
        api_version: &str,
        kind: &str,
        name: &str,
        title: &str,
    ) -> Result<Link, LinkError>;
}

/// Produces the link to an object's own detail view.
pub trait PathProvider: Send + Sync {
    fn path_for_object(&self, object: &ObjectRef, title: &str) -> Link;
}
