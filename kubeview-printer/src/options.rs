use std::fmt;
use std::sync::Arc;

use crate::link::{LinkResolver, PathProvider};

/// Ambient context threaded through one rendering pass.
#[derive(Clone)]
pub struct PrinterOptions {
    namespace: String,
    link: Arc<dyn LinkResolver>,
    paths: Arc<dyn PathProvider>,
}

impl PrinterOptions {
    pub fn new(
        namespace: impl Into<String>,
        link: Arc<dyn LinkResolver>,
        paths: Arc<dyn PathProvider>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            link,
            paths,
        }
    }

    /// Namespace cross-object references are resolved in.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn link(&self) -> &dyn LinkResolver {
        self.link.as_ref()
    }

    pub fn paths(&self) -> &dyn PathProvider {
        self.paths.as_ref()
    }

    /// Same capabilities, different namespace.
    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for PrinterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrinterOptions")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
