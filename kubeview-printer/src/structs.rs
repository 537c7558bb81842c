use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Gvk {
    pub k: String,
    pub v: String,
    #[serde(default)]
    pub g: String,
}

impl Gvk {
    /// `group/version`, or the bare version for the core group.
    pub fn api_version(&self) -> String {
        if self.g.is_empty() {
            self.v.clone()
        } else {
            format!("{}/{}", self.g, self.v)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrintTableArgs {
    pub gvk: Gvk,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrintSummaryArgs {
    pub gvk: Gvk,
    pub namespace: Option<String>,
}
