use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Clone, ToSchema)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl PaginationQuery {
    /// Zero-based offset of the first item on the requested page.
    /// Pages are 1-indexed; a page of 0 is treated as page 1.
    pub fn offset(&self) -> usize {
        ((self.page.max(1) - 1) as usize) * self.per_page as usize
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

fn default_page() -> u32 {
    1
}
fn default_per_page() -> u32 {
    10
}
