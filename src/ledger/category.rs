use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorises spending for budgeting and invoice breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: CategoryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub parent_id: Option<Uuid>,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            color: None,
            parent_id: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Supported category types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Expense,
    Income,
    Transfer,
}
