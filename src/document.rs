use crate::{preferences::Preferences, task::Task};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
  pub tasks: Vec<Task>,
  pub next_id: u64,
  pub preferences: Preferences,
}

impl Default for Document {
  fn default() -> Self {
    Self {
      tasks: Vec::new(),
      next_id: 1,
      preferences: Preferences::default(),
    }
  }
}
