use crate::{error::Error, task::Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
  All,
  Pending,
  Completed,
}

impl StatusFilter {
  pub fn matches(&self, status: Status) -> bool {
    match self {
      StatusFilter::All => true,
      StatusFilter::Pending => status == Status::Pending,
      StatusFilter::Completed => status == Status::Completed,
    }
  }
}

impl Default for StatusFilter {
  fn default() -> Self {
    StatusFilter::All
  }
}

impl std::fmt::Display for StatusFilter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      StatusFilter::All => write!(f, "all"),
      StatusFilter::Pending => write!(f, "pending"),
      StatusFilter::Completed => write!(f, "completed"),
    }
  }
}

impl std::str::FromStr for StatusFilter {
  type Err = Error;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    match input {
      "all" => Ok(StatusFilter::All),
      "pending" => Ok(StatusFilter::Pending),
      "completed" => Ok(StatusFilter::Completed),
      other => Err(Error::InvalidFilter(other.to_owned())),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
  pub filter_status: StatusFilter,
}
