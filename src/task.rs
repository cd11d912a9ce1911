#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Pending,
  Completed,
}

impl std::fmt::Display for Status {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Status::Pending => write!(f, "pending"),
      Status::Completed => write!(f, "completed"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  id: u64,
  title: String,
  due_date: String,
  status: Status,
}

impl Task {
  pub fn new(id: u64, title: &str, due_date: &str) -> Self {
    Self {
      id,
      title: title.to_owned(),
      due_date: due_date.to_owned(),
      status: Status::Pending,
    }
  }

  pub fn id(&self) -> u64 {
    self.id
  }

  pub fn title(&self) -> &str {
    self.title.as_str()
  }

  pub fn due_date(&self) -> &str {
    self.due_date.as_str()
  }

  pub fn status(&self) -> Status {
    self.status
  }

  pub fn is_completed(&self) -> bool {
    self.status == Status::Completed
  }

  pub fn complete(&mut self) {
    self.status = Status::Completed;
  }

  pub fn set_title(&mut self, title: &str) {
    self.title = title.to_owned();
  }

  pub fn set_due_date(&mut self, due_date: &str) {
    self.due_date = due_date.to_owned();
  }
}
