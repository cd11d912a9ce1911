use log::debug;

use crate::{
  date::is_valid_due_date,
  document::Document,
  error::Error,
  preferences::StatusFilter,
  storage::Storage,
  task::Task,
};

#[derive(Debug)]
pub enum Completion {
  Done(Task),
  AlreadyDone(Task),
}

pub struct TaskManager {
  storage: Box<dyn Storage>,
  document: Document,
}

impl TaskManager {
  pub fn new(mut storage: Box<dyn Storage>) -> Self {
    let document = match storage.load() {
      Ok(document) => document,
      Err(err) => {
        println!("load tasks err: {}", err);
        Document::default()
      }
    };

    debug!("task manager ready with {} tasks", document.tasks.len());

    Self { storage, document }
  }

  pub fn add(&mut self, title: &str, due_date: &str) -> Result<Task, Error> {
    let title = title.trim();
    if title.is_empty() {
      return Err(Error::EmptyTitle);
    }
    if !is_valid_due_date(due_date) {
      return Err(Error::InvalidDueDate);
    }

    let task = Task::new(self.document.next_id, title, due_date);
    self.document.next_id += 1;
    self.document.tasks.push(task.clone());
    self.flush();

    return Ok(task);
  }

  // an identifier that parses as a number resolves by id only; a task whose
  // title is that numeral is unreachable through this path
  pub fn find_by_id_or_title(&self, identifier: &str) -> Option<&Task> {
    let position = self.position_by_identifier(identifier)?;
    Some(&self.document.tasks[position])
  }

  pub fn complete(&mut self, identifier: &str) -> Result<Completion, Error> {
    let position = self.resolve(identifier)?;

    let task = &mut self.document.tasks[position];
    if task.is_completed() {
      return Ok(Completion::AlreadyDone(task.clone()));
    }

    task.complete();
    let task = task.clone();
    self.flush();

    return Ok(Completion::Done(task));
  }

  pub fn update(
    &mut self,
    identifier: &str,
    new_title: Option<&str>,
    new_due_date: Option<&str>,
  ) -> Result<Task, Error> {
    let position = self.resolve(identifier)?;

    if let Some(title) = new_title {
      if title.trim().is_empty() {
        return Err(Error::EmptyTitle);
      }
    }
    if let Some(due_date) = new_due_date {
      if !is_valid_due_date(due_date) {
        return Err(Error::InvalidDueDate);
      }
    }

    let task = &mut self.document.tasks[position];
    if let Some(title) = new_title {
      task.set_title(title.trim());
    }
    if let Some(due_date) = new_due_date {
      task.set_due_date(due_date);
    }

    let task = task.clone();
    self.flush();

    return Ok(task);
  }

  pub fn delete(&mut self, identifier: &str) -> Result<Task, Error> {
    let position = self.resolve(identifier)?;

    let task = self.document.tasks.remove(position);
    self.flush();

    return Ok(task);
  }

  pub fn list(&self, filter: StatusFilter) -> Vec<&Task> {
    self
      .document
      .tasks
      .iter()
      .filter(|task| filter.matches(task.status()))
      .collect()
  }

  // the display preference never applies here, search scans the full set
  pub fn search(&self, keyword: &str) -> Result<Vec<&Task>, Error> {
    if keyword.is_empty() {
      return Err(Error::EmptyKeyword);
    }

    let folded = keyword.to_lowercase();
    let found = self
      .document
      .tasks
      .iter()
      .filter(|task| task.title().to_lowercase().contains(folded.as_str()) || task.due_date() == keyword)
      .collect();

    return Ok(found);
  }

  pub fn filter_status(&self) -> StatusFilter {
    self.document.preferences.filter_status
  }

  pub fn set_filter(&mut self, input: &str) -> Result<StatusFilter, Error> {
    let filter: StatusFilter = input.parse()?;

    self.document.preferences.filter_status = filter;
    self.flush();

    return Ok(filter);
  }

  fn resolve(&self, identifier: &str) -> Result<usize, Error> {
    if identifier.is_empty() {
      return Err(Error::EmptyIdentifier);
    }

    self.position_by_identifier(identifier).ok_or(Error::NotFound)
  }

  fn position_by_identifier(&self, identifier: &str) -> Option<usize> {
    if let Ok(id) = identifier.parse::<u64>() {
      return self.document.tasks.iter().position(|task| task.id() == id);
    }

    self.document.tasks.iter().position(|task| task.title() == identifier)
  }

  // mutate in memory first, then attempt exactly one flush; a failed flush is
  // reported and the in-memory change stands
  fn flush(&mut self) {
    if let Err(err) = self.storage.save(&self.document) {
      println!("save tasks err: {}", err);
    }
  }
}
