use colored::Colorize;

use crate::task::{Status, Task};

pub fn print_tasks(tasks: &[&Task]) {
  if tasks.is_empty() {
    println!("no tasks found");
    return;
  }

  println!();
  println!("{}", "ID | Title               | Due Date   | Status".bold());
  println!("---|---------------------|------------|---------");
  for task in tasks.iter() {
    println!("{}", format_task_row(task));
  }
  println!();
}

pub fn format_task_row(task: &Task) -> String {
  let status = match task.status() {
    Status::Pending => "pending".yellow(),
    Status::Completed => "completed".green(),
  };

  format!(
    "{id:<2} | {title:<19} | {due_date:<10} | {status}",
    id = task.id(),
    title = task.title(),
    due_date = task.due_date(),
    status = status,
  )
}
