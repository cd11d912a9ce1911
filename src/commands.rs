use colored::Colorize;

use crate::{
  console::Prompt,
  error::Error,
  manager::{Completion, TaskManager},
  viewer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Stop,
}

// help prints these in table order
pub const COMMANDS: [(&str, &str); 9] = [
  ("add-task", "add a new task"),
  ("list-tasks", "list tasks, respects the display filter"),
  ("complete-task", "mark a task as completed, by id or exact title"),
  ("update-task", "update title or due date of a task, by id or exact title"),
  ("delete-task", "delete a task, by id or exact title"),
  ("search-tasks", "search tasks by title or due date"),
  ("set-preference", "set the display filter"),
  ("help", "show this help message"),
  ("exit", "exit the application"),
];

pub fn dispatch(line: &str, manager: &mut TaskManager, prompt: &mut dyn Prompt) -> Flow {
  match line {
    "add-task" => add_task(manager, prompt),
    "list-tasks" => list_tasks(manager),
    "complete-task" => complete_task(manager, prompt),
    "update-task" => update_task(manager, prompt),
    "delete-task" => delete_task(manager, prompt),
    "search-tasks" => search_tasks(manager, prompt),
    "set-preference" => set_preference(manager, prompt),
    "help" => show_help(),
    "exit" => {
      println!("exiting task manager, goodbye");
      return Flow::Stop;
    }
    unknown => println!(
      "unknown command: {:?}, type 'help' to see available commands",
      unknown
    ),
  };

  return Flow::Continue;
}

fn add_task(manager: &mut TaskManager, prompt: &mut dyn Prompt) {
  let title = prompt.ask("Enter task title: ").unwrap_or_default();
  if title.is_empty() {
    println!("{}", Error::EmptyTitle);
    return;
  }

  let due_date = prompt
    .ask("Enter due date (YYYY-MM-DD): ")
    .unwrap_or_default();

  match manager.add(title.as_str(), due_date.as_str()) {
    Ok(task) => println!("task {:?} added", task.title()),
    Err(err) => println!("{}", err),
  };
}

fn list_tasks(manager: &TaskManager) {
  let tasks = manager.list(manager.filter_status());
  viewer::print_tasks(&tasks);
}

fn complete_task(manager: &mut TaskManager, prompt: &mut dyn Prompt) {
  let identifier = prompt
    .ask("Enter task id or exact task title to mark as complete: ")
    .unwrap_or_default();

  match manager.complete(identifier.as_str()) {
    Ok(Completion::Done(task)) => println!("task {:?} marked as completed", task.title()),
    Ok(Completion::AlreadyDone(task)) => println!("task {:?} is already completed", task.title()),
    Err(err) => println!("{}", err),
  };
}

fn update_task(manager: &mut TaskManager, prompt: &mut dyn Prompt) {
  let identifier = prompt
    .ask("Enter task id or exact task title to update: ")
    .unwrap_or_default();
  if identifier.is_empty() {
    println!("{}", Error::EmptyIdentifier);
    return;
  }

  // resolve first so the prompts can show what is being kept
  let (current_title, current_due_date) = match manager.find_by_id_or_title(identifier.as_str()) {
    Some(task) => (task.title().to_owned(), task.due_date().to_owned()),
    None => {
      println!("{}", Error::NotFound);
      return;
    }
  };

  let new_title = prompt
    .ask(format!("Enter new title (leave empty to keep current: {:?}): ", current_title).as_str())
    .unwrap_or_default();
  let new_due_date = prompt
    .ask(
      format!(
        "Enter new due date (YYYY-MM-DD) (leave empty to keep current: {}): ",
        current_due_date
      )
      .as_str(),
    )
    .unwrap_or_default();

  let new_title = match new_title.is_empty() {
    true => None,
    false => Some(new_title.as_str()),
  };
  let new_due_date = match new_due_date.is_empty() {
    true => None,
    false => Some(new_due_date.as_str()),
  };

  match manager.update(identifier.as_str(), new_title, new_due_date) {
    Ok(task) => println!("task {:?} updated", task.title()),
    Err(err) => println!("{}", err),
  };
}

fn delete_task(manager: &mut TaskManager, prompt: &mut dyn Prompt) {
  let identifier = prompt
    .ask("Enter task id or exact task title to delete: ")
    .unwrap_or_default();

  match manager.delete(identifier.as_str()) {
    Ok(task) => println!("task {:?} deleted", task.title()),
    Err(err) => println!("{}", err),
  };
}

fn search_tasks(manager: &TaskManager, prompt: &mut dyn Prompt) {
  let keyword = prompt
    .ask("Enter keyword to search in title or exact due date (YYYY-MM-DD): ")
    .unwrap_or_default();

  match manager.search(keyword.as_str()) {
    Ok(found) => viewer::print_tasks(&found),
    Err(err) => println!("{}", err),
  };
}

fn set_preference(manager: &mut TaskManager, prompt: &mut dyn Prompt) {
  println!(
    "current filter: {} (options: all, pending, completed)",
    manager.filter_status()
  );
  let input = prompt
    .ask("Enter task display filter (all, pending, completed): ")
    .unwrap_or_default();

  match manager.set_filter(input.as_str()) {
    Ok(filter) => println!("preferences updated: filter = {}", filter),
    Err(err) => println!("{}", err),
  };
}

fn show_help() {
  println!();
  println!("available commands:");
  for (name, description) in COMMANDS.iter() {
    println!("  {}: {}", name.bold(), description);
  }
  println!();
}
