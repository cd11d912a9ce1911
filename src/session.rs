use crate::{
  commands::{self, Flow},
  console::Prompt,
  manager::TaskManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
  Running,
  Stopped,
}

pub struct Session {
  manager: TaskManager,
  prompt: Box<dyn Prompt>,
  state: State,
}

impl Session {
  pub fn new(manager: TaskManager, prompt: Box<dyn Prompt>) -> Self {
    Self {
      manager,
      prompt,
      state: State::Running,
    }
  }

  pub fn manager(&self) -> &TaskManager {
    &self.manager
  }

  // stops on the exit command or once the input stream is exhausted, a failed
  // command never stops the loop
  pub fn run(&mut self) {
    while self.state == State::Running {
      match self.prompt.ask("task-manager> ") {
        None => self.state = State::Stopped,
        Some(line) => {
          if commands::dispatch(line.as_str(), &mut self.manager, self.prompt.as_mut()) == Flow::Stop
          {
            self.state = State::Stopped;
          }
        }
      };
    }
  }
}
