use std::io::{BufRead, Write};

pub trait Prompt {
  // one trimmed line of input, None once the stream is exhausted
  fn ask(&mut self, question: &str) -> Option<String>;
}

pub struct StdinPrompt {}

impl StdinPrompt {
  pub fn new() -> Self {
    Self {}
  }
}

impl Prompt for StdinPrompt {
  fn ask(&mut self, question: &str) -> Option<String> {
    print!("{}", question);
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
      Ok(0) => None,
      Ok(_) => Some(line.trim().to_owned()),
      Err(_) => None,
    }
  }
}
