use log::debug;

use taskman::{
  console::StdinPrompt,
  session::Session,
  storage::JsonStorage,
  Config,
  TaskManager,
};

fn main() {
  env_logger::init();

  let matches = clap::Command::new("taskman")
    .version(env!("CARGO_PKG_VERSION"))
    .about("interactive task manager with a persistent task list")
    .arg(
      clap::Arg::new("database")
        .long("database")
        .takes_value(true)
        .help("path to the tasks file, overrides the configured one"),
    )
    .get_matches();

  let config = Config::new();
  let data_file_path = match matches.value_of("database") {
    Some(path) => path.to_owned(),
    None => config.data_file_path,
  };

  debug!("tasks file: {}", data_file_path);

  if let Some(parent) = std::path::Path::new(&data_file_path).parent() {
    let _ = std::fs::create_dir_all(parent);
  }

  let manager = TaskManager::new(Box::new(JsonStorage::new(data_file_path.as_str())));

  println!("Welcome to Task Manager!");
  println!("Type 'help' to see available commands.");

  let mut session = Session::new(manager, Box::new(StdinPrompt::new()));
  session.run();
}
