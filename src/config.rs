#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub data_file_path: String,
}

impl Config {
  pub fn new() -> Self {
    const TASKMAN_DEFAULT_DATA_DIR: &str = ".taskman";
    const TASKMAN_DEFAULT_CONFIG_NAME: &str = ".taskman.json";

    let home_env = std::env::var("HOME").unwrap();
    let home = std::path::Path::new(home_env.as_str());

    let config_file_path = match std::env::var("TASKMAN_CONFIG") {
      Ok(file_path) => std::path::PathBuf::from(file_path),
      Err(_) => home.join(TASKMAN_DEFAULT_CONFIG_NAME),
    };

    let default_config = Self {
      data_file_path: home
        .join(TASKMAN_DEFAULT_DATA_DIR)
        .join("tasks.json")
        .to_string_lossy()
        .into_owned(),
    };

    if !config_file_path.exists() {
      let serialized = serde_json::to_string_pretty(&default_config).unwrap();
      if let Err(err) = std::fs::write(&config_file_path, serialized) {
        println!("can't write config {}: {}", config_file_path.display(), err);
      }
      return default_config;
    }

    match std::fs::read_to_string(&config_file_path) {
      Ok(raw) => serde_json::from_str(raw.as_str()).unwrap_or_else(|err| {
        println!("malformed config {}: {}", config_file_path.display(), err);
        default_config
      }),
      Err(err) => {
        println!("can't read config {}: {}", config_file_path.display(), err);
        default_config
      }
    }
  }
}
