use std::sync::LazyLock;

use regex::Regex;

static DUE_DATE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

pub fn is_valid_due_date(input: &str) -> bool {
  DUE_DATE_PATTERN.is_match(input)
}
