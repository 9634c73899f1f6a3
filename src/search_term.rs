use super::*;

pub(crate) struct SearchTerm {
  key: String,
  storage: Storage,
  value: String,
}

impl SearchTerm {
  pub(crate) fn get(&self) -> &str {
    &self.value
  }

  pub(crate) fn load(storage: Storage, key: &str, default: &str) -> Self {
    let value = storage.get(key).unwrap_or_else(|| default.to_string());

    Self {
      key: key.to_string(),
      storage,
      value,
    }
  }

  pub(crate) fn set(&mut self, value: String) -> Result {
    self.storage.put(&self.key, &value)?;

    self.value = value;

    Ok(())
  }
}
