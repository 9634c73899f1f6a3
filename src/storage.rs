use super::*;

use std::{
  collections::HashMap,
  env, fs,
  path::{Path, PathBuf},
};

#[derive(Debug)]
pub(crate) struct Storage {
  path: PathBuf,
  values: HashMap<String, String>,
}

impl Storage {
  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn get(&self, key: &str) -> Option<String> {
    self.values.get(key).cloned()
  }

  pub(crate) fn open() -> Result<Self> {
    Self::open_at(Self::storage_path()?)
  }

  pub(crate) fn open_at(path: PathBuf) -> Result<Self> {
    let values = if path.exists() {
      let data = fs::read(&path)?;

      if data.is_empty() {
        HashMap::new()
      } else {
        serde_json::from_slice::<HashMap<String, String>>(&data)?
      }
    } else {
      HashMap::new()
    };

    Ok(Self { path, values })
  }

  fn persist(&self) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(&self.values)?;

    fs::write(&self.path, serialized)?;

    Ok(())
  }

  pub(crate) fn put(&mut self, key: &str, value: &str) -> Result {
    self.values.insert(key.to_string(), value.to_string());

    self.persist()
  }

  fn storage_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("HACKER_STORIES_STATE_FILE") {
      return Ok(PathBuf::from(path));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("hacker-stories").join("state.json"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::sync::atomic::{AtomicUsize, Ordering};

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn temp_storage_path() -> PathBuf {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
    env::temp_dir().join(format!("hacker_stories_storage_test_{unique}.json"))
  }

  #[test]
  fn missing_file_opens_empty() {
    let storage = Storage::open_at(temp_storage_path()).unwrap();

    assert_eq!(storage.get("search"), None);
  }

  #[test]
  fn empty_file_opens_empty() {
    let path = temp_storage_path();
    fs::write(&path, "").unwrap();

    let storage = Storage::open_at(path.clone()).unwrap();

    assert_eq!(storage.get("search"), None);

    let _ = fs::remove_file(&path);
  }

  #[test]
  fn put_persists_across_reopen() {
    let path = temp_storage_path();

    let mut storage = Storage::open_at(path.clone()).unwrap();
    storage.put("search", "rust").unwrap();

    let reopened = Storage::open_at(path.clone()).unwrap();

    assert_eq!(reopened.get("search"), Some("rust".to_string()));

    let _ = fs::remove_file(&path);
  }

  #[test]
  fn put_overwrites_previous_value() {
    let path = temp_storage_path();

    let mut storage = Storage::open_at(path.clone()).unwrap();
    storage.put("search", "React").unwrap();
    storage.put("search", "Vue").unwrap();

    assert_eq!(storage.get("search"), Some("Vue".to_string()));

    let reopened = Storage::open_at(path.clone()).unwrap();

    assert_eq!(reopened.get("search"), Some("Vue".to_string()));

    let _ = fs::remove_file(&path);
  }
}
