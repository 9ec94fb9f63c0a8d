//! Persistence boundary.
//!
//! The collection is stored as one serialized snapshot under a single key
//! and rewritten wholesale after every mutation.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use tracing::{debug, info, warn};

use crate::error::{PlantError, PlantResult};
use crate::models::{NewPlant, Plant};

pub const DEFAULT_STORE_KEY: &str = "plantas";

/// String-keyed storage for serialized snapshots.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> PlantResult<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> PlantResult<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.lock", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PlantResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> PlantResult<()> {
        fs::create_dir_all(&self.dir)?;

        let lock_path = self.lock_path(key);
        let lock_file = fs::File::create(&lock_path)?;
        lock_file.lock_exclusive().map_err(|e| PlantError::Lock {
            path: lock_path.clone(),
            message: e.to_string(),
        })?;

        let result = write_atomic(&self.dir, &self.path_for(key), value);
        if let Err(e) = FileExt::unlock(&lock_file) {
            warn!(path = %lock_path.display(), error = %e, "could not release store lock");
        }
        result
    }
}

fn write_atomic(dir: &Path, path: &Path, content: &str) -> PlantResult<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| PlantError::Io(e.error))?;
    Ok(())
}

/// In-process store, used by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PlantResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> PlantResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Which plants `Garden::select` returns. An id takes precedence over a
/// search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantQuery {
    pub search: Option<String>,
    pub id: Option<String>,
    pub favorites_only: bool,
}

/// Result of a confirmed removal.
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    Removed(Plant),
    Declined,
    NotFound,
}

/// The ordered (newest-first) plant collection and the store backing it.
pub struct Garden<S: KeyValueStore> {
    store: S,
    key: String,
    plants: Vec<Plant>,
}

impl<S: KeyValueStore> Garden<S> {
    /// Read the snapshot under `key`. A missing, unreadable or malformed
    /// snapshot yields an empty collection.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let plants = match store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Plant>>(&raw) {
                Ok(plants) => plants,
                Err(e) => {
                    warn!(key = %key, error = %e, "stored plant list is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "could not read stored plant list, starting empty");
                Vec::new()
            }
        };
        debug!(key = %key, count = plants.len(), "loaded plants");
        Self { store, key, plants }
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn find(&self, id: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id() == id)
    }

    /// Plants whose name or type contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&Plant> {
        let term = term.to_lowercase();
        self.plants
            .iter()
            .filter(|p| {
                p.name().to_lowercase().contains(&term)
                    || p.plant_type().label().to_lowercase().contains(&term)
                    || p.plant_type().name().to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn select(&self, query: &PlantQuery) -> Vec<&Plant> {
        let candidates: Vec<&Plant> = match (&query.id, &query.search) {
            (Some(id), _) => self.find(id).into_iter().collect(),
            (None, Some(term)) => self.search(term),
            (None, None) => self.plants.iter().collect(),
        };
        candidates
            .into_iter()
            .filter(|p| !query.favorites_only || p.is_favorite())
            .collect()
    }

    /// Stamp `new_plant` and put it at the front of the collection.
    pub fn add(&mut self, new_plant: NewPlant, now: DateTime<Utc>) -> PlantResult<&Plant> {
        let plant = new_plant.into_plant(now, &self.plants);
        info!(id = plant.id(), name = plant.name(), "adding plant");
        self.plants.insert(0, plant);
        self.persist()?;
        Ok(&self.plants[0])
    }

    /// Remove by id. Unknown ids leave the store untouched.
    pub fn remove(&mut self, id: &str) -> PlantResult<Option<Plant>> {
        let Some(idx) = self.plants.iter().position(|p| p.id() == id) else {
            debug!(id, "remove: no such plant");
            return Ok(None);
        };
        let removed = self.plants.remove(idx);
        info!(id, "removed plant");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Remove by id once `confirm` agrees. Declining changes nothing.
    pub fn remove_confirmed<F, E>(&mut self, id: &str, confirm: F) -> Result<Removal, E>
    where
        F: FnOnce(&Plant) -> Result<bool, E>,
        E: From<PlantError>,
    {
        let Some(plant) = self.find(id) else {
            return Ok(Removal::NotFound);
        };
        if !confirm(plant)? {
            info!(id, "removal declined");
            return Ok(Removal::Declined);
        }
        Ok(match self.remove(id)? {
            Some(removed) => Removal::Removed(removed),
            None => Removal::NotFound,
        })
    }

    /// Flip the favorite flag, returning its new value.
    pub fn toggle_favorite(&mut self, id: &str) -> PlantResult<Option<bool>> {
        let Some(plant) = self.plants.iter_mut().find(|p| p.id() == id) else {
            debug!(id, "toggle_favorite: no such plant");
            return Ok(None);
        };
        let favorite = plant.toggle_favorite();
        info!(id, favorite, "toggled favorite");
        self.persist()?;
        Ok(Some(favorite))
    }

    fn persist(&mut self) -> PlantResult<()> {
        let content = serde_json::to_string_pretty(&self.plants)?;
        self.store.put(&self.key, &content)?;
        debug!(key = %self.key, count = self.plants.len(), "saved plants");
        Ok(())
    }
}
