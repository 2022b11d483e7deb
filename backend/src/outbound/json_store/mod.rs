//! Flat-file record store backed by two JSON arrays in a data directory.
//!
//! `dishes.json` is produced by the `dish-data` converter and only read here.
//! `users.json` grows through [`UserRepository::append_user`], which rewrites
//! the whole array through the atomic writer shared with the converter.
//!
//! Files that are missing are created as `[]` on first access. Records that
//! fail validation are skipped with a warning rather than failing the load.
//! All filesystem work runs on Tokio's blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::ports::{
    DishRepository, DishRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{Dish, User};

mod models;

use models::{StoredDish, StoredUser};

/// File holding the dish catalogue.
pub const DISHES_FILE: &str = "dishes.json";
/// File holding registered users.
pub const USERS_FILE: &str = "users.json";

const EMPTY_COLLECTION: &str = "[]";

/// Errors raised while opening the store at startup.
#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("failed to open data directory '{path}': {source}")]
    OpenDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Initialise(#[from] dish_data::WriteError),
}

/// Storage failure inside a blocking task, mapped onto each port's error.
#[derive(Debug)]
enum StoreFault {
    Read(String),
    Decode(String),
    Write(String),
}

impl From<StoreFault> for DishRepositoryError {
    fn from(fault: StoreFault) -> Self {
        match fault {
            StoreFault::Read(message) | StoreFault::Write(message) => Self::read(message),
            StoreFault::Decode(message) => Self::decode(message),
        }
    }
}

impl From<StoreFault> for UserPersistenceError {
    fn from(fault: StoreFault) -> Self {
        match fault {
            StoreFault::Read(message) => Self::read(message),
            StoreFault::Decode(message) => Self::decode(message),
            StoreFault::Write(message) => Self::write(message),
        }
    }
}

/// JSON-file adapter for the dish and user repository ports.
///
/// # Examples
/// ```
/// use dishes_backend::outbound::json_store::JsonFileStore;
///
/// let temp = tempfile::tempdir().expect("temp dir");
/// let root = camino::Utf8Path::from_path(temp.path()).expect("utf8 path");
/// let store = JsonFileStore::open(root.join("data")).expect("open store");
/// assert!(store.root().join("users.json").exists());
/// ```
#[derive(Clone)]
pub struct JsonFileStore {
    dir: Arc<Dir>,
    root: Utf8PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory and initialise both
    /// collections.
    ///
    /// # Errors
    /// Returns [`JsonStoreError`] when the directory cannot be created or
    /// opened, or an empty collection cannot be written.
    pub fn open(root: impl Into<Utf8PathBuf>) -> Result<Self, JsonStoreError> {
        let root = root.into();
        let open_error = |source| JsonStoreError::OpenDir {
            path: root.clone(),
            source,
        };
        Dir::create_ambient_dir_all(&root, ambient_authority()).map_err(open_error)?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).map_err(open_error)?;

        for file in [DISHES_FILE, USERS_FILE] {
            if !dir.exists(file) {
                dish_data::write_atomic(&dir, Utf8Path::new(file), EMPTY_COLLECTION)?;
                if file == DISHES_FILE {
                    warn!(
                        %root,
                        "{DISHES_FILE} was missing; the catalogue is empty until \
                         `dish-data-convert --csv <source> --output {root}/{DISHES_FILE}` is run"
                    );
                } else {
                    debug!(file, %root, "initialised empty collection");
                }
            }
        }

        Ok(Self {
            dir: Arc::new(dir),
            root,
        })
    }

    /// Directory holding the collections.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    async fn run_blocking<T, F>(&self, task: F) -> Result<T, StoreFault>
    where
        F: FnOnce(&Dir) -> Result<T, StoreFault> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || task(dir.as_ref()))
            .await
            .map_err(|err| StoreFault::Read(format!("store task failed: {err}")))?
    }
}

/// Raw array elements of `file`, recreating it as `[]` when it is missing.
fn read_records(dir: &Dir, file: &'static str) -> Result<Vec<Value>, StoreFault> {
    if !dir.exists(file) {
        dish_data::write_atomic(dir, Utf8Path::new(file), EMPTY_COLLECTION)
            .map_err(|err| StoreFault::Write(err.to_string()))?;
        return Ok(Vec::new());
    }
    let raw = dir
        .read_to_string(file)
        .map_err(|err| StoreFault::Read(format!("{file}: {err}")))?;
    serde_json::from_str(&raw).map_err(|err| StoreFault::Decode(format!("{file}: {err}")))
}

/// Decode every record, skipping the ones that do not validate.
fn decode_records<S, T>(file: &'static str, records: Vec<Value>) -> Vec<T>
where
    S: DeserializeOwned,
    T: TryFrom<S>,
    T::Error: std::fmt::Display,
{
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let decoded = serde_json::from_value::<S>(record)
                .map_err(|err| err.to_string())
                .and_then(|stored| T::try_from(stored).map_err(|err| err.to_string()));
            match decoded {
                Ok(value) => Some(value),
                Err(reason) => {
                    warn!(file, index, %reason, "skipping invalid record");
                    None
                }
            }
        })
        .collect()
}

#[async_trait]
impl DishRepository for JsonFileStore {
    async fn load_dishes(&self) -> Result<Vec<Dish>, DishRepositoryError> {
        let records = self
            .run_blocking(|dir| read_records(dir, DISHES_FILE))
            .await?;
        Ok(decode_records::<StoredDish, Dish>(DISHES_FILE, records))
    }
}

#[async_trait]
impl UserRepository for JsonFileStore {
    async fn load_users(&self) -> Result<Vec<User>, UserPersistenceError> {
        let records = self.run_blocking(|dir| read_records(dir, USERS_FILE)).await?;
        Ok(decode_records::<StoredUser, User>(USERS_FILE, records))
    }

    async fn append_user(&self, user: &User) -> Result<(), UserPersistenceError> {
        let record = serde_json::to_value(StoredUser::from(user))
            .map_err(|err| UserPersistenceError::write(err.to_string()))?;
        let email = user.email().as_ref().to_owned();

        let outcome = self
            .run_blocking(move |dir| {
                let mut records = read_records(dir, USERS_FILE)?;
                if records.iter().any(|stored| record_email(stored) == Some(email.as_str())) {
                    return Ok(Append::EmailTaken(email));
                }
                records.push(record);
                let body = serde_json::to_string_pretty(&records)
                    .map_err(|err| StoreFault::Write(err.to_string()))?;
                dish_data::write_atomic(dir, Utf8Path::new(USERS_FILE), &body)
                    .map_err(|err| StoreFault::Write(err.to_string()))?;
                Ok(Append::Written)
            })
            .await?;

        match outcome {
            Append::Written => Ok(()),
            Append::EmailTaken(email) => Err(UserPersistenceError::email_taken(email)),
        }
    }
}

enum Append {
    Written,
    EmailTaken(String),
}

/// Trimmed `email` of a raw record, whether or not the record validates.
fn record_email(record: &Value) -> Option<&str> {
    record.get("email").and_then(Value::as_str).map(str::trim)
}
