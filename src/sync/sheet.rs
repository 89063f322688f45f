use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use crate::domain::container::Container;
use crate::domain::product::Product;
use crate::repository::{ContainerReader, JsonStore};
use crate::sync::ContainerMirror;

/// Row kind markers in the sheet's first column.
const CONTAINER_ROW: &str = "container";
const PRODUCT_ROW: &str = "product";

/// Errors raised while talking to the sheet file. Callers log these and
/// carry on; they never reach an API client.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("sheet lock poisoned")]
    Lock,
    #[error("failed to access sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse sheet: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode record: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Spreadsheet mirror appending one CSV row per created record.
///
/// Rows are `(kind, container id, JSON payload)`, which keeps product rows
/// attachable to their parent when the sheet is read back at bootstrap.
pub struct SheetMirror {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SheetMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn append_row(&self, kind: &str, container_id: i64, payload: &str) -> Result<(), SheetError> {
        let _guard = self.lock.lock().map_err(|_| SheetError::Lock)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record([kind, &container_id.to_string(), payload])?;
        writer.flush()?;
        Ok(())
    }
}

impl ContainerMirror for SheetMirror {
    fn container_created(&self, container: &Container) -> bool {
        let result = serde_json::to_string(container)
            .map_err(SheetError::from)
            .and_then(|payload| self.append_row(CONTAINER_ROW, container.id, &payload));

        match result {
            Ok(()) => true,
            Err(err) => {
                log::warn!("sheet append for container {} failed: {err}", container.id);
                false
            }
        }
    }

    fn product_added(&self, container: &Container, product: &Product) -> bool {
        let result = serde_json::to_string(product)
            .map_err(SheetError::from)
            .and_then(|payload| self.append_row(PRODUCT_ROW, container.id, &payload));

        match result {
            Ok(()) => true,
            Err(err) => {
                log::warn!(
                    "sheet append for product {} in container {} failed: {err}",
                    product.id,
                    container.id
                );
                false
            }
        }
    }
}

/// Reads the sheet back into a container sequence.
///
/// Container rows recreate records in sheet order; product rows attach to
/// their parent by id. Unreadable or orphaned rows are skipped with a
/// warning so one bad row never blocks startup.
pub fn load_sheet(path: &Path) -> Result<Vec<Container>, SheetError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut containers: Vec<Container> = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row_number = index + 1;
        let record = row?;
        let kind = record.get(0).unwrap_or("");
        let payload = record.get(2).unwrap_or("");

        match kind {
            CONTAINER_ROW => match serde_json::from_str::<Container>(payload) {
                Ok(container) => containers.push(container),
                Err(err) => {
                    log::warn!("skipping unreadable container row {row_number}: {err}");
                }
            },
            PRODUCT_ROW => {
                let parent_id = record.get(1).and_then(|raw| raw.parse::<i64>().ok());
                let product = serde_json::from_str::<Product>(payload);
                match (parent_id, product) {
                    (Some(parent_id), Ok(product)) => {
                        match containers
                            .iter_mut()
                            .find(|container| container.id == parent_id)
                        {
                            Some(container) => container.products.push(product),
                            None => log::warn!(
                                "skipping product row {row_number}: no container {parent_id} in sheet"
                            ),
                        }
                    }
                    _ => log::warn!("skipping unreadable product row {row_number}"),
                }
            }
            other => log::warn!("skipping sheet row {row_number} with unknown kind `{other}`"),
        }
    }

    Ok(containers)
}

/// Repopulates an empty store from the sheet at process start.
///
/// Existing data always wins: a non-empty store is left untouched. Any
/// failure is logged and the service starts with whatever the store holds.
pub fn bootstrap(store: &JsonStore, path: &Path) {
    let existing = match store.list_containers() {
        Ok(containers) => containers,
        Err(err) => {
            log::warn!("sheet bootstrap skipped, store unreadable: {err}");
            return;
        }
    };
    if !existing.is_empty() {
        log::info!(
            "store already holds {} containers, skipping sheet bootstrap",
            existing.len()
        );
        return;
    }

    let containers = match load_sheet(path) {
        Ok(containers) => containers,
        Err(err) => {
            log::warn!(
                "sheet bootstrap from {} failed, starting empty: {err}",
                path.display()
            );
            return;
        }
    };
    if containers.is_empty() {
        return;
    }

    let count = containers.len();
    match store.replace_all(containers) {
        Ok(()) => log::info!("bootstrapped {count} containers from {}", path.display()),
        Err(err) => log::warn!("failed to store bootstrapped containers: {err}"),
    }
}
