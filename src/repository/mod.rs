use std::path::Path;
use std::sync::Mutex;

use crate::domain::container::{Container, NewContainer, UpdateContainer};
use crate::domain::product::{NewProduct, Product};

pub mod backend;
pub mod errors;
pub mod ids;

#[cfg(test)]
pub mod mock;

pub use backend::{FileBackend, MemoryBackend, StoreBackend};
pub use errors::{RepositoryError, RepositoryResult};
pub use ids::IdSequence;

/// Read-only operations over the container collection.
pub trait ContainerReader {
    fn get_container_by_id(&self, container_id: i64) -> RepositoryResult<Option<Container>>;
    fn list_containers(&self) -> RepositoryResult<Vec<Container>>;
}

/// Write operations at the container granularity.
pub trait ContainerWriter {
    fn create_container(&self, new_container: &NewContainer) -> RepositoryResult<Container>;
    fn update_container(
        &self,
        container_id: i64,
        updates: &UpdateContainer,
    ) -> RepositoryResult<Container>;
    fn delete_container(&self, container_id: i64) -> RepositoryResult<()>;
}

/// Write operations over the product collection nested in one container.
pub trait ProductWriter {
    fn add_product(&self, container_id: i64, new_product: &NewProduct)
    -> RepositoryResult<Product>;
    fn update_product(
        &self,
        container_id: i64,
        product_id: i64,
        replacement: &NewProduct,
    ) -> RepositoryResult<Product>;
    fn delete_product(&self, container_id: i64, product_id: i64) -> RepositoryResult<()>;
}

/// Store owning the authoritative container sequence.
///
/// One mutex guards the whole load / mutate / save cycle of every write, so
/// concurrent writers can never commit from the same stale snapshot. Reads
/// take the same lock and return owned clones the caller may mutate freely.
pub struct JsonStore {
    backend: Box<dyn StoreBackend>,
    lock: Mutex<()>,
    ids: IdSequence,
}

impl JsonStore {
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            lock: Mutex::new(()),
            ids: IdSequence::new(),
        }
    }

    /// Store backed by a JSON file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(FileBackend::new(path.as_ref()))
    }

    /// Store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Runs `mutate` on the loaded sequence and saves the result, all under
    /// the store lock. Nothing is saved when `mutate` fails.
    fn with_containers<T>(
        &self,
        mutate: impl FnOnce(&mut Vec<Container>) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::Lock)?;
        let mut containers = self.backend.load()?;
        let value = mutate(&mut containers)?;
        self.backend.save(&containers)?;
        Ok(value)
    }

    /// Replaces the whole collection. Used by the sheet bootstrap.
    pub fn replace_all(&self, containers: Vec<Container>) -> RepositoryResult<()> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::Lock)?;
        self.backend.save(&containers)
    }
}

impl ContainerReader for JsonStore {
    fn get_container_by_id(&self, container_id: i64) -> RepositoryResult<Option<Container>> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::Lock)?;
        let containers = self.backend.load()?;
        Ok(containers
            .into_iter()
            .find(|container| container.id == container_id))
    }

    fn list_containers(&self) -> RepositoryResult<Vec<Container>> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::Lock)?;
        self.backend.load()
    }
}

impl ContainerWriter for JsonStore {
    fn create_container(&self, new_container: &NewContainer) -> RepositoryResult<Container> {
        self.with_containers(|containers| {
            let created = new_container.clone().into_container(self.ids.next());
            containers.push(created.clone());
            Ok(created)
        })
    }

    fn update_container(
        &self,
        container_id: i64,
        updates: &UpdateContainer,
    ) -> RepositoryResult<Container> {
        self.with_containers(|containers| {
            let container = containers
                .iter_mut()
                .find(|container| container.id == container_id)
                .ok_or(RepositoryError::ContainerNotFound)?;
            container.apply(updates);
            Ok(container.clone())
        })
    }

    fn delete_container(&self, container_id: i64) -> RepositoryResult<()> {
        self.with_containers(|containers| {
            let before = containers.len();
            containers.retain(|container| container.id != container_id);
            if containers.len() == before {
                return Err(RepositoryError::ContainerNotFound);
            }
            Ok(())
        })
    }
}

impl ProductWriter for JsonStore {
    fn add_product(
        &self,
        container_id: i64,
        new_product: &NewProduct,
    ) -> RepositoryResult<Product> {
        self.with_containers(|containers| {
            let container = containers
                .iter_mut()
                .find(|container| container.id == container_id)
                .ok_or(RepositoryError::ContainerNotFound)?;
            let created = new_product.clone().into_product(self.ids.next());
            container.products.push(created.clone());
            Ok(created)
        })
    }

    fn update_product(
        &self,
        container_id: i64,
        product_id: i64,
        replacement: &NewProduct,
    ) -> RepositoryResult<Product> {
        self.with_containers(|containers| {
            let container = containers
                .iter_mut()
                .find(|container| container.id == container_id)
                .ok_or(RepositoryError::ContainerNotFound)?;
            let product = container
                .products
                .iter_mut()
                .find(|product| product.id == product_id)
                .ok_or(RepositoryError::ProductNotFound)?;
            // The body is replaced wholesale but the original id survives.
            *product = replacement.clone().into_product(product_id);
            Ok(product.clone())
        })
    }

    fn delete_product(&self, container_id: i64, product_id: i64) -> RepositoryResult<()> {
        self.with_containers(|containers| {
            let container = containers
                .iter_mut()
                .find(|container| container.id == container_id)
                .ok_or(RepositoryError::ContainerNotFound)?;
            let before = container.products.len();
            container.products.retain(|product| product.id != product_id);
            if container.products.len() == before {
                return Err(RepositoryError::ProductNotFound);
            }
            Ok(())
        })
    }
}
