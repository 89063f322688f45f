use mockall::mock;

use super::{ContainerReader, ContainerWriter, ProductWriter};
use crate::domain::container::{Container, NewContainer, UpdateContainer};
use crate::domain::product::{NewProduct, Product};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ContainerReader {}

    impl ContainerReader for ContainerReader {
        fn get_container_by_id(&self, container_id: i64) -> RepositoryResult<Option<Container>>;
        fn list_containers(&self) -> RepositoryResult<Vec<Container>>;
    }
}

mock! {
    pub ContainerWriter {}

    impl ContainerWriter for ContainerWriter {
        fn create_container(&self, new_container: &NewContainer) -> RepositoryResult<Container>;
        fn update_container(&self, container_id: i64, updates: &UpdateContainer) -> RepositoryResult<Container>;
        fn delete_container(&self, container_id: i64) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn add_product(&self, container_id: i64, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, container_id: i64, product_id: i64, replacement: &NewProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, container_id: i64, product_id: i64) -> RepositoryResult<()>;
    }
}
