use crate::domain::container::Container;
use crate::domain::product::Product;

pub mod sheet;

pub use sheet::{SheetMirror, bootstrap};

/// Best-effort mirror of newly created records to an external spreadsheet.
///
/// Both hooks report success as a boolean. Callers log the outcome and must
/// never let it influence the primary operation: mirroring is fired only
/// after the store commit and a failed append leaves the CRUD response
/// untouched.
pub trait ContainerMirror: Send + Sync {
    fn container_created(&self, container: &Container) -> bool;
    fn product_added(&self, container: &Container, product: &Product) -> bool;
}

/// Mirror used when sheet synchronization is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMirror;

impl ContainerMirror for NullMirror {
    fn container_created(&self, _container: &Container) -> bool {
        true
    }

    fn product_added(&self, _container: &Container, _product: &Product) -> bool {
        true
    }
}
