use crate::domain::product::Product;
use crate::forms::products::ProductForm;
use crate::repository::{ContainerReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::sync::ContainerMirror;

/// Validates the payload, appends a product to the addressed container and
/// mirrors it.
///
/// The mirror hook receives the parent container record, so the container is
/// re-read after the commit; any hiccup on that path is logged and ignored.
pub fn add_product<R>(
    repo: &R,
    mirror: &dyn ContainerMirror,
    container_id: i64,
    form: ProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + ContainerReader + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let created = repo.add_product(container_id, &new_product)?;

    match repo.get_container_by_id(container_id) {
        Ok(Some(container)) => {
            if !mirror.product_added(&container, &created) {
                log::warn!("product {} was not mirrored to the sheet", created.id);
            }
        }
        Ok(None) => {}
        Err(err) => {
            log::warn!("could not reload container {container_id} for mirroring: {err}");
        }
    }

    Ok(created)
}

/// Replaces the addressed product's body, keeping its original id.
pub fn update_product<R>(
    repo: &R,
    container_id: i64,
    product_id: i64,
    form: ProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let replacement = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    Ok(repo.update_product(container_id, product_id, &replacement)?)
}

/// Removes the addressed product from its container.
pub fn delete_product<R>(repo: &R, container_id: i64, product_id: i64) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    Ok(repo.delete_product(container_id, product_id)?)
}
