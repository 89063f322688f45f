use crate::domain::container::Container;
use crate::forms::containers::{CreateContainerForm, UpdateContainerForm};
use crate::repository::{ContainerReader, ContainerWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::sync::ContainerMirror;

/// Returns the full container sequence in storage order.
pub fn list_containers<R>(repo: &R) -> ServiceResult<Vec<Container>>
where
    R: ContainerReader + ?Sized,
{
    Ok(repo.list_containers()?)
}

/// Validates the payload, persists a new container and mirrors it.
///
/// The mirror fires only after the store commit; its outcome is logged and
/// never affects the returned record.
pub fn create_container<R>(
    repo: &R,
    mirror: &dyn ContainerMirror,
    form: CreateContainerForm,
) -> ServiceResult<Container>
where
    R: ContainerWriter + ?Sized,
{
    let new_container = form
        .into_new_container()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let created = repo.create_container(&new_container)?;

    if !mirror.container_created(&created) {
        log::warn!("container {} was not mirrored to the sheet", created.id);
    }

    Ok(created)
}

/// Applies a partial update to the container with the given id.
pub fn update_container<R>(
    repo: &R,
    container_id: i64,
    form: UpdateContainerForm,
) -> ServiceResult<Container>
where
    R: ContainerWriter + ?Sized,
{
    let updates = form.into_update_container();
    Ok(repo.update_container(container_id, &updates)?)
}

/// Deletes a container together with its embedded products.
pub fn delete_container<R>(repo: &R, container_id: i64) -> ServiceResult<()>
where
    R: ContainerWriter + ?Sized,
{
    Ok(repo.delete_container(container_id)?)
}
