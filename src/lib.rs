pub mod domain;
pub mod forms;
pub mod repository;
pub mod routes;
pub mod services;
pub mod sync;
