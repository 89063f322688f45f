pub mod container;
pub mod pickup;
pub mod product;
