// Domain layer - entities and value objects
// No dependencies on other layers

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
