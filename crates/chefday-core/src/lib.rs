//! chefday Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Runtime specifics
//!
//! Upstream payloads enter as untyped JSON and leave this crate only as
//! validated records or a [`DomainError`].

pub mod birth_date;
pub mod error;
pub mod ids;
pub mod record;
pub mod view;

// Re-export commonly used types
pub use birth_date::BirthDate;
pub use error::{DomainError, RecordKind, ShapeError};
pub use ids::{ChefId, RecipeId};
pub use record::{
    is_chef_response, is_recipe_response, validate_chef, validate_recipe, ChefRecord,
    ChefResponse, RecipeRecord, RecipeResponse, RemoteRecord,
};
pub use view::ViewState;
