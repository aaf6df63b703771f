//! Core type definitions used across the workspace.

pub mod id;
pub mod pagination;
pub mod response;
pub mod sorting;

pub use id::*;
pub use pagination::{PageRequest, Paginated, Pagination};
pub use response::{ApiErrorBody, ApiResponse};
pub use sorting::SortDirection;
