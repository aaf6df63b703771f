//! Request bodies with validation.
//!
//! Each DTO derives [`validator::Validate`]; the client validates before
//! sending so malformed input never reaches the network.

pub mod auth;
pub mod reserva;
pub mod rules;
pub mod user;

pub use auth::{
    ChangePasswordDto, ChangeProfilePasswordDto, LoginDto, LogoutRequest, RefreshRequest,
    RegisterDto, UpdateProfileDto,
};
pub use reserva::{
    CreatePeriodoDto, CreateReservaDto, UpdatePeriodoDto, UpdateReservaDto, UpdateStatusDto,
};
pub use user::{ChangeRoleDto, CreateUserDto, UpdateUserDto};
