// Auth commands

pub mod register_user;
pub mod authenticate_user;
