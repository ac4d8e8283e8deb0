// Event use cases: publishing, browsing, and registration

pub mod commands;
pub mod queries;
