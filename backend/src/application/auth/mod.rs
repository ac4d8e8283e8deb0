// Account use cases: sign-up and credential exchange

pub mod commands;
