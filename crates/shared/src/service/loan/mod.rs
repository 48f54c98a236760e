pub mod aggregate;
pub mod command;
pub mod query;
pub mod stats;
pub mod validator;

#[cfg(test)]
pub(crate) mod fixtures;
