#[cfg(test)]
pub mod common;

#[cfg(test)]
mod worker_source;
