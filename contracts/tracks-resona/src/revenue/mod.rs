mod distribute;
pub mod types;
mod vault;
