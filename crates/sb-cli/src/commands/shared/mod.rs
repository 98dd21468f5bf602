pub mod emit;
pub mod fetch;
pub mod limit;
