pub mod assemble;
pub mod emit;
pub mod resolve;
pub mod validate;
