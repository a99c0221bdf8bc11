pub mod file;
pub mod input;
pub mod tree;
