pub mod copy_patterns;
pub mod entries;
