pub mod fs;

pub use fs::{LocalFs, TextStore};
