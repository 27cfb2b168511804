pub mod persistence;
pub mod util;
