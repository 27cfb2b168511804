pub mod log;
pub mod system;
pub mod ui;
