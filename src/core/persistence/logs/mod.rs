pub mod log_entry_api_repository_trait;
pub mod log_entry_entity;
pub mod log_entry_fs_adapter;
pub mod log_entry_fs_adapter_trait;
pub mod log_entry_memory_adapter;
pub mod log_entry_repository;
pub mod log_level;
