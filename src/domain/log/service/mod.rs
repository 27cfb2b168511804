pub mod log_entry_service;
pub mod log_query_engine;
pub mod sample_data_service;
