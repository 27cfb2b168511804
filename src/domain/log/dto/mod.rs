pub mod log_entry_create_request;
