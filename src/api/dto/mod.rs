pub mod log_dto;
pub mod log_query_dto;
pub mod paginated_response;
pub mod system_dto;
