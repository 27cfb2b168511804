pub mod health_service;
