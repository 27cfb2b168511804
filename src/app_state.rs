use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::persistence::logs::log_entry_repository::LogEntryRepository;
use crate::domain::log::service::log_entry_service::LogEntryService;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub log_service: Arc<LogEntryService<LogEntryRepository>>,
    pub system_service: Arc<SystemService>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    build_app_state_with_repo(LogEntryRepository::from_config(config))
}

pub fn build_app_state_with_repo(repo: LogEntryRepository) -> AppState {
    AppState {
        log_service: Arc::new(LogEntryService::new(repo)),
        system_service: Arc::new(SystemService::default()),
    }
}

#[derive(Clone, Default)]
pub struct SystemService;

impl SystemService {
    delegate_async_service! {
        fn health() -> crate::api::dto::system_dto::HealthResponse => crate::domain::system::service::health_service::health;
    }
}
