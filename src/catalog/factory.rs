use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::logs::ActivityLog;
use crate::users::repository::UserRepository;

pub fn create_catalog_service(config: &Configuration, book_repository: Arc<dyn BookRepository>,
                              user_repository: Arc<dyn UserRepository>,
                              activity_log: Arc<dyn ActivityLog>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, book_repository, user_repository, activity_log))
}
