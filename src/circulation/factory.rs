use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::catalog::factory::create_catalog_service;
use crate::circulation::domain::CirculationService;
use crate::circulation::domain::service::CirculationServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::logs::ActivityLog;
use crate::gateway::notify::Notifier;
use crate::patrons::factory::create_patron_service;
use crate::users::repository::UserRepository;

pub fn create_circulation_service(config: &Configuration, book_repository: Arc<dyn BookRepository>,
                                  user_repository: Arc<dyn UserRepository>, notifier: Box<dyn Notifier>,
                                  activity_log: Arc<dyn ActivityLog>) -> Box<dyn CirculationService> {
    let patron_svc = create_patron_service(config, user_repository.clone(), activity_log.clone());
    let catalog_svc = create_catalog_service(config, book_repository, user_repository, activity_log.clone());
    Box::new(CirculationServiceImpl::new(config, patron_svc, catalog_svc, notifier, activity_log))
}
