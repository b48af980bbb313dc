use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::logs::ActivityLog;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;
use crate::users::repository::UserRepository;

pub fn create_patron_service(config: &Configuration, user_repository: Arc<dyn UserRepository>,
                             activity_log: Arc<dyn ActivityLog>) -> Box<dyn PatronService> {
    Box::new(PatronServiceImpl::new(config, user_repository, activity_log))
}
