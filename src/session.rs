use std::sync::Arc;
use crate::books;
use crate::catalog;
use crate::catalog::domain::CatalogService;
use crate::circulation;
use crate::circulation::domain::CirculationService;
use crate::core::domain::Configuration;
use crate::gateway::NotifierVia;
use crate::gateway::factory::create_notifier;
use crate::gateway::logs::{ActivityLog, SessionLog};
use crate::patrons;
use crate::patrons::domain::PatronService;
use crate::users;

// LibrarySession is the composition root for one interactive session. It owns
// the shared stores, the services, and the bounded activity buffer; dropping
// the session tears all of it down.
pub struct LibrarySession {
    pub config: Configuration,
    pub catalog: Box<dyn CatalogService>,
    pub patrons: Box<dyn PatronService>,
    pub circulation: Box<dyn CirculationService>,
    activity_log: Arc<SessionLog>,
}

impl LibrarySession {
    pub fn new(config: Configuration) -> Self {
        let activity_log = Arc::new(SessionLog::new(config.session_log_capacity));
        let log: Arc<dyn ActivityLog> = activity_log.clone();
        let book_repository = books::factory::create_book_repository();
        let user_repository = users::factory::create_user_repository();
        let catalog = catalog::factory::create_catalog_service(
            &config, book_repository.clone(), user_repository.clone(), log.clone());
        let patrons = patrons::factory::create_patron_service(
            &config, user_repository.clone(), log.clone());
        let circulation = circulation::factory::create_circulation_service(
            &config, book_repository, user_repository,
            create_notifier(NotifierVia::Email), log);
        Self {
            config,
            catalog,
            patrons,
            circulation,
            activity_log,
        }
    }

    pub async fn recent_activity(&self, limit: usize) -> Vec<String> {
        self.activity_log.recent(limit).await
    }
}
