use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{FournisseurService, SeaOrmFournisseurRepository};

pub type FournisseurManager = FournisseurService<SeaOrmFournisseurRepository>;

/// Router state, assembled once at startup: handler -> manager -> repository -> pool.
#[derive(Clone)]
pub struct AppState {
    pub fournisseurs: Arc<FournisseurManager>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmFournisseurRepository::new(db));
        Self { fournisseurs: Arc::new(FournisseurService::new(repo)) }
    }
}
