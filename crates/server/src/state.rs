use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{DefaultMovieService, MovieService, SeaOrmMovieRepository};

/// Shared handler state. Handlers only see the service trait.
#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieService>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieService>) -> Self { Self { movies } }

    /// Production wiring: controller -> service -> SeaORM repository.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmMovieRepository::new(db));
        Self::new(Arc::new(DefaultMovieService::new(repo)))
    }
}
