use std::sync::Arc;

use async_trait::async_trait;
use models::movie::{Model, MovieInput};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::movie::repository::MovieRepository;

/// Operations the HTTP layer needs. Kept as a trait so handlers can be
/// exercised against a stub.
#[async_trait]
pub trait MovieService: Send + Sync {
    /// Persist a new movie; the storage assigns the id.
    async fn save(&self, input: MovieInput) -> Result<Model, ServiceError>;
    /// All movies, in no guaranteed order.
    async fn get_all_movies(&self) -> Result<Vec<Model>, ServiceError>;
    async fn get_movie_by_id(&self, id: i64) -> Result<Model, ServiceError>;
    /// Replace every field except the id of an existing movie.
    async fn update_movie(&self, input: MovieInput, id: i64) -> Result<Model, ServiceError>;
    /// Remove a movie. Absent ids are not an error.
    async fn delete_movie(&self, id: i64) -> Result<(), ServiceError>;
}

/// Repository-backed `MovieService`.
pub struct DefaultMovieService<R: MovieRepository> {
    repo: Arc<R>,
}

impl<R: MovieRepository> DefaultMovieService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: MovieRepository> MovieService for DefaultMovieService<R> {
    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn save(&self, input: MovieInput) -> Result<Model, ServiceError> {
        input.validate()?;
        let created = self.repo.create(&input).await?;
        info!(id = created.id, "movie_created");
        Ok(created)
    }

    async fn get_all_movies(&self) -> Result<Vec<Model>, ServiceError> {
        let movies = self.repo.list().await?;
        debug!(count = movies.len(), "movies_listed");
        Ok(movies)
    }

    async fn get_movie_by_id(&self, id: i64) -> Result<Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(&format!("movie {id}")))
    }

    #[instrument(skip(self, input), fields(id = id))]
    async fn update_movie(&self, input: MovieInput, id: i64) -> Result<Model, ServiceError> {
        input.validate()?;
        let Some(existing) = self.repo.get(id).await? else {
            return Err(ServiceError::not_found(&format!("movie {id}")));
        };
        let updated = self.repo.update(existing.with_input(input)).await?;
        info!(id, "movie_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = id))]
    async fn delete_movie(&self, id: i64) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(id, "movie_deleted");
        } else {
            debug!(id, "delete of absent movie ignored");
        }
        Ok(())
    }
}
