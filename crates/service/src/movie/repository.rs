use async_trait::async_trait;
use models::movie::{Model, MovieInput};

use crate::errors::ServiceError;

/// Persistence abstraction for movies, keyed by the storage-assigned id.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, input: &MovieInput) -> Result<Model, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    /// Persists every non-id field of an existing row.
    async fn update(&self, movie: Model) -> Result<Model, ServiceError>;
    /// Returns true when a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryMovieRepository {
        inner: Mutex<State>,
    }

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i64, Model>,
        last_id: i64,
    }

    impl InMemoryMovieRepository {
        pub fn len(&self) -> usize { self.inner.lock().unwrap().rows.len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl MovieRepository for InMemoryMovieRepository {
        async fn list(&self) -> Result<Vec<Model>, ServiceError> {
            let state = self.inner.lock().unwrap();
            Ok(state.rows.values().cloned().collect())
        }

        async fn create(&self, input: &MovieInput) -> Result<Model, ServiceError> {
            let mut state = self.inner.lock().unwrap();
            state.last_id += 1;
            let movie = Model {
                id: state.last_id,
                name: input.name.clone(),
                genre: input.genre.clone(),
                release_date: input.release_date,
            };
            state.rows.insert(movie.id, movie.clone());
            Ok(movie)
        }

        async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError> {
            let state = self.inner.lock().unwrap();
            Ok(state.rows.get(&id).cloned())
        }

        async fn update(&self, movie: Model) -> Result<Model, ServiceError> {
            let mut state = self.inner.lock().unwrap();
            match state.rows.get_mut(&movie.id) {
                Some(row) => {
                    *row = movie.clone();
                    Ok(movie)
                }
                None => Err(ServiceError::not_found(&format!("movie {}", movie.id))),
            }
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            let mut state = self.inner.lock().unwrap();
            Ok(state.rows.remove(&id).is_some())
        }
    }
}
