//! Service layer providing the movie CRUD operations on top of models.
//! - Separates business rules from data access via `MovieRepository`.
//! - Reuses validation and entity definitions in `models` crate.
//! - `MovieService` is a trait so HTTP handlers can be exercised against stubs.

pub mod errors;
pub mod movie;
#[cfg(test)]
pub mod test_support;

pub use movie::{DefaultMovieService, MovieRepository, MovieService, SeaOrmMovieRepository};
