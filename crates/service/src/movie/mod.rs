//! Movie module: repository abstraction, SeaORM persistence and the service.

pub mod repository;
pub mod repo;
pub mod service;

pub use repo::seaorm::SeaOrmMovieRepository;
pub use repository::MovieRepository;
pub use service::{DefaultMovieService, MovieService};
