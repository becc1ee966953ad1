use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use models::movie::{self, Model, MovieInput};
use crate::errors::ServiceError;
use crate::movie::repository::MovieRepository;

pub struct SeaOrmMovieRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn create(&self, input: &MovieInput) -> Result<Model, ServiceError> {
        let created = movie::create(&self.db, input).await?;
        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, m: Model) -> Result<Model, ServiceError> {
        let id = m.id;
        let am = movie::ActiveModel {
            id: ActiveValue::Unchanged(m.id),
            name: Set(m.name),
            genre: Set(m.genre),
            release_date: Set(m.release_date),
        };
        match am.update(&self.db).await {
            Ok(updated) => Ok(updated),
            // row deleted between lookup and write
            Err(DbErr::RecordNotUpdated) => Err(ServiceError::not_found(&format!("movie {id}"))),
            Err(e) => Err(ServiceError::Db(e.to_string())),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = movie::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveDate;

    fn input(name: &str, genre: &str) -> MovieInput {
        MovieInput {
            name: name.to_string(),
            genre: genre.to_string(),
            release_date: NaiveDate::from_ymd_opt(1999, 4, 22).unwrap(),
        }
    }

    #[tokio::test]
    async fn movie_crud_repository() -> Result<(), anyhow::Error> {
        let repo = SeaOrmMovieRepository::new(get_db().await?);

        let a = repo.create(&input("Avatar", "Action")).await?;
        let found = repo.get(a.id).await?.unwrap();
        assert_eq!(found.name, "Avatar");
        assert_eq!(found.genre, "Action");

        let updated = repo.update(found.with_input(input("Avatar", "Sci-Fi"))).await?;
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.genre, "Sci-Fi");
        assert_eq!(repo.get(a.id).await?.unwrap().genre, "Sci-Fi");

        let list = repo.list().await?;
        assert!(list.iter().any(|m| m.id == a.id));

        assert!(repo.delete(a.id).await?);
        assert!(repo.get(a.id).await?.is_none());
        assert!(!repo.delete(a.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() -> Result<(), anyhow::Error> {
        let repo = SeaOrmMovieRepository::new(get_db().await?);
        let a = repo.create(&input("Avatar", "Action")).await?;
        let t = repo.create(&input("Titanic", "Romance")).await?;

        let ids: Vec<i64> = repo.list().await?.into_iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(ids.contains(&a.id) && ids.contains(&t.id));
        Ok(())
    }

    #[tokio::test]
    async fn update_of_vanished_row_is_not_found() -> Result<(), anyhow::Error> {
        let repo = SeaOrmMovieRepository::new(get_db().await?);
        let a = repo.create(&input("Avatar", "Action")).await?;
        repo.delete(a.id).await?;

        let err = repo.update(a).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
