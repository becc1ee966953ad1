use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const NAME_MAX_LEN: usize = 255;
pub const GENRE_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "films")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub genre: String,
    pub release_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Client-supplied movie fields. Any `id` in the payload is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub name: String,
    pub genre: String,
    pub release_date: Date,
}

impl MovieInput {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_name(&self.name)?;
        validate_genre(&self.genre)?;
        Ok(())
    }
}

impl Model {
    /// Replaces every field except `id`.
    pub fn with_input(self, input: MovieInput) -> Self {
        Self { id: self.id, name: input.name, genre: input.genre, release_date: input.release_date }
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("name longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_genre(genre: &str) -> Result<(), errors::ModelError> {
    if genre.trim().is_empty() {
        return Err(errors::ModelError::Validation("genre required".into()));
    }
    if genre.chars().count() > GENRE_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("genre longer than {GENRE_MAX_LEN} characters")));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: &MovieInput) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        name: Set(input.name.clone()),
        genre: Set(input.genre.clone()),
        release_date: Set(input.release_date),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
