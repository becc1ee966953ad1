use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDoc {
    pub id: i64,
    pub name: String,
    pub genre: String,
    #[schema(format = Date, example = "1999-04-22")]
    pub release_date: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieInputDoc {
    pub name: String,
    pub genre: String,
    #[schema(format = Date, example = "1999-04-22")]
    pub release_date: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::movies::list,
        crate::routes::movies::create,
        crate::routes::movies::get,
        crate::routes::movies::update,
        crate::routes::movies::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MovieDoc,
            MovieInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "movies")
    )
)]
pub struct ApiDoc;
