use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ValueDoc {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreateValueInputDoc {
    pub name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateValueInputDoc {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::hello,
        crate::routes::health,
        crate::routes::values::list,
        crate::routes::values::create,
        crate::routes::values::get_one,
        crate::routes::values::update,
        crate::routes::values::delete_one,
    ),
    components(
        schemas(
            HealthResponse,
            ValueDoc,
            CreateValueInputDoc,
            UpdateValueInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "values")
    )
)]
pub struct ApiDoc;
