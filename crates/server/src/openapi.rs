use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CountResponseDoc { pub count: u64 }

/// Wire shape of a supplier. Absent fields are omitted from responses.
#[derive(ToSchema)]
pub struct FournisseurDoc {
    /// Assigned by the server; ignored on create, overridden by the path on update
    pub id: Option<i64>,
    pub societe: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub ville: Option<String>,
    pub ice: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::fournisseurs::list,
        crate::routes::fournisseurs::count,
        crate::routes::fournisseurs::get,
        crate::routes::fournisseurs::create,
        crate::routes::fournisseurs::update,
        crate::routes::fournisseurs::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CountResponseDoc,
            FournisseurDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "fournisseurs")
    )
)]
pub struct ApiDoc;
