use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteEntry {
    #[schema(value_type = String)]
    pub path: &'static str,
    #[schema(value_type = Vec<String>)]
    pub methods: &'static [&'static str],
}

const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        methods: &["GET"],
    },
    RouteEntry {
        path: "/health",
        methods: &["GET"],
    },
    RouteEntry {
        path: "/enterprises",
        methods: &["GET", "POST"],
    },
    RouteEntry {
        path: "/enterprise/{id}",
        methods: &["GET", "PUT"],
    },
    RouteEntry {
        path: "/brands",
        methods: &["GET", "POST"],
    },
    RouteEntry {
        path: "/brand/{id}",
        methods: &["GET", "PUT"],
    },
    RouteEntry {
        path: "/schedules",
        methods: &["GET", "POST"],
    },
    RouteEntry {
        path: "/schedule/{id}",
        methods: &["GET", "PUT"],
    },
    RouteEntry {
        path: "/spaces",
        methods: &["GET", "POST"],
    },
    RouteEntry {
        path: "/space/{id}",
        methods: &["GET", "PUT"],
    },
    RouteEntry {
        path: "/spacetypes",
        methods: &["GET", "POST"],
    },
    RouteEntry {
        path: "/spacetype/{id}",
        methods: &["GET", "PUT"],
    },
    RouteEntry {
        path: "/equipments",
        methods: &["GET", "POST"],
    },
    RouteEntry {
        path: "/equipment/{id}",
        methods: &["GET", "PUT"],
    },
];

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Machine-readable list of registered routes", body = Vec<RouteEntry>)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<&'static [RouteEntry]> {
    Json(ROUTES)
}
