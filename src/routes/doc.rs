use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{brands, enterprises, equipments, schedules, spaces, spacetypes},
    models::{Brand, Enterprise, Equipment, Schedule, Space, Spacetype},
    routes::{
        brands as brand_routes, enterprises as enterprise_routes, equipments as equipment_routes,
        health, schedules as schedule_routes, sitemap, spaces as space_routes,
        spacetypes as spacetype_routes,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        enterprise_routes::list_enterprises,
        enterprise_routes::create_enterprise,
        enterprise_routes::get_enterprise,
        enterprise_routes::update_enterprise,
        brand_routes::list_brands,
        brand_routes::create_brand,
        brand_routes::get_brand,
        brand_routes::update_brand,
        schedule_routes::list_schedules,
        schedule_routes::create_schedule,
        schedule_routes::get_schedule,
        schedule_routes::update_schedule,
        space_routes::list_spaces,
        space_routes::create_space,
        space_routes::get_space,
        space_routes::update_space,
        spacetype_routes::list_spacetypes,
        spacetype_routes::create_spacetype,
        spacetype_routes::get_spacetype,
        spacetype_routes::update_spacetype,
        equipment_routes::list_equipments,
        equipment_routes::create_equipment,
        equipment_routes::get_equipment,
        equipment_routes::update_equipment,
    ),
    components(
        schemas(
            Enterprise,
            Brand,
            Spacetype,
            Space,
            Schedule,
            Equipment,
            sitemap::RouteEntry,
            health::HealthData,
            enterprises::CreateEnterpriseRequest,
            enterprises::UpdateEnterpriseRequest,
            brands::CreateBrandRequest,
            brands::UpdateBrandRequest,
            spacetypes::CreateSpacetypeRequest,
            spacetypes::UpdateSpacetypeRequest,
            spaces::CreateSpaceRequest,
            spaces::UpdateSpaceRequest,
            schedules::CreateScheduleRequest,
            schedules::UpdateScheduleRequest,
            equipments::CreateEquipmentRequest,
            equipments::UpdateEquipmentRequest,
        )
    ),
    tags(
        (name = "Sitemap", description = "Route listing"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Enterprises", description = "Enterprise endpoints"),
        (name = "Brands", description = "Brand endpoints"),
        (name = "Schedules", description = "Schedule endpoints"),
        (name = "Spaces", description = "Space endpoints"),
        (name = "Spacetypes", description = "Spacetype endpoints"),
        (name = "Equipments", description = "Equipment endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
