use axum_coworking_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        brands::{CreateBrandRequest, UpdateBrandRequest},
        enterprises::{CreateEnterpriseRequest, UpdateEnterpriseRequest},
        equipments::CreateEquipmentRequest,
        schedules::CreateScheduleRequest,
        spaces::CreateSpaceRequest,
        spacetypes::CreateSpacetypeRequest,
    },
    services::{
        brand_service, enterprise_service, equipment_service, schedule_service, space_service,
        spacetype_service,
    },
    state::AppState,
};
use sea_orm::{ConnectionTrait, Statement};

// Integration flow: an enterprise registers, a spacetype/space is set up,
// the enterprise books the space and attaches a brand; partial updates merge
// field by field and every item lookup resolves against its own table.
#[tokio::test]
async fn register_book_and_update_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    // Empty collections answer with an empty list, never an error.
    assert!(enterprise_service::list(&state).await?.is_empty());
    assert!(equipment_service::list(&state).await?.is_empty());

    let enterprise = enterprise_service::create(
        &state,
        CreateEnterpriseRequest {
            name: "Jordi".into(),
            last_name: "Serra".into(),
            email: "jordi@example.com".into(),
            password: "secret".into(),
            cif: "B12345678".into(),
            phone: "600111222".into(),
            tot_hours: 20,
        },
    )
    .await?;
    assert!(!enterprise.is_admin, "enterprises are never created as admins");

    // Fresh enterprise serializes with its submitted values and empty children.
    let listed = enterprise_service::list(&state).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].email, "jordi@example.com");
    assert_eq!(listed[0].tot_hours, 20);
    assert!(listed[0].brand.is_empty());
    assert!(listed[0].schedule.is_empty());

    let spacetype = spacetype_service::create(
        &state,
        CreateSpacetypeRequest {
            name: "Meeting room".into(),
            description: "Enclosed room with a table".into(),
        },
    )
    .await?;

    let space = space_service::create(
        &state,
        CreateSpaceRequest {
            spacetype_id: spacetype.id,
        },
    )
    .await?;

    let brand = brand_service::create(
        &state,
        CreateBrandRequest {
            name: "Acme".into(),
            description: "Road runner supplies".into(),
            logo: "acme.png".into(),
            enterprise_id: enterprise.id,
        },
    )
    .await?;

    schedule_service::create(
        &state,
        CreateScheduleRequest {
            date: 20260824,
            hour_start: 9,
            hour_end: 11,
            enterprise_id: enterprise.id,
            space_id: space.id,
        },
    )
    .await?;

    let equipment = equipment_service::create(
        &state,
        CreateEquipmentRequest {
            quantity: 2,
            name: "Projector".into(),
            description: "4K projector".into(),
            space_id: space.id,
        },
    )
    .await?;

    // The enterprise now nests its brand and booking.
    let fetched = enterprise_service::find_by_id(&state, enterprise.id).await?;
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].brand.len(), 1);
    assert_eq!(fetched[0].brand[0].name, "Acme");
    assert_eq!(fetched[0].schedule.len(), 1);
    assert_eq!(fetched[0].schedule[0].space_id, space.id);

    // Spacetypes nest spaces two levels deep.
    let spacetypes = spacetype_service::find_by_id(&state, spacetype.id).await?;
    assert_eq!(spacetypes.len(), 1);
    assert_eq!(spacetypes[0].space.len(), 1);
    assert_eq!(spacetypes[0].space[0].equipment.len(), 1);
    assert_eq!(spacetypes[0].space[0].schedule.len(), 1);

    // Partial update merges only the submitted field.
    let updated = enterprise_service::update(
        &state,
        enterprise.id,
        UpdateEnterpriseRequest {
            name: None,
            last_name: None,
            email: None,
            password: None,
            cif: None,
            phone: None,
            tot_hours: Some(40),
        },
    )
    .await?
    .expect("enterprise exists");
    assert_eq!(updated.tot_hours, 40);
    assert_eq!(updated.email, "jordi@example.com");
    assert_eq!(updated.name, "Jordi");

    // A brand update resolves against the brands table, not enterprises.
    let updated_brand = brand_service::update(
        &state,
        brand.id,
        UpdateBrandRequest {
            name: None,
            description: Some("Rebranded".into()),
            logo: None,
        },
    )
    .await?
    .expect("brand exists");
    assert_eq!(updated_brand.description, "Rebranded");
    assert_eq!(updated_brand.name, "Acme");

    // Unknown ids surface as the tagged not-found, not an error.
    assert!(
        brand_service::update(
            &state,
            9999,
            UpdateBrandRequest {
                name: Some("ghost".into()),
                description: None,
                logo: None,
            },
        )
        .await?
        .is_none()
    );

    // Equipment lookup by id works and filters to the single row.
    let found = equipment_service::find_by_id(&state, equipment.id).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Projector");
    assert!(equipment_service::find_by_id(&state, 9999).await?.is_empty());

    // Item GET with an unknown id is an empty list, never a 404.
    assert!(enterprise_service::find_by_id(&state, 9999).await?.is_empty());

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE equipments, schedules, brands, spaces, spacetypes, enterprises RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { pool, orm })
}
