use axum_coworking_api::{
    dto::enterprises::UpdateEnterpriseRequest,
    models::{Brand, Enterprise, Schedule, Space},
};

// The FK keys keep the camel-cased spelling clients already parse.
#[test]
fn brand_serializes_enterprise_id_as_camel_case() {
    let brand = Brand {
        id: 1,
        name: "Acme".into(),
        description: "Road runner supplies".into(),
        logo: "acme.png".into(),
        enterprise_id: 7,
    };
    let value = serde_json::to_value(&brand).unwrap();
    assert_eq!(value["enterpriseID"], 7);
    assert!(value.get("enterprise_id").is_none());
}

#[test]
fn schedule_serializes_both_fk_keys() {
    let schedule = Schedule {
        id: 3,
        date: 20260824,
        hour_start: 9,
        hour_end: 11,
        enterprise_id: 7,
        space_id: 2,
    };
    let value = serde_json::to_value(&schedule).unwrap();
    assert_eq!(value["enterpriseID"], 7);
    assert_eq!(value["spaceID"], 2);
}

#[test]
fn space_serializes_spacetype_id_and_child_arrays() {
    let space = Space {
        id: 2,
        spacetype_id: 4,
        equipment: vec![],
        schedule: vec![],
    };
    let value = serde_json::to_value(&space).unwrap();
    assert_eq!(value["spacetypeID"], 4);
    assert_eq!(value["equipment"], serde_json::json!([]));
    assert_eq!(value["schedule"], serde_json::json!([]));
}

#[test]
fn enterprise_serializes_nested_child_arrays() {
    let enterprise = Enterprise {
        id: 1,
        name: "Jordi".into(),
        last_name: "Serra".into(),
        email: "jordi@example.com".into(),
        password: "secret".into(),
        cif: "B12345678".into(),
        phone: "600111222".into(),
        tot_hours: 20,
        is_admin: false,
        brand: vec![],
        schedule: vec![],
    };
    let value = serde_json::to_value(&enterprise).unwrap();
    assert_eq!(value["brand"], serde_json::json!([]));
    assert_eq!(value["schedule"], serde_json::json!([]));
    assert_eq!(value["tot_hours"], 20);
}

// A PUT body mentioning a single field deserializes with every other
// field absent, so the merge leaves them untouched.
#[test]
fn update_request_with_single_field_leaves_rest_absent() {
    let payload: UpdateEnterpriseRequest =
        serde_json::from_str(r#"{"tot_hours": 40}"#).unwrap();
    assert_eq!(payload.tot_hours, Some(40));
    assert!(payload.name.is_none());
    assert!(payload.email.is_none());
    assert!(payload.password.is_none());
    assert!(payload.phone.is_none());
}
