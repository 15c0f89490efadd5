use sea_orm::entity::prelude::*;

// A space has no attributes of its own; it only ties a spacetype to its
// equipment and bookings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spaces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spacetype_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::spacetypes::Entity",
        from = "Column::SpacetypeId",
        to = "super::spacetypes::Column::Id"
    )]
    Spacetypes,
    #[sea_orm(has_many = "super::equipments::Entity")]
    Equipments,
    #[sea_orm(has_many = "super::schedules::Entity")]
    Schedules,
}

impl Related<super::spacetypes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Spacetypes.def()
    }
}

impl Related<super::equipments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipments.def()
    }
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
