pub mod brands;
pub mod enterprises;
pub mod equipments;
pub mod schedules;
pub mod spaces;
pub mod spacetypes;

pub use brands::Entity as Brands;
pub use enterprises::Entity as Enterprises;
pub use equipments::Entity as Equipments;
pub use schedules::Entity as Schedules;
pub use spaces::Entity as Spaces;
pub use spacetypes::Entity as Spacetypes;
