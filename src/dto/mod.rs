pub mod brands;
pub mod enterprises;
pub mod equipments;
pub mod schedules;
pub mod spaces;
pub mod spacetypes;
