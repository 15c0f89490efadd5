pub mod brand_service;
pub mod enterprise_service;
pub mod equipment_service;
pub mod schedule_service;
pub mod space_service;
pub mod spacetype_service;
