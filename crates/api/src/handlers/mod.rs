pub mod auth;
pub mod dashboard;
pub mod deleted_items;
pub mod fit_checker;
pub mod furniture;
pub mod rooms;
