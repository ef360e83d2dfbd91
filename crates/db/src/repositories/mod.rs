//! Repository layer: one zero-sized struct per table, each method a single
//! SQL statement.

pub mod deleted_item_repo;
pub mod furniture_repo;
pub mod room_repo;

pub use deleted_item_repo::DeletedItemRepo;
pub use furniture_repo::FurnitureRepo;
pub use room_repo::RoomRepo;
