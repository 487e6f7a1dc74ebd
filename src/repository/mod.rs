pub mod mongo;
pub mod repository_error;
pub mod user_repo;
pub mod tenant_repo;
pub mod update_repo;
pub mod room_repo;
pub mod booking_repo;
