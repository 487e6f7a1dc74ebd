pub mod auth_service;
pub mod booking_service;
pub mod chat_service;
pub mod rent_service;
pub mod room_service;
pub mod tenant_service;
pub mod update_service;
