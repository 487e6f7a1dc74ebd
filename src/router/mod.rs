pub mod auth_router;
pub mod booking_router;
pub mod chat_router;
pub mod rent_router;
pub mod room_router;
pub mod tenant_router;
pub mod update_router;
