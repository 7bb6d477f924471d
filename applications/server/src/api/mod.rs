/// API route modules
pub mod health;
pub mod realtime;
pub mod users;
