pub mod ports;
pub mod event_bus;
pub mod session_store;
pub mod drafts;
pub mod conversation;
pub mod controller;
pub mod preferences;
