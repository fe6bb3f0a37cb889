// Browser event wiring
pub mod events;
