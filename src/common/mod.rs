pub mod commands;
pub mod events;
pub mod types;

pub use commands::ServiceCommand;
pub use events::ServiceEvent;
