pub mod notifier;
pub mod position;
pub mod resolve_error;
pub mod resolver;
