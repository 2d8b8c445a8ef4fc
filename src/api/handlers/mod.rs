//! HTTP request handlers.

pub mod add;
pub mod health;
pub mod redirect;

pub use add::add_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
