//! suggestbox: a terminal autocomplete search box
//!
//! Keystrokes update the query synchronously; a [`debounce::Debouncer`]
//! holds lookups back until typing pauses, then a
//! [`lookup::LookupInvoker`] fetches suggestions and the UI renders them.

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod input;
pub mod lookup;
pub mod suggestion;


pub use app::App;
pub use debounce::Debouncer;
pub use error::SuggestError;
