//! Application module
//!
//! Owns the search box, the debounced dispatcher feeding lookups and the
//! suggestion list, and wires key events and rendering between them.

mod events;
mod render;
mod state;

pub use state::App;
