//! UI components

pub mod navbar;
pub mod slider;
pub mod starfield;
pub mod typewriter;

pub use navbar::Navbar;
pub use slider::SlideDeck;
pub use starfield::Starfield;
pub use typewriter::Typewriter;
