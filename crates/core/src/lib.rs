//! Hand evaluation, scoring, and discard advice. Keep this crate free of IO
//! and presentation concerns.

pub mod best;
pub mod cards;
pub mod deck;
pub mod discard;
pub mod parse;
pub mod pattern;
pub mod planets;
pub mod scoring;

pub use best::*;
pub use cards::*;
pub use deck::*;
pub use discard::*;
pub use parse::*;
pub use pattern::*;
pub use planets::*;
pub use scoring::*;
