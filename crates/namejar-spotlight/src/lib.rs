//! Decorative Pokémon "spotlight" fetcher.
//!
//! Purely cosmetic collaborator: queries PokéAPI for species data and probes
//! Pokémon Showdown for an animated sprite. Anything that goes wrong —
//! network trouble, HTTP errors, missing artwork, malformed JSON — degrades
//! to "no spotlight". Callers must never block core behavior on this crate,
//! and it never retries.

mod client;
mod slug;

pub use client::{POKEMON_MAX_ID, Spotlight, SpotlightClient};
pub use slug::showdown_slug;
