//! Async HTTP client for PokéAPI and the Showdown sprite host.

use std::time::Duration;

use anyhow::{Context as _, Result};
use rand::Rng as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::slug::showdown_slug;

/// Highest species id we ever roll (up to Gen 9; safe upper bound).
pub const POKEMON_MAX_ID: u32 = 1010;

const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";
const SHOWDOWN_SPRITES: &str = "https://play.pokemonshowdown.com/sprites/ani";

/// What the page decorates itself with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spotlight {
  /// Species name with a leading capital, for display.
  pub display_name:       String,
  /// Official artwork PNG.
  pub image_url:          String,
  /// Animated Showdown sprite, when one exists for the species.
  pub animated_image_url: Option<String>,
}

// ─── PokéAPI response shape (only the fields we read) ────────────────────────

#[derive(Deserialize)]
struct PokemonResponse {
  name:    String,
  sprites: Sprites,
}

#[derive(Deserialize)]
struct Sprites {
  other: OtherSprites,
}

#[derive(Deserialize)]
struct OtherSprites {
  #[serde(rename = "official-artwork")]
  official_artwork: OfficialArtwork,
}

#[derive(Deserialize)]
struct OfficialArtwork {
  front_default: Option<String>,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Best-effort spotlight fetcher.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. The public
/// surface returns `Option`, never `Result`: every failure is absorbed here
/// (logged at debug) so the caller cannot be broken by this collaborator.
#[derive(Clone)]
pub struct SpotlightClient {
  client: Client,
}

impl SpotlightClient {
  pub fn new() -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(8))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client })
  }

  /// Fetch the spotlight for a specific species id, or `None` on any
  /// failure.
  pub async fn fetch(&self, species_id: u32) -> Option<Spotlight> {
    match self.try_fetch(species_id).await {
      Ok(spotlight) => Some(spotlight),
      Err(e) => {
        tracing::debug!(species_id, error = %e, "spotlight fetch failed");
        None
      }
    }
  }

  /// Fetch the spotlight for a uniformly random species in `1..=max_id`.
  pub async fn fetch_random(&self, max_id: u32) -> Option<Spotlight> {
    let species_id = rand::thread_rng().gen_range(1..=max_id.max(1));
    self.fetch(species_id).await
  }

  async fn try_fetch(&self, species_id: u32) -> Result<Spotlight> {
    let url = format!("{POKEAPI_BASE}/pokemon/{species_id}");
    let data: PokemonResponse = self
      .client
      .get(&url)
      .send()
      .await
      .context("GET pokemon failed")?
      .error_for_status()?
      .json()
      .await
      .context("deserialising pokemon")?;

    let image_url = data
      .sprites
      .other
      .official_artwork
      .front_default
      .context("species has no official artwork")?;

    // Quick HEAD probe to see whether an animated sprite exists; absence is
    // normal for many species, so a miss just leaves the field empty.
    let gif_url =
      format!("{SHOWDOWN_SPRITES}/{}.gif", showdown_slug(&data.name));
    let animated_image_url = match self
      .client
      .head(&gif_url)
      .timeout(Duration::from_secs(5))
      .send()
      .await
    {
      Ok(resp) if resp.status().is_success() => Some(gif_url),
      _ => None,
    };

    Ok(Spotlight {
      display_name: capitalize(&data.name),
      image_url,
      animated_image_url,
    })
  }
}

/// Uppercase the first character, API names being lowercase slugs.
fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}
