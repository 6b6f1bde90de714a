//! Conversion from PokéAPI species names to Pokémon Showdown sprite slugs.

use unicode_normalization::UnicodeNormalization;

/// Convert an API species name to a Showdown sprite slug: NFKD-fold to
/// ASCII, lowercase, spaces become hyphens, apostrophes are dropped.
/// Works for most standard species.
pub fn showdown_slug(name: &str) -> String {
  name
    .nfkd()
    .filter(char::is_ascii)
    .collect::<String>()
    .to_lowercase()
    .replace(' ', "-")
    .replace('\'', "")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_names_pass_through_lowercased() {
    assert_eq!(showdown_slug("Pikachu"), "pikachu");
    assert_eq!(showdown_slug("mr-mime"), "mr-mime");
  }

  #[test]
  fn accents_fold_to_ascii() {
    assert_eq!(showdown_slug("Flabébé"), "flabebe");
  }

  #[test]
  fn spaces_and_apostrophes_are_normalised() {
    assert_eq!(showdown_slug("Tapu Koko"), "tapu-koko");
    assert_eq!(showdown_slug("Farfetch'd"), "farfetchd");
  }
}
