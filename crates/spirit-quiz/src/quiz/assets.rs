//! Display asset resolution for the results screen.

use super::domain::SpiritAnimal;

const ASSET_DIR: &str = "/gifs/spirit-animal-quiz";

/// Asset path for a classified animal, keyed by its lower-cased label.
pub fn asset_path(animal: SpiritAnimal) -> String {
    format!("{ASSET_DIR}/{}.gif", animal.asset_key())
}

/// Resolve arbitrary label text to a display asset. Labels that do not map
/// to a known animal fall back to the Sloth asset so the results screen
/// always has something to show.
pub fn display_asset(label: &str) -> String {
    let animal = SpiritAnimal::from_label(label).unwrap_or(SpiritAnimal::Sloth);
    asset_path(animal)
}
