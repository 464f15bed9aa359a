//! Page-shell metadata for The Meme Lore.
//!
//! Everything the document head declares, as typed values: site metadata and
//! title templating, Open Graph / Twitter link-preview cards, robots
//! directives, the JSON-LD structured-data block, and the web-app manifest.
//! Pure data and serialization; rendering into actual tags is the app's job,
//! and `lore-gen` writes the file-shaped artifacts.

mod manifest;
mod meta;
mod structured;

pub use manifest::{ManifestIcon, WebManifest};
pub use meta::{OpenGraphCard, RobotsDirectives, SiteMeta, TwitterCard};
pub use structured::StructuredData;
