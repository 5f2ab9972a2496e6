pub use self::attributes::{AttributeFilter, DesignAttributes};

use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;
use derive_more::Display;
use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};

use crate::matcher::{ColorCoordinates, hex_digits_to_srgb, srgb_to_lab};
use crate::{Error, Result};

mod attributes;

const RAL_CLASSIC_JSON: &str = include_str!("../data/ral-classic.json");
const RAL_DESIGN_JSON: &str = include_str!("../data/ral-design.json");

/// The two RAL catalogs bundled with the crate.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, ValueEnum)]
pub enum PaletteId {
    /// RAL Classic, four-digit names like "RAL 7026".
    #[display("RAL Classic")]
    Classic,
    /// RAL Design System+, names carrying hue, lightness and chroma.
    #[display("RAL Design")]
    Design,
}

/// One catalog color with everything derived at load time.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    name: String,
    hex: String,
    coordinates: ColorCoordinates,
    attributes: Option<DesignAttributes>,
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Six hex digits as found in the catalog, no leading `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn coordinates(&self) -> &ColorCoordinates {
        &self.coordinates
    }

    /// Attributes parsed from the name, design catalog only.
    pub fn attributes(&self) -> Option<&DesignAttributes> {
        self.attributes.as_ref()
    }
}

/// An immutable RAL catalog with Lab and LCH coordinates precomputed
/// once for every entry.
#[derive(Debug, Clone)]
pub struct Catalog {
    id: PaletteId,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load and validate one of the bundled catalogs.
    pub fn load(id: PaletteId) -> Result<Self> {
        match id {
            PaletteId::Classic => Self::from_json(id, RAL_CLASSIC_JSON),
            PaletteId::Design => Self::from_json(id, RAL_DESIGN_JSON),
        }
    }

    pub(crate) fn from_json(id: PaletteId, json: &str) -> Result<Self> {
        let load_error = |reason: String| Error::CatalogLoad {
            palette: id,
            reason,
        };
        let CatalogFile(pairs) =
            serde_json::from_str(json).map_err(|error| load_error(error.to_string()))?;
        if pairs.is_empty() {
            return Err(load_error("catalog has no entries".to_owned()));
        }

        let mut entries = Vec::with_capacity(pairs.len());
        for (name, hex) in pairs {
            let srgb = hex_digits_to_srgb(&hex)
                .ok_or_else(|| load_error(format!("entry {name:?} has a bad hex value {hex:?}")))?;
            let attributes = match id {
                PaletteId::Classic => None,
                PaletteId::Design => match DesignAttributes::parse(&name) {
                    Ok(attributes) => Some(attributes),
                    Err(error) => {
                        tracing::warn!(
                            entry = %name, %error, "design name has no usable attributes"
                        );
                        None
                    }
                },
            };
            entries.push(CatalogEntry {
                coordinates: ColorCoordinates::from_lab(srgb_to_lab(srgb)),
                name,
                hex,
                attributes,
            });
        }
        tracing::debug!(palette = %id, entries = entries.len(), "catalog loaded");
        Ok(Self { id, entries })
    }

    pub fn id(&self) -> PaletteId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Whether names in this catalog carry filterable attributes.
    pub fn supports_attributes(&self) -> bool {
        matches!(self.id, PaletteId::Design)
    }
}

/// Raw catalog file content, kept in file order. Plain maps will not do
/// here: duplicate names must fail the load instead of silently keeping
/// the last value.
struct CatalogFile(Vec<(String, String)>);

impl<'de> Deserialize<'de> for CatalogFile {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FileVisitor;

        impl<'de> Visitor<'de> for FileVisitor {
            type Value = CatalogFile;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of color names to hex strings")
            }

            fn visit_map<A>(self, mut map: A) -> core::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut seen = HashSet::new();
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, hex)) = map.next_entry::<String, String>()? {
                    if !seen.insert(name.clone()) {
                        return Err(de::Error::custom(format!("duplicate entry {name:?}")));
                    }
                    pairs.push((name, hex));
                }
                Ok(CatalogFile(pairs))
            }
        }

        deserializer.deserialize_map(FileVisitor)
    }
}
