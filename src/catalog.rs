//! The asset catalog: which named assets exist and how each is generated.
//!
//! A catalog is plain configuration. It is built once, either from
//! [`AssetCatalog::builtin`] or from JSON, and is read-only afterwards.
//!
//! # Example
//!
//! ```
//! use placeholder_forge::{AssetCatalog, AssetEntry, Color};
//!
//! let catalog = AssetCatalog::new("mymod")
//!     .with_texture(AssetEntry::item("ruby").with_color(Color::rgb(224, 17, 95)))
//!     .with_texture(AssetEntry::gui("mob_spawner"))
//!     .with_descriptor("ruby");
//!
//! let json = catalog.to_json().unwrap();
//! let restored = AssetCatalog::from_json(&json).unwrap();
//! assert_eq!(restored, catalog);
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::SizePx;

/// Default side length of icon textures.
pub const DEFAULT_ICON_SIZE: u32 = 32;

// ============================================================================
// Kinds
// ============================================================================

/// The category an asset belongs to. Decides its generator and output folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Item,
    Block,
    Gui,
}

/// Which generator renders an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// A square swatch with a centered label.
    Icon,
    /// A GUI screen rendered from its layout descriptor.
    Panel,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [Self::Item, Self::Block, Self::Gui];

    /// Texture subfolder name, also the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Block => "block",
            Self::Gui => "gui",
        }
    }

    pub fn generator(self) -> GeneratorKind {
        match self {
            Self::Item | Self::Block => GeneratorKind::Icon,
            Self::Gui => GeneratorKind::Panel,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entries
// ============================================================================

/// One texture to generate, with its optional overrides.
///
/// ```json
/// { "name": "example_item", "kind": "item", "color": [100, 150, 200], "label": "EX" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    pub name: String,
    pub kind: AssetKind,

    /// Background color. Icons fall back to a color derived from the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Icon label. Defaults to the first two characters of the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Canvas size. Icons default to 32x32; GUI entries must match their screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizePx>,
}

impl AssetEntry {
    pub fn new(name: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            color: None,
            label: None,
            size: None,
        }
    }

    pub fn item(name: impl Into<String>) -> Self {
        Self::new(name, AssetKind::Item)
    }

    pub fn block(name: impl Into<String>) -> Self {
        Self::new(name, AssetKind::Block)
    }

    pub fn gui(name: impl Into<String>) -> Self {
        Self::new(name, AssetKind::Gui)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_size(mut self, size: SizePx) -> Self {
        self.size = Some(size);
        self
    }

    pub fn generator(&self) -> GeneratorKind {
        self.kind.generator()
    }

    /// The canvas size of an icon: the configured size, or 32x32.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIconSize`] for an empty or non-square size.
    pub fn icon_size(&self) -> Result<SizePx> {
        let size = self.size.unwrap_or(SizePx::square(DEFAULT_ICON_SIZE));
        if size.width == 0 || !size.is_square() {
            return Err(Error::InvalidIconSize {
                name: self.name.clone(),
                size,
            });
        }
        Ok(size)
    }

    /// The label drawn on the icon.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.name.chars().take(2).collect::<String>().to_uppercase(),
        }
    }
}

/// A name that gets an item descriptor, with an optional model override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorEntry {
    pub name: String,

    /// Full model reference, replacing `<namespace>:item/<name>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl DescriptorEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

// ============================================================================
// AssetCatalog
// ============================================================================

/// Every asset a generation run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCatalog {
    /// Resource namespace, used in output paths and model references.
    pub namespace: String,

    #[serde(default)]
    pub textures: Vec<AssetEntry>,

    #[serde(default)]
    pub descriptors: Vec<DescriptorEntry>,
}

impl AssetCatalog {
    /// Creates an empty catalog.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            textures: Vec::new(),
            descriptors: Vec::new(),
        }
    }

    pub fn with_texture(mut self, entry: AssetEntry) -> Self {
        self.textures.push(entry);
        self
    }

    pub fn with_descriptor(mut self, name: impl Into<String>) -> Self {
        self.descriptors.push(DescriptorEntry::new(name));
        self
    }

    /// The catalog for the example mod's placeholder assets.
    pub fn builtin() -> Self {
        const ITEMS: [(&str, Color, &str); 13] = [
            ("example_item", Color::rgb(100, 150, 200), "EX"),
            ("experience_granule", Color::rgb(255, 215, 0), "XP"),
            ("magic_water_bucket", Color::rgb(138, 43, 226), "MW"),
            ("experience_bucket", Color::rgb(0, 255, 127), "EB"),
            ("range_reducer_module", Color::rgb(255, 100, 100), "R-"),
            ("range_expander_module", Color::rgb(100, 255, 100), "R+"),
            ("min_delay_reducer_module", Color::rgb(100, 100, 255), "MD"),
            ("max_delay_reducer_module", Color::rgb(255, 255, 100), "XD"),
            ("count_booster_module", Color::rgb(255, 100, 255), "C+"),
            ("player_ignorer_module", Color::rgb(100, 255, 255), "PI"),
            ("simulation_upgrade_module", Color::rgb(200, 100, 50), "SU"),
            ("looting_upgrade_module", Color::rgb(50, 200, 100), "LT"),
            ("beheading_upgrade_module", Color::rgb(200, 50, 100), "BH"),
        ];
        const BLOCKS: [(&str, Color, &str); 3] = [
            ("example_block", Color::rgb(150, 150, 150), "EB"),
            ("mob_spawner", Color::rgb(64, 64, 64), "MS"),
            ("fluid_tank", Color::rgb(192, 192, 192), "FT"),
        ];
        const SCREENS: [(&str, Color); 2] = [
            ("mob_spawner", Color::rgb(139, 139, 139)),
            ("spawn_egg_mob_spawner", Color::rgb(169, 169, 169)),
        ];
        // magic_water_bucket ships a hand-written descriptor.
        const DESCRIPTORS: [&str; 15] = [
            "example_item",
            "experience_granule",
            "example_block",
            "fluid_tank",
            "mob_spawner",
            "experience_bucket",
            "range_reducer_module",
            "range_expander_module",
            "min_delay_reducer_module",
            "max_delay_reducer_module",
            "count_booster_module",
            "player_ignorer_module",
            "simulation_upgrade_module",
            "looting_upgrade_module",
            "beheading_upgrade_module",
        ];

        let items = ITEMS
            .into_iter()
            .map(|(name, color, label)| AssetEntry::item(name).with_color(color).with_label(label));
        let blocks = BLOCKS
            .into_iter()
            .map(|(name, color, label)| AssetEntry::block(name).with_color(color).with_label(label));
        let screens = SCREENS
            .into_iter()
            .map(|(name, color)| AssetEntry::gui(name).with_color(color));

        Self {
            namespace: "examplemod".to_string(),
            textures: items.chain(blocks).chain(screens).collect(),
            descriptors: DESCRIPTORS.into_iter().map(DescriptorEntry::new).collect(),
        }
    }

    /// Entries of one category, in catalog order.
    pub fn textures_of(&self, kind: AssetKind) -> impl Iterator<Item = &AssetEntry> {
        self.textures.iter().filter(move |entry| entry.kind == kind)
    }

    /// Checks names and icon sizes, and rejects names that repeat within one set.
    ///
    /// Names become file stems, so they are limited to the resource location
    /// characters `[a-z0-9_.-]`. Items, blocks and GUI screens are separate
    /// sets since they land in separate folders; an item and a block may
    /// share a name.
    pub fn validate(&self) -> Result<()> {
        check_name("namespace", &self.namespace)?;
        for entry in &self.textures {
            check_name("asset name", &entry.name)?;
            if entry.generator() == GeneratorKind::Icon {
                entry.icon_size()?;
            }
        }
        for entry in &self.descriptors {
            check_name("descriptor name", &entry.name)?;
        }

        for kind in AssetKind::ALL {
            if let Some(name) = first_duplicate(self.textures_of(kind).map(|e| e.name.as_str())) {
                return Err(Error::DuplicateAsset {
                    set: kind.as_str(),
                    name: name.to_string(),
                });
            }
        }

        match first_duplicate(self.descriptors.iter().map(|d| d.name.as_str())) {
            Some(name) => Err(Error::DuplicateAsset {
                set: "descriptor",
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Serializes the catalog to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the catalog to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Accepts non-empty names made of `[a-z0-9_.-]`.
fn check_name(what: &'static str, value: &str) -> Result<()> {
    let valid = !value.is_empty()
        && value
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-'));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName {
            what,
            value: value.to_string(),
        })
    }
}

fn first_duplicate<'a>(mut names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.find(|name| !seen.insert(*name))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Screen;

    #[test]
    fn builtin_catalog_counts() {
        let catalog = AssetCatalog::builtin();

        assert_eq!(catalog.namespace, "examplemod");
        assert_eq!(catalog.textures_of(AssetKind::Item).count(), 13);
        assert_eq!(catalog.textures_of(AssetKind::Block).count(), 3);
        assert_eq!(catalog.textures_of(AssetKind::Gui).count(), 2);
        assert_eq!(catalog.descriptors.len(), 15);
        catalog.validate().unwrap();
    }

    #[test]
    fn builtin_gui_entries_name_real_screens() {
        let catalog = AssetCatalog::builtin();
        for entry in catalog.textures_of(AssetKind::Gui) {
            assert!(Screen::from_name(&entry.name).is_some(), "{}", entry.name);
        }
    }

    #[test]
    fn magic_water_bucket_has_no_generated_descriptor() {
        let catalog = AssetCatalog::builtin();
        assert!(catalog.textures_of(AssetKind::Item).any(|e| e.name == "magic_water_bucket"));
        assert!(!catalog.descriptors.iter().any(|d| d.name == "magic_water_bucket"));
    }

    #[test]
    fn item_and_block_may_share_a_name() {
        let catalog = AssetCatalog::new("ns")
            .with_texture(AssetEntry::block("mob_spawner"))
            .with_texture(AssetEntry::gui("mob_spawner"))
            .with_texture(AssetEntry::item("mob_spawner"));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn duplicates_within_a_set_are_rejected() {
        let catalog = AssetCatalog::new("ns")
            .with_texture(AssetEntry::item("gem"))
            .with_texture(AssetEntry::item("gem"));
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, Error::DuplicateAsset { set: "item", ref name } if name == "gem"));

        let catalog = AssetCatalog::new("ns").with_descriptor("gem").with_descriptor("gem");
        assert!(matches!(
            catalog.validate(),
            Err(Error::DuplicateAsset { set: "descriptor", .. })
        ));
    }

    #[test]
    fn icon_sizes_must_be_square_and_non_empty() {
        let empty = AssetCatalog::new("ns").with_texture(AssetEntry::item("ab").with_size(SizePx::square(0)));
        assert!(matches!(
            empty.validate(),
            Err(Error::InvalidIconSize { ref name, .. }) if name == "ab"
        ));

        let wide = AssetCatalog::new("ns").with_texture(AssetEntry::block("ab").with_size(SizePx::new(64, 8)));
        assert!(matches!(wide.validate(), Err(Error::InvalidIconSize { .. })));

        let json = r#"{"namespace":"ns","textures":[{"name":"ab","kind":"item","size":{"width":0,"height":0}}]}"#;
        assert!(matches!(
            AssetCatalog::from_json(json),
            Err(Error::InvalidIconSize { .. })
        ));

        assert_eq!(AssetEntry::item("ab").icon_size().unwrap(), SizePx::square(32));
        assert_eq!(
            AssetEntry::item("ab").with_size(SizePx::square(16)).icon_size().unwrap(),
            SizePx::square(16)
        );
    }

    #[test]
    fn names_outside_the_resource_charset_are_rejected() {
        let escaping = AssetCatalog::new("ns").with_texture(AssetEntry::item("../../x"));
        assert!(matches!(
            escaping.validate(),
            Err(Error::InvalidName { what: "asset name", ref value }) if value == "../../x"
        ));

        let json = r#"{"namespace":"ns","descriptors":[{"name":"a/b"}]}"#;
        assert!(matches!(
            AssetCatalog::from_json(json),
            Err(Error::InvalidName { what: "descriptor name", .. })
        ));

        for namespace in ["", "My Mod", "../ns"] {
            assert!(matches!(
                AssetCatalog::new(namespace).validate(),
                Err(Error::InvalidName { what: "namespace", .. })
            ));
        }

        let fine = AssetCatalog::new("example-mod.v2")
            .with_texture(AssetEntry::item("gem_2"))
            .with_descriptor("gem_2");
        assert!(fine.validate().is_ok());
    }

    #[test]
    fn display_label_defaults_to_name_prefix() {
        assert_eq!(AssetEntry::item("ruby_ore").display_label(), "RU");
        assert_eq!(AssetEntry::item("x").display_label(), "X");
        assert_eq!(AssetEntry::item("gem").with_label("G+").display_label(), "G+");
    }

    #[test]
    fn json_omits_unset_fields() {
        let json = AssetCatalog::new("ns")
            .with_texture(AssetEntry::item("gem"))
            .to_json()
            .unwrap();

        assert_eq!(
            json,
            r#"{"namespace":"ns","textures":[{"name":"gem","kind":"item"}],"descriptors":[]}"#
        );
    }

    #[test]
    fn json_reads_colors_and_sizes() {
        let json = r#"{
            "namespace": "ns",
            "textures": [
                { "name": "gem", "kind": "block", "color": [1, 2, 3, 128], "size": { "width": 16, "height": 16 } }
            ],
            "descriptors": [ { "name": "gem", "model": "ns:block/gem" } ]
        }"#;
        let catalog = AssetCatalog::from_json(json).unwrap();

        let entry = &catalog.textures[0];
        assert_eq!(entry.kind, AssetKind::Block);
        assert_eq!(entry.generator(), GeneratorKind::Icon);
        assert_eq!(entry.color, Some(Color::rgba(1, 2, 3, 128)));
        assert_eq!(entry.size, Some(SizePx::square(16)));
        assert_eq!(catalog.descriptors[0].model.as_deref(), Some("ns:block/gem"));
    }

    #[test]
    fn json_rejects_bad_input() {
        let bad_color = r#"{"namespace":"ns","textures":[{"name":"a","kind":"item","color":[1,2]}]}"#;
        assert!(matches!(AssetCatalog::from_json(bad_color), Err(Error::Json(_))));

        let bad_kind = r#"{"namespace":"ns","textures":[{"name":"a","kind":"fluid"}]}"#;
        assert!(AssetCatalog::from_json(bad_kind).is_err());

        let duplicate = r#"{"namespace":"ns","descriptors":[{"name":"a"},{"name":"a"}]}"#;
        assert!(matches!(
            AssetCatalog::from_json(duplicate),
            Err(Error::DuplicateAsset { .. })
        ));
    }

    #[test]
    fn builtin_survives_json() {
        let catalog = AssetCatalog::builtin();
        let restored = AssetCatalog::from_json(&catalog.to_json_pretty().unwrap()).unwrap();
        assert_eq!(restored, catalog);
    }
}
