use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

mod builtin;

pub const FALLBACK_MODALITY: &str = "brightfield";

static BUILTIN: Lazy<ProfileStore> = Lazy::new(|| ProfileStore::from_validated(builtin::document()));

/// Aesthetic vocabulary for one imaging modality.
///
/// Every category is ordered: earlier phrases are the primary ones and are
/// picked first when composing prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalityProfile {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub structure: Vec<String>,
    pub material: Vec<String>,
    pub color: Vec<String>,
    pub texture: Vec<String>,
    pub composition: Vec<String>,
    pub style: Vec<String>,
    pub quality: Vec<String>,
    pub mood: Vec<String>,
    pub examples: Vec<String>,
    pub color_palette: ColorPalette,
    pub magnification_feel: MagnificationFeel,
}

impl ModalityProfile {
    fn categories(&self) -> [(&'static str, &[String]); 9] {
        [
            ("structure", &self.structure),
            ("material", &self.material),
            ("color", &self.color),
            ("texture", &self.texture),
            ("composition", &self.composition),
            ("style", &self.style),
            ("quality", &self.quality),
            ("mood", &self.mood),
            ("examples", &self.examples),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPalette {
    pub scientific: Vec<String>,
    pub artistic: Vec<String>,
    pub monochrome: Vec<String>,
}

impl ColorPalette {
    pub fn get(&self, mode: PaletteMode) -> &[String] {
        match mode {
            PaletteMode::Scientific => &self.scientific,
            PaletteMode::Artistic => &self.artistic,
            PaletteMode::Monochrome => &self.monochrome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MagnificationFeel {
    pub low: String,
    pub medium: String,
    pub high: String,
}

impl MagnificationFeel {
    pub fn get(&self, level: Magnification) -> &str {
        match level {
            Magnification::Low => &self.low,
            Magnification::Medium => &self.medium,
            Magnification::High => &self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Magnification {
    Low,
    #[default]
    Medium,
    High,
}

impl Magnification {
    /// Unrecognized values fall back to `Medium`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "low" => Magnification::Low,
            "high" => Magnification::High,
            _ => Magnification::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Magnification::Low => "low",
            Magnification::Medium => "medium",
            Magnification::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    #[default]
    Scientific,
    Artistic,
    Monochrome,
}

impl PaletteMode {
    /// Unrecognized values fall back to `Scientific`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "artistic" => PaletteMode::Artistic,
            "monochrome" => PaletteMode::Monochrome,
            _ => PaletteMode::Scientific,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteMode::Scientific => "scientific",
            PaletteMode::Artistic => "artistic",
            PaletteMode::Monochrome => "monochrome",
        }
    }
}

/// On-disk shape of a knowledge base passed with `--profiles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_modality: Option<String>,
    pub modalities: Vec<ModalityProfile>,
    pub keywords: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profiles from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile document defines no modalities")]
    Empty,

    #[error("modality id '{0}' must be non-empty, lowercase, and use underscores instead of spaces")]
    InvalidId(String),

    #[error("duplicate modality id '{0}'")]
    DuplicateId(String),

    #[error("modality '{id}': {field} must not be empty")]
    EmptyField { id: String, field: String },

    #[error("modality '{0}' has no trigger keywords")]
    MissingKeywords(String),

    #[error("keywords defined for unknown modality '{0}'")]
    OrphanKeywords(String),

    #[error("default modality '{0}' is not defined")]
    UnknownDefault(String),
}

/// Lookup miss. Carries every valid id so callers can render a helpful message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown microscopy type '{requested}'. Available types: {}", .available.join(", "))]
pub struct UnknownModality {
    pub requested: String,
    pub available: Vec<String>,
}

#[derive(Debug, Clone)]
struct Entry {
    profile: ModalityProfile,
    keywords: Vec<String>,
}

/// Immutable, definition-ordered mapping from modality id to profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    entries: Vec<Entry>,
    default_index: usize,
}

impl ProfileStore {
    pub fn builtin() -> &'static ProfileStore {
        &BUILTIN
    }

    pub fn from_document(document: ProfileDocument) -> Result<Self, ProfileError> {
        validate(&document)?;
        Ok(Self::from_validated(document))
    }

    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        let document: ProfileDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let raw = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    fn from_validated(mut document: ProfileDocument) -> Self {
        let entries: Vec<Entry> = document
            .modalities
            .into_iter()
            .map(|profile| {
                let keywords = document
                    .keywords
                    .remove(&profile.id)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|keyword| !keyword.is_empty())
                    .map(|keyword| keyword.to_lowercase())
                    .collect();
                Entry { profile, keywords }
            })
            .collect();

        let position = |id: &str| entries.iter().position(|entry| entry.profile.id == id);
        let default_index = document
            .default_modality
            .as_deref()
            .and_then(position)
            .or_else(|| position(FALLBACK_MODALITY))
            .unwrap_or(0);

        Self {
            entries,
            default_index,
        }
    }

    pub fn lookup(&self, id: &str) -> Result<&ModalityProfile, UnknownModality> {
        let normalized = normalize_id(id);
        self.entries
            .iter()
            .find(|entry| entry.profile.id == normalized)
            .map(|entry| &entry.profile)
            .ok_or_else(|| UnknownModality {
                requested: normalized,
                available: self.list_ids().map(str::to_string).collect(),
            })
    }

    pub fn list_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.profile.id.as_str())
    }

    pub fn profiles(&self) -> impl Iterator<Item = &ModalityProfile> {
        self.entries.iter().map(|entry| &entry.profile)
    }

    /// Profiles paired with their trigger keywords, in definition order.
    pub fn keyword_table(&self) -> impl Iterator<Item = (&ModalityProfile, &[String])> {
        self.entries
            .iter()
            .map(|entry| (&entry.profile, entry.keywords.as_slice()))
    }

    pub fn default_profile(&self) -> &ModalityProfile {
        &self.entries[self.default_index].profile
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Lowercases and turns spaces into underscores, so "Phase Contrast"
/// resolves to `phase_contrast`.
pub fn normalize_id(id: &str) -> String {
    id.to_lowercase().replace(' ', "_")
}

fn validate(document: &ProfileDocument) -> Result<(), ProfileError> {
    if document.modalities.is_empty() {
        return Err(ProfileError::Empty);
    }

    let mut seen = HashSet::new();
    for profile in &document.modalities {
        let id = profile.id.as_str();
        if id.is_empty() || normalize_id(id) != id {
            return Err(ProfileError::InvalidId(id.to_string()));
        }
        if !seen.insert(id) {
            return Err(ProfileError::DuplicateId(id.to_string()));
        }

        let empty = |field: &str| ProfileError::EmptyField {
            id: id.to_string(),
            field: field.to_string(),
        };

        if profile.display_name.trim().is_empty() {
            return Err(empty("display_name"));
        }
        for (name, phrases) in profile.categories() {
            if phrases.is_empty() {
                return Err(empty(name));
            }
        }
        for mode in [
            PaletteMode::Scientific,
            PaletteMode::Artistic,
            PaletteMode::Monochrome,
        ] {
            if profile.color_palette.get(mode).is_empty() {
                return Err(empty(&format!("color_palette.{}", mode.as_str())));
            }
        }
        for level in [Magnification::Low, Magnification::Medium, Magnification::High] {
            if profile.magnification_feel.get(level).trim().is_empty() {
                return Err(empty(&format!("magnification_feel.{}", level.as_str())));
            }
        }

        let has_keywords = document
            .keywords
            .get(id)
            .is_some_and(|keywords| keywords.iter().any(|keyword| !keyword.is_empty()));
        if !has_keywords {
            return Err(ProfileError::MissingKeywords(id.to_string()));
        }
    }

    if let Some(orphan) = document.keywords.keys().find(|id| !seen.contains(id.as_str())) {
        return Err(ProfileError::OrphanKeywords(orphan.clone()));
    }

    if let Some(default) = &document.default_modality
        && !seen.contains(default.as_str())
    {
        return Err(ProfileError::UnknownDefault(default.clone()));
    }

    Ok(())
}
