use crate::profiles::{Magnification, ModalityProfile, PaletteMode, ProfileStore, UnknownModality};
use serde::Serialize;

pub const MAX_WORDS: usize = 80;

const CLOSING: &str = "Highly detailed 8k scientific visualization.";

/// How densely vocabulary is injected into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strength {
    Subtle,
    #[default]
    Balanced,
    Strong,
}

impl Strength {
    /// Unrecognized values fall back to `Balanced`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "subtle" => Strength::Subtle,
            "strong" => Strength::Strong,
            _ => Strength::Balanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Subtle => "subtle",
            Strength::Balanced => "balanced",
            Strength::Strong => "strong",
        }
    }

    pub fn target_count(&self) -> usize {
        match self {
            Strength::Subtle => 2,
            Strength::Balanced => 4,
            Strength::Strong => 6,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnhancementRequest<'a> {
    pub base_prompt: &'a str,
    pub modality: &'a str,
    pub magnification: Magnification,
    pub palette: PaletteMode,
    pub strength: Strength,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedPrompt {
    pub text: String,
    pub modality: String,
    pub display_name: String,
    pub characteristics: Vec<String>,
    pub word_count: usize,
    pub truncated: bool,
}

/// Resolves the modality, then composes. The miss is returned untouched so
/// the caller decides how to render it.
pub fn enhance(
    store: &ProfileStore,
    request: &EnhancementRequest<'_>,
) -> Result<EnhancedPrompt, UnknownModality> {
    let profile = store.lookup(request.modality)?;
    Ok(compose(
        profile,
        request.base_prompt,
        request.magnification,
        request.palette,
        request.strength,
    ))
}

/// Primary phrases drawn from the profile, before truncation.
///
/// Two structure phrases and one each of material, color and texture are
/// always present; composition and style join at higher strengths. Short
/// categories contribute whatever they have.
pub fn characteristic_pool(profile: &ModalityProfile, strength: Strength) -> Vec<&str> {
    let target = strength.target_count();
    let mut pool: Vec<&str> = Vec::with_capacity(7);

    take_leading(&mut pool, &profile.structure, 2);
    take_leading(&mut pool, &profile.material, 1);
    take_leading(&mut pool, &profile.color, 1);
    take_leading(&mut pool, &profile.texture, 1);
    if target >= 5 {
        take_leading(&mut pool, &profile.composition, 1);
    }
    if target >= 6 {
        take_leading(&mut pool, &profile.style, 1);
    }

    pool
}

fn take_leading<'p>(pool: &mut Vec<&'p str>, phrases: &'p [String], count: usize) {
    pool.extend(phrases.iter().take(count).map(String::as_str));
}

pub fn select_characteristics(profile: &ModalityProfile, strength: Strength) -> Vec<&str> {
    let mut pool = characteristic_pool(profile, strength);
    pool.truncate(strength.target_count());
    pool
}

pub fn compose(
    profile: &ModalityProfile,
    base_prompt: &str,
    magnification: Magnification,
    palette: PaletteMode,
    strength: Strength,
) -> EnhancedPrompt {
    let characteristics = select_characteristics(profile, strength);
    let display = profile.display_name.to_lowercase();
    let base = base_prompt.trim();

    let mut sentences = Vec::with_capacity(7);
    if base.is_empty() {
        sentences.push(format!("Rendered with {display} microscopy aesthetics."));
    } else {
        sentences.push(format!("{base}, rendered with {display} microscopy aesthetics."));
    }
    sentences.push(format!("Features {}.", characteristics.join(", ")));
    if let Some(primary) = profile.color_palette.get(palette).first() {
        sentences.push(format!("Color palette emphasizes {primary}."));
    }
    sentences.push(format!(
        "Captures {}.",
        profile.magnification_feel.get(magnification)
    ));
    let required_words = word_count(&sentences) + word_count(&[CLOSING]);
    let budget = MAX_WORDS.saturating_sub(required_words);
    sentences.extend(enrichment(profile, budget));
    sentences.push(CLOSING.to_string());

    let (text, truncated) = limit_words(&sentences.join(" "), MAX_WORDS);

    EnhancedPrompt {
        word_count: text.split_whitespace().count(),
        text,
        modality: profile.id.clone(),
        display_name: profile.display_name.clone(),
        characteristics: characteristics.into_iter().map(str::to_string).collect(),
        truncated,
    }
}

/// Quality, mood and example sentences that fit in `budget` words, richest
/// first. Reference imagery goes before the lists shrink; with no room left
/// nothing is added, so the required clauses are never pushed out.
fn enrichment(profile: &ModalityProfile, budget: usize) -> Vec<String> {
    let conveys = |qualities: usize, moods: usize| {
        format!(
            "The image conveys {}, evoking a mood of {}.",
            natural_list(&profile.quality, qualities),
            natural_list(&profile.mood, moods)
        )
    };
    let references = format!(
        "Composition draws on reference imagery such as {}.",
        natural_list(&profile.examples, 2)
    );

    let candidates = [
        vec![conveys(3, 2), references],
        vec![conveys(3, 2)],
        vec![conveys(2, 2)],
        vec![conveys(2, 1)],
        vec![conveys(1, 1)],
    ];
    candidates
        .into_iter()
        .find(|sentences| word_count(sentences) <= budget)
        .unwrap_or_default()
}

fn word_count<S: AsRef<str>>(sentences: &[S]) -> usize {
    sentences
        .iter()
        .map(|sentence| sentence.as_ref().split_whitespace().count())
        .sum()
}

/// "a", "a and b", "a, b, and c".
fn natural_list(phrases: &[String], limit: usize) -> String {
    let items: Vec<&str> = phrases.iter().take(limit).map(String::as_str).collect();
    match items.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Keeps the first `max_words` whitespace-separated words and ends them with
/// a period. Text already within the limit is returned as-is.
fn limit_words(text: &str, max_words: usize) -> (String, bool) {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return (text.trim().to_string(), false);
    }

    let kept = words[..max_words].join(" ");
    let kept = kept.trim_end_matches([',', '.', ';', ':']);
    (format!("{kept}."), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGNIFICATIONS: [Magnification; 3] =
        [Magnification::Low, Magnification::Medium, Magnification::High];
    const PALETTES: [PaletteMode; 3] = [
        PaletteMode::Scientific,
        PaletteMode::Artistic,
        PaletteMode::Monochrome,
    ];
    const STRENGTHS: [Strength; 3] = [Strength::Subtle, Strength::Balanced, Strength::Strong];

    fn store() -> &'static ProfileStore {
        ProfileStore::builtin()
    }

    fn enhance_default(base: &str, modality: &str) -> EnhancedPrompt {
        let request = EnhancementRequest {
            base_prompt: base,
            modality,
            ..Default::default()
        };
        enhance(store(), &request).expect("known modality")
    }

    fn features_clause(text: &str) -> &str {
        let start = text.find("Features ").expect("features clause") + "Features ".len();
        let end = text[start..].find('.').expect("clause end") + start;
        &text[start..end]
    }

    #[test]
    fn butterfly_wing_fluorescence() {
        let result = enhance_default("a butterfly wing", "fluorescence");
        assert_eq!(
            result.text,
            "a butterfly wing, rendered with fluorescence microscopy aesthetics. \
             Features glowing cellular structures, illuminated organelles, translucent membranes, vibrant greens. \
             Color palette emphasizes vibrant greens. \
             Captures cellular organelle visualization with distinct compartmentalization. \
             The image conveys high contrast, selective highlighting, and brilliant colors, \
             evoking a mood of scientific clarity and targeted visualization. \
             Composition draws on reference imagery such as fluorescent-stained cells and immunolabeled tissues. \
             Highly detailed 8k scientific visualization."
        );
        assert_eq!(result.word_count, 66);
        assert!(!result.truncated);
    }

    #[test]
    fn strength_maps_to_target_count() {
        assert_eq!(Strength::Subtle.target_count(), 2);
        assert_eq!(Strength::Balanced.target_count(), 4);
        assert_eq!(Strength::Strong.target_count(), 6);
        assert_eq!(Strength::parse_lenient("STRONG"), Strength::Strong);
        assert_eq!(Strength::parse_lenient("extreme"), Strength::Balanced);
    }

    #[test]
    fn pool_always_holds_core_phrases() {
        let profile = store().lookup("electron").expect("electron");
        let subtle = characteristic_pool(profile, Strength::Subtle);
        assert_eq!(
            subtle,
            [
                "ultra-detailed surfaces",
                "nanoscale textures",
                "metallic surfaces",
                "grayscale gradients",
                "rough surfaces",
            ]
        );
        let strong = characteristic_pool(profile, Strength::Strong);
        assert_eq!(strong.len(), 7);
        assert_eq!(strong[5], "dramatic shadows");
        assert_eq!(strong[6], "scanning electron microscopy");
    }

    #[test]
    fn selection_truncates_to_target() {
        let profile = store().lookup("electron").expect("electron");
        let strong = select_characteristics(profile, Strength::Strong);
        assert_eq!(strong.len(), 6);
        assert_eq!(strong.last(), Some(&"dramatic shadows"));
        assert_eq!(select_characteristics(profile, Strength::Subtle).len(), 2);
        assert_eq!(select_characteristics(profile, Strength::Balanced).len(), 4);
    }

    #[test]
    fn short_categories_take_what_exists() {
        let mut profile = store().lookup("confocal").expect("confocal").clone();
        profile.structure.truncate(1);
        let pool = characteristic_pool(&profile, Strength::Strong);
        assert_eq!(pool.len(), 6);
        assert_eq!(pool[0], "sharp optical sections");
        assert_eq!(pool[1], "optically sectioned layers");
    }

    #[test]
    fn features_never_shrink_as_strength_grows() {
        for profile in store().profiles() {
            let counts: Vec<usize> = STRENGTHS
                .iter()
                .map(|strength| {
                    let result = compose(
                        profile,
                        "texture",
                        Magnification::Medium,
                        PaletteMode::Scientific,
                        *strength,
                    );
                    features_clause(&result.text).split(", ").count()
                })
                .collect();
            assert!(
                counts.windows(2).all(|pair| pair[0] <= pair[1]),
                "{}: {counts:?}",
                profile.id
            );
        }
    }

    /// Bases of two through ten words against every option combination.
    fn typical_results() -> Vec<(String, Strength, EnhancedPrompt)> {
        let words: Vec<&str> = "an ancient oak leaf floating above a quiet mountain lake"
            .split(' ')
            .collect();
        let mut results = Vec::new();
        for len in 2..=words.len() {
            let base = words[..len].join(" ");
            for profile in store().profiles() {
                for strength in STRENGTHS {
                    for magnification in MAGNIFICATIONS {
                        for palette in PALETTES {
                            let result = compose(profile, &base, magnification, palette, strength);
                            results.push((base.clone(), strength, result));
                        }
                    }
                }
            }
        }
        results
    }

    #[test]
    fn typical_prompts_land_in_word_window() {
        for (base, strength, result) in typical_results() {
            assert!(
                (60..=MAX_WORDS).contains(&result.word_count),
                "{} / {base} / {strength:?}: {} words",
                result.modality,
                result.word_count
            );
            assert!(!result.truncated, "{} / {base} / {strength:?}", result.modality);
        }
    }

    #[test]
    fn typical_prompts_keep_closing_clause() {
        for (base, strength, result) in typical_results() {
            assert!(
                result.text.ends_with(CLOSING),
                "{} / {base} / {strength:?}: {}",
                result.modality,
                result.text
            );
        }
    }

    #[test]
    fn tight_budget_drops_references_before_closing() {
        let profile = store().lookup("multiphoton").expect("multiphoton");
        let result = compose(
            profile,
            "an ancient oak leaf floating above a quiet mountain lake",
            Magnification::Medium,
            PaletteMode::Scientific,
            Strength::Strong,
        );
        assert!(!result.text.contains("reference imagery"));
        assert!(result.text.contains("The image conveys deep penetration"));
        assert!(result.text.ends_with(CLOSING));
        assert!(result.word_count <= MAX_WORDS);
    }

    #[test]
    fn enrichment_shrinks_to_fit_or_vanishes() {
        let profile = store().lookup("fluorescence").expect("fluorescence");
        assert_eq!(enrichment(profile, 0), Vec::<String>::new());
        let smallest = enrichment(profile, 11);
        assert_eq!(
            smallest,
            ["The image conveys high contrast, evoking a mood of scientific clarity."]
        );
        assert_eq!(enrichment(profile, 80).len(), 2);
    }

    #[test]
    fn palette_and_magnification_pick_their_phrases() {
        let profile = store().lookup("fluorescence").expect("fluorescence");
        let artistic = compose(
            profile,
            "test",
            Magnification::High,
            PaletteMode::Artistic,
            Strength::Balanced,
        );
        assert!(artistic.text.contains("Color palette emphasizes jewel tones."));
        assert!(
            artistic
                .text
                .contains("Captures subcellular molecular-scale localization with punctate detail.")
        );
    }

    #[test]
    fn long_prompts_are_cut_at_eighty_words() {
        let base = vec!["word"; 70].join(" ");
        let result = enhance_default(&base, "darkfield");
        assert!(result.truncated);
        assert_eq!(result.word_count, MAX_WORDS);
        assert_eq!(result.text.split_whitespace().count(), MAX_WORDS);
        assert!(result.text.ends_with('.'));
        assert!(!result.text.ends_with(",."));
    }

    #[test]
    fn empty_base_still_forms_sentences() {
        let result = enhance_default("   ", "brightfield");
        assert!(result.text.starts_with("Rendered with brightfield microscopy aesthetics."));
        assert!(result.text.ends_with(CLOSING));
    }

    #[test]
    fn spaced_modality_resolves_like_snake_case() {
        let spaced = enhance_default("a cell", "Phase Contrast");
        let snake = enhance_default("a cell", "phase_contrast");
        assert_eq!(spaced, snake);
    }

    #[test]
    fn unknown_modality_is_a_distinct_result() {
        let request = EnhancementRequest {
            base_prompt: "anything",
            modality: "not_a_real_type",
            ..Default::default()
        };
        let err = enhance(store(), &request).expect_err("unknown");
        assert_eq!(err.requested, "not_a_real_type");
        assert_eq!(err.available.len(), 7);
    }

    #[test]
    fn natural_list_shapes() {
        let phrases: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(natural_list(&phrases, 1), "a");
        assert_eq!(natural_list(&phrases, 2), "a and b");
        assert_eq!(natural_list(&phrases, 3), "a, b, and c");
        assert_eq!(natural_list(&[], 3), "");
    }
}
