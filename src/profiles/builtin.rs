//! Built-in knowledge base: seven optical and electron microscopy modalities.

use super::{ColorPalette, MagnificationFeel, ModalityProfile, ProfileDocument};
use std::collections::BTreeMap;

/// Trigger keywords for the suggestion path, matched as lowercase substrings.
const KEYWORDS: &[(&str, &[&str])] = &[
    (
        "fluorescence",
        &[
            "glow", "luminous", "neon", "fluorescent", "bright", "vivid", "color", "channel",
        ],
    ),
    (
        "electron",
        &[
            "detail", "ultra", "nanoscale", "texture", "rough", "metallic", "relief", "shadow",
        ],
    ),
    (
        "phase_contrast",
        &[
            "transparent", "ghost", "ethereal", "refract", "halo", "living", "natural", "unstained",
        ],
    ),
    (
        "confocal",
        &[
            "3d", "three-dimensional", "depth", "volumetric", "layer", "optical section", "stack",
            "precise",
        ],
    ),
    (
        "brightfield",
        &[
            "tissue", "histology", "pathology", "stain", "medical", "diagnostic", "anatomy",
            "section",
        ],
    ),
    (
        "darkfield",
        &[
            "contrast", "dramatic", "dark", "rim", "light", "particle", "edge", "theatrical",
        ],
    ),
    (
        "multiphoton",
        &[
            "deep", "penetration", "intact", "native", "autofluorescence", "in vivo", "biological",
            "preserved",
        ],
    ),
];

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn document() -> ProfileDocument {
    let modalities = vec![
        fluorescence(),
        electron(),
        phase_contrast(),
        confocal(),
        brightfield(),
        darkfield(),
        multiphoton(),
    ];

    let keywords = KEYWORDS
        .iter()
        .map(|(id, keywords)| (id.to_string(), phrases(keywords)))
        .collect::<BTreeMap<_, _>>();

    ProfileDocument {
        default_modality: Some(super::FALLBACK_MODALITY.to_string()),
        modalities,
        keywords,
    }
}

fn fluorescence() -> ModalityProfile {
    ModalityProfile {
        id: "fluorescence".to_string(),
        display_name: "Fluorescence".to_string(),
        description: "Glowing cellular structures with luminous bodies and translucent layers".to_string(),
        structure: phrases(&[
            "glowing cellular structures",
            "illuminated organelles",
            "highlighted features",
            "distinct compartments",
            "labeled pathways",
        ]),
        material: phrases(&[
            "translucent membranes",
            "luminous bodies",
            "transparent layers",
            "semi-permeable boundaries",
            "fluorescent markers",
        ]),
        color: phrases(&[
            "vibrant greens",
            "electric blues",
            "hot pinks",
            "bright cyans",
            "neon yellows",
            "intense magentas",
        ]),
        texture: phrases(&[
            "smooth membranes",
            "granular cytoplasm",
            "filamentous networks",
            "punctate signals",
            "diffuse glow",
        ]),
        composition: phrases(&[
            "layered transparency",
            "overlapping signals",
            "depth through color",
            "selective illumination",
        ]),
        style: phrases(&[
            "fluorescent microscopy",
            "immunofluorescence",
            "live cell imaging",
            "confocal projection",
        ]),
        quality: phrases(&[
            "high contrast",
            "selective highlighting",
            "brilliant colors",
            "precise localization",
        ]),
        mood: phrases(&["scientific clarity", "targeted visualization", "functional mapping"]),
        examples: phrases(&[
            "fluorescent-stained cells",
            "immunolabeled tissues",
            "GFP expression",
            "multi-color FISH",
        ]),
        color_palette: ColorPalette {
            scientific: phrases(&[
                "vibrant greens",
                "electric blues",
                "hot pinks",
                "bright cyans",
                "neon yellows",
                "intense magentas",
            ]),
            artistic: phrases(&[
                "jewel tones",
                "ethereal glows",
                "luminescent accents",
                "chromatic intensity",
            ]),
            monochrome: phrases(&[
                "bright highlights on dark background",
                "grayscale with fluorescent whites",
            ]),
        },
        magnification_feel: MagnificationFeel {
            low: "tissue-level fluorescent regions with broad signal distribution".to_string(),
            medium: "cellular organelle visualization with distinct compartmentalization".to_string(),
            high: "subcellular molecular-scale localization with punctate detail".to_string(),
        },
    }
}

fn electron() -> ModalityProfile {
    ModalityProfile {
        id: "electron".to_string(),
        display_name: "Electron (SEM/TEM)".to_string(),
        description: "Ultra-detailed nanoscale surfaces with dramatic shadows and three-dimensional relief".to_string(),
        structure: phrases(&[
            "ultra-detailed surfaces",
            "nanoscale textures",
            "fine filaments",
            "membrane ultrastructure",
            "crystalline arrays",
        ]),
        material: phrases(&[
            "metallic surfaces",
            "shadowed topology",
            "three-dimensional relief",
            "textured coatings",
            "sharp edges",
        ]),
        color: phrases(&[
            "grayscale gradients",
            "silver-white highlights",
            "deep blacks",
            "metallic sheens",
        ]),
        texture: phrases(&[
            "rough surfaces",
            "smooth membranes",
            "fibrous networks",
            "granular details",
            "crystalline facets",
        ]),
        composition: phrases(&[
            "dramatic shadows",
            "depth through contrast",
            "topographical relief",
            "textural emphasis",
        ]),
        style: phrases(&[
            "scanning electron microscopy",
            "transmission electron microscopy",
            "ultra-high resolution",
        ]),
        quality: phrases(&[
            "extreme detail",
            "nanoscale precision",
            "textural richness",
            "three-dimensional appearance",
        ]),
        mood: phrases(&["alien landscapes", "otherworldly surfaces", "microscopic terrain"]),
        examples: phrases(&[
            "cell surfaces",
            "bacterial structures",
            "tissue ultrastructure",
            "crystalline materials",
        ]),
        color_palette: ColorPalette {
            scientific: phrases(&[
                "grayscale gradients",
                "silver-white highlights",
                "deep blacks",
                "metallic sheens",
            ]),
            artistic: phrases(&[
                "platinum whites",
                "shadow blacks",
                "metallic accents",
                "high-contrast drama",
            ]),
            monochrome: phrases(&["pure grayscale", "silver-to-black gradient", "high-contrast relief"]),
        },
        magnification_feel: MagnificationFeel {
            low: "tissue-scale topography with broad textural variation and macro relief".to_string(),
            medium: "cellular-scale ultrastructure with detailed surface features and membrane topology".to_string(),
            high: "molecular-scale atomic arrangements with crystalline precision and nanoscale texturing".to_string(),
        },
    }
}

fn phase_contrast() -> ModalityProfile {
    ModalityProfile {
        id: "phase_contrast".to_string(),
        display_name: "Phase Contrast".to_string(),
        description: "Transparent boundaries with refractive halos and ethereal ghost-like structures".to_string(),
        structure: phrases(&[
            "transparent boundaries",
            "cellular outlines",
            "refractive halos",
            "phase shifts",
            "gradient edges",
        ]),
        material: phrases(&[
            "semi-transparent cells",
            "clear media",
            "refractive interfaces",
            "optical density variations",
        ]),
        color: phrases(&["grayscale with optical halos", "subtle contrast", "light-dark boundaries"]),
        texture: phrases(&["smooth gradients", "halo effects", "edge enhancement", "translucent bodies"]),
        composition: phrases(&[
            "overlapping transparencies",
            "layered optical sections",
            "depth through refraction",
        ]),
        style: phrases(&[
            "phase contrast microscopy",
            "differential interference contrast",
            "relief imaging",
        ]),
        quality: phrases(&[
            "natural appearance",
            "living cell observation",
            "three-dimensional relief",
            "halo artifacts",
        ]),
        mood: phrases(&["ethereal", "ghost-like", "translucent", "observational"]),
        examples: phrases(&[
            "living cells",
            "unstained cellular dynamics",
            "transparent organisms",
            "culture monitoring",
        ]),
        color_palette: ColorPalette {
            scientific: phrases(&["grayscale with subtle contrast", "optical halos in light tones"]),
            artistic: phrases(&["pearlescent halos", "translucent overlays", "subtle shadow depth"]),
            monochrome: phrases(&["pure grayscale with halo emphasis", "high-key luminosity"]),
        },
        magnification_feel: MagnificationFeel {
            low: "broad cellular boundaries with subtle refractive halos across tissue regions".to_string(),
            medium: "individual cell outlines with clear phase-shift effects and optical density variation".to_string(),
            high: "subcellular membrane boundaries with fine refractive detail and edge-enhancement artifacts".to_string(),
        },
    }
}

fn confocal() -> ModalityProfile {
    ModalityProfile {
        id: "confocal".to_string(),
        display_name: "Confocal".to_string(),
        description: "Sharp optical sections with volumetric depth and three-dimensional reconstruction clarity".to_string(),
        structure: phrases(&[
            "sharp optical sections",
            "z-stack projections",
            "three-dimensional reconstructions",
            "layered imaging",
        ]),
        material: phrases(&[
            "optically sectioned layers",
            "volumetric data",
            "stacked focal planes",
            "depth-resolved structures",
        ]),
        color: phrases(&[
            "multiple fluorescence channels",
            "merged color overlays",
            "depth-coded colors",
        ]),
        texture: phrases(&[
            "crisp details",
            "minimal blur",
            "sectioned appearance",
            "volumetric rendering",
        ]),
        composition: phrases(&[
            "layered depth",
            "three-dimensional space",
            "focal plane stacking",
            "volumetric organization",
        ]),
        style: phrases(&[
            "confocal laser scanning microscopy",
            "optical sectioning",
            "3D reconstruction",
        ]),
        quality: phrases(&[
            "exceptional clarity",
            "depth resolution",
            "three-dimensional detail",
            "minimal out-of-focus light",
        ]),
        mood: phrases(&["precise", "analytical", "spatially resolved", "architecturally detailed"]),
        examples: phrases(&[
            "tissue architecture",
            "cellular 3D structure",
            "subcellular localization",
            "thick specimen imaging",
        ]),
        color_palette: ColorPalette {
            scientific: phrases(&[
                "multiple fluorescence channels",
                "merged color overlays",
                "depth-coded color progression",
            ]),
            artistic: phrases(&[
                "layered chromatic depth",
                "volumetric color shifts",
                "3D-aware palettes",
            ]),
            monochrome: phrases(&["depth-coded grayscale", "layered intensity variation"]),
        },
        magnification_feel: MagnificationFeel {
            low: "volumetric tissue architecture with broad three-dimensional organization visible across planes".to_string(),
            medium: "cellular 3D structure with distinct focal planes revealing organelle arrangement and layering".to_string(),
            high: "subcellular molecular-scale localization with precise z-depth mapping and volumetric detail".to_string(),
        },
    }
}

fn brightfield() -> ModalityProfile {
    ModalityProfile {
        id: "brightfield".to_string(),
        display_name: "Brightfield".to_string(),
        description: "Natural tissue appearance with histological stains and recognizable anatomical features".to_string(),
        structure: phrases(&[
            "natural tissue appearance",
            "histological sections",
            "stained preparations",
            "anatomical features",
        ]),
        material: phrases(&[
            "tissue texture",
            "cellular morphology",
            "stained components",
            "natural coloration",
        ]),
        color: phrases(&[
            "histological stains",
            "pinks",
            "purples",
            "blues",
            "natural tissue colors",
            "H&E appearance",
        ]),
        texture: phrases(&[
            "tissue grain",
            "cellular patterns",
            "fibrous structures",
            "glandular organization",
        ]),
        composition: phrases(&[
            "tissue architecture",
            "organ structure",
            "anatomical arrangement",
            "pathological features",
        ]),
        style: phrases(&["brightfield microscopy", "histology", "pathology", "stained sections"]),
        quality: phrases(&[
            "natural appearance",
            "diagnostic clarity",
            "recognizable morphology",
            "classical microscopy",
        ]),
        mood: phrases(&["medical", "diagnostic", "anatomical", "educational"]),
        examples: phrases(&[
            "H&E stained tissue",
            "pathology slides",
            "histological sections",
            "medical diagnosis",
        ]),
        color_palette: ColorPalette {
            scientific: phrases(&["H&E pinks", "purples", "blues", "natural tissue browns"]),
            artistic: phrases(&[
                "warm histological tones",
                "rich stain colors",
                "subtle tissue variations",
            ]),
            monochrome: phrases(&["sepia tones", "grayscale histological rendering"]),
        },
        magnification_feel: MagnificationFeel {
            low: "tissue-level organ and glandular architecture with broad anatomical organization".to_string(),
            medium: "cellular morphology and tissue type identification with clear histological detail".to_string(),
            high: "subcellular features and stain localization with diagnostic precision at near-ultrastructural level".to_string(),
        },
    }
}

fn darkfield() -> ModalityProfile {
    ModalityProfile {
        id: "darkfield".to_string(),
        display_name: "Darkfield".to_string(),
        description: "Bright objects on dark background with dramatic edge illumination and scattered light".to_string(),
        structure: phrases(&[
            "bright objects on dark background",
            "scattered light",
            "edge illumination",
            "suspended particles",
        ]),
        material: phrases(&[
            "reflective surfaces",
            "light-scattering bodies",
            "bright against black",
            "rim lighting",
        ]),
        color: phrases(&["bright specimens against black void", "edge glow", "scattered light colors"]),
        texture: phrases(&[
            "glowing edges",
            "bright particles",
            "illuminated contours",
            "scattered highlights",
        ]),
        composition: phrases(&[
            "dramatic contrast",
            "floating in darkness",
            "isolated subjects",
            "scattered light patterns",
        ]),
        style: phrases(&["darkfield microscopy", "scattered light imaging", "edge enhancement"]),
        quality: phrases(&[
            "high contrast",
            "dramatic lighting",
            "silhouette effects",
            "revealing transparency",
        ]),
        mood: phrases(&["dramatic", "mysterious", "isolated", "theatrical"]),
        examples: phrases(&[
            "microorganisms in liquid",
            "unstained specimens",
            "particle visualization",
            "spiral bacteria",
        ]),
        color_palette: ColorPalette {
            scientific: phrases(&[
                "bright highlights on black",
                "edge glow colors",
                "scattered light spectrum",
            ]),
            artistic: phrases(&["dramatic rim lighting", "neon-like glow", "theatrical shadows"]),
            monochrome: phrases(&["pure black background with bright white highlights", "extreme contrast"]),
        },
        magnification_feel: MagnificationFeel {
            low: "broad particles and structures glowing against dark field with visible scatter patterns".to_string(),
            medium: "individual specimen edge illumination with clear rim lighting and defined contours".to_string(),
            high: "molecular-scale structure revealed through scattered light with fine edge detail and transparency effects".to_string(),
        },
    }
}

fn multiphoton() -> ModalityProfile {
    ModalityProfile {
        id: "multiphoton".to_string(),
        display_name: "Multiphoton".to_string(),
        description: "Deep tissue penetration with autofluorescence and minimal phototoxicity appearance".to_string(),
        structure: phrases(&[
            "deep tissue penetration",
            "autofluorescence structures",
            "intact tissue architecture",
            "minimal photodamage",
        ]),
        material: phrases(&[
            "endogenous fluorophores",
            "intact biological matrices",
            "native tissue layers",
            "minimal perturbation",
        ]),
        color: phrases(&[
            "red autofluorescence",
            "green intrinsic signals",
            "infrared penetration tones",
            "warm tissue glows",
        ]),
        texture: phrases(&[
            "natural tissue texture",
            "preserved architecture",
            "minimal blur",
            "native organization",
        ]),
        composition: phrases(&[
            "three-dimensional depth",
            "layered tissue",
            "preserved structure",
            "volumetric clarity",
        ]),
        style: phrases(&["multiphoton microscopy", "two-photon excitation", "deep tissue imaging"]),
        quality: phrases(&[
            "deep penetration",
            "minimal phototoxicity",
            "native fluorescence",
            "three-dimensional detail",
        ]),
        mood: phrases(&[
            "biological authenticity",
            "preserved vitality",
            "native structure",
            "gentle illumination",
        ]),
        examples: phrases(&[
            "in vivo imaging",
            "intact tissue stacks",
            "neuronal architecture",
            "vascular networks",
        ]),
        color_palette: ColorPalette {
            scientific: phrases(&["red autofluorescence", "green intrinsic signals", "warm tissue tones"]),
            artistic: phrases(&[
                "warm biological glows",
                "preserved color authenticity",
                "soft luminescence",
            ]),
            monochrome: phrases(&["warm grayscale", "golden-toned depth"]),
        },
        magnification_feel: MagnificationFeel {
            low: "broad tissue architecture with deep volumetric penetration showing interconnected structures".to_string(),
            medium: "cellular and organelle detail within preserved tissue context with depth-resolved clarity".to_string(),
            high: "subcellular organelles and molecular structures within intact biological environment".to_string(),
        },
    }
}
