pub const INVALID_INPUT: &str = "invalid_input";
pub const UNKNOWN_MODALITY: &str = "unknown_modality";
pub const INTERNAL_ERROR: &str = "internal_error";
