use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("icon animation palette is empty")]
    EmptyPalette,

    #[error("animation profile `{name}` has an inverted {field} range ({min} > {max})")]
    InvertedRange {
        name: String,
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("invalid value `{value}` for {key}")]
    InvalidOverride { key: String, value: String },
}
