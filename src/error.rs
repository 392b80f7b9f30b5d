use thiserror::Error;

/// Errors raised while assembling a scene or driving a render.
///
/// Geometric edge cases (misses, grazing hits, total internal reflection,
/// depth exhaustion) are never errors; they resolve to a color.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid refractive index {0}: must be finite and positive")]
    InvalidRefractiveIndex(f64),

    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),

    #[error("unknown material id {0}")]
    UnknownMaterial(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
