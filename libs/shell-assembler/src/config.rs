//! # Assembler Configuration
//!
//! Runtime knobs layered over the compile-time defaults of the shared
//! `config` crate: tessellation resolution, cutter sizing and whether layers
//! are built in parallel.

use crate::cutter::CutterBounds;
use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS, PREVIEW_SEGMENTS, REFERENCE_CUTTER_SIZE};
use thiserror::Error;

/// Configuration of an [`Assembler`](crate::Assembler).
///
/// # Examples
/// ```
/// use shell_assembler::AssemblerConfig;
///
/// let cfg = AssemblerConfig::preview().with_parallel(false);
/// assert_eq!(cfg.segments, 24);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblerConfig {
    /// Angular segments of every sphere in a call. One value for all spheres
    /// keeps concentric surfaces aligned.
    pub segments: u32,
    /// How the cutting half-space is sized.
    pub cutter: CutterBounds,
    /// Build layers on the rayon pool.
    pub parallel: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            cutter: CutterBounds::default(),
            parallel: true,
        }
    }
}

impl AssemblerConfig {
    /// The reference pipeline: 64 segments, a fixed 40-unit cube, one thread.
    pub fn reference() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            cutter: CutterBounds::Fixed {
                side: REFERENCE_CUTTER_SIZE,
            },
            parallel: false,
        }
    }

    /// Coarser spheres for interactive previews.
    pub fn preview() -> Self {
        Self {
            segments: PREVIEW_SEGMENTS,
            ..Self::default()
        }
    }

    pub fn with_segments(self, segments: u32) -> Self {
        Self { segments, ..self }
    }

    pub fn with_cutter(self, cutter: CutterBounds) -> Self {
        Self { cutter, ..self }
    }

    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }

    /// Checks the configuration before it is used.
    ///
    /// The upper segment bound is enforced by the sphere primitive itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments < MIN_SEGMENTS {
            return Err(ConfigError::TooFewSegments {
                segments: self.segments,
                min: MIN_SEGMENTS,
            });
        }
        match self.cutter {
            CutterBounds::Relative { margin } if !(margin.is_finite() && margin > 0.0) => {
                Err(ConfigError::InvalidMargin(margin))
            }
            CutterBounds::Fixed { side } if !(side.is_finite() && side > 0.0) => {
                Err(ConfigError::InvalidCutterSide(side))
            }
            _ => Ok(()),
        }
    }
}

/// Invalid [`AssemblerConfig`] values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("segments must be at least {min}, got {segments}")]
    TooFewSegments { segments: u32, min: u32 },

    #[error("cutter margin must be positive and finite, got {0}")]
    InvalidMargin(f64),

    #[error("cutter side must be positive and finite, got {0}")]
    InvalidCutterSide(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::DEFAULT_CUTTER_MARGIN;

    #[test]
    fn default_matches_constants() {
        let cfg = AssemblerConfig::default();
        assert_eq!(cfg.segments, DEFAULT_SEGMENTS);
        assert_eq!(
            cfg.cutter,
            CutterBounds::Relative {
                margin: DEFAULT_CUTTER_MARGIN
            }
        );
        assert!(cfg.parallel);
    }

    #[test]
    fn reference_uses_fixed_cube() {
        let cfg = AssemblerConfig::reference();
        assert_eq!(cfg.cutter, CutterBounds::Fixed { side: 40.0 });
        assert!(!cfg.parallel);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let cfg = AssemblerConfig::default()
            .with_segments(12)
            .with_cutter(CutterBounds::Fixed { side: 8.0 })
            .with_parallel(false);
        assert_eq!(cfg.segments, 12);
        assert_eq!(cfg.cutter, CutterBounds::Fixed { side: 8.0 });
        assert!(!cfg.parallel);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert_eq!(
            AssemblerConfig::default().with_segments(2).validate(),
            Err(ConfigError::TooFewSegments {
                segments: 2,
                min: MIN_SEGMENTS
            })
        );
        assert_eq!(
            AssemblerConfig::default()
                .with_cutter(CutterBounds::Relative { margin: 0.0 })
                .validate(),
            Err(ConfigError::InvalidMargin(0.0))
        );
        assert!(matches!(
            AssemblerConfig::default()
                .with_cutter(CutterBounds::Fixed { side: f64::NAN })
                .validate(),
            Err(ConfigError::InvalidCutterSide(_))
        ));
    }
}
