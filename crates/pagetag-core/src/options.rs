use crate::error::ExtractError;

/// Default raster scale factor.
///
/// Chosen empirically: 6× gives codes enough pixel density for reliable
/// decoding without excessive memory use.
pub const DEFAULT_SCALE_FACTOR: f64 = 6.0;

/// Options controlling code extraction.
///
/// Provides sensible defaults for all settings.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanOptions {
    /// Uniform upscaling factor applied to both page axes before detection
    /// (default: 6.0). Must be a positive finite number.
    pub scale_factor: f64,
    /// Whether to collect warnings during extraction (default: true).
    pub collect_warnings: bool,
    /// Near-tie slack for the ambiguity advisory, as a fraction of the
    /// squared page diagonal (default: 1e-6). Two candidates whose squared
    /// center distances differ by less than this are reported as a near-tie.
    pub near_tie_slack: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            collect_warnings: true,
            near_tie_slack: 1e-6,
        }
    }
}

impl ScanOptions {
    /// Validate option values that cannot be enforced by the type system.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidScaleFactor`] if the scale factor is
    /// zero, negative, or not finite.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ExtractError::InvalidScaleFactor(self.scale_factor));
        }
        Ok(())
    }
}
