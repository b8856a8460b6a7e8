//! Configuration for a render run.
//!
//! Serves as the common surface between the CLI and the library: the CLI
//! parses flags into a [`RenderConfig`], validates it, and converts it into
//! the [`RenderOptions`] consumed by the pipeline.

use curve_geom::CurveKind;

use crate::RenderOptions;

/// Validated-at-the-boundary settings for one render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output file path (PNG).
    pub output: String,
    /// Which subdivision rule to trace with.
    pub curve: CurveKind,
    /// Darkness threshold in `(0, 1]`; 0.6 reproduces the classic filter.
    pub threshold: f64,
    /// Minimum remaining-halving counter at which subdivision stops.
    /// 0 keeps the original single-pixel-ish termination.
    pub min_half_side: u32,
    /// Whether to apply the brightness/contrast pre-stage.
    pub enhance: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: "curve.png".to_string(),
            curve: CurveKind::Hilbert,
            threshold: curve_geom::DARKNESS_THRESHOLD,
            min_half_side: 0,
            enhance: true,
        }
    }
}

impl RenderConfig {
    pub fn new(
        output: String,
        curve: CurveKind,
        threshold: f64,
        min_half_side: u32,
        enhance: bool,
    ) -> Self {
        Self { output, curve, threshold, min_half_side, enhance }
    }

    /// Check ranges and paths before any pixel work happens.
    pub fn validate(&self) -> Result<(), String> {
        if self.output.is_empty() {
            return Err("Output path must not be empty".to_string());
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(format!(
                "Threshold must be in (0, 1], got {}",
                self.threshold
            ));
        }
        // Stopping above ~10 halvings would terminate at the top quad for
        // any realistic image; treat it as a typo.
        if self.min_half_side > 1024 {
            return Err(format!(
                "Minimum block half-side {} is unreasonably large",
                self.min_half_side
            ));
        }
        Ok(())
    }

    pub fn to_render_options(&self) -> RenderOptions {
        RenderOptions {
            curve: self.curve,
            threshold: self.threshold,
            min_half_side: self.min_half_side,
            enhance: self.enhance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let mut config = RenderConfig::default();
        config.threshold = 0.0;
        assert!(config.validate().is_err());
        config.threshold = 1.2;
        assert!(config.validate().is_err());
        config.threshold = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_output() {
        let mut config = RenderConfig::default();
        config.output = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn options_carry_every_field() {
        let config = RenderConfig::new("out.png".into(), CurveKind::ZOrder, 0.4, 1, false);
        let options = config.to_render_options();
        assert_eq!(options.curve, CurveKind::ZOrder);
        assert_eq!(options.threshold, 0.4);
        assert_eq!(options.min_half_side, 1);
        assert!(!options.enhance);
    }
}
