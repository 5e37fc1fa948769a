//! Decorative particle-field background.
//!
//! The render loop is owned by the particles bundle loaded as a page global
//! `Particles`; this module carries the typed configuration record and calls
//! `Particles.init` with it exactly once per page load.

use serde::Serialize;

use crate::dom;
use crate::error::InitError;

/// Class selector of the canvas-bearing background elements.
pub const PARTICLES_SELECTOR: &str = ".particles";

/// Full particle-field configuration, field names matching the widget's
/// option names on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleOptions {
    pub selector: String,
    pub max_particles: u32,
    pub size_variations: u32,
    pub speed: f64,
    pub color: Vec<String>,
    pub min_distance: u32,
    pub connect_particles: bool,
    /// Ordered viewport-width overrides; the widget picks the closest
    /// matching threshold for the current viewport.
    pub responsive: Vec<BreakpointOverride>,
}

/// One `(breakpoint-width, partial override)` pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BreakpointOverride {
    pub breakpoint: u32,
    pub options: ParticleOverrides,
}

/// Subset of options replaced below a breakpoint.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_particles: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<u32>,
}

impl BreakpointOverride {
    const fn thinned(breakpoint: u32, max_particles: u32, min_distance: u32) -> Self {
        Self {
            breakpoint,
            options: ParticleOverrides {
                max_particles: Some(max_particles),
                min_distance: Some(min_distance),
            },
        }
    }
}

impl ParticleOptions {
    /// The theme's background field: a slow grey ramp with connecting lines,
    /// thinned out on narrow viewports to cap rendering cost.
    pub fn background() -> Self {
        Self {
            selector: PARTICLES_SELECTOR.to_string(),
            max_particles: 100,
            size_variations: 5,
            speed: 0.5,
            color: [
                "#ffffff", "#eeeeee", "#dddddd", "#cccccc", "#bbbbbb", "#aaaaaa",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            min_distance: 100,
            connect_particles: true,
            responsive: vec![
                BreakpointOverride::thinned(768, 60, 80),
                BreakpointOverride::thinned(425, 50, 70),
                BreakpointOverride::thinned(375, 40, 60),
                BreakpointOverride::thinned(320, 30, 50),
            ],
        }
    }
}

/// Outcome of one particle-field activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticlesOutcome {
    Activated,
    /// `Particles.init` was still called; the widget is inert on an empty
    /// selection.
    NoTargets,
}

/// Call `Particles.init(options)` once.
pub fn activate_particles(options: &ParticleOptions) -> Result<ParticlesOutcome, InitError> {
    let matched = dom::get_document()
        .and_then(|doc| doc.query_selector_all(&options.selector).ok())
        .map_or(0, |list| list.length());

    let particles = dom::global_object("Particles")?;
    let init = dom::member_function(&particles, "init", "Particles.init")?;
    let js_options = serde_wasm_bindgen::to_value(options)?;
    init.call1(&particles, &js_options)
        .map_err(|e| InitError::dom(&e))?;

    if matched == 0 {
        web_sys::console::log_1(
            &format!(
                "[Init] No `{}` elements, particle field is inert",
                options.selector
            )
            .into(),
        );
        Ok(ParticlesOutcome::NoTargets)
    } else {
        web_sys::console::log_1(
            &format!("[Init] Particle field active on {matched} element(s)").into(),
        );
        Ok(ParticlesOutcome::Activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_config_literals() {
        let opts = ParticleOptions::background();
        assert_eq!(opts.selector, ".particles");
        assert_eq!(opts.max_particles, 100);
        assert_eq!(opts.size_variations, 5);
        assert!((opts.speed - 0.5).abs() < f64::EPSILON);
        assert_eq!(opts.min_distance, 100);
        assert!(opts.connect_particles);
        assert_eq!(opts.color.len(), 6);
        assert_eq!(opts.color[0], "#ffffff");
        assert_eq!(opts.color[5], "#aaaaaa");
    }

    #[test]
    fn test_breakpoints_thin_out_with_viewport() {
        let opts = ParticleOptions::background();
        let widths: Vec<u32> = opts.responsive.iter().map(|b| b.breakpoint).collect();
        assert_eq!(widths, [768, 425, 375, 320]);
        for pair in opts.responsive.windows(2) {
            assert!(pair[0].options.max_particles > pair[1].options.max_particles);
            assert!(pair[0].options.min_distance > pair[1].options.min_distance);
        }
    }

    #[test]
    fn test_serializes_with_widget_option_names() {
        let json = serde_json::to_value(ParticleOptions::background()).unwrap();
        assert_eq!(json["maxParticles"], 100);
        assert_eq!(json["sizeVariations"], 5);
        assert_eq!(json["connectParticles"], true);
        assert_eq!(json["minDistance"], 100);
        assert_eq!(json["responsive"][0]["breakpoint"], 768);
        assert_eq!(json["responsive"][0]["options"]["maxParticles"], 60);
        assert_eq!(json["responsive"][0]["options"]["minDistance"], 80);
        assert_eq!(json["responsive"][3]["options"]["minDistance"], 50);
        // Partial overrides carry only the replaced options
        assert!(json["responsive"][0]["options"].get("speed").is_none());
    }
}
