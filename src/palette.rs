//! Named color palettes injected into every transformer.
//!
//! All values have hardcoded fallbacks; environment configuration can
//! override each one individually, so a missing variable is never an error.
//! Transformers receive a [`ColorConfig`] at construction time and never read
//! ambient process state themselves.

use std::env;

/// Status colors for directional/alerting styles (candlestick up/down, gauges).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColors {
    pub up: String,
    pub down: String,
    pub warning: String,
    pub error: String,
}

/// Theme colors shared by titles, legends and axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: String,
    pub text: String,
    pub border: String,
    pub axis: String,
}

/// Tooltip box colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipColors {
    pub background: String,
    pub text: String,
}

/// Read-only color configuration: accents, status/theme/tooltip sets, the
/// cyclic series palette and the map gradient stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub status: StatusColors,
    pub theme: ThemeColors,
    pub tooltip: TooltipColors,
    /// Ordered series palette, assigned cyclically by index.
    pub series: Vec<String>,
    /// Low-to-high gradient stops for percentage lookups.
    pub map_gradient: Vec<String>,
}

const DEFAULT_SERIES: [&str; 9] = [
    "#4992ff", "#7cffb2", "#fddd60", "#ff6e76", "#58d9f9", "#05c091", "#ff8a45", "#8d48e3",
    "#dd79ff",
];

const DEFAULT_MAP_GRADIENT: [&str; 6] = [
    "#c3d7df", "#8abcd1", "#66a9c9", "#5cb3cc", "#2f90b9", "#1781b5",
];

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#4992ff".to_owned(),
            secondary: "#7cffb2".to_owned(),
            accent: "#fddd60".to_owned(),
            status: StatusColors {
                up: "#ee6666".to_owned(),
                down: "#91cc75".to_owned(),
                warning: "#fac858".to_owned(),
                error: "#ff4d4f".to_owned(),
            },
            theme: ThemeColors {
                background: "#232324".to_owned(),
                text: "#b9b8ce".to_owned(),
                border: "#484753".to_owned(),
                axis: "#6e7079".to_owned(),
            },
            tooltip: TooltipColors {
                background: "rgba(13, 24, 33, 0.85)".to_owned(),
                text: "#e6e6e6".to_owned(),
            },
            series: DEFAULT_SERIES.iter().map(|c| (*c).to_owned()).collect(),
            map_gradient: DEFAULT_MAP_GRADIENT
                .iter()
                .map(|c| (*c).to_owned())
                .collect(),
        }
    }
}

impl ColorConfig {
    /// Builds a config from `CHART_*` environment variables, falling back to
    /// the hardcoded defaults field by field.
    ///
    /// List-valued variables (`CHART_SERIES_COLORS`, `CHART_MAP_GRADIENT`)
    /// are comma-separated; an empty or all-blank list falls back whole.
    #[must_use]
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            primary: env_color("CHART_PRIMARY_COLOR", base.primary),
            secondary: env_color("CHART_SECONDARY_COLOR", base.secondary),
            accent: env_color("CHART_ACCENT_COLOR", base.accent),
            status: StatusColors {
                up: env_color("CHART_STATUS_UP_COLOR", base.status.up),
                down: env_color("CHART_STATUS_DOWN_COLOR", base.status.down),
                warning: env_color("CHART_STATUS_WARNING_COLOR", base.status.warning),
                error: env_color("CHART_STATUS_ERROR_COLOR", base.status.error),
            },
            theme: ThemeColors {
                background: env_color("CHART_THEME_BACKGROUND", base.theme.background),
                text: env_color("CHART_THEME_TEXT", base.theme.text),
                border: env_color("CHART_THEME_BORDER", base.theme.border),
                axis: env_color("CHART_THEME_AXIS", base.theme.axis),
            },
            tooltip: TooltipColors {
                background: env_color("CHART_TOOLTIP_BACKGROUND", base.tooltip.background),
                text: env_color("CHART_TOOLTIP_TEXT", base.tooltip.text),
            },
            series: env_color_list("CHART_SERIES_COLORS", base.series),
            map_gradient: env_color_list("CHART_MAP_GRADIENT", base.map_gradient),
        }
    }

    /// Cyclic series-palette lookup.
    #[must_use]
    pub fn series_color(&self, index: usize) -> &str {
        if self.series.is_empty() {
            return &self.primary;
        }
        &self.series[index % self.series.len()]
    }

    /// Percentage-based gradient stop lookup over the map gradient.
    ///
    /// `percent` is clamped to `0.0..=100.0`; the stop is chosen
    /// proportionally, so the result is monotone in `percent`.
    #[must_use]
    pub fn gradient_color(&self, percent: f64) -> &str {
        if self.map_gradient.is_empty() {
            return &self.primary;
        }
        let clamped = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let last = self.map_gradient.len() - 1;
        let slot = (clamped / 100.0 * last as f64).round() as usize;
        &self.map_gradient[slot.min(last)]
    }
}

fn env_color(key: &str, fallback: String) -> String {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_owned(),
        _ => fallback,
    }
}

fn env_color_list(key: &str, fallback: Vec<String>) -> Vec<String> {
    let Ok(raw) = env::var(key) else {
        return fallback;
    };
    let parsed: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if parsed.is_empty() { fallback } else { parsed }
}
