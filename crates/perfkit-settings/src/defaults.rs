//! Footprint default values
//!
//! One record per footprint family. Every field has a `Default` matching the
//! stock component library, and every record can be partially overridden
//! from a TOML or JSON file.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use perfkit_core::{Color, Size};

use crate::error::{SettingsError, SettingsResult};

/// Accepted terminal counts for a terminal strip
pub const TERMINAL_COUNT_RANGE: RangeInclusive<usize> = 1..=200;

/// Accepted pin counts for a dual in-line package (even values only)
pub const DIP_PIN_COUNT_RANGE: RangeInclusive<usize> = 4..=50;

/// Terminal strip defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalStripDefaults {
    pub terminal_count: usize,
    pub center_hole: bool,
    pub board_width: Size,
    pub terminal_spacing: Size,
    pub hole_spacing: Size,
    pub hole_size: Size,
    pub mounting_hole_size: Size,
    /// Corner arc diameter of the board outline
    pub edge_radius: Size,
    pub board_color: Color,
    pub terminal_color: Color,
}

impl Default for TerminalStripDefaults {
    fn default() -> Self {
        Self {
            terminal_count: 10,
            center_hole: false,
            board_width: Size::inches(0.35),
            terminal_spacing: Size::inches(0.25),
            hole_spacing: Size::inches(0.5),
            hole_size: Size::inches(0.06),
            mounting_hole_size: Size::inches(0.07),
            edge_radius: Size::px(2.0),
            board_color: Color::rgb(0xCD, 0x85, 0x00),
            terminal_color: Color::LIGHT_GRAY,
        }
    }
}

/// Dual in-line IC defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DipIcDefaults {
    pub pin_count: usize,
    pub pin_spacing: Size,
    pub row_spacing: Size,
    pub pin_size: Size,
    /// Diameter of the pin 1 notch
    pub indent_size: Size,
    pub edge_radius: Size,
    pub display_pin_numbers: bool,
    pub body_color: Color,
    pub pin_color: Color,
    pub indent_color: Color,
    pub label_color: Color,
}

impl Default for DipIcDefaults {
    fn default() -> Self {
        Self {
            pin_count: 8,
            pin_spacing: Size::inches(0.1),
            row_spacing: Size::inches(0.3),
            pin_size: Size::inches(0.04),
            indent_size: Size::inches(0.07),
            edge_radius: Size::px(6.0),
            display_pin_numbers: false,
            body_color: Color::GRAY,
            pin_color: Color::rgb(0x00, 0xB2, 0xEE),
            indent_color: Color::GRAY.darker(),
            label_color: Color::WHITE,
        }
    }
}

/// Perforated board defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfBoardDefaults {
    pub spacing: Size,
    pub pad_size: Size,
    pub hole_size: Size,
    /// Extent of a freshly placed board
    pub width: Size,
    pub height: Size,
    pub board_color: Color,
    pub pad_color: Color,
}

impl Default for PerfBoardDefaults {
    fn default() -> Self {
        Self {
            spacing: Size::inches(0.1),
            pad_size: Size::inches(0.08),
            hole_size: Size::mm(0.7),
            width: Size::inches(1.5),
            height: Size::inches(1.2),
            board_color: Color::rgb(0xF8, 0xEB, 0xB3),
            pad_color: Color::rgb(0xDA, 0x8A, 0x67),
        }
    }
}

/// Turret lug defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurretDefaults {
    pub size: Size,
    pub hole_size: Size,
    pub color: Color,
}

impl Default for TurretDefaults {
    fn default() -> Self {
        Self {
            size: Size::inches(0.16),
            hole_size: Size::inches(0.0625),
            color: Color::rgb(0xE0, 0xC0, 0x4C),
        }
    }
}

/// Connection dot defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotDefaults {
    pub size: Size,
    pub color: Color,
}

impl Default for DotDefaults {
    fn default() -> Self {
        Self {
            size: Size::mm(1.0),
            color: Color::BLACK,
        }
    }
}

/// Stripboard trace cut defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceCutDefaults {
    pub size: Size,
    pub cut_width: Size,
    pub hole_size: Size,
    pub hole_spacing: Size,
    pub cut_between_holes: bool,
    pub fill_color: Color,
    pub border_color: Color,
}

impl Default for TraceCutDefaults {
    fn default() -> Self {
        Self {
            size: Size::inches(0.08),
            cut_width: Size::mm(0.5),
            hole_size: Size::mm(0.7),
            hole_spacing: Size::inches(0.1),
            cut_between_holes: false,
            fill_color: Color::WHITE,
            border_color: Color::RED,
        }
    }
}

/// Body dimensions and color for one leaded component style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStyleDefaults {
    /// Extent along the leads
    pub length: Size,
    /// Extent across the leads
    pub width: Size,
    pub color: Color,
}

impl BodyStyleDefaults {
    fn new(length: Size, width: Size, color: Color) -> Self {
        Self {
            length,
            width,
            color,
        }
    }
}

/// Leaded component defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadedDefaults {
    /// Distance between the lead ends of a freshly placed component
    pub span: Size,
    /// Corner arc of the radial film body as a fraction of its width
    pub radial_corner_ratio: f64,
    pub lead_color: Color,
    pub axial_film: BodyStyleDefaults,
    pub radial_film: BodyStyleDefaults,
    pub ceramic_disk: BodyStyleDefaults,
    pub capacitor_symbol: BodyStyleDefaults,
}

impl Default for LeadedDefaults {
    fn default() -> Self {
        Self {
            span: Size::inches(0.8),
            radial_corner_ratio: 0.7,
            lead_color: Color::rgb(0xCC, 0xCC, 0xCC),
            axial_film: BodyStyleDefaults::new(
                Size::inches(0.5),
                Size::inches(0.125),
                Color::rgb(0xFF, 0xE3, 0x03),
            ),
            radial_film: BodyStyleDefaults::new(
                Size::inches(0.25),
                Size::inches(0.125),
                Color::rgb(0xFF, 0x80, 0x00),
            ),
            ceramic_disk: BodyStyleDefaults::new(
                Size::inches(0.25),
                Size::inches(0.125),
                Color::rgb(0xF0, 0xE6, 0x8C),
            ),
            capacitor_symbol: BodyStyleDefaults::new(
                Size::inches(0.05),
                Size::inches(0.15),
                Color::BLACK,
            ),
        }
    }
}

/// Default values for every footprint family
///
/// Aggregates the per-family records and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FootprintDefaults {
    pub terminal_strip: TerminalStripDefaults,
    pub dip_ic: DipIcDefaults,
    pub perf_board: PerfBoardDefaults,
    pub turret: TurretDefaults,
    pub dot: DotDefaults,
    pub trace_cut: TraceCutDefaults,
    pub leaded: LeadedDefaults,
}

impl FootprintDefaults {
    /// Location of the per-user defaults file
    /// (`<config dir>/perfkit/footprints.toml`)
    pub fn user_file() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("perfkit").join("footprints.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load the per-user defaults file, falling back to built-in values when
    /// it does not exist
    pub fn load_user_or_default() -> SettingsResult<Self> {
        let path = Self::user_file()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse defaults from TOML text
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let defaults: Self = toml::from_str(content)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Load defaults from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let defaults: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        defaults.validate()?;
        Ok(defaults)
    }

    /// Save defaults to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate every record
    pub fn validate(&self) -> SettingsResult<()> {
        let strip = &self.terminal_strip;
        if !TERMINAL_COUNT_RANGE.contains(&strip.terminal_count) {
            return Err(SettingsError::InvalidSetting {
                key: "terminal_strip.terminal_count".to_string(),
                reason: format!(
                    "must be between {} and {}",
                    TERMINAL_COUNT_RANGE.start(),
                    TERMINAL_COUNT_RANGE.end()
                ),
            });
        }
        for (key, size) in [
            ("terminal_strip.board_width", strip.board_width),
            ("terminal_strip.terminal_spacing", strip.terminal_spacing),
            ("terminal_strip.hole_spacing", strip.hole_spacing),
            ("terminal_strip.hole_size", strip.hole_size),
            ("terminal_strip.mounting_hole_size", strip.mounting_hole_size),
            ("terminal_strip.edge_radius", strip.edge_radius),
        ] {
            size.ensure_device_px(key)?;
        }

        let dip = &self.dip_ic;
        if !DIP_PIN_COUNT_RANGE.contains(&dip.pin_count) || dip.pin_count % 2 != 0 {
            return Err(SettingsError::InvalidSetting {
                key: "dip_ic.pin_count".to_string(),
                reason: format!(
                    "must be an even number between {} and {}",
                    DIP_PIN_COUNT_RANGE.start(),
                    DIP_PIN_COUNT_RANGE.end()
                ),
            });
        }
        for (key, size) in [
            ("dip_ic.pin_spacing", dip.pin_spacing),
            ("dip_ic.row_spacing", dip.row_spacing),
            ("dip_ic.pin_size", dip.pin_size),
            ("dip_ic.indent_size", dip.indent_size),
            ("dip_ic.edge_radius", dip.edge_radius),
        ] {
            size.ensure_device_px(key)?;
        }
        if dip.row_spacing.to_device() <= dip.pin_size.to_device() {
            return Err(SettingsError::InvalidSetting {
                key: "dip_ic.row_spacing".to_string(),
                reason: "must be wider than the pin size".to_string(),
            });
        }

        let board = &self.perf_board;
        for (key, size) in [
            ("perf_board.spacing", board.spacing),
            ("perf_board.pad_size", board.pad_size),
            ("perf_board.hole_size", board.hole_size),
            ("perf_board.width", board.width),
            ("perf_board.height", board.height),
        ] {
            size.ensure_device_px(key)?;
        }

        self.turret.size.ensure_device_px("turret.size")?;
        self.turret.hole_size.ensure_device_px("turret.hole_size")?;
        self.dot.size.ensure_device_px("dot.size")?;

        let cut = &self.trace_cut;
        for (key, size) in [
            ("trace_cut.size", cut.size),
            ("trace_cut.cut_width", cut.cut_width),
            ("trace_cut.hole_size", cut.hole_size),
            ("trace_cut.hole_spacing", cut.hole_spacing),
        ] {
            size.ensure_device_px(key)?;
        }

        let leaded = &self.leaded;
        leaded.span.ensure_device_px("leaded.span")?;
        if !(leaded.radial_corner_ratio > 0.0 && leaded.radial_corner_ratio <= 1.0) {
            return Err(SettingsError::InvalidSetting {
                key: "leaded.radial_corner_ratio".to_string(),
                reason: "must be in (0, 1]".to_string(),
            });
        }
        for (key, style) in [
            ("leaded.axial_film", &leaded.axial_film),
            ("leaded.radial_film", &leaded.radial_film),
            ("leaded.ceramic_disk", &leaded.ceramic_disk),
            ("leaded.capacitor_symbol", &leaded.capacitor_symbol),
        ] {
            style.length.ensure_device_px(&format!("{}.length", key))?;
            style.width.ensure_device_px(&format!("{}.width", key))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfkit_core::ParameterError;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FootprintDefaults::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_override() {
        let defaults = FootprintDefaults::from_toml_str(
            r##"
            [terminal_strip]
            terminal_count = 6
            board_width = "9mm"

            [dip_ic]
            pin_color = "#FF0000"
            "##,
        )
        .unwrap();

        assert_eq!(defaults.terminal_strip.terminal_count, 6);
        assert_eq!(defaults.terminal_strip.board_width, Size::mm(9.0));
        assert_eq!(
            defaults.terminal_strip.terminal_spacing,
            TerminalStripDefaults::default().terminal_spacing
        );
        assert_eq!(defaults.dip_ic.pin_color, Color::RED);
        assert_eq!(defaults.dip_ic.pin_count, 8);
    }

    #[test]
    fn test_rejects_odd_pin_count() {
        let err = FootprintDefaults::from_toml_str("[dip_ic]\npin_count = 7\n").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSetting { ref key, .. } if key == "dip_ic.pin_count"));
    }

    #[test]
    fn test_rejects_non_positive_size() {
        let err = FootprintDefaults::from_toml_str("[turret]\nhole_size = \"0in\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parameter(_)));
    }

    #[test]
    fn test_rejects_sub_pixel_spacing() {
        // 0.002in is 0.4 px, so every pin would land on the same point
        let err = FootprintDefaults::from_toml_str("[dip_ic]\npin_spacing = \"0.002in\"\n")
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Parameter(ParameterError::NonPositive { ref name, .. })
                if name == "dip_ic.pin_spacing"
        ));

        let err = FootprintDefaults::from_toml_str(
            "[terminal_strip]\nhole_spacing = \"0.001in\"\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Parameter(ParameterError::NonPositive { ref name, .. })
                if name == "terminal_strip.hole_spacing"
        ));
    }

    #[test]
    fn test_rejects_oversized_spacing() {
        let err = FootprintDefaults::from_toml_str(
            "[terminal_strip]\nterminal_spacing = \"10000000in\"\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Parameter(ParameterError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_size_text() {
        assert!(FootprintDefaults::from_toml_str("[dot]\nsize = \"large\"\n").is_err());
    }

    #[test]
    fn test_user_file_name() {
        if let Ok(path) = FootprintDefaults::user_file() {
            assert!(path.ends_with("perfkit/footprints.toml"));
        }
    }
}
