//! Run configuration.
//!
//! `Settings` is an ordinary value owned by the caller and handed to
//! `make_world` / `step_world`; nothing here is global. Grid dimensions are
//! fixed for a run, timing values may be patched between ticks.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{DEFAULT_SEED, LOCK_DELAY_SEC, PIECE_BOX, SPAWN_ROW};

/// Upper bound on `columns * rows`.
pub const MAX_CELLS: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub columns: i32,
    pub rows: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    pub fps: u32,
    /// Seconds per cell of gravity; `0` disables gravity.
    pub drop_rate: f64,
    /// Seconds a landed piece rests before it merges.
    #[serde(default = "default_lock_delay")]
    pub lock_delay: f64,
    #[serde(default)]
    pub origin_x: i32,
    #[serde(default)]
    pub origin_y: i32,
    /// Seed for the spawn randomizer.
    #[serde(default = "default_seed")]
    pub seed: u32,
}

fn default_lock_delay() -> f64 {
    LOCK_DELAY_SEC
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

impl Settings {
    pub fn new(
        columns: i32,
        rows: i32,
        cell_width: i32,
        cell_height: i32,
        fps: u32,
        drop_rate: f64,
    ) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
            fps,
            drop_rate,
            lock_delay: LOCK_DELAY_SEC,
            origin_x: 0,
            origin_y: 0,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_lock_delay(mut self, lock_delay: f64) -> Self {
        self.lock_delay = lock_delay;
        self
    }

    pub fn with_origin(mut self, origin_x: i32, origin_y: i32) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Parse from JSON; missing optional fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let min = PIECE_BOX as i32;
        if self.columns < min || self.rows < min {
            return Err(Error::GridTooSmall {
                columns: self.columns,
                rows: self.rows,
                min: PIECE_BOX,
            });
        }
        if self.cell_width <= 0 || self.cell_height <= 0 {
            return Err(Error::InvalidCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        if self.columns as i64 * self.rows as i64 > MAX_CELLS as i64 {
            return Err(Error::GridTooLarge {
                columns: self.columns,
                rows: self.rows,
                max: MAX_CELLS,
            });
        }
        validate_pixel_span("horizontal", self.origin_x, self.columns, self.cell_width)?;
        validate_pixel_span("vertical", self.origin_y, self.rows, self.cell_height)?;
        if self.fps == 0 {
            return Err(Error::InvalidFps);
        }
        validate_drop_rate(self.drop_rate)?;
        validate_lock_delay(self.lock_delay)?;
        Ok(())
    }

    /// Seconds per frame at the configured fps.
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Anchor `(row, col)` where new pieces appear: horizontally centred box,
    /// row 3 when the grid is tall enough.
    pub fn spawn_anchor(&self) -> (i32, i32) {
        let col = (self.columns - PIECE_BOX as i32) / 2;
        let row = (SPAWN_ROW as i32).min(self.rows - PIECE_BOX as i32);
        (row.max(0), col.max(0))
    }

    /// Apply a patch after validating every field it touches. On error
    /// nothing is changed.
    pub fn apply_patch(&mut self, patch: &SettingsPatch) -> Result<(), Error> {
        if let Some(rate) = patch.drop_rate {
            validate_drop_rate(rate)?;
        }
        if let Some(delay) = patch.lock_delay {
            validate_lock_delay(delay)?;
        }
        if patch.fps == Some(0) {
            return Err(Error::InvalidFps);
        }

        if let Some(rate) = patch.drop_rate {
            self.drop_rate = rate;
        }
        if let Some(delay) = patch.lock_delay {
            self.lock_delay = delay;
        }
        if let Some(fps) = patch.fps {
            self.fps = fps;
        }
        debug!(
            "settings patched: drop_rate {}, lock_delay {}, fps {}",
            self.drop_rate, self.lock_delay, self.fps
        );
        Ok(())
    }
}

/// Anchors range one spawn box beyond either edge of the grid; every such
/// anchor needs an `i32` pixel coordinate.
fn validate_pixel_span(
    axis: &'static str,
    origin: i32,
    cells: i32,
    size: i32,
) -> Result<(), Error> {
    let margin = PIECE_BOX as i32;
    let low = margin
        .checked_mul(size)
        .and_then(|span| origin.checked_sub(span));
    let high = cells
        .checked_add(margin)
        .and_then(|n| n.checked_mul(size))
        .and_then(|span| origin.checked_add(span));
    match (low, high) {
        (Some(_), Some(_)) => Ok(()),
        _ => Err(Error::PixelOverflow {
            axis,
            origin,
            cells,
            size,
        }),
    }
}

fn validate_drop_rate(rate: f64) -> Result<(), Error> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(Error::InvalidDropRate(rate));
    }
    Ok(())
}

fn validate_lock_delay(delay: f64) -> Result<(), Error> {
    if !delay.is_finite() || delay < 0.0 {
        return Err(Error::InvalidLockDelay(delay));
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(10, 20, 16, 16, 60, 1.0)
    }
}

/// Partial update queued by systems or UI for the owner of the settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub drop_rate: Option<f64>,
    pub lock_delay: Option<f64>,
    pub fps: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.spawn_anchor(), (3, 3));
    }

    #[test]
    fn test_small_grid_spawns_at_top() {
        let settings = Settings::new(4, 4, 16, 16, 60, 0.0);
        assert_eq!(settings.spawn_anchor(), (0, 0));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let settings = Settings::new(0, 20, 16, 16, 60, 1.0);
        assert!(matches!(settings.validate(), Err(Error::GridTooSmall { .. })));

        let settings = Settings::new(10, 20, 16, -1, 60, 1.0);
        assert!(matches!(settings.validate(), Err(Error::InvalidCellSize { .. })));

        let settings = Settings::new(10, 20, 16, 16, 0, 1.0);
        assert!(matches!(settings.validate(), Err(Error::InvalidFps)));

        let settings = Settings::new(10, 20, 16, 16, 60, f64::NAN);
        assert!(matches!(settings.validate(), Err(Error::InvalidDropRate(_))));
    }

    #[test]
    fn test_rejects_grids_without_pixel_coordinates() {
        let settings = Settings::new(10, 20, i32::MAX / 2, 16, 60, 1.0);
        assert!(matches!(
            settings.validate(),
            Err(Error::PixelOverflow { axis: "horizontal", .. })
        ));

        let settings = Settings::new(10, 20, 16, 16, 60, 1.0).with_origin(0, i32::MAX - 100);
        assert!(matches!(
            settings.validate(),
            Err(Error::PixelOverflow { axis: "vertical", .. })
        ));

        let settings = Settings::new(10, 20, 16, 16, 60, 1.0).with_origin(i32::MIN + 10, 0);
        assert!(matches!(settings.validate(), Err(Error::PixelOverflow { .. })));

        let settings = Settings::new(4096, 4096, 1, 1, 60, 1.0);
        assert!(matches!(settings.validate(), Err(Error::GridTooLarge { .. })));

        // Large but representable geometry is fine.
        let settings = Settings::new(10, 20, 1_000_000, 1_000_000, 60, 1.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{
            "columns": 10, "rows": 20, "cell_width": 16, "cell_height": 16,
            "fps": 60, "drop_rate": 0.5
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.lock_delay, LOCK_DELAY_SEC);
        assert_eq!(settings.seed, DEFAULT_SEED);
        assert_eq!(settings.origin_x, 0);
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(Settings::from_json("{"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_patch_is_all_or_nothing() {
        let mut settings = Settings::default();
        let patch = SettingsPatch {
            drop_rate: Some(0.25),
            lock_delay: Some(-1.0),
            fps: None,
        };
        assert!(settings.apply_patch(&patch).is_err());
        assert_eq!(settings.drop_rate, 1.0);

        let patch = SettingsPatch {
            drop_rate: Some(0.25),
            ..Default::default()
        };
        settings.apply_patch(&patch).unwrap();
        assert_eq!(settings.drop_rate, 0.25);
    }
}
