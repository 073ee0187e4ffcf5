//! Level definitions
//!
//! A level is a static obstacle list, a spawn point, a finish-line
//! threshold, and a countdown budget, plus the hazards active in it.
//! The built-in levels carry the shipped geometry; `from_blocking_tiles`
//! builds the same shape of data from a tile map's blocking layer (the
//! map file parsing itself lives with the collaborator that loads it).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::wind::RiverCurrent;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Level identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelId {
    One,
    Two,
}

impl LevelId {
    pub fn number(self) -> u32 {
        match self {
            LevelId::One => 1,
            LevelId::Two => 2,
        }
    }
}

/// Fallback spawn when a level definition carries none
pub const DEFAULT_SPAWN: Vec2 = Vec2::new(FIELD_WIDTH / 2.0, 600.0);

/// Static description of a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: LevelId,
    /// Blocking rectangles; an empty list is a valid (hazard-free) river
    pub obstacles: Vec<Rect>,
    /// Boat start position; `None` falls back to [`DEFAULT_SPAWN`]
    pub spawn: Option<Vec2>,
    /// Crossing above this y wins the level
    pub finish_y: f32,
    /// Countdown budget in seconds
    pub duration: f32,
    /// Whether wind gusts blow in this level
    pub wind: bool,
    /// Downstream current, if any
    pub current: Option<RiverCurrent>,
}

impl LevelConfig {
    #[inline]
    pub fn spawn_point(&self) -> Vec2 {
        self.spawn.unwrap_or(DEFAULT_SPAWN)
    }

    /// Level 1: a winding forest channel, no weather. 60 seconds.
    pub fn level_one() -> Self {
        Self {
            id: LevelId::One,
            obstacles: vec![
                // Forest banks
                Rect::new(0.0, 0.0, 200.0, FIELD_HEIGHT),
                Rect::new(FIELD_WIDTH - 200.0, 0.0, 200.0, FIELD_HEIGHT),
                // Forest islands forming the channel
                Rect::new(200.0, 450.0, 380.0, 200.0),
                Rect::new(200.0, 330.0, 750.0, 150.0),
                Rect::new(670.0, 570.0, 500.0, 300.0),
                Rect::new(330.0, 0.0, 720.0, 230.0),
            ],
            spawn: Some(DEFAULT_SPAWN),
            finish_y: 40.0,
            duration: 60.0,
            wind: false,
            current: None,
        }
    }

    /// Level 2: a wider river strewn with rocks, wind gusts, and a
    /// downstream current. 45 seconds.
    pub fn level_two() -> Self {
        Self {
            id: LevelId::Two,
            obstacles: vec![
                // Narrower forest banks leave a wider river
                Rect::new(0.0, 0.0, 150.0, FIELD_HEIGHT),
                Rect::new(FIELD_WIDTH - 150.0, 0.0, 150.0, FIELD_HEIGHT),
                // Rocks
                Rect::new(150.0, 500.0, 220.0, 80.0),
                Rect::new(680.0, 520.0, 260.0, 100.0),
                Rect::new(320.0, 340.0, 200.0, 75.0),
                Rect::new(580.0, 220.0, 240.0, 70.0),
                Rect::new(820.0, 350.0, 180.0, 85.0),
                Rect::new(250.0, 130.0, 180.0, 65.0),
                // Top barrier with gaps on either side
                Rect::new(500.0, 0.0, 350.0, 80.0),
            ],
            spawn: Some(DEFAULT_SPAWN),
            finish_y: 40.0,
            duration: 45.0,
            wind: true,
            current: Some(RiverCurrent {
                strength: 30.0,
                river_left: 150.0,
                river_right: FIELD_WIDTH - 150.0,
            }),
        }
    }

    pub fn for_id(id: LevelId) -> Self {
        match id {
            LevelId::One => Self::level_one(),
            LevelId::Two => Self::level_two(),
        }
    }

    /// Build a level from a tile map's blocking layer.
    ///
    /// `blocking_tiles` are (column, row) coordinates of solid tiles;
    /// each becomes one obstacle rectangle of `tile_w` x `tile_h`. The
    /// spawn may come from the map's water layer; `None` uses the default.
    pub fn from_blocking_tiles(
        id: LevelId,
        tile_w: f32,
        tile_h: f32,
        blocking_tiles: impl IntoIterator<Item = (u32, u32)>,
        spawn: Option<Vec2>,
        finish_y: f32,
        duration: f32,
    ) -> Self {
        let obstacles = blocking_tiles
            .into_iter()
            .map(|(tx, ty)| Rect::new(tx as f32 * tile_w, ty as f32 * tile_h, tile_w, tile_h))
            .collect();
        Self {
            id,
            obstacles,
            spawn,
            finish_y,
            duration,
            wind: false,
            current: None,
        }
    }

    /// Parse a level from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
