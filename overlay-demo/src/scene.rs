//--------------------------------------------------------------------
// scene.rs
//--------------------------------------------------------------------
// The scene file: the overlay bounds, its color, the holes to cut
// out of it and the points to hit-test
//--------------------------------------------------------------------

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use overlay_region::*;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct RectConfig { pub x: Coord, pub y: Coord, pub width: Coord, pub height: Coord }

impl From<RectConfig> for Rect {
    fn from(r: RectConfig) -> Rect { Rect::new(r.x, r.y, r.width, r.height) }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct ColorConfig { pub r: u8, pub g: u8, pub b: u8, pub alpha: f32 }

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HoleConfig {
    Circle { center: [Coord; 2], radius: Coord },
    EnclosingCircle {
        frame: RectConfig,
        #[serde(default)]
        padding: Coord
    },
    Rectangle {
        frame: RectConfig,
        #[serde(default)]
        horizontal_padding: Coord,
        #[serde(default)]
        vertical_padding: Coord,
        #[serde(default)]
        corner_radius: Coord
    },
    Path {
        data: String,
        #[serde(default)]
        even_odd: bool
    }
}

impl HoleConfig {
    pub fn build(&self) -> Result<HoleRef> {
        Ok(match self {
            HoleConfig::Circle { center, radius } =>
                hole(CircularHole::new(Vec2::new(center[0], center[1]), *radius)),
            HoleConfig::EnclosingCircle { frame, padding } =>
                hole(CircularHole::enclosing((*frame).into(), *padding)),
            HoleConfig::Rectangle { frame, horizontal_padding, vertical_padding, corner_radius } =>
                hole(RectangularHole::new((*frame).into())
                    .with_padding(*horizontal_padding, *vertical_padding)
                    .with_corner_radius(*corner_radius)),
            HoleConfig::Path { data, even_odd } => {
                let fill_rule = if *even_odd { FillRule::EvenOdd } else { FillRule::NonZero };
                let h = overlay_svg::hole_from_string(data, fill_rule)
                    .with_context(|| format!("invalid hole path {:?}", data))?;
                hole(h)
            }
        })
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Scene {
    pub bounds: RectConfig,
    #[serde(default)]
    pub color: Option<ColorConfig>,
    // Holes the overlay is created with
    #[serde(default)]
    pub holes: Vec<HoleConfig>,
    // Later batches, each subtracted with its own call
    #[serde(default)]
    pub subtractions: Vec<Vec<HoleConfig>>,
    #[serde(default)]
    pub probes: Vec<[Coord; 2]>
}

pub fn build_holes(configs: &[HoleConfig]) -> Result<Vec<HoleRef>> {
    configs.iter().map(HoleConfig::build).collect()
}

impl Scene {
    pub fn parse(json: &str) -> Result<Scene> {
        serde_json::from_str(json).context("failed to parse the scene")
    }

    pub fn load(path: &Path) -> Result<Scene> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        Scene::parse(&json)
    }

    pub fn style(&self) -> OverlayStyle {
        match self.color {
            Some(c) => OverlayStyle { color: Rgba::new(c.r, c.g, c.b, 1.0).with_alpha(c.alpha) },
            None => OverlayStyle::default()
        }
    }

    pub fn probe_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.probes.iter().map(|p| Vec2::new(p[0], p[1]))
    }
}
