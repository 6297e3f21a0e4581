//! Procedural world layout.
//!
//! Lays a sequence of content sections out along the +x axis, jitters them
//! laterally for variety, connects consecutive sections with straight path
//! tiles, and registers one trigger zone per section.
//!
//! The random source is injected so a seeded run reproduces the exact same
//! world. The first section is never jittered: the entry point stays
//! deterministic regardless of seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use scene_events::{Tile, Vec2, ZonePayload};

use crate::zones::{ZoneError, ZoneId, ZoneRegistry};

/// Layout tuning, loaded from the `[layout]` config section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// X position of the first section.
    pub base_x: f32,
    /// Y position of the section row.
    pub base_y: f32,
    /// Distance between consecutive section centers along x.
    pub inter_distance: f32,
    /// Width of the uniform lateral jitter band.
    pub jitter_range: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_x: 0.0,
            base_y: 0.0,
            inter_distance: 24.0,
            jitter_range: 5.0,
        }
    }
}

/// Describes one content section before placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Section name, used as the zone label.
    pub name: String,
    /// Footprint half extents; also the registered zone's size.
    pub half_extents: Vec2,
    /// Camera preset to activate while the agent is inside, if any.
    pub camera_angle: Option<String>,
    /// Whether entering the section fades post-processing blur out.
    pub focus: bool,
}

impl SectionDescriptor {
    /// Creates a section with the given name and footprint.
    pub fn new(name: impl Into<String>, half_extents: Vec2) -> Self {
        Self {
            name: name.into(),
            half_extents,
            camera_angle: None,
            focus: false,
        }
    }

    /// Sets the camera preset for the section.
    pub fn with_camera_angle(mut self, angle: impl Into<String>) -> Self {
        self.camera_angle = Some(angle.into());
        self
    }

    /// Marks the section as a focus zone.
    pub fn with_focus(mut self) -> Self {
        self.focus = true;
        self
    }

    fn payload(&self) -> ZonePayload {
        ZonePayload {
            label: self.name.clone(),
            camera_angle: self.camera_angle.clone(),
            focus: self.focus,
        }
    }
}

/// A section after placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSection {
    pub name: String,
    pub position: Vec2,
    pub half_extents: Vec2,
    /// The trigger zone registered for this section.
    pub zone: ZoneId,
}

/// The built world: placed sections plus the tiles connecting them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldLayout {
    pub sections: Vec<PlacedSection>,
    pub tiles: Vec<Tile>,
}

/// Places sections, generates connecting tiles, and registers one zone per
/// section in the given registry.
///
/// No overlap detection is performed: if `inter_distance` is smaller than
/// adjacent footprints the zones overlap and creation-order evaluation
/// decides which camera preset wins.
pub fn build_layout(
    sections: &[SectionDescriptor],
    config: &LayoutConfig,
    rng: &mut impl Rng,
    registry: &mut ZoneRegistry,
) -> Result<WorldLayout, ZoneError> {
    let mut layout = WorldLayout::default();

    for (index, descriptor) in sections.iter().enumerate() {
        let x = config.base_x + index as f32 * config.inter_distance;
        let mut y = config.base_y;
        if index > 0 {
            y += (rng.gen::<f32>() - 0.5) * config.jitter_range;
        }
        let position = Vec2::new(x, y);

        let zone = registry.add_zone(position, descriptor.half_extents, descriptor.payload())?;

        if let Some(previous) = layout.sections.last() {
            let start = Vec2::new(previous.position.x + previous.half_extents.x, previous.position.y);
            let end = Vec2::new(position.x - descriptor.half_extents.x, position.y);
            layout.tiles.push(Tile::between(start, end));
        }

        layout.sections.push(PlacedSection {
            name: descriptor.name.clone(),
            position,
            half_extents: descriptor.half_extents,
            zone,
        });
    }

    tracing::debug!(
        sections = layout.sections.len(),
        tiles = layout.tiles.len(),
        "world layout built"
    );
    Ok(layout)
}

/// The default portfolio content, in drive order.
pub fn default_sections() -> Vec<SectionDescriptor> {
    vec![
        SectionDescriptor::new("intro", Vec2::new(6.0, 6.0)),
        SectionDescriptor::new("projects", Vec2::new(9.0, 12.0))
            .with_camera_angle("projects")
            .with_focus(),
        SectionDescriptor::new("playground", Vec2::new(8.0, 8.0))
            .with_camera_angle("playground"),
        SectionDescriptor::new("information", Vec2::new(6.0, 6.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn three_sections() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new("a", Vec2::new(2.0, 2.0)),
            SectionDescriptor::new("b", Vec2::new(3.0, 3.0)).with_camera_angle("b"),
            SectionDescriptor::new("c", Vec2::new(2.0, 2.0)),
        ]
    }

    #[test]
    fn test_sections_spaced_by_inter_distance() {
        let config = LayoutConfig {
            inter_distance: 10.0,
            jitter_range: 0.0,
            ..LayoutConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let mut registry = ZoneRegistry::new();

        let layout = build_layout(&three_sections(), &config, &mut rng, &mut registry).unwrap();

        let xs: Vec<f32> = layout.sections.iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_first_section_never_jittered() {
        let config = LayoutConfig {
            base_y: 5.0,
            jitter_range: 100.0,
            ..LayoutConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let mut registry = ZoneRegistry::new();

        let layout = build_layout(&three_sections(), &config, &mut rng, &mut registry).unwrap();

        assert_eq!(layout.sections[0].position.y, 5.0);
    }

    #[test]
    fn test_jitter_stays_in_band() {
        let config = LayoutConfig {
            jitter_range: 4.0,
            ..LayoutConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(99);
        let mut registry = ZoneRegistry::new();

        let layout = build_layout(&three_sections(), &config, &mut rng, &mut registry).unwrap();

        for section in &layout.sections[1..] {
            assert!(section.position.y.abs() <= 2.0);
        }
    }

    #[test]
    fn test_tiles_span_section_edges() {
        let config = LayoutConfig {
            inter_distance: 10.0,
            jitter_range: 0.0,
            ..LayoutConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let mut registry = ZoneRegistry::new();

        let layout = build_layout(&three_sections(), &config, &mut rng, &mut registry).unwrap();

        assert_eq!(layout.tiles.len(), 2);
        // a has half width 2, b has half width 3: the tile runs from x=2 to
        // x=7.
        assert_eq!(layout.tiles[0].start, Vec2::new(2.0, 0.0));
        assert_eq!(layout.tiles[0].end(), Vec2::new(7.0, 0.0));
    }

    #[test]
    fn test_zone_payload_matches_descriptor() {
        let config = LayoutConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut registry = ZoneRegistry::new();

        let layout = build_layout(&three_sections(), &config, &mut rng, &mut registry).unwrap();

        let payload = registry.zone(layout.sections[1].zone).payload();
        assert_eq!(payload.label, "b");
        assert_eq!(payload.camera_angle.as_deref(), Some("b"));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = LayoutConfig::default();

        let mut registry1 = ZoneRegistry::new();
        let mut rng1 = SmallRng::seed_from_u64(42);
        let layout1 = build_layout(&three_sections(), &config, &mut rng1, &mut registry1).unwrap();

        let mut registry2 = ZoneRegistry::new();
        let mut rng2 = SmallRng::seed_from_u64(42);
        let layout2 = build_layout(&three_sections(), &config, &mut rng2, &mut registry2).unwrap();

        assert_eq!(layout1, layout2);
    }

    #[test]
    fn test_default_sections_have_projects_focus() {
        let sections = default_sections();
        let projects = sections.iter().find(|s| s.name == "projects").unwrap();
        assert!(projects.focus);
        assert_eq!(projects.camera_angle.as_deref(), Some("projects"));
    }
}
