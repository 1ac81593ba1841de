use glam::Vec2;

use crate::components::Side;
use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size (DOM layout convention)
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Vertical spans overlap; touching edges do not count
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }
}

/// Play field geometry derived from config
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub size: Vec2,
    pub padding: Vec2,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        Self {
            size: config.arena_size,
            padding: config.padding,
        }
    }

    /// X plane the ball must cross to reach a paddle's face
    pub fn paddle_plane(&self, side: Side, paddle_width: f32) -> f32 {
        match side {
            Side::Left => self.padding.x + paddle_width,
            Side::Right => self.size.x - self.padding.x - paddle_width,
        }
    }

    pub fn top_wall(&self) -> f32 {
        self.padding.y
    }

    pub fn bottom_wall(&self) -> f32 {
        self.size.y - self.padding.y
    }

    /// Whether a paddle with its top at `y` lies strictly inside the field
    pub fn paddle_fits(&self, y: f32, height: f32) -> bool {
        y > 0.0 && y + height < self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_y() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 10.0), Vec2::new(5.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(50.0, 15.0), Vec2::new(5.0, 100.0));
        let c = Aabb::from_pos_size(Vec2::new(50.0, 20.0), Vec2::new(5.0, 100.0));
        assert!(a.overlaps_y(&b));
        assert!(!a.overlaps_y(&c), "touching edges do not overlap");
        assert_eq!(a.size(), Vec2::new(5.0, 10.0));
    }

    #[test]
    fn test_arena_planes() {
        let arena = Arena::new(&Config::new());
        assert_eq!(arena.paddle_plane(Side::Left, 15.0), 25.0);
        assert_eq!(arena.paddle_plane(Side::Right, 15.0), 775.0);
        assert_eq!(arena.top_wall(), 10.0);
        assert_eq!(arena.bottom_wall(), 590.0);
    }

    #[test]
    fn test_paddle_fits() {
        let arena = Arena::new(&Config::new());
        assert!(arena.paddle_fits(250.0, 100.0));
        assert!(!arena.paddle_fits(0.0, 100.0), "top edge is exclusive");
        assert!(!arena.paddle_fits(500.0, 100.0), "bottom edge is exclusive");
    }
}
