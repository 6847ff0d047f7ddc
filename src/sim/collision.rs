//! Collision queries against static platforms
//!
//! Pure functions over rectangles; callers decide how to respond.

use super::geometry::Rect;
use super::state::Platform;
use crate::consts::ENEMY_FOOTING_TOLERANCE;

/// A platform a falling body is landing on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Index into the platform slice
    pub index: usize,
    /// Platform top edge (where the body's bottom snaps to)
    pub top: f32,
    /// How far the body's bottom has sunk past the top edge
    pub penetration: f32,
}

/// Find the platform a falling body lands on.
///
/// Only bodies moving down (`vel_y > 0`) can land. When several platforms
/// overlap the body, the one with the smallest penetration wins; ties go to
/// the earlier platform.
pub fn find_landing(body: &Rect, vel_y: f32, platforms: &[Platform]) -> Option<Landing> {
    if vel_y <= 0.0 {
        return None;
    }

    let mut best: Option<Landing> = None;
    for (index, platform) in platforms.iter().enumerate() {
        if !body.intersects(&platform.rect) {
            continue;
        }
        let candidate = Landing {
            index,
            top: platform.rect.top(),
            penetration: body.bottom() - platform.rect.top(),
        };
        match best {
            Some(b) if b.penetration <= candidate.penetration => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Find the platform a walker is standing on.
///
/// Its span must overlap the platform and its feet must be within
/// [`ENEMY_FOOTING_TOLERANCE`] of the platform top. Returns the first match.
pub fn supporting_platform<'a>(
    body: &Rect,
    platforms: impl IntoIterator<Item = &'a Platform>,
) -> Option<&'a Platform> {
    platforms.into_iter().find(|p| {
        body.overlaps_x(&p.rect) && (body.bottom() - p.rect.top()).abs() < ENEMY_FOOTING_TOLERANCE
    })
}

/// Whether a walker has reached either edge of its platform
pub fn at_platform_edge(body: &Rect, platform: &Platform) -> bool {
    body.left() <= platform.rect.left() || body.right() >= platform.rect.right()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platforms() -> Vec<Platform> {
        vec![
            Platform::cloud(0.0, 400.0, 200.0, 20.0),
            Platform::cloud(0.0, 405.0, 200.0, 20.0),
            Platform::cloud(500.0, 300.0, 100.0, 20.0),
        ]
    }

    #[test]
    fn test_no_landing_when_rising() {
        let body = Rect::new(10.0, 370.0, 30.0, 40.0);
        assert!(find_landing(&body, -3.0, &platforms()).is_none());
        assert!(find_landing(&body, 0.0, &platforms()).is_none());
    }

    #[test]
    fn test_landing_picks_smallest_penetration() {
        // Bottom at 410: 10 into the first platform, 5 into the second
        let body = Rect::new(10.0, 370.0, 30.0, 40.0);
        let landing = find_landing(&body, 4.0, &platforms()).unwrap();
        assert_eq!(landing.index, 1);
        assert_eq!(landing.top, 405.0);
        assert_eq!(landing.penetration, 5.0);
    }

    #[test]
    fn test_landing_miss() {
        let body = Rect::new(300.0, 370.0, 30.0, 40.0);
        assert!(find_landing(&body, 4.0, &platforms()).is_none());
    }

    #[test]
    fn test_supporting_platform_tolerance() {
        let list = platforms();
        // Feet at 303, within 5 of the top at 300
        let standing = Rect::new(520.0, 273.0, 40.0, 30.0);
        let found = supporting_platform(&standing, &list).unwrap();
        assert_eq!(found.rect.left(), 500.0);

        // Feet 6 above the top
        let hovering = Rect::new(520.0, 264.0, 40.0, 30.0);
        assert!(supporting_platform(&hovering, &list).is_none());
    }

    #[test]
    fn test_at_platform_edge() {
        let platform = Platform::cloud(500.0, 300.0, 100.0, 20.0);
        assert!(at_platform_edge(&Rect::new(500.0, 270.0, 40.0, 30.0), &platform));
        assert!(at_platform_edge(&Rect::new(560.0, 270.0, 40.0, 30.0), &platform));
        assert!(!at_platform_edge(&Rect::new(530.0, 270.0, 40.0, 30.0), &platform));
    }
}
