//! Bullet/pursuer collision resolution
//!
//! Pairwise axis-aligned overlap between every live pursuer and bullet.
//! Pursuers are the outer loop, bullets the inner, first match wins: both
//! entities are removed on the spot, so a bullet can never score against
//! two pursuers in the same tick.

use super::state::{Bullet, Pursuer};

/// Remove every overlapping bullet/pursuer pair and return the number of
/// pursuers destroyed. Iterates pursuers by descending index with
/// `swap_remove`, so removal never invalidates the indices still to visit.
pub fn resolve_hits(pursuers: &mut Vec<Pursuer>, bullets: &mut Vec<Bullet>) -> u32 {
    let mut kills = 0;
    let mut pi = pursuers.len();
    while pi > 0 {
        pi -= 1;
        let prect = pursuers[pi].rect();
        if let Some(bi) = bullets.iter().position(|b| prect.intersects(&b.rect())) {
            pursuers.swap_remove(pi);
            bullets.swap_remove(bi);
            kills += 1;
        }
    }
    kills
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn pursuer_at(x: f32, y: f32) -> Pursuer {
        Pursuer {
            pos: Vec2::new(x, y),
        }
    }

    fn bullet_at(x: f32, y: f32) -> Bullet {
        Bullet {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn test_hit_removes_exactly_one_of_each() {
        let mut pursuers = vec![pursuer_at(100.0, 100.0), pursuer_at(500.0, 500.0)];
        let mut bullets = vec![bullet_at(110.0, 110.0)];

        let kills = resolve_hits(&mut pursuers, &mut bullets);
        assert_eq!(kills, 1);
        assert_eq!(pursuers.len(), 1);
        assert!(bullets.is_empty());
        assert_eq!(pursuers[0].pos, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_one_bullet_cannot_kill_two_overlapping_pursuers() {
        // Both pursuers overlap the same bullet; only one may die
        let mut pursuers = vec![pursuer_at(100.0, 100.0), pursuer_at(105.0, 105.0)];
        let mut bullets = vec![bullet_at(110.0, 110.0)];

        let kills = resolve_hits(&mut pursuers, &mut bullets);
        assert_eq!(kills, 1);
        assert_eq!(pursuers.len(), 1);
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_each_pursuer_consumes_its_own_bullet() {
        let mut pursuers = vec![pursuer_at(100.0, 100.0), pursuer_at(400.0, 400.0)];
        let mut bullets = vec![bullet_at(110.0, 110.0), bullet_at(410.0, 410.0)];

        let kills = resolve_hits(&mut pursuers, &mut bullets);
        assert_eq!(kills, 2);
        assert!(pursuers.is_empty());
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_touching_edges_count_as_hit() {
        // Bullet square's left edge exactly touches the pursuer's right edge
        let p = pursuer_at(100.0, 100.0);
        let bullet_x = p.rect().right() + crate::consts::BULLET_RADIUS;
        let mut pursuers = vec![p];
        let mut bullets = vec![bullet_at(bullet_x, 115.0)];

        assert_eq!(resolve_hits(&mut pursuers, &mut bullets), 1);
    }

    #[test]
    fn test_miss_removes_nothing() {
        let mut pursuers = vec![pursuer_at(0.0, 0.0)];
        let mut bullets = vec![bullet_at(700.0, 500.0)];

        assert_eq!(resolve_hits(&mut pursuers, &mut bullets), 0);
        assert_eq!(pursuers.len(), 1);
        assert_eq!(bullets.len(), 1);
    }
}
