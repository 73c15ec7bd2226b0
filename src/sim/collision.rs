//! Elastic collision response between circular bodies
//!
//! Perfectly elastic, momentum-conserving impulse exchange. Only
//! obstacle-obstacle pairs are ever resolved here; player contact is a
//! terminal event handled by the world, never a velocity exchange.

use glam::Vec2;

use super::body::Body;

/// Where and how hard two bodies met, for event reporting.
#[derive(Debug, Clone, Copy)]
pub struct Impact {
    /// Midpoint between the two centers
    pub point: Vec2,
    /// Relative speed at contact
    pub speed: f32,
}

/// Resolve a perfectly elastic collision between two overlapping bodies,
/// mutating their velocities. Returns `None` when the pair is already
/// separating - the tie-break that keeps a persistent overlap from being
/// resolved twice across frames.
pub fn resolve_elastic(a: &mut Body, b: &mut Body) -> Option<Impact> {
    let delta = b.pos - a.pos;
    // Coincident centers have no defined normal; substitute an arbitrary
    // unit vector rather than propagate NaN.
    let normal = if delta.length_squared() > f32::EPSILON {
        delta.normalize()
    } else {
        Vec2::X
    };

    let relative = a.vel - b.vel;
    let approach = relative.dot(normal);
    if approach < 0.0 {
        return None;
    }

    let impulse = 2.0 * approach / (a.mass + b.mass);
    a.vel -= impulse * b.mass * normal;
    b.vel += impulse * a.mass * normal;

    Some(Impact {
        point: (a.pos + b.pos) * 0.5,
        speed: relative.length(),
    })
}
