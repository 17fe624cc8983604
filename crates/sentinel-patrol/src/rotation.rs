//! Orientation stepping helpers.

use glam::Quat;

/// Angle between two orientations in degrees, `[0, 180]`.
///
/// `q` and `-q` describe the same orientation, so the result is
/// independent of quaternion sign.
pub fn angle_between(a: Quat, b: Quat) -> f32 {
    // atan2 of the relative rotation stays accurate near zero, where acos of
    // the dot product loses precision in f32.
    let rel = a.conjugate() * b;
    let half = rel.xyz().length().atan2(rel.w.abs());
    (half * 2.0).to_degrees()
}

/// Rotate `from` toward `to` by at most `max_degrees`.
///
/// Lands exactly on `to` when the remaining angle is within reach, so
/// repeated steps never overshoot. Negative steps are treated as zero.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let angle = angle_between(from, to);
    if angle == 0.0 {
        return to;
    }
    let step = max_degrees.max(0.0);
    if step >= angle {
        return to;
    }
    from.slerp(to, step / angle).normalize()
}
