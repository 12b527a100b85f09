//! Vertical obstruction pass.

use glam::Vec2;
use tracing::trace;

use super::Pass;
use crate::query::RayQuery;

impl<Q: RayQuery + ?Sized> Pass<'_, Q> {
    /// Probe along the leading horizontal edge and clamp `y` against floors
    /// and ceilings.
    ///
    /// Rays are shifted by the horizontal displacement already resolved this
    /// tick so they probe where the actor is about to be.
    pub(super) fn vertical(&mut self, mut displacement: Vec2) -> Vec2 {
        let skin = self.skin();
        let direction_y = displacement.y.signum();
        let direction = Vec2::new(0.0, direction_y);
        let mut ray_length = displacement.y.abs() + skin;

        for index in 0..self.probe.vertical_ray_count() {
            let origin = self
                .probe
                .vertical_ray_origin(direction_y, index, displacement.x);
            let Some(hit) = self.cast(origin, direction, ray_length) else {
                continue;
            };

            displacement.y = (hit.distance - skin) * direction_y;
            ray_length = hit.distance;

            if self.contacts.climbing_slope() {
                let tan = self.contacts.slope_angle.to_radians().tan();
                if tan.abs() > f32::EPSILON {
                    displacement.x = displacement.y / tan * displacement.x.signum();
                }
            }
            self.set_vertical(direction_y);
            trace!(index, distance = hit.distance, "vertical clamp");
        }

        if self.contacts.climbing_slope() {
            displacement = self.recheck_slope(displacement);
        }
        displacement
    }

    /// Look ahead at foot height for a change of slope within this tick.
    fn recheck_slope(&mut self, mut displacement: Vec2) -> Vec2 {
        let skin = self.skin();
        let direction_x = displacement.x.signum();
        let ray_length = displacement.x.abs() + skin;
        let origin = self.probe.horizontal_ray_origin(direction_x, 0) + Vec2::Y * displacement.y;

        if let Some(hit) = self.cast(origin, Vec2::new(direction_x, 0.0), ray_length) {
            let slope_angle = hit.slope_angle(Vec2::Y);
            if !self.config.same_slope(slope_angle, self.contacts.slope_angle) {
                displacement.x = (hit.distance - skin) * direction_x;
                self.contacts.slope_angle = slope_angle;
                trace!(slope_angle, "slope changed mid-climb");
            }
        }
        displacement
    }
}
