//! Horizontal obstruction pass.

use glam::Vec2;
use tracing::trace;

use super::Pass;
use crate::contact::ContactFlags;
use crate::query::RayQuery;

impl<Q: RayQuery + ?Sized> Pass<'_, Q> {
    /// Probe along the movement side and clamp `x` against walls.
    ///
    /// The first ray (lowest on the leading edge) decides whether the actor
    /// starts climbing. Every ray that hits a wall, or any surface while not
    /// climbing, clamps `x` and shortens the remaining rays.
    pub(super) fn horizontal(&mut self, mut displacement: Vec2) -> Vec2 {
        let skin = self.skin();
        let direction_x = displacement.x.signum();
        let direction = Vec2::new(direction_x, 0.0);
        let mut ray_length = displacement.x.abs() + skin;

        for index in 0..self.probe.horizontal_ray_count() {
            let origin = self.probe.horizontal_ray_origin(direction_x, index);
            let Some(hit) = self.cast(origin, direction, ray_length) else {
                continue;
            };
            let slope_angle = hit.slope_angle(Vec2::Y);

            if index == 0 && slope_angle <= self.config.max_climb_angle {
                if self.contacts.descending_slope() {
                    // Valley: a descent straight into a rising slope
                    self.contacts.flags.remove(ContactFlags::DESCENDING_SLOPE);
                    displacement = self.contacts.displacement_old;
                }

                let mut distance_to_slope = 0.0;
                if !self
                    .config
                    .same_slope(slope_angle, self.contacts.slope_angle_old)
                {
                    distance_to_slope = hit.distance - skin;
                    displacement.x -= distance_to_slope * direction_x;
                }
                displacement = self.climb_slope(displacement, slope_angle);
                displacement.x += distance_to_slope * direction_x;
            }

            if !self.contacts.climbing_slope() || slope_angle > self.config.max_climb_angle {
                displacement.x = (hit.distance - skin) * direction_x;
                ray_length = hit.distance;

                if self.contacts.climbing_slope() {
                    displacement.y =
                        self.contacts.slope_angle.to_radians().tan() * displacement.x.abs();
                }
                self.set_side(direction_x);
                trace!(index, distance = hit.distance, slope_angle, "horizontal clamp");
            }
        }
        displacement
    }
}
