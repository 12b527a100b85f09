//! Slope climbing and descending.
//!
//! Both treat `|x|` as the distance to travel along the slope surface:
//!
//! ```text
//!            /|
//!     |x|   / |  sin(θ)·|x|
//!          /  |
//!         /θ__|
//!        cos(θ)·|x|
//! ```

use glam::Vec2;
use tracing::trace;

use super::Pass;
use crate::contact::ContactFlags;
use crate::query::RayQuery;

impl<Q: RayQuery + ?Sized> Pass<'_, Q> {
    /// Redirect a horizontal move up a slope of `slope_angle` degrees.
    ///
    /// Skipped when the actor is already rising faster than the slope would
    /// carry it (jumping).
    pub(super) fn climb_slope(&mut self, mut displacement: Vec2, slope_angle: f32) -> Vec2 {
        let distance = displacement.x.abs();
        let radians = slope_angle.to_radians();
        let climb_y = radians.sin() * distance;

        if displacement.y > climb_y {
            trace!(slope_angle, dy = displacement.y, climb_y, "climb skipped, rising");
            return displacement;
        }

        displacement.y = climb_y;
        displacement.x = radians.cos() * distance * displacement.x.signum();
        self.contacts
            .flags
            .insert(ContactFlags::BELOW | ContactFlags::CLIMBING_SLOPE);
        self.contacts.slope_angle = slope_angle;
        trace!(slope_angle, ?displacement, "climbing");
        displacement
    }

    /// Pull the actor down along a slope it is walking off.
    ///
    /// Casts straight down from the trailing bottom corner. Only slopes that
    /// face the movement direction and lie within this tick's reach are
    /// followed.
    pub(super) fn descend_slope(&mut self, mut displacement: Vec2) -> Vec2 {
        // Nothing to follow without horizontal intent
        if displacement.x == 0.0 {
            return displacement;
        }

        let direction_x = displacement.x.signum();
        let origins = self.probe.origins();
        let origin = if direction_x < 0.0 {
            origins.bottom_right
        } else {
            origins.bottom_left
        };
        let Some(hit) = self.cast(origin, Vec2::NEG_Y, f32::INFINITY) else {
            return displacement;
        };

        let slope_angle = hit.slope_angle(Vec2::Y);
        if slope_angle <= self.config.slope_epsilon || slope_angle > self.config.max_descend_angle {
            return displacement;
        }
        if hit.normal.x * direction_x <= 0.0 {
            return displacement;
        }

        let distance = displacement.x.abs();
        let radians = slope_angle.to_radians();
        if hit.distance - self.skin() > radians.tan() * distance {
            return displacement;
        }

        displacement.x = radians.cos() * distance * direction_x;
        displacement.y -= radians.sin() * distance;
        self.contacts
            .flags
            .insert(ContactFlags::BELOW | ContactFlags::DESCENDING_SLOPE);
        self.contacts.slope_angle = slope_angle;
        trace!(slope_angle, ?displacement, "descending");
        displacement
    }
}
