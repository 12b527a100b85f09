//! Parallel stepping of independent bodies.
//!
//! Each body owns its probe and contact state, and the environment is only
//! read during a tick, so bodies can be resolved in parallel. Results come
//! back in input order and match stepping the bodies one by one.

use glam::Vec2;
use rayon::prelude::*;
use tracing::debug;

use crate::body::KinematicBody;
use crate::error::StepError;
use crate::query::RayQuery;
use crate::resolver::MoveOutcome;

/// Move every body by its displacement and commit the result.
///
/// # Arguments
///
/// * `bodies` - Bodies to step
/// * `displacements` - One desired displacement per body, same order
/// * `query` - Shared read-only environment
///
/// # Errors
///
/// Returns [`StepError::LengthMismatch`] if the slices differ in length. No
/// body is moved in that case.
pub fn step_bodies<Q: RayQuery + Sync + ?Sized>(
    bodies: &mut [KinematicBody],
    displacements: &[Vec2],
    query: &Q,
) -> Result<Vec<MoveOutcome>, StepError> {
    if bodies.len() != displacements.len() {
        return Err(StepError::LengthMismatch {
            bodies: bodies.len(),
            displacements: displacements.len(),
        });
    }

    debug!(count = bodies.len(), "stepping bodies");
    Ok(bodies
        .par_iter_mut()
        .zip(displacements.par_iter())
        .map(|(body, &displacement)| body.move_and_commit(query, displacement))
        .collect())
}
