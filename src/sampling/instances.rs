use std::f32::consts::PI;

use cgmath::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::geom::{Transform, Triangle};

use super::{random, AreaIndex, ScatterConfig};

/// Lazily generates `config.amount` instance transforms on the triangles
/// of an area index.
///
/// Yields `Err(Error::IndexOutOfRange)` if the index disagrees with the
/// triangle slice, collecting into `Result<Vec<_>>` stops there.
pub struct Instances<'a, R> {
    index: &'a AreaIndex,
    triangles: &'a [Triangle],
    config: ScatterConfig,
    pre_rotation: Transform,
    rng: R,
    remaining: usize
}

/// Scatters `config.amount` transforms over `triangles`, which must be the same
/// slice `index` was built from.
///
/// With a seeded `rng`, the sequence is reproducible.
pub fn instances<'a, R: Rng>(index: &'a AreaIndex, triangles: &'a [Triangle], config: &ScatterConfig, rng: R) -> Instances<'a, R> {
    Instances {
        index,
        triangles,
        config: *config,
        pre_rotation: config.up_axis.pre_rotation(),
        rng,
        remaining: config.amount
    }
}

impl<'a, R: Rng> Iterator for Instances<'a, R> {
    type Item = Result<Transform>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        Some(
            select_triangle(self.index, self.triangles, &mut self.rng)
                .map(|tri| place_instance(tri, &self.config, &self.pre_rotation, &mut self.rng))
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, R: Rng> ExactSizeIterator for Instances<'a, R> {}

fn select_triangle<'a, R: Rng + ?Sized>(index: &AreaIndex, triangles: &'a [Triangle], rng: &mut R) -> Result<&'a Triangle> {
    let areapos = index.random_areapos(rng);

    // past the end of the slice also catches a missing predecessor
    let tri_idx = index.find_triangle_for(areapos)
        .unwrap_or(triangles.len());

    triangles.get(tri_idx)
        .ok_or(Error::IndexOutOfRange { index: tri_idx, face_count: triangles.len() })
}

/// Places one instance on a uniformly random point of the given triangle.
///
/// The basis has the triangle normal as y axis and the negated first edge as
/// z axis, followed by `pre_rotation` (see `UpAxis::pre_rotation`). Jitter
/// rotates around the axes of the pre-rotated basis, first y by the random
/// rotation, then z and x by the random tilt. After pre-rotation, y is the
/// normal only for `UpAxis::Y`; for `UpAxis::Z` and `UpAxis::X` it lies in
/// the surface. The basis is then scaled uniformly and
/// not orthonormalized, so the result keeps whatever drift the rotations
/// accumulate in floating point.
pub fn place_instance<R: Rng + ?Sized>(tri: &Triangle, config: &ScatterConfig, pre_rotation: &Transform, rng: &mut R) -> Transform {
    let pos = tri.random_point_inside(rng);
    let normal = tri.normal();
    let op_axis = (tri.vertices[1] - tri.vertices[0]).normalize();

    let xform = Transform::looking_at(pos, pos + op_axis, normal) * *pre_rotation;
    let basis = xform.basis;

    let rotation = random(rng, -config.random_rotation, config.random_rotation);
    let tilt_z = random(rng, -config.random_tilt, config.random_tilt);
    let tilt_x = random(rng, -config.random_tilt, config.random_tilt);

    let jitter = Transform::identity()
        .rotated(basis.y, -rotation * PI)
        .rotated(basis.z, -tilt_z * PI)
        .rotated(basis.x, -tilt_x * PI);

    let scale = config.scale + random(rng, -config.random_scale, config.random_scale);

    Transform::new(jitter.basis * basis, xform.origin)
        .scaled_basis(scale)
}

/// Stream of instance `instance_idx` for runs that give every instance its own
/// generator, so that instances can be computed in any order.
pub fn instance_rng(seed: u64, instance_idx: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (instance_idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Like `instances`, but instance `i` draws from `instance_rng(seed, i)`.
///
/// Produces the same transforms as `par_instances` with the same seed.
pub fn seeded_instances(index: &AreaIndex, triangles: &[Triangle], config: &ScatterConfig, seed: u64) -> Result<Vec<Transform>> {
    let pre_rotation = config.up_axis.pre_rotation();

    (0..config.amount)
        .map(|i| seeded_instance(index, triangles, config, &pre_rotation, seed, i))
        .collect()
}

fn seeded_instance(index: &AreaIndex, triangles: &[Triangle], config: &ScatterConfig, pre_rotation: &Transform, seed: u64, instance_idx: usize) -> Result<Transform> {
    let mut rng = instance_rng(seed, instance_idx);
    let tri = select_triangle(index, triangles, &mut rng)?;

    Ok(place_instance(tri, config, pre_rotation, &mut rng))
}

/// Generates the instances on all available cores with one random stream per instance.
#[cfg(feature = "parallel")]
pub fn par_instances(index: &AreaIndex, triangles: &[Triangle], config: &ScatterConfig, seed: u64) -> Result<Vec<Transform>> {
    use rayon::prelude::*;

    let pre_rotation = config.up_axis.pre_rotation();

    (0..config.amount)
        .into_par_iter()
        .map(|i| seeded_instance(index, triangles, config, &pre_rotation, seed, i))
        .collect()
}
