use rand::Rng;
use rand::distributions::Distribution;

use crate::error::{Error, Result};
use crate::geom::{Triangle, AREA_EPSILON};

use super::random;

/// Selects triangles out of a triangle soup with a probability
/// proportional to their area.
///
/// Every triangle that is not degenerate occupies the range
/// `[key, key + area)` on a line of length `total_area()`. A uniformly
/// random position on that line then falls onto a triangle with probability
/// `area / total_area()`.
#[derive(Debug, Clone)]
pub struct AreaIndex {
    /// Cumulative area in front of the triangle and the triangle index,
    /// sorted by cumulative area
    entries: Vec<(f32, usize)>,
    area_accum: f32,
    face_count: usize
}

impl AreaIndex {
    /// Indexes the given triangles, skipping triangles with an area smaller
    /// than `AREA_EPSILON`.
    ///
    /// Fails with `Error::NoFaces` for an empty slice and with
    /// `Error::DegenerateSurface` if no triangle is large enough to be sampled.
    pub fn build(triangles: &[Triangle]) -> Result<AreaIndex> {
        if triangles.is_empty() {
            return Err(Error::NoFaces);
        }

        let mut entries = Vec::with_capacity(triangles.len());
        let mut area_accum = 0.0_f32;

        for (idx, tri) in triangles.iter().enumerate() {
            if tri.is_degenerate() {
                trace!("Ignoring triangle {} with too small area {}", idx, tri.area());
                continue;
            }

            let area = tri.area();
            entries.push((area_accum, idx));
            area_accum += area;
        }

        let ignored = triangles.len() - entries.len();
        if ignored > 0 {
            debug!("Ignored {} of {} triangles with an area below {}", ignored, triangles.len(), AREA_EPSILON);
        }

        if entries.is_empty() || area_accum == 0.0 {
            return Err(Error::DegenerateSurface);
        }

        debug!("Indexed {} triangles with a total area of {}", entries.len(), area_accum);

        Ok(AreaIndex {
            entries,
            area_accum,
            face_count: triangles.len()
        })
    }

    /// Gets the index of the triangle with the greatest cumulative area key
    /// that does not exceed `areapos`.
    ///
    /// `None` if `areapos` is in front of the first triangle, that is negative or NaN.
    pub fn find_triangle_for(&self, areapos: f32) -> Option<usize> {
        let after = self.entries.partition_point(|&(key, _)| key <= areapos);

        if after == 0 {
            None
        } else {
            Some(self.entries[after - 1].1)
        }
    }

    /// Draws a uniformly distributed position in `[0, total_area())`.
    pub fn random_areapos<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        random(rng, 0.0, self.area_accum)
    }

    /// Sum of the areas of all sampled triangles.
    pub fn total_area(&self) -> f32 {
        self.area_accum
    }

    /// Count of triangles that was indexed, including degenerate ones.
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Count of triangles that can be sampled.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Distribution<usize> for AreaIndex {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let areapos = self.random_areapos(rng);
        self.find_triangle_for(areapos)
            .expect("Area positions are never negative and the first key is zero")
    }
}
