//! Area weighted scattering of instance transforms over triangle surfaces.
//!
//! An [`AreaIndex`](struct.AreaIndex.html) is built once per surface, then
//! [`instances`](fn.instances.html) lazily places any amount of instances on it.

mod area_index;
mod config;
mod instances;

pub use self::area_index::AreaIndex;
pub use self::config::{ScatterConfig, UpAxis};
pub use self::instances::{instance_rng, instances, place_instance, seeded_instances, Instances};
#[cfg(feature = "parallel")]
pub use self::instances::par_instances;

use rand::Rng;

/// Uniformly distributed number in `[from, to)`, or `from` if the range is empty.
fn random<R: Rng + ?Sized>(rng: &mut R, from: f32, to: f32) -> f32 {
    from + rng.gen::<f32>() * (to - from)
}
