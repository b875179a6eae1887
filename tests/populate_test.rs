extern crate scatter;
#[macro_use] extern crate log;
extern crate simplelog;
extern crate chrono;

mod common;

use std::fs;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use scatter::sink::{InstanceSink, ObjSink, TransformSink};
use scatter::{Mesh, MeshInstance, MultiMeshInstance, ScatterConfig, Transform, UpAxis};

/// Two separate floor quads, the second one has three times the area of the first
fn write_floor(directory: &std::path::PathBuf) -> std::path::PathBuf {
    common::write_obj(
        directory,
        "floor",
        &[
            [0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0],
            [5.0, 0.0, 0.0], [5.0, 0.0, 1.0], [8.0, 0.0, 1.0], [8.0, 0.0, 0.0]
        ],
        &[
            [1, 2, 3], [1, 3, 4],
            [5, 6, 7], [5, 7, 8]
        ]
    )
}

/// Small z-up pyramid without a bottom
fn write_pyramid(directory: &std::path::PathBuf) -> std::path::PathBuf {
    common::write_obj(
        directory,
        "pyramid",
        &[
            [-0.1, -0.1, 0.0], [0.1, -0.1, 0.0], [0.1, 0.1, 0.0], [-0.1, 0.1, 0.0],
            [0.0, 0.0, 0.3]
        ],
        &[
            [1, 2, 5], [2, 3, 5], [3, 4, 5], [4, 1, 5]
        ]
    )
}

#[test]
fn populate_from_obj_and_write_sinks() {
    let directory = common::prepare_test_directory("populate-from-obj");

    let surface = Mesh::load_from_file(write_floor(&directory)).unwrap();
    let pyramid = Mesh::load_from_file(write_pyramid(&directory)).unwrap();
    assert_eq!(surface.face_count(), 4);
    assert_eq!(pyramid.face_count(), 4);

    let amount = 4000;
    // rotation jitter spins z-up meshes around a tangent, so leave it out
    let config = ScatterConfig::new()
        .up_axis(UpAxis::Z)
        .random_tilt(0.05)
        .random_scale(0.2)
        .amount(amount);

    let target = MeshInstance::new(Arc::new(surface), Transform::identity());
    let mut node = MultiMeshInstance::default();
    node.populate_surface(Some(&target), Some(Arc::new(pyramid)), &config, StdRng::seed_from_u64(17)).unwrap();

    let instances = node.meshes();
    assert_eq!(instances.len(), amount);

    // density follows area, the second quad is three times larger
    let on_large = instances.iter()
        .filter(|(xform, _)| xform.origin.x >= 5.0)
        .count();
    let ratio = on_large as f32 / amount as f32;
    info!("{} of {} instances on the larger quad", on_large, amount);
    assert!((ratio - 0.75).abs() < 0.03, "Expected three quarters on the larger quad, got {}", ratio);

    // z-up pyramids stand upright on the y-up floor
    for (xform, _) in instances.iter() {
        let tip = xform.transform_point(cgmath::Vector3::new(0.0, 0.0, 0.3));
        assert!(tip.y > 0.0, "Pyramid tip {:?} below the floor", tip);
    }

    ObjSink::new("scattered.obj").serialize(&node, &directory).unwrap();
    TransformSink::new("scattered.xforms").serialize(&node, &directory).unwrap();

    let mut baked_path = directory.clone();
    baked_path.push("scattered.obj");
    let baked = Mesh::load_from_file(&baked_path).unwrap();
    assert_eq!(baked.face_count(), 4 * amount);

    let mut xforms_path = directory.clone();
    xforms_path.push("scattered.xforms");
    let xforms = fs::read_to_string(xforms_path).unwrap();
    assert_eq!(xforms.lines().count(), amount);
    assert!(xforms.lines().all(|l| l.split(' ').count() == 12));
}

#[test]
fn populate_is_reproducible() {
    let directory = common::prepare_test_directory("populate-reproducible");
    let surface = Arc::new(Mesh::load_from_file(write_floor(&directory)).unwrap());
    let pyramid = Arc::new(Mesh::load_from_file(write_pyramid(&directory)).unwrap());

    let target = MeshInstance::new(surface, Transform::from_translation(cgmath::Vector3::new(0.0, -2.0, 0.0)));
    let config = ScatterConfig::new()
        .random_rotation(0.5)
        .random_tilt(0.5)
        .random_scale(0.5)
        .amount(300);

    let run = |seed| {
        let mut node = MultiMeshInstance::default();
        node.populate_surface(Some(&target), Some(pyramid.clone()), &config, StdRng::seed_from_u64(seed)).unwrap();
        node.global_instance_transforms()
    };

    assert_eq!(run(3), run(3));
    assert_ne!(run(3), run(4));
}
