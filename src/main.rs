#[macro_use]
extern crate log;

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use scatter::sink::{InstanceSink, ObjSink, TransformSink};
use scatter::{Mesh, MeshInstance, MultiMeshInstance, ScatterConfig, Transform, UpAxis};

const USAGE: &str = "Usage: scatter SURFACE_OBJ SOURCE_OBJ OUTPUT_OBJ [AMOUNT] [UP_AXIS] [SEED]";

struct Args {
    surface_obj: PathBuf,
    source_obj: PathBuf,
    output_obj: PathBuf,
    amount: usize,
    up_axis: UpAxis,
    seed: Option<u64>
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.len() < 3 || args.len() > 6 {
        return Err(String::from(USAGE));
    }

    let amount = match args.get(3) {
        Some(amount) => amount.parse::<usize>().map_err(|_| format!("Expected an instance count, got {:?}", amount))?,
        None => 128
    };

    let up_axis = match args.get(4) {
        Some(axis) => axis.parse::<UpAxis>()?,
        None => UpAxis::Y
    };

    let seed = match args.get(5) {
        Some(seed) => Some(seed.parse::<u64>().map_err(|_| format!("Expected a numeric seed, got {:?}", seed))?),
        None => None
    };

    Ok(Args {
        surface_obj: PathBuf::from(&args[0]),
        source_obj: PathBuf::from(&args[1]),
        output_obj: PathBuf::from(&args[2]),
        amount,
        up_axis,
        seed
    })
}

fn run(args: Args) -> scatter::Result<()> {
    info!("Loading surface OBJ at {:?}...", args.surface_obj);
    let surface = Mesh::load_from_file(&args.surface_obj)?;
    info!("Ok, {} triangles", surface.face_count());

    info!("Loading source OBJ at {:?}...", args.source_obj);
    let source = Mesh::load_from_file(&args.source_obj)?;
    info!("Ok, {} triangles", source.face_count());

    let config = ScatterConfig::new()
        .up_axis(args.up_axis)
        .random_rotation(1.0)
        .random_tilt(0.05)
        .random_scale(0.1)
        .amount(args.amount);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy()
    };

    let target = MeshInstance::new(Arc::new(surface), Transform::identity());
    let mut node = MultiMeshInstance::default();
    node.populate_surface(Some(&target), Some(Arc::new(source)), &config, rng)?;

    let output_dir = args.output_obj.parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let obj_file = args.output_obj.file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("scattered.obj"));
    let xforms_file = obj_file.with_extension("xforms");

    ObjSink::new(obj_file).serialize(&node, &output_dir)?;
    TransformSink::new(xforms_file).serialize(&node, &output_dir)?;

    Ok(())
}

fn main() {
    TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .unwrap_or_else(|err| eprintln!("Logging unavailable: {}", err));

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        error!("{}", err);
        process::exit(1);
    }
}
