#![allow(dead_code)]

use chrono::prelude::*;

use simplelog::*;

use std::path::PathBuf;
use std::fs::{File, create_dir_all};
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

pub fn prepare_test_directory(test_directory_name: &str) -> PathBuf {
    let test_output_parent_directory = "test_output";

    let mut path_buf = PathBuf::from(test_output_parent_directory);
    path_buf.push(format!("{}-{}", filename_timestamp(), test_directory_name));

    create_dir_all(&path_buf).expect("Test output directory could not be created");

    let log_file = create_log_file(&mut path_buf);

    // Tests in one binary share the logger, the first one gets the log file
    INIT_LOGGING.call_once(|| {
        CombinedLogger::init(
            vec![
                TermLogger::new(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
                WriteLogger::new(LevelFilter::Trace, Config::default(), log_file),
            ]
        ).unwrap();
    });

    info!("Created test directory {:?} and initialized logging", path_buf);

    path_buf
}

/// Writes an OBJ file with the given vertices and one-based faces
/// into the directory and returns its path.
pub fn write_obj(directory: &PathBuf, name: &str, vertices: &[[f32; 3]], faces: &[[usize; 3]]) -> PathBuf {
    let mut obj = format!("o {}\n", name);
    for v in vertices {
        obj.push_str(&format!("v {} {} {}\n", v[0], v[1], v[2]));
    }
    for f in faces {
        obj.push_str(&format!("f {} {} {}\n", f[0], f[1], f[2]));
    }

    let mut path = directory.clone();
    path.push(name);
    path.set_extension("obj");

    ::std::fs::write(&path, obj).expect("Test OBJ could not be written");

    path
}

fn create_log_file(parent_directory: &mut PathBuf) -> File {
    parent_directory.push(format!("log-{}", filename_timestamp()));
    parent_directory.set_extension("log");

    let log_file = File::create(&parent_directory).expect("Log file could not be created");
    // Restore state before pushing and setting extension
    parent_directory.pop();

    log_file
}

/// Returns the current time formatted like "2014-11-28T120009+0000", i.e.
/// an ISO 8601 timestamp with the colons removed, since colons are traditionally
/// used as directory separators on mac and linux
fn filename_timestamp() -> String {
    Utc::now()
        .to_rfc3339()
        .replace(":", "")
}
