use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub const CAMPUS: &str = r#"digraph campus {
    "Union South" -> "Computer Sciences" [seconds=176.0];
    "Computer Sciences" -> "Union South" [seconds=176.0];
    "Computer Sciences" -> "Chamberlin Hall" [seconds=95.5];
    "Chamberlin Hall" -> "Van Vleck" [seconds=120.0];
    "Union South" -> "Van Vleck" [seconds=500.0];
    "Lakeshore Path" -> "Union South" [seconds=300.0];
}
"#;

/// `waypath` with an isolated config directory under `dir`
pub fn waypath(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("waypath");
    cmd.env("WAYPATH_CONFIG_DIR", dir.join("config"))
        .env_remove("WAYPATH_GRAPH")
        .env_remove("RUST_LOG")
        .env_remove("WAYPATH_LOG");
    cmd
}

pub fn write_campus(dir: &Path) -> PathBuf {
    let path = dir.join("campus.dot");
    fs::write(&path, CAMPUS).unwrap();
    path
}

#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}
