/// obj2array - OBJ mesh to flat triangle list
///
/// Reads an OBJ mesh from stdin and prints its triangles as
/// `[ [x,y,z], [x,y,z], [x,y,z] ]` lines.
///
/// Usage: obj2array [scale] [rot_x] [rot_y] [rot_z] [trans_x] [trans_y] [trans_z] < mesh.obj

use std::io;

use anyhow::Result;
use clap::Parser;
use obj2array_cli::{run, Args};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the triangle list
    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let args = Args::parse();
    run(&args, io::stdin().lock(), &mut io::stdout().lock())
}
