//! kof2dxf 命令行入口
//!
//! 读取 KOF 文件，为每个点生成圆 + 十字标记（真实高程），写出 DXF。

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use kofdxf_core::marker::{MarkerSpec, TextMode, DEFAULT_DIAMETER};
use kofdxf_core::survey::PointSummary;
use kofdxf_file::{dxf_io, emit, kof_io};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(
    name = "kof2dxf",
    version,
    about = "Convert KOF survey points into a DXF drawing with 3D markers"
)]
struct Cli {
    /// Input KOF file
    input: PathBuf,

    /// Output DXF file
    output: PathBuf,

    /// Marker diameter in meters
    #[arg(
        long = "diameter",
        visible_alias = "d",
        value_name = "D",
        default_value_t = DEFAULT_DIAMETER,
        value_parser = parse_diameter
    )]
    diameter: f64,

    /// Labels to write: ALL, ID, Z or NONE (case-insensitive)
    #[arg(long = "text", value_name = "MODE", default_value_t = TextMode::All)]
    text: TextMode,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_diameter(s: &str) -> Result<f64, String> {
    let diameter: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    MarkerSpec::new(diameter, TextMode::All)
        .map(|spec| spec.diameter())
        .map_err(|e| e.to_string())
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let spec = MarkerSpec::new(cli.diameter, cli.text)?;
    info!(input = %cli.input.display(), output = %cli.output.display(), "starting conversion");

    let points = kof_io::load_points(&cli.input)
        .with_context(|| format!("could not load points from {}", cli.input.display()))?;

    // 写文件前先确认高程没有被压平
    if let Some(summary) = PointSummary::from_points(&points) {
        println!("{summary}");
    }

    let document = emit(&points, &spec);
    dxf_io::export(&document, &cli.output)
        .with_context(|| format!("could not write {}", cli.output.display()))?;

    println!(
        "Wrote {} (true E/N/Z on points, markers and labels).",
        cli.output.display()
    );
    Ok(())
}
