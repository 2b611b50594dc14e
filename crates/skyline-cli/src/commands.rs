use colored::Colorize;
use serde_json::json;
use tracing::info;

use skyline_merge::{merge_skylines, UnionEngine};
use skyline_types::Skyline;

use crate::cli::*;
use crate::input;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        format,
        config,
        ..
    } = cli;
    let engine = UnionEngine::new(input::load_config(config.as_deref())?);

    match command {
        Command::Union(args) => cmd_union(&engine, args, format),
        Command::Merge(args) => cmd_merge(args, format),
        Command::Height(args) => cmd_height(&engine, args, format),
    }
}

fn cmd_union(engine: &UnionEngine, args: UnionArgs, format: OutputFormat) -> anyhow::Result<()> {
    let skylines = input::read_document(&args.input)?.into_skylines()?;
    let union = engine.union(&skylines)?;
    info!(inputs = skylines.len(), points = union.len(), "union computed");
    print_skyline(&union, &format!("union of {} skylines", skylines.len()), format)
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let left = input::read_skyline(&args.left)?;
    let right = input::read_skyline(&args.right)?;
    let merged = merge_skylines(&left, &right)?;
    print_skyline(&merged, "merged skyline", format)
}

fn cmd_height(engine: &UnionEngine, args: HeightArgs, format: OutputFormat) -> anyhow::Result<()> {
    let skylines = input::read_document(&args.input)?.into_skylines()?;
    let union = engine.union(&skylines)?;
    let height = union.height_at(args.at);
    match format {
        OutputFormat::Text => println!("Height at {}: {}", args.at, height.to_string().bold()),
        OutputFormat::Json => println!("{}", json!({ "x": args.at, "height": height })),
    }
    Ok(())
}

fn print_skyline(skyline: &Skyline<f64>, label: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if skyline.is_empty() {
                println!("{} Nothing to union.", "✓".green());
                return Ok(());
            }
            println!(
                "{} {} ({} points)",
                "✓".green().bold(),
                label,
                skyline.len().to_string().bold()
            );
            if let Some((min, max)) = skyline.x_range() {
                println!("  Range: {}", format!("[{min}, {max}]").cyan());
            }
            println!("  Max height: {}", skyline.max_height());
            println!("  Area: {}", skyline.area());
            for point in skyline.points() {
                println!("  {}", point.to_string().yellow());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(skyline)?),
    }
    Ok(())
}
