use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "relayout", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Arrange a scene and print the child rectangles as JSON.
    Solve(SolveArgs),
    /// Print the container size the scene's children require.
    Measure(MeasureArgs),
}

#[derive(Parser, Debug)]
struct SolveArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the container width.
    #[arg(long)]
    width: Option<f64>,

    /// Override the container height.
    #[arg(long)]
    height: Option<f64>,

    /// Arrange into the measured size instead of the declared one.
    #[arg(long, default_value_t = false)]
    fit: bool,

    /// Write the JSON result here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MeasureArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Solve(args) => cmd_solve(args),
        Command::Measure(args) => cmd_measure(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<relayout::SceneSpec> {
    relayout::SceneSpec::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    for (flag, value) in [("--width", args.width), ("--height", args.height)] {
        if let Some(v) = value
            && !(v.is_finite() && v >= 0.0)
        {
            anyhow::bail!("{flag} must be finite and >= 0, got {v}");
        }
    }
    let scene = load(&args.in_path)?;
    let mut layout = scene.build()?;

    let declared = scene.container_size();
    let base = if args.fit {
        layout.measure()?
    } else {
        declared
    };
    let size = relayout::Size::new(
        args.width.unwrap_or(base.width),
        args.height.unwrap_or(base.height),
    );
    let arranged = layout.arrange(size)?;
    let json = serde_json::to_string_pretty(&arranged).context("serialize arrangement")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_measure(args: MeasureArgs) -> anyhow::Result<()> {
    let scene = load(&args.in_path)?;
    let mut layout = scene.build()?;
    let size = layout.measure()?;
    println!(
        "{}",
        serde_json::json!({ "width": size.width, "height": size.height })
    );
    Ok(())
}
