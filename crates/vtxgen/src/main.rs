mod emit;

use clap::{Parser, Subcommand};
use eyre_pretty::{Context, Result, bail};
use std::{
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};
use tracing::info;
use vtxload::{FormatDescriptor, Plan, Profile, VertexLayout};

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a title module of specialized decoders from a profile
    Emit {
        /// Path to the input profile
        #[arg(short, long)]
        input: PathBuf,
        /// Path to the output module
        #[arg(short, long)]
        output: PathBuf,
        /// Minimum number of vertices a descriptor must have been used for
        #[arg(long, default_value_t = 0)]
        min_verts: u64,
    },
    /// Describe a descriptor given its four words
    Describe {
        #[arg(value_parser = parse_word)]
        words: Vec<u32>,
    },
    /// Merge profiles of the same title
    Merge {
        /// Path to the output profile
        #[arg(short, long)]
        output: PathBuf,
        /// Paths to the input profiles
        inputs: Vec<PathBuf>,
    },
}

/// Generates specialized vertex decoders from descriptor profiles.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Action to take
    #[command(subcommand)]
    command: Command,
}

fn parse_word(word: &str) -> Result<u32, std::num::ParseIntError> {
    let word = word.replace('_', "");
    match word.strip_prefix("0x") {
        Some(word) => u32::from_str_radix(word, 16),
        None => word.parse(),
    }
}

fn read_profile(path: &Path) -> Result<Profile> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening profile {}", path.display()))?;

    Profile::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing profile {}", path.display()))
}

fn emit(input: PathBuf, output: PathBuf, min_verts: u64) -> Result<()> {
    let profile = read_profile(&input)?;
    let module = emit::emit(&profile, min_verts)?;
    std::fs::write(&output, module).context("writing output module")?;

    info!(
        "emitted {} descriptors of {} to {}",
        profile.entries.len(),
        profile.title,
        output.display()
    );

    Ok(())
}

fn describe(words: Vec<u32>) -> Result<()> {
    let Ok(words) = <[u32; 4]>::try_from(words) else {
        bail!("a descriptor has exactly four words");
    };

    let descriptor = FormatDescriptor::from_words(words);
    let plan = Plan::new(&descriptor)?;
    let layout = VertexLayout::from_plan(&plan);

    println!("{}", descriptor.name());
    println!("module: {}", emit::module_name(&descriptor));
    println!("key: {:#018X}", descriptor.key());
    println!("source size: {}", plan.source_size());
    println!("layout: {layout:#?}");
    println!("plan:");
    for step in plan.steps() {
        println!("    {step}");
    }

    Ok(())
}

fn merge(output: PathBuf, inputs: Vec<PathBuf>) -> Result<()> {
    let mut merged = Profile::default();
    for input in &inputs {
        merged.merge(read_profile(input)?)?;
    }

    merged.sort();

    let file = std::fs::File::create(&output).context("opening output file")?;
    merged.to_writer(BufWriter::new(file))?;

    info!(
        "merged {} profiles of {} into {} descriptors",
        inputs.len(),
        merged.title,
        merged.entries.len()
    );

    Ok(())
}

fn setup_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("vtxgen=info,vtxload=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    eyre_pretty::install()?;
    setup_tracing();

    let args = Args::parse();
    match args.command {
        Command::Emit {
            input,
            output,
            min_verts,
        } => emit(input, output, min_verts),
        Command::Describe { words } => describe(words),
        Command::Merge { output, inputs } => merge(output, inputs),
    }
}
