use std::fs::{self, File};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dcsv::{CellStore, Delimiters, Preset, SparseTable};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    Office,
    Tab,
    Pipe,
}

impl From<PresetArg> for Preset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Office => Preset::Office,
            PresetArg::Tab => Preset::Tab,
            PresetArg::Pipe => Preset::Pipe,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dcsv",
    about = "Read, inspect and re-delimit CSV-like files",
    version
)]
struct Args {
    /// Delimiter preset of the input
    #[arg(long, value_enum, default_value_t = PresetArg::Office)]
    preset: PresetArg,

    /// Input field separator (overrides the preset)
    #[arg(long)]
    separator: Option<String>,

    /// Input text delimiter (overrides the preset)
    #[arg(long)]
    delimiter: Option<String>,

    /// JSON file with `field_separator` and `text_delimiter` for the input
    #[arg(long, conflicts_with_all = ["preset", "separator", "delimiter"])]
    config: Option<PathBuf>,

    /// Delimiter preset of the output (defaults to the input configuration)
    #[arg(long, value_enum)]
    out_preset: Option<PresetArg>,

    /// Output field separator
    #[arg(long)]
    out_separator: Option<String>,

    /// Output text delimiter
    #[arg(long)]
    out_delimiter: Option<String>,

    /// Print rows as JSON arrays instead of re-encoding
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false, requires = "json")]
    pretty: bool,

    /// Print `rows columns` and exit
    #[arg(long, default_value_t = false)]
    info: bool,

    /// Print the cell at ROW,COL and exit
    #[arg(long, value_name = "ROW,COL", value_parser = parse_coord)]
    get: Option<(usize, usize)>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn parse_coord(s: &str) -> Result<(usize, usize), String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got `{s}`"))?;
    let r = r.trim().parse().map_err(|e| format!("invalid row: {e}"))?;
    let c = c.trim().parse().map_err(|e| format!("invalid column: {e}"))?;
    Ok((r, c))
}

fn delimiters(preset: Preset, separator: Option<&str>, delimiter: Option<&str>) -> Result<Delimiters> {
    let d = Delimiters::new(
        separator.unwrap_or(preset.field_separator()),
        delimiter.unwrap_or(preset.text_delimiter()),
    )?;
    Ok(d)
}

fn input_delimiters(args: &Args) -> Result<Delimiters> {
    match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Ok(Delimiters::from_json_str(&raw)?)
        }
        None => delimiters(
            args.preset.into(),
            args.separator.as_deref(),
            args.delimiter.as_deref(),
        ),
    }
}

fn output_delimiters(args: &Args, input: &Delimiters) -> Result<Delimiters> {
    if args.out_preset.is_none() && args.out_separator.is_none() && args.out_delimiter.is_none() {
        return Ok(input.clone());
    }
    let sep = args.out_separator.as_deref();
    let delim = args.out_delimiter.as_deref();
    match args.out_preset {
        Some(p) => delimiters(p.into(), sep, delim),
        None => delimiters(
            Preset::Office,
            sep.or(Some(input.field_separator())),
            delim.or(Some(input.text_delimiter())),
        ),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let in_delims = input_delimiters(&args)?;
    let mut table = SparseTable::new(in_delims.clone());
    match &args.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            table.load(f)?;
        }
        None => table.load(stdin().lock())?,
    }
    tracing::debug!(rows = table.rows(), columns = table.columns(), "input loaded");

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(stdout().lock()),
    };

    if args.info {
        writeln!(out, "{} {}", table.rows(), table.columns())?;
    } else if let Some((row, column)) = args.get {
        let cell = table.cell(row, column)?;
        writeln!(out, "{cell}")?;
    } else if args.json {
        let rows = table.to_json_rows();
        if args.pretty {
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        } else {
            writeln!(out, "{}", serde_json::to_string(&rows)?)?;
        }
    } else {
        let table = table.redelimit(output_delimiters(&args, &in_delims)?);
        table.store(&mut out)?;
    }
    out.flush()?;

    Ok(())
}
