//! geogrid CLI - inspect and convert tabular geodata

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use geogrid::prelude::*;
use geogrid::{ColumnView, Delimiter, ValueSource};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "geogrid")]
#[command(
    author,
    version,
    about = "Inspect, correct and convert tabular geodata"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input field delimiter (default: sniffed from the first line)
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// The first line is data, not a header
    #[arg(long, global = true)]
    no_header: bool,

    /// Fix a column's type, by header name or 0-based index (e.g. `lat=lat_dms`)
    #[arg(long = "type", value_name = "COL=TYPE", global = true)]
    types: Vec<String>,

    /// Extra places for `geo` columns (CSV: code,alpha2,name,aliases)
    #[arg(long, value_name = "FILE", global = true)]
    places: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show inferred column types, inconsistencies and the import report
    Inspect {
        /// Input file (csv, tsv, txt, json snapshot) or `-` for stdin
        input: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the grid as CSV to stdout or a file
    #[command(alias = "csv")]
    ToCsv {
        /// Input file or `-` for stdin
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write imported values, ignoring corrections
        #[arg(long)]
        raw: bool,

        /// Output field delimiter
        #[arg(short = 'd', long = "out-delimiter", default_value = ",")]
        out_delimiter: char,
    },

    /// Write located rows as a GeoJSON FeatureCollection
    #[command(alias = "geojson")]
    ToGeojson {
        /// Input file or `-` for stdin
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a JSON snapshot of the grid
    Snapshot {
        /// Input file or `-` for stdin
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Inspect { input, json } => inspect(&cli, input, *json),
        Commands::ToCsv {
            input,
            output,
            raw,
            out_delimiter,
        } => to_csv(&cli, input, output.as_deref(), *raw, *out_delimiter),
        Commands::ToGeojson { input, output } => to_geojson(&cli, input, output.as_deref()),
        Commands::Snapshot { input, output } => snapshot(&cli, input, output.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

/// Read the input, run the import analysis and apply the global flags
fn load(cli: &Cli, input: &Path) -> Result<(Grid, Report)> {
    let options = CsvReadOptions {
        delimiter: match cli.delimiter {
            Some(c) => Delimiter::Byte(ascii_byte(c)?),
            None => Delimiter::Auto,
        },
        has_header: !cli.no_header,
        ..Default::default()
    };

    let mut grid = if input == Path::new("-") {
        CsvReader::read(io::stdin().lock(), &options).context("Failed to read stdin")?
    } else {
        Grid::open_with(input, &options)
            .with_context(|| format!("Failed to open '{}'", input.display()))?
    };

    if let Some(path) = &cli.places {
        let places = CsvReader::read_places_file(path)
            .with_context(|| format!("Failed to read places from '{}'", path.display()))?;
        let mut dictionary = (*GeoDictionary::world()).clone();
        dictionary.extend(&places);
        tracing::info!(places = places.len(), "added places");
        grid.set_dictionary(Arc::new(dictionary));
    }

    let report = grid.analyse();

    for entry in &cli.types {
        let (column, column_type) = parse_type_override(&grid, entry)?;
        grid.set_column_type(column, column_type)?;
    }

    Ok((grid, report))
}

fn ascii_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("Delimiter '{}' is not an ASCII character", c);
    }
    Ok(c as u8)
}

/// Resolve `COL=TYPE` against the grid
fn parse_type_override(grid: &Grid, entry: &str) -> Result<(ColumnId, ColumnType)> {
    let (column, column_type) = entry
        .split_once('=')
        .with_context(|| format!("Expected COL=TYPE, got '{}'", entry))?;

    let id = grid
        .find_column(column.trim())
        .or_else(|| {
            column
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|i| grid.columns().get(i))
                .map(|c| c.id())
        })
        .with_context(|| format!("No column '{}'", column))?;

    let column_type: ColumnType = column_type.trim().parse()?;
    Ok((id, column_type))
}

fn report_issues(report: &Report) {
    for issue in &report.errors {
        eprintln!("Error: {}", issue);
    }
    for issue in &report.warnings {
        eprintln!("Warning: {}", issue);
    }
}

fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write '{}'", path.display())),
        None => io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout"),
    }
}

fn inspect(cli: &Cli, input: &Path, json: bool) -> Result<()> {
    let (grid, report) = load(cli, input)?;
    report_issues(&report);

    let text = if json {
        inspect_json(&grid, &report)?
    } else {
        inspect_text(input, &grid, &report)?
    };
    emit(None, &text)
}

fn inspect_json(grid: &Grid, report: &Report) -> Result<String> {
    let columns: Vec<_> = grid.column_views().map(|v| column_json(&v)).collect();
    let geo = grid
        .geo_columns()
        .map(|g| g.column_ids().iter().map(|id| id.to_string()).collect::<Vec<_>>());
    let value = serde_json::json!({
        "rows": grid.row_count(),
        "columns": columns,
        "report": report,
        "geo": geo,
    });
    let mut text = serde_json::to_string_pretty(&value)?;
    text.push('\n');
    Ok(text)
}

/// Column table and geo columns; report issues themselves go to stderr
fn inspect_text(input: &Path, grid: &Grid, report: &Report) -> Result<String> {
    use std::fmt::Write as _;

    let mut out = String::new();
    writeln!(out, "File: {}", input.display())?;
    writeln!(
        out,
        "Size: {} rows x {} columns",
        grid.row_count(),
        grid.column_count()
    )?;
    writeln!(out)?;
    writeln!(out, "  #\theader\ttype\tmanual\tinconsistency\tincorrect")?;
    for view in grid.column_views() {
        writeln!(
            out,
            "  {}\t{}\t{}\t{}\t{}\t{}",
            view.index(),
            view.title(),
            view.column_type(),
            if view.meta().manual { "yes" } else { "no" },
            view.inconsistency(),
            view.consistency().incorrect.len()
        )?;
    }

    writeln!(out)?;
    match grid.geo_columns() {
        Some(geo) => {
            let names: Vec<_> = geo
                .column_ids()
                .iter()
                .filter_map(|&id| grid.column_view(id))
                .map(|v| format!("{} ({})", v.title(), v.column_type()))
                .collect();
            let status = if geo.is_complete() { "" } else { " (incomplete)" };
            writeln!(out, "Geo columns: {}{}", names.join(", "), status)?;
        }
        None => writeln!(out, "Geo columns: none")?,
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        writeln!(out, "Report: ok")?;
    } else {
        writeln!(
            out,
            "Report: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        )?;
    }

    Ok(out)
}

fn column_json(view: &ColumnView<'_>) -> serde_json::Value {
    serde_json::json!({
        "index": view.index(),
        "header": view.title(),
        "type": view.column_type(),
        "manual": view.meta().manual,
        "inconsistency": view.inconsistency(),
        "incorrect": view.consistency().incorrect.len(),
    })
}

fn to_csv(
    cli: &Cli,
    input: &Path,
    output: Option<&Path>,
    raw: bool,
    delimiter: char,
) -> Result<()> {
    let (grid, report) = load(cli, input)?;
    report_issues(&report);

    let options = CsvWriteOptions {
        delimiter: ascii_byte(delimiter)?,
        values: if raw {
            ValueSource::Raw
        } else {
            ValueSource::Effective
        },
        ..Default::default()
    };

    match output {
        Some(path) => {
            CsvWriter::write_file(&grid, path, &options)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} rows to '{}'", grid.row_count(), path.display());
        }
        None => {
            CsvWriter::write(&grid, io::stdout().lock(), &options)
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn to_geojson(cli: &Cli, input: &Path, output: Option<&Path>) -> Result<()> {
    let (grid, report) = load(cli, input)?;
    report_issues(&report);

    let collection = geogrid::geojson::to_feature_collection(&grid);
    let count = collection["features"].as_array().map_or(0, Vec::len);
    let mut text = serde_json::to_string_pretty(&collection)?;
    text.push('\n');
    emit(output, &text)?;

    if let Some(path) = output {
        eprintln!("Wrote {} features to '{}'", count, path.display());
    }
    Ok(())
}

fn snapshot(cli: &Cli, input: &Path, output: Option<&Path>) -> Result<()> {
    let (grid, report) = load(cli, input)?;
    report_issues(&report);

    let mut text = grid.export().to_json()?;
    text.push('\n');
    emit(output, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid() -> Grid {
        Grid::from_raw(vec![
            vec!["name", "Lat", "lon"],
            vec!["a", "48°51'N", "2.35"],
        ])
    }

    #[test]
    fn test_type_override_by_header_or_index() {
        let grid = grid();
        let lat = grid.columns()[1].id();
        let lon = grid.columns()[2].id();

        assert_eq!(
            parse_type_override(&grid, "lat=lat_dms").unwrap(),
            (lat, ColumnType::LatDms)
        );
        assert_eq!(
            parse_type_override(&grid, "2 = numeric").unwrap(),
            (lon, ColumnType::Numeric)
        );
    }

    #[test]
    fn test_type_override_errors() {
        let grid = grid();
        assert!(parse_type_override(&grid, "lat").is_err());
        assert!(parse_type_override(&grid, "elevation=numeric").is_err());
        assert!(parse_type_override(&grid, "lat=latitude").is_err());
    }

    #[test]
    fn test_inspect_text_leaves_issues_to_stderr() {
        let mut grid = Grid::from_raw(vec![vec!["city ", "lat", "lon"], vec!["Paris", "48.85", "2.35"]]);
        let report = grid.analyse();
        let text = inspect_text(Path::new("cities.csv"), &grid, &report).unwrap();

        assert!(text.contains("  1\tlat\tlat\tno\t0\t0\n"));
        assert!(text.contains("Geo columns: lon (lon), lat (lat)\n"));
        assert!(text.ends_with("Report: 0 error(s), 1 warning(s)\n"));
        assert!(!text.contains(Issue::Trimmed.description()));
    }

    #[test]
    fn test_inspect_json_carries_report_codes() {
        let mut grid = Grid::from_raw(vec![vec!["only"], vec!["1"]]);
        let report = grid.analyse();
        let value: serde_json::Value =
            serde_json::from_str(&inspect_json(&grid, &report).unwrap()).unwrap();

        assert_eq!(value["report"]["errors"], serde_json::json!(["import.error.oneColumn"]));
        assert_eq!(value["columns"][0]["type"], "numeric");
        assert_eq!(value["geo"], serde_json::Value::Null);
    }

    #[test]
    fn test_cli_flags_parse() {
        let cli = Cli::try_parse_from([
            "geogrid",
            "to-csv",
            "in.csv",
            "-d",
            ";",
            "--raw",
            "--type",
            "lat=lat",
            "--type",
            "1=numeric",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.types, vec!["lat=lat", "1=numeric"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::ToCsv {
                raw: true,
                out_delimiter: ';',
                ..
            }
        ));
    }
}
