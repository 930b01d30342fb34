use crate::loaders::{collect_files, SourceRegistry};
use crate::services::SeriesBuilder;
use crate::types::{MetricsReport, OpspulseError, SeriesRequest};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};

/// Dashboard series builder for exported business records
#[derive(Parser)]
#[command(name = "opspulse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a JSON series report from record export files
    Report {
        /// Metric source name (see `opspulse sources`)
        #[arg(long)]
        metric: String,

        /// Range start: RFC 3339 instant or YYYY-MM-DD (midnight UTC)
        #[arg(long)]
        from: String,

        /// Range end, inclusive: RFC 3339 instant or YYYY-MM-DD
        #[arg(long)]
        to: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Export files or glob patterns
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// List available metric sources and their categories
    Sources,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Report {
                metric,
                from,
                to,
                pretty,
                files,
            } => run_report(&metric, &from, &to, pretty, &files),
            Commands::Sources => {
                let registry = SourceRegistry::new();
                for source in registry.sources() {
                    println!("{}: {}", source.name(), source.categories().join(", "));
                }
                Ok(())
            }
        }
    }
}

fn run_report(
    metric: &str,
    from: &str,
    to: &str,
    pretty: bool,
    files: &[String],
) -> anyhow::Result<()> {
    let registry = SourceRegistry::new();
    let source = registry
        .get(metric)
        .ok_or_else(|| OpspulseError::UnknownSource(metric.to_string()))?;

    let from = parse_boundary(from)?;
    let to = parse_boundary(to)?;

    let paths = collect_files(files);
    if paths.is_empty() {
        return Err(OpspulseError::NoInput(files.join(", ")).into());
    }

    let records = source.parse_files(&paths);
    let request = SeriesRequest {
        from,
        to,
        categories: source.categories().iter().map(|c| c.to_string()).collect(),
    };
    let series = SeriesBuilder::build(&records, &request);
    let report = MetricsReport::new(metric, from, to, series);

    let out = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", out);
    Ok(())
}

/// Parse a `--from`/`--to` argument: a full RFC 3339 instant, or a bare
/// calendar date taken as midnight UTC.
fn parse_boundary(raw: &str) -> Result<DateTime<Utc>, OpspulseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDate>()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| OpspulseError::InvalidDate(raw.to_string()))
}
