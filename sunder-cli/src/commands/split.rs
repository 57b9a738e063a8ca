//! Split command implementation

use crate::config::{Behavior, CliConfig, OutputFormat, Settings};
use crate::delimiter::{DelimiterMode, Span};
use crate::input::{resolve_inputs, InputSource};
use crate::output::{create_formatter, SegmentRecord};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Delimiter (escapes: \n \t \r \0 \s \\)
    #[arg(short, long, value_name = "DELIM", allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// How the delimiter is interpreted
    #[arg(short, long, value_enum)]
    pub mode: Option<DelimiterMode>,

    /// Maximum number of segments per input
    #[arg(short = 'n', long, value_name = "COUNT", allow_negative_numbers = true)]
    pub count: Option<isize>,

    /// Content of the last segment once COUNT is reached
    #[arg(short, long, value_enum)]
    pub behavior: Option<Behavior>,

    /// Trim whitespace around every segment
    #[arg(long)]
    pub trim: bool,

    /// Drop empty segments
    #[arg(long)]
    pub remove_empty: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Segments produced for one input
#[derive(Debug)]
pub struct FileSegments {
    /// Display name of the input
    pub name: String,
    /// Full input text
    pub text: String,
    /// Location of every segment in `text`
    pub spans: Vec<Span>,
}

impl FileSegments {
    /// Iterate over the segments as output records
    pub fn records(&self) -> impl Iterator<Item = SegmentRecord<'_>> {
        self.spans
            .iter()
            .enumerate()
            .map(move |(index, span)| SegmentRecord {
                source: &self.name,
                index,
                offset: span.offset,
                text: span.slice(&self.text),
            })
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting split");
        log::debug!("Arguments: {:?}", self);

        let settings = self.merged_config()?.resolve()?;
        let sources = resolve_inputs(&self.input)?;
        log::info!("Splitting {} input(s)", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);
        let results = split_sources(&sources, &settings, &progress)?;
        progress.finish();

        let writer = self.open_output()?;
        let total = write_results(&results, settings.format, writer, settings.pretty_json)?;
        log::info!("Wrote {total} segment(s) from {} input(s)", results.len());

        Ok(())
    }

    /// Configuration file (or defaults) with command-line overrides applied
    pub fn merged_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        if let Some(delimiter) = &self.delimiter {
            config.split.delimiter = delimiter.clone();
        }
        if let Some(mode) = self.mode {
            config.split.mode = mode;
        }
        if let Some(count) = self.count {
            config.split.count = Some(count as i64);
        }
        if let Some(behavior) = self.behavior {
            config.split.behavior = behavior;
        }
        config.split.trim |= self.trim;
        config.split.remove_empty |= self.remove_empty;
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(threads) = self.threads {
            config.performance.worker_threads = threads;
        }

        Ok(config)
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Read and split every source on a worker pool, keeping input order
pub fn split_sources(
    sources: &[InputSource],
    settings: &Settings,
    progress: &ProgressReporter,
) -> Result<Vec<FileSegments>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.threads)
        .build()
        .context("Failed to build worker pool")?;

    pool.install(|| {
        sources
            .par_iter()
            .map(|source| -> Result<FileSegments> {
                let name = source.name();
                let text = source.read_text()?;
                let spans = settings.delimiter.spans(&text, &settings.split);
                log::debug!("{name}: {} bytes, {} segment(s)", text.len(), spans.len());
                progress.file_completed(&name, spans.len());
                Ok(FileSegments { name, text, spans })
            })
            .collect()
    })
}

/// Write all segments in input order, returning how many were written
pub fn write_results<W>(
    results: &[FileSegments],
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Result<usize>
where
    W: Write + Send + Sync + 'static,
{
    let mut formatter = create_formatter(format, writer, pretty_json);
    let mut total = 0;

    for file in results {
        for record in file.records() {
            formatter.format_segment(&record)?;
            total += 1;
        }
    }

    formatter.finish()?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> SplitArgs {
        SplitArgs {
            input: vec![input.to_string()],
            delimiter: None,
            mode: None,
            count: None,
            behavior: None,
            trim: false,
            remove_empty: false,
            format: None,
            output: None,
            config: None,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sunder.toml");
        fs::write(
            &config_path,
            "[split]\ndelimiter = \";\"\ncount = 4\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let mut split_args = args("in.txt");
        split_args.config = Some(config_path);
        split_args.delimiter = Some(",".to_string());
        split_args.trim = true;

        let config = split_args.merged_config().unwrap();
        assert_eq!(config.split.delimiter, ",");
        assert_eq!(config.split.count, Some(4));
        assert!(config.split.trim);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_split_sources_keeps_input_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut sources = Vec::new();
        for (name, body) in [("a.txt", "1,2"), ("b.txt", "3"), ("c.txt", "4,5,6")] {
            let path = temp_dir.path().join(name);
            fs::write(&path, body).unwrap();
            sources.push(InputSource::File(path));
        }

        let mut split_args = args("unused");
        split_args.delimiter = Some(",".to_string());
        split_args.threads = Some(3);
        let settings = split_args.merged_config().unwrap().resolve().unwrap();

        let results = split_sources(&sources, &settings, &ProgressReporter::new(true)).unwrap();
        let counts: Vec<usize> = results.iter().map(|file| file.spans.len()).collect();
        assert_eq!(counts, vec![2, 1, 3]);

        let texts: Vec<&str> = results[2].records().map(|record| record.text).collect();
        assert_eq!(texts, vec!["4", "5", "6"]);
    }

    #[test]
    fn test_missing_file_fails() {
        let sources = vec![InputSource::File(PathBuf::from("/nonexistent/input.txt"))];
        let settings = CliConfig::default().resolve().unwrap();
        assert!(split_sources(&sources, &settings, &ProgressReporter::new(true)).is_err());
    }

    #[test]
    fn test_write_results_counts_segments() {
        let file = FileSegments {
            name: "x".to_string(),
            text: "a,b".to_string(),
            spans: vec![Span { offset: 0, len: 1 }, Span { offset: 2, len: 1 }],
        };
        let total = write_results(&[file], OutputFormat::Text, io::sink(), false).unwrap();
        assert_eq!(total, 2);
    }
}
