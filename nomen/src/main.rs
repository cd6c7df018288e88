mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nomen_core::{
    DEFAULT_DELIMITER, Name, StringArrayName, StringName, mask, parse_delimiter, unmask,
};
use output::{CodecOutput, ConvertOutput, NameOutput, OutputWriter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Nomen - escape-aware structured names
#[derive(Parser)]
#[command(name = "nomen")]
#[command(about = "Build, parse and edit delimited names with escaping", long_about = None)]
#[command(version)]
struct Cli {
    /// Component delimiter (defaults to NOMEN_DELIMITER env var or '.')
    #[arg(short, long, global = true)]
    delimiter: Option<String>,

    /// Representation backing the name
    #[arg(long, global = true, value_enum, default_value_t = Repr::String)]
    repr: Repr,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Default log level (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Repr {
    /// Vector of unmasked components
    Array,
    /// One masked data string
    String,
}

impl Repr {
    fn as_str(self) -> &'static str {
        match self {
            Repr::Array => "array",
            Repr::String => "string",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Escape a single component
    Mask {
        /// Raw component text
        component: String,
    },

    /// Remove escaping from a single component
    Unmask {
        /// Masked component text
        masked: String,
    },

    /// Split a data string into its components
    Parse {
        /// Data string
        data: String,
    },

    /// Build a data string from raw components
    Build {
        /// Raw components, in order
        components: Vec<String>,
    },

    /// Render a data string with another delimiter
    Convert {
        /// Data string
        data: String,

        /// Target delimiter
        #[arg(long)]
        to: String,
    },

    /// Append the components of one data string to another
    Concat {
        /// Name that receives the components
        left: String,

        /// Name whose components are appended
        right: String,
    },

    /// Apply edits in order: set:I:C, insert:I:C, append:C, remove:I
    Edit {
        /// Data string
        data: String,

        /// Operations
        #[arg(required = true)]
        ops: Vec<String>,
    },
}

/// One edit step of the `edit` command.
#[derive(Debug, PartialEq, Eq)]
enum EditOp {
    Set(usize, String),
    Insert(usize, String),
    Append(String),
    Remove(usize),
}

impl EditOp {
    fn parse(s: &str) -> Result<Self> {
        let (op, rest) = s
            .split_once(':')
            .with_context(|| format!("Missing ':' in operation: {}", s))?;

        match op {
            "append" => Ok(EditOp::Append(rest.to_string())),
            "remove" => Ok(EditOp::Remove(parse_index(rest)?)),
            "set" | "insert" => {
                let (index, component) = rest
                    .split_once(':')
                    .with_context(|| format!("Expected {}:INDEX:COMPONENT, got {}", op, s))?;
                let index = parse_index(index)?;
                if op == "set" {
                    Ok(EditOp::Set(index, component.to_string()))
                } else {
                    Ok(EditOp::Insert(index, component.to_string()))
                }
            }
            _ => anyhow::bail!("Unknown operation: {}", op),
        }
    }

    fn apply(&self, name: &mut dyn Name) -> nomen_core::Result<()> {
        match self {
            EditOp::Set(i, c) => name.set_component(*i, c),
            EditOp::Insert(i, c) => name.insert(*i, c),
            EditOp::Append(c) => name.append(c),
            EditOp::Remove(i) => name.remove(*i),
        }
    }
}

fn parse_index(s: &str) -> Result<usize> {
    s.parse::<usize>()
        .with_context(|| format!("Invalid index: {}", s))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let out = OutputWriter::new(cli.json);
    match run(cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = output::result_code(&err);
            tracing::debug!(code, "command failed");
            out.emit_error(&err, code);
            ExitCode::from(code)
        }
    }
}

fn init_tracing(log_level: &str) {
    let level: tracing::Level = log_level.parse().unwrap_or(tracing::Level::WARN);
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}

fn run(cli: Cli, out: &OutputWriter) -> Result<()> {
    // Determine delimiter: CLI arg > NOMEN_DELIMITER env var > '.' default
    let delimiter = match cli
        .delimiter
        .or_else(|| std::env::var("NOMEN_DELIMITER").ok())
    {
        Some(d) => parse_delimiter(&d).with_context(|| format!("Invalid delimiter: {:?}", d))?,
        None => DEFAULT_DELIMITER,
    };
    tracing::debug!(%delimiter, repr = cli.repr.as_str(), "resolved configuration");

    match cli.command {
        Commands::Mask { component } => cmd_mask(out, &component, delimiter),
        Commands::Unmask { masked } => cmd_unmask(out, &masked, delimiter),
        Commands::Parse { data } => cmd_parse(out, &data, delimiter, cli.repr),
        Commands::Build { components } => cmd_build(out, &components, delimiter, cli.repr),
        Commands::Convert { data, to } => cmd_convert(out, &data, delimiter, &to, cli.repr),
        Commands::Concat { left, right } => cmd_concat(out, &left, &right, delimiter, cli.repr),
        Commands::Edit { data, ops } => cmd_edit(out, &data, &ops, delimiter, cli.repr),
    }
}

/// Parse a data string into the requested representation.
fn parse_name(data: &str, delimiter: char, repr: Repr) -> Result<Box<dyn Name>> {
    let name: Box<dyn Name> = match repr {
        Repr::Array => Box::new(StringArrayName::parse(data, delimiter)?),
        Repr::String => Box::new(StringName::new(data, delimiter)?),
    };
    Ok(name)
}

fn write_name(out: &OutputWriter, name: &dyn Name, repr: Repr) -> Result<()> {
    let output = NameOutput::new(repr.as_str(), name);
    out.emit(&output)
}

fn cmd_mask(out: &OutputWriter, component: &str, delimiter: char) -> Result<()> {
    let output = CodecOutput {
        success: true,
        result_code: 0,
        delimiter,
        input: component.to_string(),
        output: mask(component, delimiter),
    };
    out.emit(&output)
}

fn cmd_unmask(out: &OutputWriter, masked: &str, delimiter: char) -> Result<()> {
    let output = CodecOutput {
        success: true,
        result_code: 0,
        delimiter,
        input: masked.to_string(),
        output: unmask(masked, delimiter),
    };
    out.emit(&output)
}

fn cmd_parse(out: &OutputWriter, data: &str, delimiter: char, repr: Repr) -> Result<()> {
    let name = parse_name(data, delimiter, repr)
        .with_context(|| format!("Failed to parse name: {}", data))?;
    write_name(out, name.as_ref(), repr)
}

fn cmd_build(out: &OutputWriter, components: &[String], delimiter: char, repr: Repr) -> Result<()> {
    let name: Box<dyn Name> = match repr {
        Repr::Array => Box::new(StringArrayName::new(components.iter().cloned(), delimiter)?),
        Repr::String => Box::new(StringName::from_components(components, delimiter)?),
    };
    write_name(out, name.as_ref(), repr)
}

fn cmd_convert(
    out: &OutputWriter,
    data: &str,
    delimiter: char,
    to: &str,
    repr: Repr,
) -> Result<()> {
    let target = parse_delimiter(to).with_context(|| format!("Invalid target delimiter: {:?}", to))?;
    let name = parse_name(data, delimiter, repr)
        .with_context(|| format!("Failed to parse name: {}", data))?;

    let output = ConvertOutput {
        success: true,
        result_code: 0,
        from: delimiter,
        to: target,
        data: name.as_data_string(),
        rendered: name.as_string_with(target),
    };
    out.emit(&output)
}

fn cmd_concat(
    out: &OutputWriter,
    left: &str,
    right: &str,
    delimiter: char,
    repr: Repr,
) -> Result<()> {
    let mut name = parse_name(left, delimiter, repr)
        .with_context(|| format!("Failed to parse name: {}", left))?;
    let other = parse_name(right, delimiter, repr)
        .with_context(|| format!("Failed to parse name: {}", right))?;

    name.concat(other.as_ref())
        .with_context(|| format!("Failed to concatenate {} and {}", left, right))?;

    write_name(out, name.as_ref(), repr)
}

fn cmd_edit(
    out: &OutputWriter,
    data: &str,
    ops: &[String],
    delimiter: char,
    repr: Repr,
) -> Result<()> {
    let ops = ops
        .iter()
        .map(|op| EditOp::parse(op))
        .collect::<Result<Vec<_>>>()?;

    let mut name = parse_name(data, delimiter, repr)
        .with_context(|| format!("Failed to parse name: {}", data))?;

    for (step, op) in ops.iter().enumerate() {
        tracing::debug!(step, ?op, "applying edit");
        op.apply(name.as_mut())
            .with_context(|| format!("Edit step {} ({:?}) failed", step, op))?;
    }

    // Report a checked copy of the edited name
    let result = name.clone_name().context("Failed to copy edited name")?;
    write_name(out, result.as_ref(), repr)
}
