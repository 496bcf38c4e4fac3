use bom_graph::application::dto::{AnalysisKind, OutputFormat};
use bom_graph::bom_analysis::domain::ItemId;
use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Analyze bill-of-materials graphs: validate structure, expand assemblies
/// and compute material requirements
#[derive(Parser, Debug)]
#[command(name = "bom-graph")]
#[command(version)]
#[command(about = "Analyze bill-of-materials graphs", long_about = None)]
pub struct Args {
    /// Read BOM records from a local JSON file
    #[arg(short, long, global = true, conflicts_with = "api_url")]
    pub input: Option<PathBuf>,

    /// Base URL of the REST API serving /billofmaterials
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./bom-graph.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter for diagnostics, e.g. "debug" or "bom_graph=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Only print errors to stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Check products for missing BOMs, circular references and duplicates
    Validate(ValidateArgs),
    /// Flatten the multi-level BOM of a product
    Expand {
        /// Product id
        #[arg(short, long)]
        product: u64,
        /// Units to produce
        #[arg(short = 'n', long, default_value_t = 1.0)]
        quantity: f64,
    },
    /// Compute material requirements for a production run
    Requirements {
        /// Product id
        #[arg(short, long)]
        product: u64,
        /// Units to produce
        #[arg(short = 'n', long)]
        quantity: f64,
        /// Roll requirements down to leaf materials across all levels
        #[arg(short, long)]
        multi_level: bool,
    },
    /// List the assemblies that consume a component
    WhereUsed {
        /// Component id
        #[arg(long)]
        component: u64,
    },
    /// List products, components and operations in the data set
    Catalog,
}

#[derive(ClapArgs, Debug, Clone, PartialEq)]
#[command(group(ArgGroup::new("target").required(true).args(["product", "all"])))]
pub struct ValidateArgs {
    /// Product id to validate
    #[arg(short, long)]
    pub product: Option<u64>,

    /// Validate every product in the data set
    #[arg(short, long)]
    pub all: bool,
}

impl Command {
    /// Analysis the use case should run for this subcommand
    pub fn analysis_kind(&self) -> AnalysisKind {
        match self {
            Command::Validate(args) => AnalysisKind::Validate {
                product: args.product.map(ItemId::new),
            },
            Command::Expand { product, quantity } => AnalysisKind::Expand {
                product: ItemId::new(*product),
                quantity: *quantity,
            },
            Command::Requirements {
                product,
                quantity,
                multi_level,
            } => AnalysisKind::Requirements {
                product: ItemId::new(*product),
                quantity: *quantity,
                multi_level: *multi_level,
            },
            Command::WhereUsed { component } => AnalysisKind::WhereUsed {
                component: ItemId::new(*component),
            },
            Command::Catalog => AnalysisKind::Catalog,
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("bom-graph").chain(args.iter().copied()))
    }

    #[test]
    fn test_validate_single_product() {
        let args = parse(&["validate", "--product", "7", "--input", "bom.json"]).unwrap();
        assert_eq!(
            args.command.analysis_kind(),
            AnalysisKind::Validate {
                product: Some(ItemId::new(7))
            }
        );
        assert_eq!(args.input, Some(PathBuf::from("bom.json")));
    }

    #[test]
    fn test_validate_all() {
        let args = parse(&["validate", "--all"]).unwrap();
        assert_eq!(
            args.command.analysis_kind(),
            AnalysisKind::Validate { product: None }
        );
    }

    #[test]
    fn test_validate_requires_target() {
        assert!(parse(&["validate"]).is_err());
        assert!(parse(&["validate", "--all", "--product", "1"]).is_err());
    }

    #[test]
    fn test_expand_default_quantity() {
        let args = parse(&["expand", "-p", "1"]).unwrap();
        assert_eq!(
            args.command.analysis_kind(),
            AnalysisKind::Expand {
                product: ItemId::new(1),
                quantity: 1.0
            }
        );
    }

    #[test]
    fn test_requirements_multi_level() {
        let args = parse(&["requirements", "-p", "1", "-n", "10", "--multi-level"]).unwrap();
        assert_eq!(
            args.command.analysis_kind(),
            AnalysisKind::Requirements {
                product: ItemId::new(1),
                quantity: 10.0,
                multi_level: true
            }
        );
    }

    #[test]
    fn test_requirements_needs_quantity() {
        assert!(parse(&["requirements", "-p", "1"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["catalog", "--format", "md", "--api-url", "http://localhost:3000"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(args.command, Command::Catalog);
    }

    #[test]
    fn test_input_conflicts_with_api_url() {
        assert!(parse(&["catalog", "--input", "a.json", "--api-url", "http://x"]).is_err());
    }

    #[test]
    fn test_invalid_format() {
        assert!(parse(&["catalog", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_where_used() {
        let args = parse(&["where-used", "--component", "5"]).unwrap();
        assert_eq!(
            args.command.analysis_kind(),
            AnalysisKind::WhereUsed {
                component: ItemId::new(5)
            }
        );
    }
}
