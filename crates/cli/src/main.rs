//! Swagger to API Gateway CLI
//!
//! Command-line interface for converting a Swagger 2.0 JSON description into
//! an AWS API Gateway YAML document for a private VPC Link integration.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use swagger_apigw_generator::{ApiGatewayGenerator, ConverterConfig};
use swagger_apigw_parser::SwaggerParser;

#[derive(Parser)]
#[command(name = "swagger-apigw")]
#[command(version, about = "Convert Swagger 2.0 JSON to AWS API Gateway YAML", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    swagger-apigw \\\n    \
    --input swagger.json \\\n    \
    --output swagger.yaml \\\n    \
    --account 123456789012 \\\n    \
    --region us-east-1 \\\n    \
    --host https://api.internal \\\n    \
    --vpc vpc-0a1b2c3d")]
struct Cli {
    /// Path to the input Swagger JSON file
    #[arg(short, long, default_value = "swagger.json")]
    input: PathBuf,

    /// Path to the output YAML file
    #[arg(short, long, default_value = "swagger.yaml")]
    output: PathBuf,

    /// AWS account ID (used in the resource policy ARN)
    #[arg(long, default_value = "")]
    account: String,

    /// AWS region (used in the resource policy ARN)
    #[arg(long, default_value = "")]
    region: String,

    /// Backend host URL prepended to every path
    #[arg(long, default_value = "")]
    host: String,

    /// VPC Link connection ID
    #[arg(long, default_value = "")]
    vpc: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "{} Parsing Swagger file: {}",
        "→".cyan(),
        cli.input.display()
    );

    let parser = SwaggerParser::from_file(&cli.input).context("Failed to load Swagger spec")?;
    let doc = parser.into_doc();

    if cli.verbose {
        println!("  Title: {}", doc.info.title);
        println!("  Version: {}", doc.info.version);
        println!("  Paths: {}", doc.paths.len());
        println!("  Definitions: {}", doc.definitions.len());
    }

    let config = ConverterConfig {
        account: cli.account,
        region: cli.region,
        host: cli.host,
        vpc_id: cli.vpc,
    };

    println!("{} Generating API Gateway document...", "→".cyan());
    let target = ApiGatewayGenerator::new(doc, config).convert();

    let operations: usize = target.paths.values().map(|methods| methods.len()).sum();
    println!("{} Converted {} operations", "✓".green(), operations);

    target
        .write_to_file(&cli.output)
        .context("Failed to write output YAML")?;

    println!(
        "\n{} YAML saved to {}",
        "✓ Conversion complete!".green().bold(),
        cli.output.display()
    );

    Ok(())
}
