pub mod cli;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dsvdoc", version)]
#[command(about = "Render option documentation from ||-separated source files")]
pub struct CliConfig {
    /// Documentation source file, one ||-separated record per line
    #[arg(value_name = "dsv-file")]
    pub input: String,

    /// Write rendered text to this file instead of standard output
    #[arg(long, short)]
    pub output: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}
