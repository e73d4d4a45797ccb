use std::ffi::OsString;

use clap::Parser;

use crate::discriminator::Namespace;
use crate::error::{DiscriminatorError, DiscriminatorResult};
use crate::registry::Section;
use crate::report::{ByteFormat, ReportConfig, ReportSource};

/// Print Anchor discriminators for the SSS-2 transfer hook program.
///
/// With no arguments, prints the instruction table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Byte rendering: decimal, hex, base58 or base64
    #[arg(long, default_value = "decimal")]
    pub format: String,

    /// Section to print: instructions, accounts or events. Repeatable
    #[arg(long)]
    pub section: Vec<String>,

    /// Print every section
    #[arg(long, conflicts_with = "section")]
    pub all: bool,

    /// Namespace for names given on the command line: global, account or event
    #[arg(long, default_value = "global")]
    pub namespace: String,

    /// Hash instruction names in snake_case, as Anchor does
    #[arg(long)]
    pub snake_case: bool,

    /// Names to hash instead of the built-in tables
    #[arg(conflicts_with_all = ["section", "all"])]
    pub names: Vec<OsString>,
}

impl Args {
    pub fn into_config(self) -> DiscriminatorResult<ReportConfig> {
        let format = self.format.parse::<ByteFormat>()?;

        let source = if !self.names.is_empty() {
            let namespace = self.namespace.parse::<Namespace>()?;
            let names = self
                .names
                .into_iter()
                .map(|name| {
                    name.into_string().map_err(|name| {
                        DiscriminatorError::InvalidName(name.to_string_lossy().into_owned())
                    })
                })
                .collect::<DiscriminatorResult<Vec<String>>>()?;
            ReportSource::Requested { namespace, names }
        } else if self.all {
            ReportSource::Sections(Section::ALL.to_vec())
        } else if !self.section.is_empty() {
            let sections = self
                .section
                .iter()
                .map(|section| section.parse::<Section>())
                .collect::<DiscriminatorResult<Vec<Section>>>()?;
            ReportSource::Sections(sections)
        } else {
            ReportSource::Sections(vec![Section::Instructions])
        };

        Ok(ReportConfig {
            source,
            format,
            snake_case: self.snake_case,
        })
    }
}
