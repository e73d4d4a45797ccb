use std::fmt;
use std::io::Write;
use std::str::FromStr;

use log::info;

use crate::discriminator::{namespaced_discriminator, Discriminator, Namespace};
use crate::error::{DiscriminatorError, DiscriminatorResult};
use crate::naming::to_snake_case;
use crate::registry::Section;


pub const NAME_WIDTH: usize = 25;
pub const SEPARATOR_WIDTH: usize = 50;
pub const SEPARATOR: char = '=';
pub const REQUESTED_TITLE: &str = "Requested Discriminators:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteFormat {
    /// `[175, 175, 109, 31, 13, 152, 155, 237]`
    Decimal,
    Hex,
    Base58,
    Base64,
}

impl Default for ByteFormat {
    fn default() -> Self {
        ByteFormat::Decimal
    }
}

impl ByteFormat {
    pub fn render(&self, bytes: &[u8]) -> String {
        match self {
            ByteFormat::Decimal => format!("{:?}", bytes),
            ByteFormat::Hex => hex::encode(bytes),
            ByteFormat::Base58 => bs58::encode(bytes).into_string(),
            ByteFormat::Base64 => base64::encode(bytes),
        }
    }
}

impl fmt::Display for ByteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ByteFormat::Decimal => "decimal",
            ByteFormat::Hex => "hex",
            ByteFormat::Base58 => "base58",
            ByteFormat::Base64 => "base64",
        };
        f.write_str(name)
    }
}

impl FromStr for ByteFormat {
    type Err = DiscriminatorError;

    fn from_str(s: &str) -> DiscriminatorResult<Self> {
        match s {
            "decimal" => Ok(ByteFormat::Decimal),
            "hex" => Ok(ByteFormat::Hex),
            "base58" => Ok(ByteFormat::Base58),
            "base64" => Ok(ByteFormat::Base64),
            _ => Err(DiscriminatorError::UnknownFormat(s.to_string())),
        }
    }
}

/// Names to report on, either built-in program tables or names given by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportSource {
    Sections(Vec<Section>),
    Requested {
        namespace: Namespace,
        names: Vec<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub source: ReportSource,
    pub format: ByteFormat,
    /// Convert `global` names to snake_case before hashing.
    pub snake_case: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            source: ReportSource::Sections(vec![Section::Instructions]),
            format: ByteFormat::default(),
            snake_case: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    /// Name as hashed, after any case conversion.
    pub name: String,
    pub discriminator: Discriminator,
}

pub fn build_entries(namespace: Namespace, names: &[&str], snake_case: bool) -> Vec<ReportEntry> {
    names
        .iter()
        .map(|name| {
            let name = if snake_case && namespace == Namespace::Global {
                to_snake_case(name)
            } else {
                name.to_string()
            };
            let discriminator = namespaced_discriminator(namespace, &name);
            ReportEntry {
                name,
                discriminator,
            }
        })
        .collect()
}

pub fn format_entry(entry: &ReportEntry, format: ByteFormat) -> String {
    format!(
        "{:<width$}: {}",
        entry.name,
        format.render(&entry.discriminator),
        width = NAME_WIDTH
    )
}

fn write_section<W: Write>(
    writer: &mut W,
    title: &str,
    entries: &[ReportEntry],
    format: ByteFormat,
) -> DiscriminatorResult {
    writeln!(writer, "{}", title)?;
    writeln!(writer, "{}", SEPARATOR.to_string().repeat(SEPARATOR_WIDTH))?;
    for entry in entries {
        writeln!(writer, "{}", format_entry(entry, format))?;
    }
    Ok(())
}

pub fn write_report<W: Write>(writer: &mut W, config: &ReportConfig) -> DiscriminatorResult {
    match &config.source {
        ReportSource::Sections(sections) => {
            for (i, section) in sections.iter().enumerate() {
                if i > 0 {
                    writeln!(writer)?;
                }
                let entries = build_entries(section.namespace(), section.names(), config.snake_case);
                info!("{}: {} discriminators", section, entries.len());
                write_section(writer, section.title(), &entries, config.format)?;
            }
        }
        ReportSource::Requested { namespace, names } => {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let entries = build_entries(*namespace, &names, config.snake_case);
            info!("requested: {} {} discriminators", entries.len(), namespace);
            write_section(writer, REQUESTED_TITLE, &entries, config.format)?;
        }
    }

    writer.flush()?;
    Ok(())
}
