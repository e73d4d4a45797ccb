//! Anchor discriminators for the SSS-2 transfer hook program

pub mod config;
pub mod discriminator;
pub mod error;
pub mod naming;
pub mod registry;
pub mod report;

pub use discriminator::{compute_discriminator, namespaced_discriminator, Discriminator, Namespace};
pub use error::{DiscriminatorError, DiscriminatorResult};
pub use naming::to_snake_case;
pub use registry::Section;
pub use report::{write_report, ByteFormat, ReportConfig, ReportSource};
