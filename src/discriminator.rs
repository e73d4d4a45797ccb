use std::fmt;
use std::str::FromStr;

use log::debug;
use sha2::{Digest, Sha256};

use crate::error::{DiscriminatorError, DiscriminatorResult};


pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// Preimage prefix used by Anchor when deriving a discriminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    /// Instructions, `global:<name>`
    Global,
    /// Account state types, `account:<Name>`
    Account,
    /// Emitted events, `event:<Name>`
    Event,
}

impl Namespace {
    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Global => "global",
            Namespace::Account => "account",
            Namespace::Event => "event",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Namespace {
    type Err = DiscriminatorError;

    fn from_str(s: &str) -> DiscriminatorResult<Self> {
        match s {
            "global" => Ok(Namespace::Global),
            "account" => Ok(Namespace::Account),
            "event" => Ok(Namespace::Event),
            _ => Err(DiscriminatorError::UnknownNamespace(s.to_string())),
        }
    }
}

/// Gets the instruction discriminator for a given instruction name,
/// the first 8 bytes of `sha256("global:<name>")`.
pub fn compute_discriminator(name: &str) -> Discriminator {
    namespaced_discriminator(Namespace::Global, name)
}

/// Gets the discriminator for `name` under `namespace`.
pub fn namespaced_discriminator(namespace: Namespace, name: &str) -> Discriminator {
    let preimage = format!("{}:{}", namespace.prefix(), name);
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&Sha256::digest(preimage.as_bytes())[..DISCRIMINATOR_LEN]);

    debug!("{} -> {}", preimage, hex::encode(discriminator));

    discriminator
}
