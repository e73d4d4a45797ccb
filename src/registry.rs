use std::fmt;
use std::str::FromStr;

use crate::discriminator::Namespace;
use crate::error::{DiscriminatorError, DiscriminatorResult};

/// Instructions of the SSS-2 transfer hook program, in report order.
pub const SSS2_HOOK_INSTRUCTIONS: [&str; 11] = [
    "initialize",
    "executeTransferHook",
    "updateFeeConfig",
    "addWhitelist",
    "removeWhitelist",
    "addBlacklist",
    "removeBlacklist",
    "setPermanentDelegate",
    "setBlacklistEnabled",
    "setPaused",
    "closeConfig",
];

pub const SSS2_HOOK_ACCOUNTS: [&str; 4] = [
    "TransferHookConfig",
    "ListEntry",
    "WhitelistEntry",
    "BlacklistEntry",
];

// WhitelistAdded and WhitelistRemoved are legacy events still emitted on-chain
pub const SSS2_HOOK_EVENTS: [&str; 7] = [
    "TransferHookEvent",
    "FeeConfigUpdated",
    "ListEntryAdded",
    "ListEntryRemoved",
    "PermanentDelegateUpdated",
    "WhitelistAdded",
    "WhitelistRemoved",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Instructions,
    Accounts,
    Events,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Instructions, Section::Accounts, Section::Events];

    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Section::Instructions => &SSS2_HOOK_INSTRUCTIONS,
            Section::Accounts => &SSS2_HOOK_ACCOUNTS,
            Section::Events => &SSS2_HOOK_EVENTS,
        }
    }

    pub fn namespace(&self) -> Namespace {
        match self {
            Section::Instructions => Namespace::Global,
            Section::Accounts => Namespace::Account,
            Section::Events => Namespace::Event,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Instructions => "SSS-2 Hook Instruction Discriminators:",
            Section::Accounts => "SSS-2 Hook Account Discriminators:",
            Section::Events => "SSS-2 Hook Event Discriminators:",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Instructions => "instructions",
            Section::Accounts => "accounts",
            Section::Events => "events",
        };
        f.write_str(name)
    }
}

impl FromStr for Section {
    type Err = DiscriminatorError;

    fn from_str(s: &str) -> DiscriminatorResult<Self> {
        match s {
            "instructions" => Ok(Section::Instructions),
            "accounts" => Ok(Section::Accounts),
            "events" => Ok(Section::Events),
            _ => Err(DiscriminatorError::UnknownSection(s.to_string())),
        }
    }
}
