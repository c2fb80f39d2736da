// args.rs — Shared signal and policy arguments for the subcommands.
//
// Both sides follow the same layering: an optional file gives the base
// (JSON for signals, TOML for the policy), then individual flags override
// on top. With no file and no flags you get the denying defaults.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use walletgate::{GatePolicy, WalletSignals};

/// Where the gate's input signals come from.
#[derive(Args)]
pub struct SignalArgs {
    /// Read the base snapshot from a JSON file.
    #[arg(long, value_name = "FILE")]
    signals: Option<PathBuf>,

    /// A wallet is connected.
    #[arg(long)]
    connected: bool,

    /// The wallet is on the account's network.
    #[arg(long)]
    chain_matches: bool,

    /// The wallet is a registered signer of the account.
    #[arg(long)]
    owner: bool,

    /// The wallet is a registered proposer.
    #[arg(long)]
    proposer: bool,

    /// The wallet holds a spending limit on the account.
    #[arg(long)]
    spending_limit: bool,

    /// The account contract is deployed.
    #[arg(long)]
    deployed: bool,
}

impl SignalArgs {
    /// Combine the file (if given) with the flags into one snapshot.
    ///
    /// Flags only set signals, never clear them: a flag given on the
    /// command line wins over `false` in the file.
    pub fn build(&self) -> anyhow::Result<WalletSignals> {
        let mut signals = match &self.signals {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read signals file {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("invalid signals JSON in {}", path.display()))?
            }
            None => WalletSignals::default(),
        };

        signals.wallet_connected |= self.connected;
        signals.chain_matches |= self.chain_matches;
        signals.is_owner |= self.owner;
        signals.is_proposer |= self.proposer;
        signals.is_spending_limit_beneficiary |= self.spending_limit;
        signals.account_deployed |= self.deployed;

        Ok(signals)
    }
}

/// Where the call-site policy comes from.
#[derive(Args)]
pub struct PolicyArgs {
    /// Read the policy from a TOML file.
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Skip the network check.
    #[arg(long)]
    no_network_check: bool,

    /// Waive the role requirement for any connected wallet.
    #[arg(long)]
    allow_non_owner: bool,

    /// Accept spending-limit beneficiaries.
    #[arg(long)]
    allow_spending_limit: bool,

    /// Reject proposers (they are accepted by default).
    #[arg(long)]
    no_proposer: bool,

    /// Accept accounts that are not deployed yet.
    #[arg(long)]
    allow_undeployed: bool,
}

impl PolicyArgs {
    /// Combine the file (if given) with the flag overrides into a policy.
    pub fn build(&self) -> anyhow::Result<GatePolicy> {
        let mut policy = match &self.policy {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read policy file {}", path.display()))?;
                toml::from_str(&contents)
                    .with_context(|| format!("invalid policy TOML in {}", path.display()))?
            }
            None => GatePolicy::default(),
        };

        if self.no_network_check {
            policy.check_network = false;
        }
        if self.allow_non_owner {
            policy.allow_non_owner = true;
        }
        if self.allow_spending_limit {
            policy.allow_spending_limit = true;
        }
        if self.no_proposer {
            policy.allow_proposer = false;
        }
        if self.allow_undeployed {
            policy.allow_undeployed_safe = true;
        }

        Ok(policy)
    }
}
