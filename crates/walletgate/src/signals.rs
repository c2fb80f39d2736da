// signals.rs — The immutable signal snapshot fed to the resolver.
//
// Each signal is reported by an external collaborator (wallet connection
// state, chain metadata, role membership, deployment status) and is
// normalized to a bool before it reaches this struct. A missing upstream
// value must normalize to `false`: nothing is granted by omission.

use serde::{Deserialize, Serialize};

/// One snapshot of everything the resolver needs to know about the connected
/// wallet and the target account.
///
/// All fields default to `false`, so a partially populated snapshot (for
/// example one deserialized from a JSON fixture that only names a couple of
/// signals) denies rather than allows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletSignals {
    /// A wallet address is present.
    pub wallet_connected: bool,
    /// The wallet's active network equals the account's network.
    /// Only consulted when the policy requests a network check.
    pub chain_matches: bool,
    /// The wallet is a registered signer of the account.
    pub is_owner: bool,
    /// The wallet holds a propose-only role for the account.
    pub is_proposer: bool,
    /// The wallet is a non-owner with an allocated spending limit.
    pub is_spending_limit_beneficiary: bool,
    /// The account contract has been deployed on-chain.
    pub account_deployed: bool,
}
