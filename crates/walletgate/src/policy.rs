// policy.rs — Call-site policy flags.
//
// Each call site decides how strict the gate is: whether a network mismatch
// blocks, and which non-owner roles count. The defaults match the common
// case, an owner-only action on the account's own network, with proposers
// permitted.

use serde::{Deserialize, Serialize};

/// Per-call-site configuration for the permission gate.
///
/// Serde field defaults mirror [`GatePolicy::default`], so a TOML or JSON
/// config only needs to name the flags it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatePolicy {
    /// Deny with `WrongNetwork` when the wallet is connected to a different
    /// network than the account. Defaults to `true`.
    pub check_network: bool,
    /// Waive the role requirement entirely. Defaults to `false`.
    pub allow_non_owner: bool,
    /// Count spending-limit beneficiaries as an allowed role.
    /// Defaults to `false`.
    pub allow_spending_limit: bool,
    /// Count proposers as an allowed role. Defaults to `true`.
    pub allow_proposer: bool,
    /// Permit the action on an account that has not been deployed yet.
    /// Defaults to `false`.
    pub allow_undeployed_safe: bool,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            check_network: true,
            allow_non_owner: false,
            allow_spending_limit: false,
            allow_proposer: true,
            allow_undeployed_safe: false,
        }
    }
}
