// resolver.rs — The permission decision chain.
//
// Every gate evaluation flows through `resolve()`, which checks:
//
// 1. Is a wallet connected? → No → Denied(NotConnected)
// 2. Does the policy check networks, and is the wallet on the wrong one?
//    → Yes → Denied(WrongNetwork)
// 3. Does the wallet hold an allowed role: owner, permitted proposer,
//    permitted spending-limit beneficiary, or the non-owner override?
//    → No → Denied(NotOwnerOrAllowedRole)
// 4. Is the account deployed, or are undeployed accounts permitted?
//    → No → Denied(Undeployed)
// 5. Otherwise → Allowed
//
// The order is part of the contract: every denial carries a distinct reason
// code and only the first failing check is surfaced. A wrong-network owner
// is told about the network, and an unauthorized wallet on an undeployed
// account is told about its role, not about deployment.

use serde::{Deserialize, Serialize};

use crate::policy::GatePolicy;
use crate::signals::WalletSignals;

/// Why the gate denied an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No wallet is connected.
    NotConnected,
    /// The wallet is connected to a different network than the account.
    WrongNetwork,
    /// The wallet holds no role the policy accepts.
    NotOwnerOrAllowedRole,
    /// The account contract has not been deployed yet.
    Undeployed,
}

impl DenyReason {
    /// The reason code as a stable string, as it appears in serialized
    /// decisions and log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::NotConnected => "not_connected",
            DenyReason::WrongNetwork => "wrong_network",
            DenyReason::NotOwnerOrAllowedRole => "not_owner_or_allowed_role",
            DenyReason::Undeployed => "undeployed",
        }
    }
}

/// The result of a gate evaluation.
///
/// `#[derive(PartialEq)]` lets tests compare decisions with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// The action is permitted; the control may be enabled.
    Allowed,
    /// The action is blocked; disable the control and surface the reason.
    Denied { reason: DenyReason },
}

impl Decision {
    /// Shorthand for a denial with the given reason.
    pub fn denied(reason: DenyReason) -> Self {
        Decision::Denied { reason }
    }

    /// Returns `true` if the action is permitted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    /// The denial reason, or `None` when allowed.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Allowed => None,
            Decision::Denied { reason } => Some(*reason),
        }
    }
}

/// Which allowance satisfied the role check.
///
/// The role allowances are disjunctive: holding several at once is fine,
/// and the strongest one is reported in the order below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGrant {
    /// The policy waives the role requirement for everyone.
    NonOwnerOverride,
    /// The wallet is a registered signer of the account.
    Owner,
    /// The wallet is a proposer and the policy accepts proposers.
    Proposer,
    /// The wallet has a spending limit and the policy accepts beneficiaries.
    SpendingLimit,
}

impl RoleGrant {
    /// The grant as a stable string (used in trace outcomes).
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleGrant::NonOwnerOverride => "non_owner_override",
            RoleGrant::Owner => "owner",
            RoleGrant::Proposer => "proposer",
            RoleGrant::SpendingLimit => "spending_limit",
        }
    }
}

/// Evaluate the gate for one snapshot under one call-site policy.
///
/// Pure and total: no I/O, no hidden state, and every input combination
/// maps to exactly one decision. The first failing check wins.
pub fn resolve(signals: &WalletSignals, policy: &GatePolicy) -> Decision {
    if !signals.wallet_connected {
        return Decision::denied(DenyReason::NotConnected);
    }

    if policy.check_network && !signals.chain_matches {
        return Decision::denied(DenyReason::WrongNetwork);
    }

    if role_grant(signals, policy).is_none() {
        return Decision::denied(DenyReason::NotOwnerOrAllowedRole);
    }

    if !signals.account_deployed && !policy.allow_undeployed_safe {
        return Decision::denied(DenyReason::Undeployed);
    }

    Decision::Allowed
}

/// Find the allowance that satisfies the role check, if any.
fn role_grant(signals: &WalletSignals, policy: &GatePolicy) -> Option<RoleGrant> {
    if policy.allow_non_owner {
        Some(RoleGrant::NonOwnerOverride)
    } else if signals.is_owner {
        Some(RoleGrant::Owner)
    } else if signals.is_proposer && policy.allow_proposer {
        Some(RoleGrant::Proposer)
    } else if signals.is_spending_limit_beneficiary && policy.allow_spending_limit {
        Some(RoleGrant::SpendingLimit)
    } else {
        None
    }
}

/// One check in the evaluation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateCheck {
    /// Is a wallet connected at all?
    Connection,
    /// Is the wallet on the account's network?
    Network,
    /// Does the wallet hold an allowed role?
    Role,
    /// Is the account contract deployed?
    Deployment,
}

impl GateCheck {
    /// The check name as a stable string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GateCheck::Connection => "connection",
            GateCheck::Network => "network",
            GateCheck::Role => "role",
            GateCheck::Deployment => "deployment",
        }
    }
}

/// A step in the evaluation chain.
///
/// Captures which check ran, what it concluded, and whether it terminated
/// the evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    /// Which check this step records.
    pub check: GateCheck,
    /// The outcome of the check (e.g., "passed", "failed: no allowed role").
    pub outcome: String,
    /// Whether this step was the terminal decision point.
    pub terminal: bool,
}

/// Full evaluation trace returned alongside the decision.
///
/// Records every check performed, in order, plus which role allowance (if
/// any) satisfied the role check. The decision is always identical to what
/// [`resolve`] returns for the same inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateTrace {
    /// The final decision.
    pub decision: Decision,
    /// Ordered steps the resolver evaluated.
    pub steps: Vec<TraceStep>,
    /// The allowance that satisfied the role check, if it was reached.
    pub role_grant: Option<RoleGrant>,
}

/// Evaluate the gate and record every step of the chain.
///
/// Same semantics as [`resolve`], with the decision trail made observable
/// for debugging and audit tooling.
pub fn resolve_with_trace(signals: &WalletSignals, policy: &GatePolicy) -> GateTrace {
    let mut steps = Vec::new();

    if !signals.wallet_connected {
        steps.push(TraceStep {
            check: GateCheck::Connection,
            outcome: "failed: no wallet connected".to_string(),
            terminal: true,
        });
        return GateTrace {
            decision: Decision::denied(DenyReason::NotConnected),
            steps,
            role_grant: None,
        };
    }
    steps.push(TraceStep {
        check: GateCheck::Connection,
        outcome: "passed".to_string(),
        terminal: false,
    });

    if policy.check_network {
        if !signals.chain_matches {
            steps.push(TraceStep {
                check: GateCheck::Network,
                outcome: "failed: wallet is on a different network".to_string(),
                terminal: true,
            });
            return GateTrace {
                decision: Decision::denied(DenyReason::WrongNetwork),
                steps,
                role_grant: None,
            };
        }
        steps.push(TraceStep {
            check: GateCheck::Network,
            outcome: "passed".to_string(),
            terminal: false,
        });
    } else {
        steps.push(TraceStep {
            check: GateCheck::Network,
            outcome: "skipped: network check disabled by policy".to_string(),
            terminal: false,
        });
    }

    let role_grant = role_grant(signals, policy);
    match role_grant {
        Some(grant) => steps.push(TraceStep {
            check: GateCheck::Role,
            outcome: format!("passed: {}", grant.as_str()),
            terminal: false,
        }),
        None => {
            steps.push(TraceStep {
                check: GateCheck::Role,
                outcome: "failed: no allowed role".to_string(),
                terminal: true,
            });
            return GateTrace {
                decision: Decision::denied(DenyReason::NotOwnerOrAllowedRole),
                steps,
                role_grant: None,
            };
        }
    }

    if !signals.account_deployed && !policy.allow_undeployed_safe {
        steps.push(TraceStep {
            check: GateCheck::Deployment,
            outcome: "failed: account not deployed".to_string(),
            terminal: true,
        });
        return GateTrace {
            decision: Decision::denied(DenyReason::Undeployed),
            steps,
            role_grant,
        };
    }
    steps.push(TraceStep {
        check: GateCheck::Deployment,
        outcome: if signals.account_deployed {
            "passed".to_string()
        } else {
            "passed: undeployed account permitted by policy".to_string()
        },
        terminal: true,
    });

    GateTrace {
        decision: Decision::Allowed,
        steps,
        role_grant,
    }
}
