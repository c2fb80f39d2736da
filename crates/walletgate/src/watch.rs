// watch.rs — Recompute-on-change around the pure resolver.
//
// A `GateWatcher` holds one call site's policy and the last snapshot it
// evaluated. Feed it snapshots as wallet or account state changes; it
// re-resolves only when the snapshot actually differs, so a stream of
// identical updates costs one evaluation. `set_policy` re-evaluates the
// held snapshot under the new flags without waiting for the next update.

use crate::policy::GatePolicy;
use crate::resolver::{resolve, Decision};
use crate::signals::WalletSignals;

/// Tracks one gated control's decision across state changes.
#[derive(Debug, Clone)]
pub struct GateWatcher {
    policy: GatePolicy,
    last: Option<(WalletSignals, Decision)>,
    evaluations: u64,
}

impl GateWatcher {
    /// A watcher with the given policy and no snapshot seen yet.
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            policy,
            last: None,
            evaluations: 0,
        }
    }

    /// Feed the current snapshot; returns the decision for it.
    ///
    /// Re-resolves only when the snapshot differs from the last one seen.
    pub fn update(&mut self, signals: WalletSignals) -> Decision {
        if let Some((last_signals, decision)) = &self.last {
            if *last_signals == signals {
                return *decision;
            }
        }
        self.resolve_and_store(signals)
    }

    /// Swap the policy and re-evaluate the held snapshot under it.
    ///
    /// Returns the fresh decision, or `None` when no snapshot has been fed
    /// yet or the policy is unchanged.
    pub fn set_policy(&mut self, policy: GatePolicy) -> Option<Decision> {
        if self.policy == policy {
            return None;
        }
        self.policy = policy;
        let signals = self.last.as_ref().map(|(signals, _)| *signals)?;
        Some(self.resolve_and_store(signals))
    }

    /// The policy this watcher evaluates under.
    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// The decision for the last snapshot fed, if any.
    pub fn decision(&self) -> Option<Decision> {
        self.last.as_ref().map(|(_, decision)| *decision)
    }

    /// How many times the resolver has actually run.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    fn resolve_and_store(&mut self, signals: WalletSignals) -> Decision {
        let decision = resolve(&signals, &self.policy);
        self.evaluations += 1;
        if let Some((_, previous)) = &self.last {
            if *previous != decision {
                tracing::debug!(from = ?previous, to = ?decision, "gate decision changed");
            }
        }
        self.last = Some((signals, decision));
        decision
    }
}

impl Default for GateWatcher {
    /// A watcher under the default policy.
    fn default() -> Self {
        Self::new(GatePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::DenyReason;

    fn owner_signals() -> WalletSignals {
        WalletSignals {
            wallet_connected: true,
            chain_matches: true,
            is_owner: true,
            account_deployed: true,
            ..WalletSignals::default()
        }
    }

    #[test]
    fn first_update_evaluates() {
        let mut watcher = GateWatcher::default();
        assert_eq!(watcher.decision(), None);
        assert_eq!(watcher.evaluations(), 0);

        let decision = watcher.update(owner_signals());
        assert_eq!(decision, Decision::Allowed);
        assert_eq!(watcher.decision(), Some(Decision::Allowed));
        assert_eq!(watcher.evaluations(), 1);
    }

    #[test]
    fn identical_snapshot_skips_re_evaluation() {
        let mut watcher = GateWatcher::default();

        watcher.update(owner_signals());
        for _ in 0..5 {
            let decision = watcher.update(owner_signals());
            assert_eq!(decision, Decision::Allowed);
        }
        assert_eq!(watcher.evaluations(), 1);
    }

    #[test]
    fn changed_snapshot_re_evaluates() {
        let mut watcher = GateWatcher::default();

        watcher.update(owner_signals());
        let decision = watcher.update(WalletSignals {
            chain_matches: false,
            ..owner_signals()
        });

        assert_eq!(decision, Decision::denied(DenyReason::WrongNetwork));
        assert_eq!(watcher.evaluations(), 2);
    }

    #[test]
    fn wallet_disconnect_flips_decision() {
        let mut watcher = GateWatcher::default();

        watcher.update(owner_signals());
        let decision = watcher.update(WalletSignals {
            wallet_connected: false,
            is_owner: false,
            chain_matches: false,
            ..owner_signals()
        });

        assert_eq!(decision, Decision::denied(DenyReason::NotConnected));
    }

    #[test]
    fn policy_change_re_evaluates_held_snapshot() {
        let mut watcher = GateWatcher::default();
        let visitor = WalletSignals {
            is_owner: false,
            ..owner_signals()
        };

        assert_eq!(
            watcher.update(visitor),
            Decision::denied(DenyReason::NotOwnerOrAllowedRole)
        );

        let decision = watcher.set_policy(GatePolicy {
            allow_non_owner: true,
            ..GatePolicy::default()
        });
        assert_eq!(decision, Some(Decision::Allowed));
        assert_eq!(watcher.decision(), Some(Decision::Allowed));
        assert_eq!(watcher.evaluations(), 2);
    }

    #[test]
    fn unchanged_policy_is_a_no_op() {
        let mut watcher = GateWatcher::default();
        watcher.update(owner_signals());

        assert_eq!(watcher.set_policy(GatePolicy::default()), None);
        assert_eq!(watcher.evaluations(), 1);
    }

    #[test]
    fn policy_change_before_any_snapshot_returns_none() {
        let mut watcher = GateWatcher::default();

        let decision = watcher.set_policy(GatePolicy {
            check_network: false,
            ..GatePolicy::default()
        });

        assert_eq!(decision, None);
        assert!(!watcher.policy().check_network);
        assert_eq!(watcher.evaluations(), 0);
    }
}
