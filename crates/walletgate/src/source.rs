// source.rs — Signal aggregation: from wallet/account state to a snapshot.
//
// The resolver only understands `WalletSignals`. This module owns the step
// before it: a `SignalSource` describes the connected wallet, the account
// under view, and the membership queries, and `snapshot()` collapses those
// into the six booleans. Derivations live here and nowhere else; the
// resolver never re-derives a signal from raw state.

use serde::{Deserialize, Serialize};

use crate::signals::WalletSignals;

/// A network identifier (an EIP-155 chain id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The connected wallet: its address and the network it is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// The wallet's address.
    pub address: String,
    /// The network the wallet is currently connected to.
    pub chain_id: ChainId,
}

impl WalletInfo {
    pub fn new(address: impl Into<String>, chain_id: ChainId) -> Self {
        Self {
            address: address.into(),
            chain_id,
        }
    }
}

/// The smart account a gate decision is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// The account's address.
    pub address: String,
    /// The network the account lives on.
    pub chain_id: ChainId,
    /// Whether the account contract is deployed on-chain. Counterfactual
    /// accounts exist as a predicted address only.
    pub deployed: bool,
}

impl AccountInfo {
    /// A deployed account on the given network.
    pub fn new(address: impl Into<String>, chain_id: ChainId) -> Self {
        Self {
            address: address.into(),
            chain_id,
            deployed: true,
        }
    }

    /// Mark the account as not yet deployed.
    pub fn undeployed(mut self) -> Self {
        self.deployed = false;
        self
    }
}

/// Where gate signals come from.
///
/// Implementations wrap whatever holds live wallet and account state (a
/// session store, an RPC client, a test fixture). The membership queries
/// take the wallet address so a source can answer for any wallet, not just
/// the connected one.
pub trait SignalSource {
    /// The connected wallet, or `None` when no wallet is connected.
    fn wallet(&self) -> Option<WalletInfo>;

    /// The account under view.
    fn account(&self) -> AccountInfo;

    /// Is this address a registered signer of the account?
    fn is_owner(&self, address: &str) -> bool;

    /// Is this address a registered proposer for the account?
    fn is_proposer(&self, address: &str) -> bool;

    /// Does this address hold a spending limit on the account?
    fn is_spending_limit_beneficiary(&self, address: &str) -> bool;
}

/// Collapse a source's state into the resolver's input.
///
/// With no wallet connected every wallet-derived signal is `false`; only
/// the account's deployment state carries over. Network match compares the
/// wallet's chain against the account's chain.
pub fn snapshot<S: SignalSource + ?Sized>(source: &S) -> WalletSignals {
    let account = source.account();

    match source.wallet() {
        None => WalletSignals {
            account_deployed: account.deployed,
            ..WalletSignals::default()
        },
        Some(wallet) => WalletSignals {
            wallet_connected: true,
            chain_matches: wallet.chain_id == account.chain_id,
            is_owner: source.is_owner(&wallet.address),
            is_proposer: source.is_proposer(&wallet.address),
            is_spending_limit_beneficiary: source.is_spending_limit_beneficiary(&wallet.address),
            account_deployed: account.deployed,
        },
    }
}

/// An in-memory source with fixed state.
///
/// The building block for tests and for callers that already aggregated
/// their state elsewhere and just need to feed it through the gate.
#[derive(Debug, Clone)]
pub struct StaticSource {
    wallet: Option<WalletInfo>,
    account: AccountInfo,
    owners: Vec<String>,
    proposers: Vec<String>,
    spending_limit_beneficiaries: Vec<String>,
}

impl StaticSource {
    /// A source for the given account with no wallet connected.
    pub fn new(account: AccountInfo) -> Self {
        Self {
            wallet: None,
            account,
            owners: Vec::new(),
            proposers: Vec::new(),
            spending_limit_beneficiaries: Vec::new(),
        }
    }

    /// Connect a wallet.
    pub fn with_wallet(mut self, wallet: WalletInfo) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Register an owner address.
    pub fn with_owner(mut self, address: impl Into<String>) -> Self {
        self.owners.push(address.into());
        self
    }

    /// Register a proposer address.
    pub fn with_proposer(mut self, address: impl Into<String>) -> Self {
        self.proposers.push(address.into());
        self
    }

    /// Register a spending-limit beneficiary address.
    pub fn with_spending_limit_beneficiary(mut self, address: impl Into<String>) -> Self {
        self.spending_limit_beneficiaries.push(address.into());
        self
    }
}

impl SignalSource for StaticSource {
    fn wallet(&self) -> Option<WalletInfo> {
        self.wallet.clone()
    }

    fn account(&self) -> AccountInfo {
        self.account.clone()
    }

    fn is_owner(&self, address: &str) -> bool {
        self.owners.iter().any(|owner| owner == address)
    }

    fn is_proposer(&self, address: &str) -> bool {
        self.proposers.iter().any(|proposer| proposer == address)
    }

    fn is_spending_limit_beneficiary(&self, address: &str) -> bool {
        self.spending_limit_beneficiaries
            .iter()
            .any(|beneficiary| beneficiary == address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "0x1111111111111111111111111111111111111111";
    const VISITOR: &str = "0x2222222222222222222222222222222222222222";
    const SAFE: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    const MAINNET: ChainId = ChainId(1);
    const SEPOLIA: ChainId = ChainId(11155111);

    #[test]
    fn no_wallet_yields_disconnected_snapshot() {
        let source = StaticSource::new(AccountInfo::new(SAFE, MAINNET)).with_owner(OWNER);

        let signals = snapshot(&source);
        assert!(!signals.wallet_connected);
        assert!(!signals.chain_matches);
        assert!(!signals.is_owner);
        assert!(signals.account_deployed);
    }

    #[test]
    fn owner_wallet_on_matching_chain() {
        let source = StaticSource::new(AccountInfo::new(SAFE, MAINNET))
            .with_owner(OWNER)
            .with_wallet(WalletInfo::new(OWNER, MAINNET));

        let signals = snapshot(&source);
        assert!(signals.wallet_connected);
        assert!(signals.chain_matches);
        assert!(signals.is_owner);
        assert!(!signals.is_proposer);
    }

    #[test]
    fn chain_mismatch_detected() {
        let source = StaticSource::new(AccountInfo::new(SAFE, MAINNET))
            .with_owner(OWNER)
            .with_wallet(WalletInfo::new(OWNER, SEPOLIA));

        let signals = snapshot(&source);
        assert!(signals.wallet_connected);
        assert!(!signals.chain_matches);
        // Ownership is about the address, not the network.
        assert!(signals.is_owner);
    }

    #[test]
    fn roles_answer_for_the_connected_wallet_only() {
        let source = StaticSource::new(AccountInfo::new(SAFE, MAINNET))
            .with_owner(OWNER)
            .with_proposer(VISITOR)
            .with_wallet(WalletInfo::new(VISITOR, MAINNET));

        let signals = snapshot(&source);
        assert!(!signals.is_owner);
        assert!(signals.is_proposer);
    }

    #[test]
    fn undeployed_account_carries_through() {
        let source = StaticSource::new(AccountInfo::new(SAFE, MAINNET).undeployed())
            .with_owner(OWNER)
            .with_wallet(WalletInfo::new(OWNER, MAINNET));

        let signals = snapshot(&source);
        assert!(signals.is_owner);
        assert!(!signals.account_deployed);
    }

    #[test]
    fn spending_limit_membership_detected() {
        let source = StaticSource::new(AccountInfo::new(SAFE, MAINNET))
            .with_spending_limit_beneficiary(VISITOR)
            .with_wallet(WalletInfo::new(VISITOR, MAINNET));

        let signals = snapshot(&source);
        assert!(!signals.is_owner);
        assert!(signals.is_spending_limit_beneficiary);
    }

    #[test]
    fn snapshot_works_through_trait_object() {
        let source = StaticSource::new(AccountInfo::new(SAFE, MAINNET))
            .with_owner(OWNER)
            .with_wallet(WalletInfo::new(OWNER, MAINNET));
        let dynamic: &dyn SignalSource = &source;

        let signals = snapshot(dynamic);
        assert!(signals.is_owner);
    }
}
