//! # walletgate
//!
//! Permission gating for wallet actions on Safe-style smart accounts.
//!
//! Decides whether an action control (a transaction button, a settings form)
//! should be enabled for the connected wallet, given its network and its role
//! on the target account. The decision itself is a pure function:
//! [`resolve`] folds a [`WalletSignals`] snapshot and a [`GatePolicy`] into a
//! single [`Decision`], first failing check wins.
//!
//! ## Key invariants
//!
//! - **Denying defaults**: an absent signal is `false` — nothing is granted
//!   by omission.
//! - **Fixed check order**: connection, then network, then role, then
//!   deployment. The order is observable because each denial carries a
//!   distinct reason code.
//! - **No side effects**: `resolve` performs no I/O and never fails; denial
//!   is an expected outcome, not an error.
//!
//! Everything upstream of the snapshot (wallet connection, chain metadata,
//! role membership, deployment status) stays behind the [`SignalSource`]
//! seam, so the decision logic tests without mocking any of it.

pub mod audit;
pub mod error;
pub mod message;
pub mod policy;
pub mod resolver;
pub mod signals;
pub mod source;
pub mod watch;

pub use audit::{DecisionLog, DecisionRecord};
pub use error::GateError;
pub use message::{decision_message, deny_message};
pub use policy::GatePolicy;
pub use resolver::{
    resolve, resolve_with_trace, Decision, DenyReason, GateCheck, GateTrace, RoleGrant, TraceStep,
};
pub use signals::WalletSignals;
pub use source::{snapshot, AccountInfo, ChainId, SignalSource, StaticSource, WalletInfo};
pub use watch::GateWatcher;
