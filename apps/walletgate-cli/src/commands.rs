// commands.rs — Subcommand execution: check, trace.
//
// Both run the resolver once, print to stdout, and optionally append the
// decision to a JSONL log. They return the decision so `main` can map it
// to the process exit code.

use std::path::Path;

use walletgate::{
    decision_message, resolve, resolve_with_trace, Decision, DecisionLog, DecisionRecord,
    GatePolicy, WalletSignals,
};

/// Evaluate the gate and print the decision.
pub fn check(
    signals: &WalletSignals,
    policy: &GatePolicy,
    json: bool,
    log: Option<&Path>,
) -> anyhow::Result<Decision> {
    let decision = resolve(signals, policy);
    append_to_log(log, signals, policy, decision)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        match decision_message(&decision) {
            None => println!("allowed"),
            Some(message) => println!("denied: {}", message),
        }
    }

    Ok(decision)
}

/// Evaluate the gate and print the full evaluation trace as JSON.
pub fn trace(
    signals: &WalletSignals,
    policy: &GatePolicy,
    log: Option<&Path>,
) -> anyhow::Result<Decision> {
    let trace = resolve_with_trace(signals, policy);
    append_to_log(log, signals, policy, trace.decision)?;

    println!("{}", serde_json::to_string_pretty(&trace)?);

    Ok(trace.decision)
}

fn append_to_log(
    log: Option<&Path>,
    signals: &WalletSignals,
    policy: &GatePolicy,
    decision: Decision,
) -> anyhow::Result<()> {
    let Some(path) = log else {
        return Ok(());
    };

    let mut log = DecisionLog::open(path)?;
    log.append(&DecisionRecord::new(*signals, *policy, decision))?;
    tracing::debug!(path = %path.display(), "decision appended to log");
    Ok(())
}
