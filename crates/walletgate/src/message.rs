// message.rs — User-facing copy for denial reasons.
//
// The resolver returns reason codes; rendering layers map them to the
// strings shown in tooltips and disabled-control labels. Keeping the copy
// here in one catalog means every surface shows the same words for the
// same reason.

use crate::resolver::{Decision, DenyReason};

/// The message shown to the user for a denial reason.
///
/// The wording is fixed: tests and accessibility labels key off these
/// exact strings.
pub fn deny_message(reason: DenyReason) -> &'static str {
    match reason {
        DenyReason::NotConnected => "Please connect your wallet",
        DenyReason::WrongNetwork => "Your wallet is connected to the wrong network",
        DenyReason::NotOwnerOrAllowedRole => {
            "Your connected wallet is not a signer of this Safe Account"
        }
        DenyReason::Undeployed => "You need to activate the Safe before transacting",
    }
}

/// The message for a decision, or `None` when the action is allowed.
pub fn decision_message(decision: &Decision) -> Option<&'static str> {
    decision.deny_reason().map(deny_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reason_has_a_message() {
        for reason in [
            DenyReason::NotConnected,
            DenyReason::WrongNetwork,
            DenyReason::NotOwnerOrAllowedRole,
            DenyReason::Undeployed,
        ] {
            assert!(!deny_message(reason).is_empty());
        }
    }

    #[test]
    fn messages_match_published_copy() {
        assert_eq!(
            deny_message(DenyReason::NotConnected),
            "Please connect your wallet"
        );
        assert_eq!(
            deny_message(DenyReason::NotOwnerOrAllowedRole),
            "Your connected wallet is not a signer of this Safe Account"
        );
        assert_eq!(
            deny_message(DenyReason::Undeployed),
            "You need to activate the Safe before transacting"
        );
    }

    #[test]
    fn allowed_decision_has_no_message() {
        assert_eq!(decision_message(&Decision::Allowed), None);
        assert_eq!(
            decision_message(&Decision::denied(DenyReason::WrongNetwork)),
            Some("Your wallet is connected to the wrong network")
        );
    }
}
