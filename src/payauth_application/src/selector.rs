use payauth_core::{Authenticatable, AuthenticatorKind, NextActionKind};

/// Why an intent that needs a challenge was routed to the no-op authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The intent's next action has no authenticator registered for it.
    UnmappedNextAction(NextActionKind),
    /// The intent requires action but carries no next action at all.
    MissingNextAction,
}

impl FallbackReason {
    pub fn next_action(&self) -> Option<NextActionKind> {
        match self {
            FallbackReason::UnmappedNextAction(kind) => Some(*kind),
            FallbackReason::MissingNextAction => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub kind: AuthenticatorKind,
    pub fallback: Option<FallbackReason>,
}

impl Selection {
    fn direct(kind: AuthenticatorKind) -> Self {
        Self {
            kind,
            fallback: None,
        }
    }

    fn fallback(reason: FallbackReason) -> Self {
        Self {
            kind: AuthenticatorKind::NoOp,
            fallback: Some(reason),
        }
    }
}

/// Authenticator registered for a next action, or `None` when the descriptor is
/// known but no authenticator handles it.
pub fn authenticator_for_next_action(kind: NextActionKind) -> Option<AuthenticatorKind> {
    match kind {
        NextActionKind::Use3ds2 => Some(AuthenticatorKind::ThreeDs2Sdk),
        NextActionKind::Use3ds1 | NextActionKind::RedirectToUrl | NextActionKind::AlipayRedirect => {
            Some(AuthenticatorKind::BrowserRedirect)
        }
        NextActionKind::DisplayOxxoDetails
        | NextActionKind::BlikAuthorize
        | NextActionKind::Unknown => None,
    }
}

/// Pick the authenticator kind for `authenticatable`.
///
/// Unhandled challenge descriptors fall back to the no-op authenticator and the
/// returned selection says so; the caller is responsible for reporting it.
pub fn select(authenticatable: &Authenticatable) -> Selection {
    match authenticatable {
        Authenticatable::Intent(intent) => {
            if !intent.requires_action() {
                return Selection::direct(AuthenticatorKind::NoOp);
            }
            match intent.next_action_kind() {
                Some(kind) => match authenticator_for_next_action(kind) {
                    Some(authenticator) => Selection::direct(authenticator),
                    None => Selection::fallback(FallbackReason::UnmappedNextAction(kind)),
                },
                None => Selection::fallback(FallbackReason::MissingNextAction),
            }
        }
        Authenticatable::Source(_) => Selection::direct(AuthenticatorKind::BrowserRedirect),
    }
}
