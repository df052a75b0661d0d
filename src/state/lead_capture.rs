use crate::state::role_handoff::Role;

/// Display state of a landing page's contact section. Exactly one of the
/// call to action, the proposal form, or the thank-you panel is visible at
/// any time.
#[derive(Clone, Debug, PartialEq)]
pub enum LeadCapture {
    /// Nothing requested yet; the section shows its call to action.
    Idle,
    /// The proposal form is visible for `role`. `error` carries the
    /// message of a failed submission attempt.
    FormOpen { role: Role, error: Option<String> },
    /// A submission is in flight; the control surface is disabled.
    Submitting { role: Role },
    /// The proposal went through; the thank-you panel shows `email`.
    Submitted { email: String },
}

impl Default for LeadCapture {
    fn default() -> Self {
        LeadCapture::Idle
    }
}

impl LeadCapture {
    /// Reveals the proposal form for `role`. A completed submission keeps
    /// its thank-you panel until the visitor navigates away.
    pub fn open_form(&self, role: Role) -> Self {
        match self {
            LeadCapture::Submitted { .. } => self.clone(),
            _ => LeadCapture::FormOpen { role, error: None },
        }
    }

    /// Starts a submission. Only an open form can submit.
    pub fn begin_submit(&self) -> Self {
        match self {
            LeadCapture::FormOpen { role, .. } => LeadCapture::Submitting { role: *role },
            _ => self.clone(),
        }
    }

    /// Completes the in-flight submission, capturing the submitted email.
    pub fn succeed(&self, email: String) -> Self {
        match self {
            LeadCapture::Submitting { .. } => LeadCapture::Submitted { email },
            _ => self.clone(),
        }
    }

    /// Fails the in-flight submission, reopening the form with a message
    /// so the visitor can retry.
    pub fn fail(&self, message: String) -> Self {
        match self {
            LeadCapture::Submitting { role } => LeadCapture::FormOpen {
                role: *role,
                error: Some(message),
            },
            _ => self.clone(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            LeadCapture::FormOpen { role, .. } | LeadCapture::Submitting { role } => Some(*role),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LeadCapture::FormOpen { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn shows_call_to_action(&self) -> bool {
        matches!(self, LeadCapture::Idle)
    }

    pub fn shows_form(&self) -> bool {
        matches!(
            self,
            LeadCapture::FormOpen { .. } | LeadCapture::Submitting { .. }
        )
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, LeadCapture::Submitting { .. })
    }

    pub fn submitted_email(&self) -> Option<&str> {
        match self {
            LeadCapture::Submitted { email } => Some(email),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn visible_panels(state: &LeadCapture) -> usize {
        [
            state.shows_call_to_action(),
            state.shows_form(),
            state.submitted_email().is_some(),
        ]
        .iter()
        .filter(|shown| **shown)
        .count()
    }

    mod initial_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn shows_only_the_call_to_action() {
            let state = LeadCapture::default();
            assert!(state.shows_call_to_action());
            assert!(!state.shows_form());
            assert_eq!(state.submitted_email(), None);
        }

        #[test]
        fn has_no_role_and_no_error() {
            let state = LeadCapture::default();
            assert_eq!(state.role(), None);
            assert_eq!(state.error(), None);
        }
    }

    mod opening {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn records_the_chosen_role() {
            let state = LeadCapture::default().open_form(Role::Cro);
            assert!(state.shows_form());
            assert_eq!(state.role(), Some(Role::Cro));
        }

        #[test]
        fn never_shows_the_thank_you_panel() {
            let state = LeadCapture::default().open_form(Role::Sponsor);
            assert_eq!(state.submitted_email(), None);
        }

        #[test]
        fn reopening_switches_the_role_and_clears_the_error() {
            let state = LeadCapture::FormOpen {
                role: Role::Sponsor,
                error: Some("try again".to_string()),
            };
            let reopened = state.open_form(Role::Site);
            assert_eq!(reopened.role(), Some(Role::Site));
            assert_eq!(reopened.error(), None);
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn disables_the_control_surface() {
            let state = LeadCapture::default()
                .open_form(Role::Sponsor)
                .begin_submit();
            assert!(state.is_submitting());
            assert!(state.shows_form());
        }

        #[test]
        fn is_only_reachable_from_an_open_form() {
            let state = LeadCapture::default().begin_submit();
            assert_eq!(state, LeadCapture::Idle);
        }

        #[test]
        fn success_captures_the_exact_email() {
            let state = LeadCapture::default()
                .open_form(Role::Sponsor)
                .begin_submit()
                .succeed("jane@example.com".to_string());
            assert_eq!(state.submitted_email(), Some("jane@example.com"));
        }

        #[test]
        fn success_outside_a_submission_is_ignored() {
            let state = LeadCapture::default().succeed("jane@example.com".to_string());
            assert_eq!(state, LeadCapture::Idle);
        }

        #[test]
        fn failure_reopens_the_form_with_the_message() {
            let state = LeadCapture::default()
                .open_form(Role::Site)
                .begin_submit()
                .fail("server unreachable".to_string());
            assert!(state.shows_form());
            assert!(!state.is_submitting());
            assert_eq!(state.role(), Some(Role::Site));
            assert_eq!(state.error(), Some("server unreachable"));
        }

        #[test]
        fn a_retry_after_failure_can_still_succeed() {
            let state = LeadCapture::default()
                .open_form(Role::Site)
                .begin_submit()
                .fail("server unreachable".to_string())
                .begin_submit()
                .succeed("coordinator@site.org".to_string());
            assert_eq!(state.submitted_email(), Some("coordinator@site.org"));
        }
    }

    mod submitted {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn hides_the_form_and_the_call_to_action() {
            let state = LeadCapture::Submitted {
                email: "jane@example.com".to_string(),
            };
            assert!(!state.shows_form());
            assert!(!state.shows_call_to_action());
        }

        #[test]
        fn opening_the_form_again_is_a_no_op() {
            let state = LeadCapture::Submitted {
                email: "jane@example.com".to_string(),
            };
            let after = state.open_form(Role::Sponsor);
            assert_eq!(after, state);
        }
    }

    mod display_invariant {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn every_state_shows_exactly_one_panel() {
            let states = [
                LeadCapture::Idle,
                LeadCapture::FormOpen {
                    role: Role::Sponsor,
                    error: None,
                },
                LeadCapture::FormOpen {
                    role: Role::Site,
                    error: Some("failed".to_string()),
                },
                LeadCapture::Submitting { role: Role::Cro },
                LeadCapture::Submitted {
                    email: "jane@example.com".to_string(),
                },
            ];
            for state in &states {
                assert_eq!(visible_panels(state), 1, "state: {:?}", state);
            }
        }
    }
}
