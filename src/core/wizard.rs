//! Linear verification wizard shown during onboarding.

/// One screen of the wizard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VERIFICATION_STEPS: [VerificationStep; 3] = [
    VerificationStep {
        title: "Your email",
        description: "We use it to keep your study sets and receipts safe.",
    },
    VerificationStep {
        title: "Confirm this device",
        description: "Check your inbox for a confirmation link, then continue.",
    },
    VerificationStep {
        title: "You're all set",
        description: "Your account is protected. Happy studying!",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Step index into a fixed number of steps, always within `[0, len - 1]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationWizard {
    step: usize,
    len: usize,
}

impl VerificationWizard {
    /// A wizard needs at least one step; `0` is treated as `1`.
    pub fn new(len: usize) -> Self {
        Self {
            step: 0,
            len: len.max(1),
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 == self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.step == index
    }

    /// Advance one step. Leaving the first step needs an email containing `@`.
    pub fn next(&mut self, email: &str) -> Result<usize, WizardError> {
        if self.step == 0 && !looks_like_email(email) {
            return Err(WizardError::InvalidEmail);
        }

        if !self.is_last() {
            self.step += 1;
        }
        Ok(self.step)
    }

    /// Go back one step, stopping at the first
    pub fn prev(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }
}

impl Default for VerificationWizard {
    fn default() -> Self {
        Self::new(VERIFICATION_STEPS.len())
    }
}

fn looks_like_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}
