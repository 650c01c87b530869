//! Entrance, hover and scroll-reveal parameters for the premium page.

/// Delay between consecutive pricing card entrances
pub const ENTRANCE_STAGGER_MS: usize = 200;

/// Elements revealed when they scroll into view
pub const REVEAL_SELECTOR: &str = ".pricing-card, .faq-item, .step-card";

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so reveals start slightly early
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEALED_OPACITY: &str = "1";
pub const REVEALED_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Value of `animation-delay` for the card at `index`
pub fn entrance_delay(index: usize) -> String {
    format!("{}ms", index * ENTRANCE_STAGGER_MS)
}

/// Pointer state of a pricing card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardHover {
    #[default]
    Resting,
    Lifted,
}

impl CardHover {
    pub fn transform(&self) -> &'static str {
        match self {
            CardHover::Resting => "translateY(0) scale(1)",
            CardHover::Lifted => "translateY(-10px) scale(1.02)",
        }
    }
}
