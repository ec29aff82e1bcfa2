//! Assertion helpers for robot tests.

use stackpose_layout::CardVisuals;

/// Assert that a value is within `tolerance` of `expected`.
///
/// Useful for fuzzy matching of interpolated values that accumulate float
/// error over many frames.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{msg}: expected {expected} (±{tolerance}), got {actual} (diff: {diff})"
    );
}

/// Assert that a card is fully expanded: unit scale and opacity, no
/// translate, untouched margin.
pub fn assert_card_expanded(card: &CardVisuals, msg: &str) {
    assert_eq!(card.scale, 1.0, "{msg}: scale");
    assert_eq!(card.opacity, 1.0, "{msg}: opacity");
    assert_eq!(card.translate, 0.0, "{msg}: translate");
}

/// Assert that a card is fully collapsed and invisible.
pub fn assert_card_collapsed(card: &CardVisuals, msg: &str) {
    assert_eq!(card.scale, 0.0, "{msg}: scale");
    assert_eq!(card.opacity, 0.0, "{msg}: opacity");
    assert_eq!(card.margin, 0.0, "{msg}: margin");
}

/// Assert that a card is somewhere inside its collapse transition.
pub fn assert_card_in_transition(card: &CardVisuals, msg: &str) {
    assert!(
        card.opacity < 1.0 || card.scale < 1.0,
        "{msg}: card is still fully expanded: {card:?}"
    );
    assert!(
        card.opacity > 0.0 || card.scale > 0.0,
        "{msg}: card is already fully collapsed: {card:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_accepts_within_tolerance() {
        assert_approx_eq(100.0, 100.0, 0.1, "exact match");
        assert_approx_eq(100.05, 100.0, 0.1, "within tolerance");
    }

    #[test]
    #[should_panic(expected = "should fail")]
    fn approx_eq_rejects_outside_tolerance() {
        assert_approx_eq(100.5, 100.0, 0.1, "should fail");
    }

    #[test]
    fn card_state_assertions() {
        let expanded = CardVisuals {
            offset: 0.0,
            scale: 1.0,
            opacity: 1.0,
            translate: 0.0,
            margin: 8.0,
        };
        assert_card_expanded(&expanded, "expanded card");

        let collapsed = CardVisuals {
            offset: 150.0,
            scale: 0.0,
            opacity: 0.0,
            translate: 0.0,
            margin: 0.0,
        };
        assert_card_collapsed(&collapsed, "collapsed card");
    }
}
