use console::Style;
use once_cell::sync::Lazy;

use teachhub::schedule::SubjectColor;

// Accent colours cycled across roster rows, in card order: blue, purple,
// green, orange, pink, indigo.
static ROSTER_PALETTE: Lazy<[Style; 6]> = Lazy::new(|| {
    [
        Style::new().blue(),
        Style::new().color256(129),
        Style::new().green(),
        Style::new().color256(208),
        Style::new().color256(205),
        Style::new().color256(63),
    ]
});

pub(super) fn roster_style(index: usize) -> &'static Style {
    &ROSTER_PALETTE[index % ROSTER_PALETTE.len()]
}

pub(super) fn subject_style(color: SubjectColor) -> Style {
    match color {
        SubjectColor::Blue => Style::new().blue(),
        SubjectColor::Green => Style::new().green(),
        SubjectColor::Purple => Style::new().color256(129),
        SubjectColor::Pink => Style::new().color256(205),
        SubjectColor::Orange => Style::new().color256(208),
        SubjectColor::Indigo => Style::new().color256(63),
        SubjectColor::Gray => Style::new().dim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(roster_style(0) as *const _, roster_style(6) as *const _);
        assert_ne!(roster_style(0) as *const _, roster_style(1) as *const _);
    }

    #[test]
    fn every_subject_color_has_a_style() {
        for color in [
            SubjectColor::Blue,
            SubjectColor::Green,
            SubjectColor::Purple,
            SubjectColor::Pink,
            SubjectColor::Orange,
            SubjectColor::Indigo,
            SubjectColor::Gray,
        ] {
            let _ = subject_style(color);
        }
    }
}
