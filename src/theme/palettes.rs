//! Built-in palettes

use ratatui::style::Color;

use super::Theme;

/// Dark palette with green accents
pub const LEDGER: Theme = Theme {
    name: String::new(),

    bg_primary: Color::Rgb(22, 27, 29),   // #161b1d
    bg_secondary: Color::Rgb(31, 38, 41), // #1f2629

    fg_primary: Color::Rgb(214, 222, 219),   // #d6dedb
    fg_secondary: Color::Rgb(238, 243, 240), // #eef3f0
    fg_muted: Color::Rgb(122, 138, 133),     // #7a8a85

    accent_primary: Color::Rgb(52, 168, 123),   // #34a87b
    accent_secondary: Color::Rgb(88, 151, 214), // #5897d6

    success: Color::Rgb(120, 200, 120), // #78c878
    warning: Color::Rgb(230, 180, 90),  // #e6b45a
    error: Color::Rgb(232, 104, 104),   // #e86868
    info: Color::Rgb(110, 190, 230),    // #6ebee6

    kind_video: Color::Rgb(232, 120, 150),       // #e87896
    kind_reading: Color::Rgb(110, 170, 230),     // #6eaae6
    kind_interactive: Color::Rgb(190, 150, 240), // #be96f0
    kind_quiz: Color::Rgb(235, 190, 100),        // #ebbe64

    border: Color::Rgb(58, 70, 72),          // #3a4648
    border_focused: Color::Rgb(52, 168, 123), // #34a87b
    selection: Color::Rgb(38, 62, 55),       // #263e37
    gauge_track: Color::Rgb(45, 54, 57),     // #2d3639
};

/// Light palette for bright terminals
pub const PAPER: Theme = Theme {
    name: String::new(),

    bg_primary: Color::Rgb(250, 248, 242),   // #faf8f2
    bg_secondary: Color::Rgb(238, 235, 226), // #eeebe2

    fg_primary: Color::Rgb(52, 56, 60),   // #34383c
    fg_secondary: Color::Rgb(20, 24, 28), // #14181c
    fg_muted: Color::Rgb(128, 130, 124),  // #80827c

    accent_primary: Color::Rgb(24, 128, 92),   // #18805c
    accent_secondary: Color::Rgb(40, 96, 170), // #2860aa

    success: Color::Rgb(46, 140, 60),  // #2e8c3c
    warning: Color::Rgb(180, 120, 20), // #b47814
    error: Color::Rgb(190, 50, 50),    // #be3232
    info: Color::Rgb(30, 120, 170),    // #1e78aa

    kind_video: Color::Rgb(196, 60, 100),       // #c43c64
    kind_reading: Color::Rgb(40, 100, 180),     // #2864b4
    kind_interactive: Color::Rgb(130, 80, 190), // #8250be
    kind_quiz: Color::Rgb(170, 110, 10),        // #aa6e0a

    border: Color::Rgb(200, 196, 184),        // #c8c4b8
    border_focused: Color::Rgb(24, 128, 92),  // #18805c
    selection: Color::Rgb(220, 236, 226),     // #dcece2
    gauge_track: Color::Rgb(226, 222, 212),   // #e2ded4
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_rgb() {
        for theme in [Theme::ledger(), Theme::paper()] {
            assert!(matches!(theme.bg_primary, Color::Rgb(_, _, _)));
            assert!(matches!(theme.accent_primary, Color::Rgb(_, _, _)));
        }
    }

    #[test]
    fn named_constructors_fill_in_names() {
        assert_eq!(Theme::ledger().name, "Ledger");
        assert_eq!(Theme::paper().name, "Paper");
    }
}
