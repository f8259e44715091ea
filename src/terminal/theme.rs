use crossterm::style::Color;

pub struct Theme {
    pub header: Color, // Blue
    pub error: Color,  // Red
}

pub const DEFAULT_THEME: Theme = Theme {
    header: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
};
