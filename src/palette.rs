use cgmath::Vector4;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA value for the color uniform.
    pub fn to_vec4(self) -> Vector4<f32> {
        Vector4::new(self.r, self.g, self.b, 1.0)
    }
}

impl Default for Color {
    /// The quad starts out in the first preset.
    fn default() -> Self {
        PRESETS[0]
    }
}

/// Presets selected by the digit keys 1 to 8, in that order.
pub const PRESETS: [Color; 8] = [
    Color::new(0.0, 0.0, 1.0),
    Color::new(0.0, 1.0, 0.0),
    Color::new(1.0, 0.0, 0.0),
    Color::new(0.0, 0.5, 1.0),
    Color::new(0.5, 0.0, 1.0),
    Color::new(1.0, 0.5, 0.5),
    Color::new(1.0, 0.5, 1.0),
    Color::new(0.5, 1.0, 1.0),
];

/// Preset for digit `n`, `None` for anything outside 1..=8.
pub fn select_preset(n: u8) -> Option<Color> {
    match n {
        1..=8 => Some(PRESETS[n as usize - 1]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_table() {
        assert_eq!(select_preset(1), Some(Color::new(0.0, 0.0, 1.0)));
        assert_eq!(select_preset(2), Some(Color::new(0.0, 1.0, 0.0)));
        assert_eq!(select_preset(3), Some(Color::new(1.0, 0.0, 0.0)));
        assert_eq!(select_preset(4), Some(Color::new(0.0, 0.5, 1.0)));
        assert_eq!(select_preset(5), Some(Color::new(0.5, 0.0, 1.0)));
        assert_eq!(select_preset(6), Some(Color::new(1.0, 0.5, 0.5)));
        assert_eq!(select_preset(7), Some(Color::new(1.0, 0.5, 1.0)));
        assert_eq!(select_preset(8), Some(Color::new(0.5, 1.0, 1.0)));
    }

    #[test]
    fn other_digits_select_nothing() {
        assert_eq!(select_preset(0), None);
        assert_eq!(select_preset(9), None);
        assert_eq!(select_preset(255), None);
    }

    #[test]
    fn default_is_first_preset() {
        assert_eq!(Color::default(), PRESETS[0]);
    }

    #[test]
    fn uniform_is_opaque() {
        assert_eq!(PRESETS[5].to_vec4(), Vector4::new(1.0, 0.5, 0.5, 1.0));
    }
}
