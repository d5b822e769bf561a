//! Randomized decorative field for the landing page background.
//!
//! Twenty floating shapes are sampled fresh on every mount, so the field
//! never looks the same twice. All parameters are uniform draws over
//! fixed bounds; the uniform source is injected so sampling stays
//! testable off-browser (the component passes `js_sys::Math::random`).

/// Number of floating objects per field.
pub const FLOATING_OBJECT_COUNT: usize = 20;

/// Shape variants, each backed by a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Triangle,
    Hexagon,
}

const SHAPES: [Shape; 3] = [Shape::Circle, Shape::Triangle, Shape::Hexagon];

impl Shape {
    pub fn css_class(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Hexagon => "hexagon",
        }
    }
}

/// Palette entries, resolved to CSS custom properties at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    NeonBlue,
    DeepPurple,
    BrightPink,
}

const PALETTE: [PaletteColor; 3] = [
    PaletteColor::NeonBlue,
    PaletteColor::DeepPurple,
    PaletteColor::BrightPink,
];

impl PaletteColor {
    pub fn css_value(self) -> &'static str {
        match self {
            PaletteColor::NeonBlue => "var(--neon-blue)",
            PaletteColor::DeepPurple => "var(--deep-purple)",
            PaletteColor::BrightPink => "var(--bright-pink)",
        }
    }
}

/// One sampled descriptor. Pure data; rendering maps it to a class name
/// and an inline style.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingObject {
    pub shape: Shape,
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub color: PaletteColor,
    pub delay_s: f64,
    pub duration_s: f64,
    pub blur_px: f64,
    pub opacity: f64,
}

impl FloatingObject {
    /// Sample one descriptor. `draw` must yield uniform values in [0, 1).
    /// Draw order is fixed, so a scripted source fully determines the
    /// result.
    pub fn sample(draw: &mut impl FnMut() -> f64) -> Self {
        Self {
            shape: pick(&SHAPES, draw()),
            left_pct: draw() * 100.0,
            top_pct: draw() * 100.0,
            width_px: draw() * 50.0 + 20.0,
            height_px: draw() * 50.0 + 20.0,
            color: pick(&PALETTE, draw()),
            delay_s: draw() * 5.0,
            duration_s: draw() * 10.0 + 5.0,
            blur_px: draw() * 2.0,
            opacity: draw() * 0.5 + 0.3,
        }
    }

    pub fn css_class(&self) -> String {
        format!("floating-object {}", self.shape.css_class())
    }

    pub fn inline_style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.1}px;height:{:.1}px;background-color:{};animation-delay:{:.2}s;animation-duration:{:.2}s;filter:blur({:.2}px);opacity:{:.2};",
            self.left_pct,
            self.top_pct,
            self.width_px,
            self.height_px,
            self.color.css_value(),
            self.delay_s,
            self.duration_s,
            self.blur_px,
            self.opacity,
        )
    }
}

fn pick<T: Copy>(set: &[T], roll: f64) -> T {
    let idx = (roll * set.len() as f64) as usize;
    set[idx.min(set.len() - 1)]
}

/// Sample a full field of decorations.
pub fn floating_field(mut draw: impl FnMut() -> f64) -> Vec<FloatingObject> {
    (0..FLOATING_OBJECT_COUNT)
        .map(|_| FloatingObject::sample(&mut draw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic uniform source for bound checks.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn test_field_size_is_fixed() {
        assert_eq!(floating_field(lcg(1)).len(), FLOATING_OBJECT_COUNT);
        assert_eq!(floating_field(|| 0.0).len(), FLOATING_OBJECT_COUNT);
    }

    #[test]
    fn test_all_parameters_within_bounds() {
        let mut draw = lcg(42);
        for _ in 0..100 {
            let o = FloatingObject::sample(&mut draw);
            assert!((0.0..100.0).contains(&o.left_pct));
            assert!((0.0..100.0).contains(&o.top_pct));
            assert!((20.0..70.0).contains(&o.width_px));
            assert!((20.0..70.0).contains(&o.height_px));
            assert!((0.0..5.0).contains(&o.delay_s));
            assert!((5.0..15.0).contains(&o.duration_s));
            assert!((0.0..2.0).contains(&o.blur_px));
            assert!((0.3..0.8).contains(&o.opacity));
        }
    }

    #[test]
    fn test_lower_bounds_at_zero_roll() {
        let o = FloatingObject::sample(&mut || 0.0);
        assert_eq!(o.shape, Shape::Circle);
        assert_eq!(o.color, PaletteColor::NeonBlue);
        assert_eq!(o.left_pct, 0.0);
        assert_eq!(o.top_pct, 0.0);
        assert_eq!(o.width_px, 20.0);
        assert_eq!(o.height_px, 20.0);
        assert_eq!(o.delay_s, 0.0);
        assert_eq!(o.duration_s, 5.0);
        assert_eq!(o.blur_px, 0.0);
        assert_eq!(o.opacity, 0.3);
    }

    #[test]
    fn test_upper_bounds_near_one_roll() {
        let almost_one = 1.0 - f64::EPSILON;
        let o = FloatingObject::sample(&mut || almost_one);
        assert_eq!(o.shape, Shape::Hexagon);
        assert_eq!(o.color, PaletteColor::BrightPink);
        assert!(o.left_pct < 100.0);
        assert!(o.width_px < 70.0);
        assert!(o.duration_s < 15.0);
        assert!(o.opacity < 0.8);
    }

    #[test]
    fn test_pick_thirds_map_to_variants() {
        assert_eq!(pick(&SHAPES, 0.0), Shape::Circle);
        assert_eq!(pick(&SHAPES, 0.34), Shape::Triangle);
        assert_eq!(pick(&SHAPES, 0.67), Shape::Hexagon);
        assert_eq!(pick(&PALETTE, 0.5), PaletteColor::DeepPurple);
    }

    #[test]
    fn test_scripted_draws_determine_descriptor() {
        let script = [0.5, 0.25, 0.75, 0.0, 1.0 - f64::EPSILON, 0.9, 0.2, 0.5, 0.5, 0.0];
        let mut i = 0;
        let o = FloatingObject::sample(&mut || {
            let v = script[i];
            i += 1;
            v
        });
        assert_eq!(o.shape, Shape::Triangle);
        assert_eq!(o.left_pct, 25.0);
        assert_eq!(o.top_pct, 75.0);
        assert_eq!(o.width_px, 20.0);
        assert_eq!(o.color, PaletteColor::BrightPink);
        assert_eq!(o.delay_s, 1.0);
        assert_eq!(o.duration_s, 10.0);
        assert_eq!(o.blur_px, 1.0);
        assert_eq!(o.opacity, 0.3);
    }

    #[test]
    fn test_inline_style_carries_every_parameter() {
        let style = FloatingObject::sample(&mut || 0.0).inline_style();
        assert!(style.contains("left:0.00%"));
        assert!(style.contains("top:0.00%"));
        assert!(style.contains("width:20.0px"));
        assert!(style.contains("height:20.0px"));
        assert!(style.contains("background-color:var(--neon-blue)"));
        assert!(style.contains("animation-delay:0.00s"));
        assert!(style.contains("animation-duration:5.00s"));
        assert!(style.contains("filter:blur(0.00px)"));
        assert!(style.contains("opacity:0.30"));
    }

    #[test]
    fn test_css_class_includes_shape() {
        let o = FloatingObject::sample(&mut || 0.0);
        assert_eq!(o.css_class(), "floating-object circle");
    }
}
