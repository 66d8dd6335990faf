//! Hue/saturation/brightness/alpha colors and their interpolation.

/// Color in HSB space: hue in degrees [0, 360), saturation and brightness in
/// percent [0, 100], alpha in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Hsba {
    pub const fn new(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// Interpolate toward `target` by `t`.
    ///
    /// Hue travels the shorter way around the color wheel, so easing from
    /// 350° to 10° passes through 0° rather than sweeping back through green.
    pub fn lerp(self, target: Hsba, t: f32) -> Hsba {
        let mut delta = (target.hue - self.hue).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }

        Hsba {
            hue: (self.hue + delta * t).rem_euclid(360.0),
            saturation: self.saturation + (target.saturation - self.saturation) * t,
            brightness: self.brightness + (target.brightness - self.brightness) * t,
            alpha: self.alpha + (target.alpha - self.alpha) * t,
        }
    }

    /// Convert to linear-ish RGBA in [0, 1] (no gamma handling)
    pub fn to_rgba(self) -> [f32; 4] {
        let [r, g, b] = hsb_to_rgb(self.hue, self.saturation, self.brightness);
        [r, g, b, self.alpha.clamp(0.0, 1.0)]
    }
}

/// HSB (degrees, percent, percent) to RGB in [0, 1]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let v = (brightness / 100.0).clamp(0.0, 1.0);

    let chroma = v * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_lerp_takes_short_way_across_zero() {
        let from = Hsba::new(350.0, 100.0, 80.0, 1.0);
        let to = Hsba::new(10.0, 100.0, 80.0, 1.0);

        let mid = from.lerp(to, 0.5);
        assert!(approx(mid.hue, 0.0) || approx(mid.hue, 360.0));

        let step = from.lerp(to, 0.1);
        assert!(approx(step.hue, 352.0));
    }

    #[test]
    fn test_lerp_short_way_backwards() {
        let from = Hsba::new(10.0, 100.0, 80.0, 1.0);
        let to = Hsba::new(350.0, 100.0, 80.0, 1.0);

        let step = from.lerp(to, 0.5);
        assert!(approx(step.hue, 0.0) || approx(step.hue, 360.0));
    }

    #[test]
    fn test_lerp_blends_other_components_linearly() {
        let from = Hsba::new(0.0, 100.0, 100.0, 1.0);
        let to = Hsba::new(90.0, 100.0, 80.0, 0.2);

        let step = from.lerp(to, 0.1);
        assert!(approx(step.hue, 9.0));
        assert!(approx(step.brightness, 98.0));
        assert!(approx(step.alpha, 0.92));
    }

    #[test]
    fn test_lerp_fixed_point() {
        let color = Hsba::new(123.0, 100.0, 80.0, 0.4);
        assert_eq!(color.lerp(color, 0.1), color);
    }

    #[test]
    fn test_hsb_to_rgb_primaries() {
        assert_eq!(hsb_to_rgb(0.0, 100.0, 100.0), [1.0, 0.0, 0.0]);
        assert_eq!(hsb_to_rgb(120.0, 100.0, 100.0), [0.0, 1.0, 0.0]);
        assert_eq!(hsb_to_rgb(240.0, 100.0, 100.0), [0.0, 0.0, 1.0]);
        assert_eq!(hsb_to_rgb(77.0, 0.0, 50.0), [0.5, 0.5, 0.5]);
        assert_eq!(hsb_to_rgb(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
    }
}
