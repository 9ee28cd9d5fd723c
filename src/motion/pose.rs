use std::fmt::Write;

/// Animatable visual properties of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub rotate: f64,
    pub rotate_x: f64,
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
    };

    /// Invisible, otherwise untransformed. Most cues start here.
    pub const HIDDEN: Pose = Pose { opacity: 0.0, ..Pose::REST };

    pub fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub fn y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub fn scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn scale_x(self, scale_x: f64) -> Self {
        Self { scale_x, ..self }
    }

    pub fn rotate(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    pub fn rotate_x(self, rotate_x: f64) -> Self {
        Self { rotate_x, ..self }
    }

    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            scale_x: mix(self.scale_x, to.scale_x),
            rotate: mix(self.rotate, to.rotate),
            rotate_x: mix(self.rotate_x, to.rotate_x),
        }
    }

    /// Component-wise comparison with a tolerance, for sampled values.
    #[cfg(test)]
    pub fn approx_eq(&self, other: &Pose, eps: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= eps;
        close(self.opacity, other.opacity)
            && close(self.x, other.x)
            && close(self.y, other.y)
            && close(self.scale, other.scale)
            && close(self.scale_x, other.scale_x)
            && close(self.rotate, other.rotate)
            && close(self.rotate_x, other.rotate_x)
    }

    pub fn transform(&self) -> String {
        let mut out = format!("translate({}px, {}px)", fmt_num(self.x), fmt_num(self.y));
        if self.scale != 1.0 {
            let _ = write!(out, " scale({})", fmt_num(self.scale));
        }
        if self.scale_x != 1.0 {
            let _ = write!(out, " scaleX({})", fmt_num(self.scale_x));
        }
        if self.rotate != 0.0 {
            let _ = write!(out, " rotate({}deg)", fmt_num(self.rotate));
        }
        if self.rotate_x != 0.0 {
            let _ = write!(out, " rotateX({}deg)", fmt_num(self.rotate_x));
        }
        out
    }

    pub fn css(&self) -> String {
        format!("opacity: {}; transform: {};", fmt_num(self.opacity), self.transform())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Progress curve of a tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_pin_endpoints_and_stay_monotonic() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
            let mut last = 0.0;
            for i in 0..=100 {
                let v = easing.apply(i as f64 / 100.0);
                assert!(v >= last, "{:?} not monotonic at {}", easing, i);
                last = v;
            }
        }
    }

    #[test]
    fn easing_clamps_out_of_range_progress() {
        assert_eq!(Easing::EaseOut.apply(-3.0), 0.0);
        assert!((Easing::EaseOut.apply(7.0) - 1.0).abs() < 1e-12);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn ease_out_leads_ease_in() {
        assert!(Easing::EaseOut.apply(0.3) > Easing::Linear.apply(0.3));
        assert!(Easing::EaseIn.apply(0.3) < Easing::Linear.apply(0.3));
    }

    #[test]
    fn lerp_hits_both_ends() {
        let from = Pose::HIDDEN.y(30.0).scale(0.8);
        let to = Pose::REST;
        assert_eq!(from.lerp(to, 0.0), from);
        assert!(from.lerp(to, 1.0).approx_eq(&to, 1e-12));
        let mid = from.lerp(to, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-12);
        assert!((mid.y - 15.0).abs() < 1e-12);
    }

    #[test]
    fn css_omits_identity_transforms() {
        assert_eq!(Pose::REST.css(), "opacity: 1; transform: translate(0px, 0px);");
        assert_eq!(
            Pose::HIDDEN.x(-100.0).css(),
            "opacity: 0; transform: translate(-100px, 0px);"
        );
        assert_eq!(
            Pose::HIDDEN.y(50.0).rotate_x(15.0).transform(),
            "translate(0px, 50px) rotateX(15deg)"
        );
        assert_eq!(
            Pose::HIDDEN.scale_x(0.0).transform(),
            "translate(0px, 0px) scaleX(0)"
        );
    }
}
