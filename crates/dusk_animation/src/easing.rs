//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    ///
    /// Input is clamped, and the endpoints map to exactly 0.0 and 1.0.
    pub fn apply(&self, t: f32) -> f32 {
        if !(t > 0.0) {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseIn | Easing::EaseInCubic => t * t * t,
            Easing::EaseOut | Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut | Easing::EaseInOutCubic => in_out(t, 3, 4.0),
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => in_out(t, 2, 2.0),
            Easing::EaseInQuart => t * t * t * t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOutQuart => in_out(t, 4, 8.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }

    /// Whether the curve is non-decreasing and stays inside 0.0..=1.0.
    ///
    /// Named curves always are. A cubic bezier is when all four control
    /// coordinates lie in 0.0..=1.0.
    pub fn is_monotonic(&self) -> bool {
        match self {
            Easing::CubicBezier(x1, y1, x2, y2) => [x1, y1, x2, y2]
                .iter()
                .all(|c| (0.0..=1.0).contains(*c)),
            _ => true,
        }
    }
}

/// Symmetric polynomial in-out curve: `k * t^n` for the first half,
/// mirrored for the second.
#[inline]
fn in_out(t: f32, n: i32, k: f32) -> f32 {
    if t < 0.5 {
        k * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0
    }
}

/// Cubic bezier easing with fixed endpoints (0,0) and (1,1), as in CSS.
///
/// Solves `x(p) = t` with Newton-Raphson, falling back to bisection when the
/// slope flattens out. Runs in f64 to keep frame-to-frame output stable.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..24 {
        let value = bezier_sample(p, x1, x2);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// B(p) = 3(1-p)²p·c1 + 3(1-p)p²·c2 + p³, in Horner form
#[inline]
fn bezier_sample(p: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    ((a * p + b) * p + c) * p
}

#[inline]
fn bezier_slope(p: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    (3.0 * a * p + 2.0 * b) * p + c
}
