use crate::Probability;
use plotters::style::RGBColor;

/// Anchor colors of the viridis colormap, evenly spaced over [0, 1].
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Viridis color at `t`, clamped to [0, 1] and linearly interpolated.
pub fn viridis(t: Probability) -> RGBColor {
    let t = match t.is_nan() {
        true => 0.,
        false => t.clamp(0., 1.),
    };
    let x = t * (VIRIDIS.len() - 1) as Probability;
    let i = (x.floor() as usize).min(VIRIDIS.len() - 2);
    let f = x - i as Probability;
    let lerp = |a: u8, b: u8| (a as Probability + (b as Probability - a as Probability) * f).round() as u8;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Maps values linearly onto [0, 1] between the matrix minimum and maximum.
pub struct Normalize {
    lo: Probability,
    hi: Probability,
}

impl Normalize {
    pub fn fit(matrix: &[Vec<Probability>]) -> Self {
        let values = matrix.iter().flatten().copied().filter(|v| v.is_finite());
        let (lo, hi) = values.fold((Probability::INFINITY, Probability::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        Self { lo, hi }
    }
    pub fn scale(&self, value: Probability) -> Probability {
        match self.hi > self.lo {
            true => (value - self.lo) / (self.hi - self.lo),
            false => 0.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(viridis(0.), RGBColor(68, 1, 84));
        assert_eq!(viridis(1.), RGBColor(253, 231, 37));
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(viridis(-3.), viridis(0.));
        assert_eq!(viridis(7.), viridis(1.));
        assert_eq!(viridis(f64::NAN), viridis(0.));
    }

    #[test]
    fn normalizes_between_extremes() {
        let norm = Normalize::fit(&[vec![0.5, 0.3], vec![0.1, 0.9]]);
        assert_eq!(norm.scale(0.1), 0.);
        assert_eq!(norm.scale(0.9), 1.);
        assert!((norm.scale(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn flat_matrix_scales_to_zero() {
        let norm = Normalize::fit(&[vec![0.4, 0.4]]);
        assert_eq!(norm.scale(0.4), 0.);
        let norm = Normalize::fit(&[]);
        assert_eq!(norm.scale(0.4), 0.);
    }
}
