use clap::ValueEnum;
use derive_more::Display;

use super::convert::{ColorCoordinates, Lab, Lch, hue_degrees};

/// Strategy used to score how far apart two colors are.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, ValueEnum)]
pub enum DifferenceMetric {
    /// CIEDE2000, perceptually uniform. The default.
    #[default]
    #[display("CIEDE2000")]
    Ciede2000,
    /// Euclidean distance over (L, C, H) with hue as a plain linear axis.
    /// Cheaper, but overstates differences for hues near the 0/360 seam.
    #[display("Euclidean LCH")]
    EuclideanLch,
}

impl DifferenceMetric {
    /// Difference between two colors under this strategy.
    ///
    /// Zero only when the underlying Lab coordinates are identical; the
    /// same pair of inputs always produces the same score.
    pub fn difference(self, first: &ColorCoordinates, second: &ColorCoordinates) -> f64 {
        match self {
            Self::Ciede2000 => ciede2000(&first.lab, &second.lab),
            Self::EuclideanLch => euclidean_lch(&first.lch, &second.lch),
        }
    }
}

const POW7_25: f64 = 6_103_515_625.0;

/// CIEDE2000 color difference between two Lab colors.
///
/// Standard formula with kL = kC = kH = 1. Hue means and differences wrap
/// at 360 degrees: when the raw angles sit more than 180 degrees apart,
/// the mean gains 360 while the angle sum stays below 360 and loses it
/// otherwise, so colors on both sides of the 0/360 seam compare sanely.
fn ciede2000(first: &Lab, second: &Lab) -> f64 {
    let (l1, a1, b1) = (first.l, first.a, first.b);
    let (l2, a2, b2) = (second.l, second.a, second.b);

    let mean_l = (l1 + l2) / 2.0;
    let chroma_1 = a1.hypot(b1);
    let chroma_2 = a2.hypot(b2);
    let mean_chroma = (chroma_1 + chroma_2) / 2.0;

    // Rescale the a axis to compensate for low-chroma instability.
    let g = 0.5 * (1.0 - (mean_chroma.powi(7) / (mean_chroma.powi(7) + POW7_25)).sqrt());
    let a1_adj = (1.0 + g) * a1;
    let a2_adj = (1.0 + g) * a2;
    let chroma_1_adj = a1_adj.hypot(b1);
    let chroma_2_adj = a2_adj.hypot(b2);
    let mean_chroma_adj = (chroma_1_adj + chroma_2_adj) / 2.0;

    let h1 = b1.atan2(a1_adj).to_degrees().rem_euclid(360.0);
    let h2 = b2.atan2(a2_adj).to_degrees().rem_euclid(360.0);

    let mean_hue = if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (mean_hue - 30.0).to_radians().cos()
        + 0.24 * (2.0 * mean_hue).to_radians().cos()
        + 0.32 * (3.0 * mean_hue + 6.0).to_radians().cos()
        - 0.20 * (4.0 * mean_hue - 63.0).to_radians().cos();

    let delta_hue = if (h2 - h1).abs() <= 180.0 {
        h2 - h1
    } else if h2 <= h1 {
        h2 - h1 + 360.0
    } else {
        h2 - h1 - 360.0
    };

    let delta_l = l2 - l1;
    let delta_chroma = chroma_2_adj - chroma_1_adj;
    let delta_h_term =
        2.0 * (chroma_1_adj * chroma_2_adj).sqrt() * (delta_hue / 2.0).to_radians().sin();

    let s_l = 1.0
        + (0.015 * (mean_l - 50.0).powi(2)) / (20.0 + (mean_l - 50.0).powi(2)).sqrt();
    let s_c = 1.0 + 0.045 * mean_chroma_adj;
    let s_h = 1.0 + 0.015 * mean_chroma_adj * t;
    let r_t = -2.0
        * (mean_chroma_adj.powi(7) / (mean_chroma_adj.powi(7) + POW7_25)).sqrt()
        * (60.0 * (-((mean_hue - 275.0) / 25.0).powi(2)).exp())
            .to_radians()
            .sin();

    ((delta_l / s_l).powi(2)
        + (delta_chroma / s_c).powi(2)
        + (delta_h_term / s_h).powi(2)
        + r_t * (delta_chroma / s_c) * (delta_h_term / s_h))
        .sqrt()
}

/// Euclidean distance in LCH, treating the hue angle as a linear axis.
fn euclidean_lch(first: &Lch, second: &Lch) -> f64 {
    let delta_l = first.l - second.l;
    let delta_chroma = first.chroma - second.chroma;
    let delta_hue = hue_degrees(first) - hue_degrees(second);
    (delta_l * delta_l + delta_chroma * delta_chroma + delta_hue * delta_hue).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference pairs from Sharma, Wu and Dalal (2005), "The CIEDE2000
    // Color-Difference Formula: Implementation Notes, Supplementary Test
    // Data, and Mathematical Observations".
    const REFERENCE_PAIRS: [([f64; 3], [f64; 3], f64); 34] = [
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
        ([50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485], 2.8615),
        ([50.0, 2.8361, -74.02], [50.0, 0.0, -82.7485], 3.4412),
        ([50.0, -1.3802, -84.2814], [50.0, 0.0, -82.7485], 1.0),
        ([50.0, -1.1848, -84.8006], [50.0, 0.0, -82.7485], 1.0),
        ([50.0, -0.9009, -85.5211], [50.0, 0.0, -82.7485], 1.0),
        ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
        ([50.0, -1.0, 2.0], [50.0, 0.0, 0.0], 2.3669),
        ([50.0, 2.49, -0.001], [50.0, -2.49, 0.0009], 7.1792),
        ([50.0, 2.49, -0.001], [50.0, -2.49, 0.001], 7.1792),
        ([50.0, 2.49, -0.001], [50.0, -2.49, 0.0011], 7.2195),
        ([50.0, 2.49, -0.001], [50.0, -2.49, 0.0012], 7.2195),
        ([50.0, -0.001, 2.49], [50.0, 0.0009, -2.49], 4.8045),
        ([50.0, -0.001, 2.49], [50.0, 0.001, -2.49], 4.8045),
        ([50.0, -0.001, 2.49], [50.0, 0.0011, -2.49], 4.7461),
        ([50.0, 2.5, 0.0], [50.0, 0.0, -2.5], 4.3065),
        ([50.0, 2.5, 0.0], [73.0, 25.0, -18.0], 27.1492),
        ([50.0, 2.5, 0.0], [61.0, -5.0, 29.0], 22.8977),
        ([50.0, 2.5, 0.0], [56.0, -27.0, -3.0], 31.903),
        ([50.0, 2.5, 0.0], [58.0, 24.0, 15.0], 19.4535),
        ([50.0, 2.5, 0.0], [50.0, 3.1736, 0.5854], 1.0),
        ([50.0, 2.5, 0.0], [50.0, 3.2972, 0.0], 1.0),
        ([50.0, 2.5, 0.0], [50.0, 1.8634, 0.5757], 1.0),
        ([50.0, 2.5, 0.0], [50.0, 3.2592, 0.335], 1.0),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
        ([63.0109, -31.0961, -5.8663], [62.8187, -29.7946, -4.0864], 1.263),
        ([61.2901, 3.7196, -5.3901], [61.4292, 2.248, -4.962], 1.8731),
        ([35.0831, -44.1164, 3.7933], [35.0232, -40.0716, 1.5901], 1.8645),
        ([22.7233, 20.0904, -46.694], [23.0331, 14.973, -42.5619], 2.0373),
        ([36.4612, 47.858, 18.3852], [36.2715, 50.5065, 21.2231], 1.4146),
        ([90.8027, -2.0831, 1.441], [91.1528, -1.6435, 0.0447], 1.4441),
        ([90.9257, -0.5406, -0.9208], [88.6381, -0.8985, -0.7239], 1.5381),
        ([6.7747, -0.2908, -2.4247], [5.8714, -0.0985, -2.2286], 0.6377),
        ([2.0776, 0.0795, -1.135], [0.9033, -0.0636, -0.5514], 0.9082),
    ];

    fn lab(components: [f64; 3]) -> Lab {
        Lab::new(components[0], components[1], components[2])
    }

    #[test]
    fn ciede2000_matches_published_reference_pairs() {
        for (first, second, expected) in REFERENCE_PAIRS {
            let actual = ciede2000(&lab(first), &lab(second));
            assert!(
                (actual - expected).abs() < 1e-4,
                "pair {first:?} / {second:?}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn ciede2000_of_identical_colors_is_zero() {
        let color = lab([19.444752, 0.544261, -2.706785]);
        assert_eq!(ciede2000(&color, &color), 0.0);
    }

    #[test]
    fn ciede2000_is_positive_for_distinct_colors() {
        let first = lab([50.0, 0.0, 0.0]);
        let second = lab([50.0, 0.0, 1e-6]);
        assert!(ciede2000(&first, &second) > 0.0);
    }

    #[test]
    fn euclidean_lch_of_identical_colors_is_zero() {
        let color = Lch::new(50.0, 10.0, 120.0);
        assert_eq!(euclidean_lch(&color, &color), 0.0);
    }

    #[test]
    fn euclidean_lch_is_symmetric() {
        let first = Lch::new(40.0, 20.0, 30.0);
        let second = Lch::new(70.0, 5.0, 310.0);
        assert_eq!(
            euclidean_lch(&first, &second),
            euclidean_lch(&second, &first)
        );
    }

    #[test]
    fn euclidean_lch_matches_hand_computed_distance() {
        let first = Lch::new(50.0, 13.0, 100.0);
        let second = Lch::new(53.0, 9.0, 88.0);
        // sqrt(3^2 + 4^2 + 12^2) = 13
        assert!((euclidean_lch(&first, &second) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn euclidean_lch_overstates_differences_across_the_hue_seam() {
        // 20 degrees apart perceptually, 340 apart on the linear axis.
        let first = ColorCoordinates::from_lab(lab([50.0, 9.848077530122, -1.736481776669]));
        let second = ColorCoordinates::from_lab(lab([50.0, 9.848077530122, 1.736481776669]));

        let linear = DifferenceMetric::EuclideanLch.difference(&first, &second);
        let perceptual = DifferenceMetric::Ciede2000.difference(&first, &second);

        assert!((linear - 340.0).abs() < 1e-6);
        assert!((perceptual - 2.690894).abs() < 1e-4);
    }

    #[test]
    fn difference_is_deterministic() {
        let first = ColorCoordinates::from_lab(lab([36.4612, 47.858, 18.3852]));
        let second = ColorCoordinates::from_lab(lab([36.2715, 50.5065, 21.2231]));
        for metric in [DifferenceMetric::Ciede2000, DifferenceMetric::EuclideanLch] {
            assert_eq!(
                metric.difference(&first, &second),
                metric.difference(&first, &second)
            );
        }
    }

    #[test]
    fn default_metric_is_ciede2000() {
        assert_eq!(DifferenceMetric::default(), DifferenceMetric::Ciede2000);
    }
}
