//! Nearest-match search over a [`PaletteField`].
//!
//! Both searches are linear scans in row-major order from index zero with a
//! strict less-than comparison, so ties resolve to the first sample scanned.
//! Distances are measured in raw HSL component space; hue is not treated as
//! circular.

use tracing::trace;

use crate::color::convert::Triple;
use crate::color::ColorModel;
use crate::error::{Error, Result};
use crate::geometry::{index_to_point, Point, Rect};
use crate::palette::PaletteField;

/// Euclidean distance between two HSL triples.
#[must_use]
pub fn hsl_distance(a: Triple, b: Triple) -> f64 {
    let dh = b.0 - a.0;
    let ds = b.1 - a.1;
    let dl = b.2 - a.2;
    (dh * dh + ds * ds + dl * dl).sqrt()
}

/// Row-major index of the first sample minimizing `distance`.
fn first_minimum(samples: &[Triple], distance: impl Fn(&Triple) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, sample) in samples.iter().enumerate() {
        let d = distance(sample);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((index, d)),
        }
    }
    best.map(|(index, _)| index)
}

/// `(x, y)` of the sample closest to `target`'s HSL triple.
///
/// # Errors
///
/// Returns [`Error::EmptyField`] if the field has no samples.
///
/// # Example
///
/// ```
/// use trueno_picker::color::ColorModel;
/// use trueno_picker::palette::PaletteField;
/// use trueno_picker::search::nearest_to_color;
///
/// let field = PaletteField::from_samples(
///     2,
///     2,
///     vec![(0.0, 0.0, 0.0), (120.0, 50.0, 50.0), (240.0, 100.0, 100.0), (0.0, 0.0, 50.0)],
/// )
/// .unwrap();
/// let target = ColorModel::from_hsl(121.0, 51.0, 49.0);
/// assert_eq!(nearest_to_color(&field, &target).unwrap(), (1, 0));
/// ```
pub fn nearest_to_color(field: &PaletteField, target: &ColorModel) -> Result<(u32, u32)> {
    let target_hsl = target.hsl();
    let index = first_minimum(field.samples(), |sample| hsl_distance(*sample, target_hsl))
        .ok_or(Error::EmptyField)?;

    let width = field.width() as usize;
    let position = ((index % width) as u32, (index / width) as u32);
    trace!(?target_hsl, ?position, "nearest sample to color");
    Ok(position)
}

/// Column of the sample whose hue is closest to `target_hue`.
///
/// Every sample is scanned, so on a multi-row field the column of the first
/// best match in row-major order is returned.
///
/// # Errors
///
/// Returns [`Error::EmptyField`] if the field has no samples.
pub fn nearest_hue(field: &PaletteField, target_hue: f64) -> Result<u32> {
    let index = first_minimum(field.samples(), |sample| (sample.0 - target_hue).abs())
        .ok_or(Error::EmptyField)?;

    let column = (index % field.width() as usize) as u32;
    trace!(target_hue, column, "nearest sample to hue");
    Ok(column)
}

/// Absolute point of the sample closest to `target` in a field drawn at `bounds`.
pub fn nearest_point_to_color(
    field: &PaletteField,
    target: &ColorModel,
    bounds: Rect,
) -> Result<Point> {
    nearest_to_color(field, target).map(|index| index_to_point(index, bounds))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_sample() -> impl Strategy<Value = Triple> {
        (0u16..360, 0u16..=100, 0u16..=100)
            .prop_map(|(h, s, l)| (f64::from(h), f64::from(s), f64::from(l)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// The returned sample is no farther than any other and no earlier sample ties it
        #[test]
        fn prop_nearest_is_first_minimum(
            width in 1u32..8,
            height in 1u32..8,
            seed in prop::collection::vec(arb_sample(), 64),
            target in arb_sample(),
        ) {
            let n = (width * height) as usize;
            let field = PaletteField::from_samples(width, height, seed[..n].to_vec()).unwrap();
            let color = ColorModel::from_hsl(target.0, target.1, target.2);

            let (x, y) = nearest_to_color(&field, &color).unwrap();
            let found = (y * width + x) as usize;
            let best = hsl_distance(field.samples()[found], target);
            for (i, sample) in field.samples().iter().enumerate() {
                let d = hsl_distance(*sample, target);
                prop_assert!(d >= best);
                if i < found {
                    prop_assert!(d > best);
                }
            }
        }

        /// A sample equal to the target is always found at distance zero
        #[test]
        fn prop_exact_sample_is_found(
            samples in prop::collection::vec(arb_sample(), 1..50),
            pick in any::<prop::sample::Index>(),
        ) {
            let width = samples.len() as u32;
            let target = samples[pick.index(samples.len())];
            let field = PaletteField::from_samples(width, 1, samples).unwrap();
            let (x, _) = nearest_to_color(&field, &ColorModel::from_hsl(target.0, target.1, target.2)).unwrap();
            prop_assert_eq!(field.sample_at(x, 0).unwrap(), target);
        }
    }
}
