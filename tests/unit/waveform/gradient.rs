use super::*;

fn constant(n: usize, s: ColumnStats) -> Vec<ColumnStats> {
    vec![s; n]
}

fn speech_like() -> ColumnStats {
    ColumnStats::new(-0.5, 0.5, 0.0, 0.25)
}

#[test]
fn row_amplitude_spans_plus_one_to_minus_one() {
    assert_eq!(row_amplitude(0, 100), 1.0);
    assert_eq!(row_amplitude(50, 100), 0.0);
    assert_eq!(row_amplitude(100, 100), -1.0);
    assert!((row_amplitude(1, 3) - (1.0 - 2.0 / 3.0)).abs() < 1e-12);
}

#[test]
fn shape_picks_the_larger_one_sided_peak() {
    let s = ColumnShape::new(&ColumnStats::new(-0.8, 0.2, 0.0, 0.1));
    assert!((s.crest - 0.8 / (0.1 + EPSILON)).abs() < 1e-9);
    assert!((s.lo_std + 0.1).abs() < 1e-12);
    assert!((s.hi_std - 0.1).abs() < 1e-12);
}

#[test]
fn outer_ramp_is_full_inside_std_band_and_zero_outside_extremes() {
    let s = ColumnShape::new(&speech_like());
    assert_eq!(s.outer(0.0), 1.0);
    assert_eq!(s.outer(0.2), 1.0);
    assert_eq!(s.outer(0.6), 0.0);
    assert_eq!(s.outer(-0.6), 0.0);
    let mid = s.outer(0.375);
    assert!(mid > 0.45 && mid < 0.55, "{mid}");
}

#[test]
fn outer_ramp_is_reflection_symmetric() {
    let stats = [
        ColumnStats::new(-0.5, 0.5, 0.0, 0.25),
        ColumnStats::new(-0.9, 0.3, -0.1, 0.2),
        ColumnStats::new(-0.2, 0.7, 0.35, 0.05),
    ];
    for s in stats {
        let a = ColumnShape::new(&s);
        let b = ColumnShape::new(&ColumnStats::new(-s.max, -s.min, -s.mean, s.std));
        let mut y = -1.0;
        while y <= 1.0 {
            assert!(
                (a.outer(y) - b.outer(-y)).abs() < 1e-9,
                "asymmetric at y={y} for {s:?}"
            );
            y += 0.01;
        }
    }
}

#[test]
fn zero_spread_stays_finite() {
    let columns = vec![
        ColumnStats::point(0.2),
        ColumnStats::new(-0.5, 0.5, 0.0, 0.0),
        ColumnStats::point(0.0),
    ];
    let outer = outer_mask(&columns, 64);
    let inner = inner_mask(&columns, 64, 50.0).unwrap();
    for v in outer.iter().chain(inner.iter()) {
        assert!(v.is_finite());
        assert!((0.0..=1.0).contains(v), "{v}");
    }
}

#[test]
fn zero_spread_point_column_collapses_to_a_narrow_step() {
    let columns = constant(3, ColumnStats::point(0.0));
    let h = 64u32;
    let raw = fill_rows(&shapes(&columns), h, ColumnShape::outer);
    let lit_rows = raw.chunks_exact(3).filter(|row| row[1] > 0.0).count();
    assert!(lit_rows <= 1);

    let inner = inner_mask(&columns, h, 50.0).unwrap();
    assert!(inner.iter().all(|&v| v == 0.0));
}

#[test]
fn antialias_blends_original_neighbours() {
    let mut row = vec![0.0, 1.0, 0.0, 0.0];
    antialias_rows(&mut row, 4);
    let n = 1.36;
    assert!((row[0] - 0.0).abs() < 1e-12);
    assert!((row[1] - 1.0 / n).abs() < 1e-12);
    assert!((row[2] - 0.18 / n).abs() < 1e-12);
    assert!((row[3] - 0.0).abs() < 1e-12);
}

#[test]
fn antialias_keeps_flat_interior_and_dims_edges() {
    let mut row = vec![1.0; 5];
    antialias_rows(&mut row, 5);
    assert!((row[2] - 1.0).abs() < 1e-12);
    assert!((row[0] - 1.0 / 1.36).abs() < 1e-12);
    assert!((row[4] - 1.0 / 1.36).abs() < 1e-12);
}

#[test]
fn antialias_handles_narrow_rows() {
    let mut one = vec![1.0, 1.0];
    antialias_rows(&mut one, 1);
    assert!(one.iter().all(|v| (v - 1.0 / 1.36).abs() < 1e-12));
    antialias_rows(&mut [], 0);
}

#[test]
fn outer_mask_of_constant_band() {
    let columns = constant(10, speech_like());
    let mask = outer_mask(&columns, 100);
    assert_eq!(mask.len(), 1000);
    let at = |x: usize, y: usize| mask[y * 10 + x];
    assert!((at(5, 50) - 1.0).abs() < 1e-9);
    assert!((at(0, 50) - (1.0f64 / 1.36).sqrt()).abs() < 1e-9);
    assert_eq!(at(5, 0), 0.0);
    assert_eq!(at(5, 99), 0.0);
}

#[test]
fn highlight_scale_guards_its_logarithm() {
    assert!(matches!(highlight_scale(1.0), Err(WaveError::Domain(_))));
    assert!(matches!(highlight_scale(0.5), Err(WaveError::Domain(_))));
    assert!(matches!(highlight_scale(f64::NAN), Err(WaveError::Domain(_))));
    let e2 = std::f64::consts::E * std::f64::consts::E;
    assert!((highlight_scale(e2).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn inner_highlight_grows_with_density() {
    let columns = constant(4, speech_like());
    let low: f64 = inner_mask(&columns, 64, 10.0).unwrap().iter().sum();
    let high: f64 = inner_mask(&columns, 64, 1000.0).unwrap().iter().sum();
    assert!(high > low);
}

#[test]
fn peaky_columns_get_a_narrower_highlight() {
    let broad = constant(4, ColumnStats::new(-0.5, 0.5, 0.0, 0.25));
    let peaky = constant(4, ColumnStats::new(-0.5, 0.5, 0.0, 0.1));
    let broad_sum: f64 = inner_mask(&broad, 128, 100.0).unwrap().iter().sum();
    let peaky_sum: f64 = inner_mask(&peaky, 128, 100.0).unwrap().iter().sum();
    assert!(peaky_sum < broad_sum);
}

#[test]
fn inner_mask_is_zero_outside_extremes() {
    let columns = constant(2, speech_like());
    let mask = inner_mask(&columns, 100, 64.0).unwrap();
    assert_eq!(mask[0], 0.0);
    assert_eq!(mask[99 * 2], 0.0);
    assert!(mask[50 * 2] > 0.0);
}

#[test]
fn band_masks_match_band_dimensions() {
    let columns = constant(7, speech_like());
    let m = BandMasks::compute(&columns, 33, 20.0).unwrap();
    assert_eq!((m.outer.width(), m.outer.height()), (7, 33));
    assert_eq!((m.inner.width(), m.inner.height()), (7, 33));
    assert!(m.outer.total() > 0);
    assert!(matches!(
        BandMasks::compute(&columns, 33, 1.0),
        Err(WaveError::Domain(_))
    ));
}

#[test]
fn empty_column_set_yields_empty_masks() {
    assert!(outer_mask(&[], 10).is_empty());
    let m = BandMasks::compute(&[], 10, 20.0).unwrap();
    assert_eq!(m.outer.width(), 0);
    assert_eq!(m.outer.total(), 0);
}

#[test]
fn flat_column_has_no_inner_highlight() {
    // A flat column has crest 0; `0.0.powf(0.0)` is 1 and would fill the whole band.
    assert_eq!(0.0f64.powf(0.0), 1.0);
    let shape = ColumnShape::new(&ColumnStats::point(0.3));
    assert_eq!(shape.crest, 0.0);
    for y in 0..=64 {
        assert_eq!(shape.inner(row_amplitude(y, 64)), 0.0, "row {y}");
    }
}
