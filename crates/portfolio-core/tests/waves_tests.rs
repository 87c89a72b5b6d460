use glam::Vec2;
use portfolio_core::*;

#[test]
fn bands_sit_at_their_anchor_lines() {
    let vp = Viewport::new(800.0, 600.0);
    assert!((BAND_UPPER.height_at(0.0, vp, 0.0) - 180.0).abs() < 1e-4);
    assert!((BAND_LOWER.height_at(0.0, vp, 0.0) - 360.0).abs() < 1e-4);
}

#[test]
fn band_height_stays_within_amplitude() {
    let vp = Viewport::new(1024.0, 768.0);
    for band in [BAND_UPPER, BAND_LOWER] {
        let anchor = vp.height * band.anchor;
        for t in [0.0, 0.7, 3.3, 120.0] {
            for p in band.outline(vp, t).iter().take_while(|p| p.y < vp.height) {
                assert!((p.y - anchor).abs() <= band.amplitude + 1e-3);
            }
        }
    }
}

#[test]
fn band_moves_over_time() {
    let vp = Viewport::new(800.0, 600.0);
    let a = BAND_UPPER.height_at(100.0, vp, 0.0);
    let b = BAND_UPPER.height_at(100.0, vp, 1.0);
    assert!((a - b).abs() > 1e-3);
}

#[test]
fn outline_closes_through_bottom_corners() {
    let vp = Viewport::new(95.0, 50.0);
    let pts = BAND_LOWER.outline(vp, 0.0);
    // x = 0, 10, ..., 90 then the two corners
    assert_eq!(pts.len(), 12);
    assert_eq!(pts[10], Vec2::new(95.0, 50.0));
    assert_eq!(pts[11], Vec2::new(0.0, 50.0));
}

#[test]
fn band_colours_follow_theme() {
    let theme = Theme::default();
    let [(upper, top_a, bottom_a), (lower, top_b, bottom_b)] = bands(&theme);
    assert_eq!(upper, BAND_UPPER);
    assert_eq!(lower, BAND_LOWER);
    assert_eq!(top_a, theme.primary.with_alpha(0.05));
    assert_eq!(bottom_a, theme.secondary.with_alpha(0.02));
    assert_eq!(top_b, theme.secondary.with_alpha(0.03));
    assert_eq!(bottom_b, theme.primary.with_alpha(0.02));
}
