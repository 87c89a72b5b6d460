use glam::Vec2;
use portfolio_core::{TouchIds, TouchList, TouchPoint, Viewport};
use web_sys as web;

// ---------------- Pure conversions ----------------
#[inline]
pub fn client_point(client_x: i32, client_y: i32) -> Vec2 {
    Vec2::new(client_x as f32, client_y as f32)
}

/// Viewport from `innerWidth`/`innerHeight`; anything non-finite or negative
/// becomes zero so the field seeds empty instead of misbehaving.
#[inline]
pub fn viewport_from_inner(width: Option<f64>, height: Option<f64>) -> Viewport {
    let clean = |v: Option<f64>| match v {
        Some(x) if x.is_finite() && x > 0.0 => x as f32,
        _ => 0.0,
    };
    Viewport::new(clean(width), clean(height))
}

// ---------------- Event helpers ----------------
#[inline]
pub fn mouse_point(ev: &web::MouseEvent) -> Vec2 {
    client_point(ev.client_x(), ev.client_y())
}

/// Every contact in `touches`, in list order.
pub fn touch_points(list: &web::TouchList) -> TouchList {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint {
            id: t.identifier(),
            pos: client_point(t.client_x(), t.client_y()),
        })
        .collect()
}

/// Identifiers of contacts that changed (lifted, for `touchend`).
pub fn touch_ids(list: &web::TouchList) -> TouchIds {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| t.identifier())
        .collect()
}
