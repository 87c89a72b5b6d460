use portfolio_core::*;
use std::collections::HashMap;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(Rgba::from_hex("#7d5aff"), Ok(Rgba::new(125, 90, 255, 1.0)));
    assert_eq!(Rgba::from_hex("  #FF5A78 "), Ok(Rgba::new(255, 90, 120, 1.0)));
    assert_eq!(Rgba::from_hex("#fff"), Ok(Rgba::new(255, 255, 255, 1.0)));
}

#[test]
fn rejects_malformed_hex() {
    assert!(matches!(Rgba::from_hex("7d5aff"), Err(ColorError::MissingHash(_))));
    assert!(matches!(Rgba::from_hex("#7d5a0"), Err(ColorError::BadLength(_))));
    assert!(matches!(Rgba::from_hex("#zzzzzz"), Err(ColorError::BadDigit(_))));
    assert!(Rgba::from_hex("").is_err());
}

#[test]
fn css_string_matches_canvas_syntax() {
    assert_eq!(Rgba::new(125, 90, 255, 0.6).css(), "rgba(125, 90, 255, 0.6)");
    assert_eq!(Rgba::new(5, 5, 5, 1.0).css(), "rgba(5, 5, 5, 1)");
}

#[test]
fn missing_tokens_fall_back_to_defaults() {
    let theme = Theme::resolve(|_| None);
    assert_eq!(theme, Theme::default());
    assert_eq!(theme.primary, Rgba::from_hex(DEFAULT_PRIMARY).unwrap());
    assert_eq!(theme.secondary, Rgba::from_hex(DEFAULT_SECONDARY).unwrap());
    assert_eq!(
        theme.background,
        CssColor::Rgba(Rgba::from_hex(DEFAULT_BACKGROUND).unwrap())
    );
}

#[test]
fn present_tokens_override_defaults() {
    let tokens: HashMap<&str, &str> = [
        (TOKEN_PRIMARY, " #112233"),
        (TOKEN_SECONDARY, ""),
        (TOKEN_BACKGROUND, "  "),
    ]
    .into_iter()
    .collect();
    let theme = Theme::resolve(|k| tokens.get(k).map(|v| v.to_string()));
    assert_eq!(theme.primary, Rgba::new(0x11, 0x22, 0x33, 1.0));
    assert_eq!(theme.secondary, Theme::default().secondary);
    assert_eq!(theme.background, Theme::default().background);
}

#[test]
fn parses_alpha_hex_and_rgb_functions() {
    assert_eq!(Rgba::parse("#7d5aff"), Ok(Rgba::new(125, 90, 255, 1.0)));
    assert_eq!(Rgba::parse("#7d5aff00"), Ok(Rgba::new(125, 90, 255, 0.0)));
    assert_eq!(Rgba::parse("#fff0"), Ok(Rgba::new(255, 255, 255, 0.0)));
    assert_eq!(Rgba::parse("rgb(20, 30, 40)"), Ok(Rgba::new(20, 30, 40, 1.0)));
    assert_eq!(Rgba::parse(" rgba(20,30,40,0.5) "), Ok(Rgba::new(20, 30, 40, 0.5)));
    assert_eq!(Rgba::parse("rgb(20 30 40 / 50%)"), Ok(Rgba::new(20, 30, 40, 0.5)));
    assert_eq!(Rgba::parse("rgb(300, -4, 40)"), Ok(Rgba::new(255, 0, 40, 1.0)));
}

#[test]
fn rejects_unknown_colour_syntax() {
    assert!(matches!(Rgba::parse("white"), Err(ColorError::Unsupported(_))));
    assert!(matches!(Rgba::parse("rgb(1, 2)"), Err(ColorError::BadFunction(_))));
    assert!(matches!(Rgba::parse("rgb(a, b, c)"), Err(ColorError::BadFunction(_))));
    assert!(matches!(Rgba::parse("rgb(1, 2, 3"), Err(ColorError::BadFunction(_))));
}

#[test]
fn rgb_background_token_is_used() {
    let theme = Theme::resolve(|k| (k == TOKEN_BACKGROUND).then(|| "rgb(20, 30, 40)".to_string()));
    assert_eq!(theme.background, CssColor::Rgba(Rgba::new(20, 30, 40, 1.0)));
    assert_eq!(theme.background.css(), "rgba(20, 30, 40, 1)");
}

#[test]
fn other_css_backgrounds_pass_through_verbatim() {
    for raw in ["white", "hsl(250 100% 67%)", "#7d5affcc"] {
        let theme = Theme::resolve(|k| (k == TOKEN_BACKGROUND).then(|| format!(" {raw} ")));
        assert_ne!(theme.background, Theme::default().background, "{raw}");
    }
    let theme = Theme::resolve(|k| (k == TOKEN_BACKGROUND).then(|| "white".to_string()));
    assert_eq!(theme.background, CssColor::Raw("white".into()));
    assert_eq!(theme.background.css(), "white");
}

#[test]
fn unparseable_wave_colours_fall_back() {
    let theme = Theme::resolve(|k| (k == TOKEN_PRIMARY).then(|| "white".to_string()));
    assert_eq!(theme.primary, Theme::default().primary);
    let theme = Theme::resolve(|k| (k == TOKEN_SECONDARY).then(|| "#ff5a78cc".to_string()));
    assert_eq!(theme.secondary, Rgba::new(255, 90, 120, 0xcc as f32 / 255.0));
}
