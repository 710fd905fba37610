extern crate fontawesome_glyphs;

use fontawesome_glyphs::{codes, glyph_string, glyph_string_for_code, Icon};

//===========================================================================//

#[test]
fn every_icon_is_one_character() {
    for &icon in Icon::ALL.iter() {
        let glyph = glyph_string(icon);
        assert_eq!(
            glyph.chars().count(),
            1,
            "{:?} has glyph string {:?}",
            icon,
            glyph
        );
        assert_eq!(glyph.chars().next().unwrap() as u32, icon.code_point());
    }
}

#[test]
fn codes_agree_with_icons() {
    let mut num_codes = 0;
    for (code, icon) in codes() {
        assert!(code.starts_with("fa-"), "Code {:?} lacks prefix", code);
        assert_eq!(glyph_string_for_code(code), Some(glyph_string(icon)));
        num_codes += 1;
    }
    assert_eq!(num_codes, 786);
}

#[test]
fn unknown_code_is_none() {
    assert_eq!(glyph_string_for_code("not-a-real-code"), None);
    assert_eq!(glyph_string_for_code("fa-"), None);
    assert_eq!(glyph_string_for_code("fa-glass "), None);
}

#[test]
fn published_code_points() {
    let expected: &[(&str, u32)] = &[
        ("fa-glass", 0xf000),
        ("fa-envelope-o", 0xf003),
        ("fa-star-o", 0xf006),
        ("fa-trash-o", 0xf014),
        ("fa-refresh", 0xf021),
        ("fa-pencil", 0xf040),
        ("fa-eye-slash", 0xf070),
        ("fa-bar-chart", 0xf080),
        ("fa-twitter", 0xf099),
        ("fa-facebook", 0xf09a),
        ("fa-bars", 0xf0c9),
        ("fa-angle-double-left", 0xf100),
        ("fa-file", 0xf15b),
        ("fa-cube", 0xf1b2),
        ("fa-trash", 0xf1f8),
        ("fa-pie-chart", 0xf200),
        ("fa-user-secret", 0xf21b),
        ("fa-thermometer-full", 0xf2c7),
        ("fa-snowflake-o", 0xf2dc),
        ("fa-meetup", 0xf2e0),
    ];
    for &(code, code_point) in expected.iter() {
        let glyph = glyph_string_for_code(code).unwrap();
        let actual = glyph.chars().next().unwrap() as u32;
        assert_eq!(actual, code_point, "{}", code);
    }
}

//===========================================================================//
