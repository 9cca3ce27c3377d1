//! Behavior of the public text color API as a UI layer uses it.

use legible_core::luminance::{BLACK_HEX, WHITE_HEX};
use legible_core::{
    Classifier, ClassifierConfig, Color, TextColor, compute_brightness, contrast_color,
    is_light_color, text_color,
};
use pretty_assertions::assert_eq;

#[test]
fn reference_backgrounds() {
    let cases = [
        ("white", "#000000", true),
        ("black", "#FFFFFF", false),
        ("red", "#FFFFFF", false),
        ("lime", "#000000", true),
        ("#808080", "#000000", true),
        ("yellow", "#000000", true),
        ("navy", "#FFFFFF", false),
    ];

    for (input, expected_text, expected_light) in cases {
        let background = Color::parse(input).unwrap();
        assert_eq!(text_color(background), expected_text, "text for {input}");
        assert_eq!(contrast_color(background), expected_text, "contrast for {input}");
        assert_eq!(is_light_color(background), expected_light, "light for {input}");
    }
}

#[test]
fn exact_half_gray_gets_white_text() {
    let gray = Color::rgb(0.5, 0.5, 0.5);
    assert_eq!(text_color(gray), WHITE_HEX);
    assert_eq!(TextColor::for_background(gray), TextColor::White);
    assert!(!is_light_color(gray));
}

#[test]
fn light_decision_follows_brightness() {
    for r in 0..=10 {
        for g in 0..=10 {
            for b in 0..=10 {
                let c = Color::rgb(r as f32 / 10.0, g as f32 / 10.0, b as f32 / 10.0);
                let light = compute_brightness(c) > 0.5;
                assert_eq!(is_light_color(c), light);
                assert_eq!(text_color(c), if light { BLACK_HEX } else { WHITE_HEX });
                assert_eq!(text_color(c), contrast_color(c));
            }
        }
    }
}

#[test]
fn configured_classifier_from_toml() {
    let config = ClassifierConfig::from_toml_str(
        r##"
dark_text = "#222222"
light_text = "#EEEEEE"
"##,
    )
    .unwrap();
    let classifier = Classifier::new(config);

    assert_eq!(classifier.text_hex(Color::WHITE), "#222222");
    assert_eq!(classifier.text_hex(Color::BLACK), "#EEEEEE");
    assert_eq!(classifier.is_light(Color::GREEN), is_light_color(Color::GREEN));
}

#[test]
fn usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let c = Color::gray(i as f32 / 3.0);
                (text_color(c), contrast_color(c))
            })
        })
        .collect();

    for handle in handles {
        let (text, contrast) = handle.join().unwrap();
        assert_eq!(text, contrast);
    }
}
