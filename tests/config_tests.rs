#![cfg(feature = "serde")]

use ht16k33v110::{Config, MAX_INTENSITY};

#[test]
fn empty_document_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn full_document() {
    let config: Config = toml::from_str(
        r#"
        address = 0x71
        intensity = 4
        inverted = true

        [auto_intensity]
        source = "Ambient Light"
        steps = [
            { threshold = 10.0, level = 1 },
            { threshold = 50.0, level = 5 },
            { threshold = 100.0, level = 20 },
        ]
        "#,
    )
    .unwrap();

    assert_eq!(config.address, 0x71);
    assert_eq!(config.intensity, 4);
    assert!(config.inverted);
    assert_eq!(config.validate(), Ok(()));

    let auto = config.auto_intensity.unwrap();
    assert_eq!(auto.source.as_str(), "Ambient Light");
    assert_eq!(auto.steps.steps().len(), 3);
    assert_eq!(auto.steps.steps()[2].level, MAX_INTENSITY);
    assert_eq!(auto.steps.next_level(60.0), 5);
}

#[test]
fn too_many_steps_is_rejected() {
    let steps = (0..9)
        .map(|i| format!("{{ threshold = {}.0, level = 1 }}", i))
        .collect::<Vec<_>>()
        .join(", ");
    let document = format!("[auto_intensity]\nsource = \"lux\"\nsteps = [{}]\n", steps);
    assert!(toml::from_str::<Config>(&document).is_err());
}
