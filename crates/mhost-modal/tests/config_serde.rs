#![forbid(unsafe_code)]

//! Integration tests: decoding configuration updates from JSON property payloads.

use std::cell::RefCell;
use std::rc::Rc;

use mhost_core::{HostEnvironment, OrientationSpec};
use mhost_modal::{
    AnimationType, ConfigFields, ModalConfig, ModalConfigPatch, ModalHost, PresentationStyle,
};

#[test]
fn full_config_from_json() {
    let json = r#"{
        "animationType": "slide",
        "presentationStyle": "pageSheet",
        "transparent": true,
        "supportedOrientations": ["portrait", "landscape-left", "face-up"],
        "identifier": 12
    }"#;
    let config: ModalConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.animation_type, AnimationType::Slide);
    assert_eq!(config.presentation_style, PresentationStyle::PageSheet);
    assert!(config.transparent);
    assert_eq!(
        config.supported_orientations,
        vec![
            OrientationSpec::Portrait,
            OrientationSpec::LandscapeLeft,
            OrientationSpec::Other("face-up".into()),
        ]
    );
    assert_eq!(config.identifier, Some(12));
}

#[test]
fn missing_fields_take_defaults() {
    let config: ModalConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ModalConfig::default());
}

#[test]
fn unknown_enum_strings_survive_a_round_trip() {
    let config = ModalConfig::new()
        .animation_type("spiral")
        .presentation_style("automatic")
        .supported_orientations(["face-down"]);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["animationType"], "spiral");
    assert_eq!(json["presentationStyle"], "automatic");
    assert_eq!(json["supportedOrientations"][0], "face-down");

    let back: ModalConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn patch_distinguishes_null_from_missing() {
    let missing: ModalConfigPatch = serde_json::from_str(r#"{"transparent": false}"#).unwrap();
    assert_eq!(missing.identifier, None);
    assert_eq!(missing.fields(), ConfigFields::TRANSPARENT);

    let cleared: ModalConfigPatch = serde_json::from_str(r#"{"identifier": null}"#).unwrap();
    assert_eq!(cleared.identifier, Some(None));

    let set: ModalConfigPatch = serde_json::from_str(r#"{"identifier": 3}"#).unwrap();
    assert_eq!(set.identifier, Some(Some(3)));
}

#[test]
fn patch_serializes_only_present_fields() {
    let patch = ModalConfigPatch::new().animation_type("fade");
    let json = serde_json::to_string(&patch).unwrap();
    assert_eq!(json, r#"{"animationType":"fade"}"#);
}

#[test]
fn decoded_patches_drive_a_host() {
    let mut host = ModalHost::new(HostEnvironment::touch());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    host.set_event_handler(move |event| sink.borrow_mut().push(event.clone()));

    for payload in [
        r#"{"animationType": "fade", "identifier": 5}"#,
        r#"{"transparent": true}"#,
        r#"{"identifier": null}"#,
    ] {
        let patch: ModalConfigPatch = serde_json::from_str(payload).unwrap();
        host.configure(patch);
    }

    let config = host.config();
    assert_eq!(config.animation_type, AnimationType::Fade);
    assert!(config.transparent);
    assert_eq!(config.identifier, None);
    assert!(seen.borrow().is_empty());
}
