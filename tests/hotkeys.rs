use pointbrowse::data::hotkeys::*;

#[test]
fn parse_plain_and_modified_keys() {
    assert_eq!("N".parse::<Hotkey>().unwrap(), Hotkey::new(Modifier::NONE, 'N'));
    assert_eq!("ctrl+p".parse::<Hotkey>().unwrap(), Hotkey::new(Modifier::CTRL, 'P'));
    assert_eq!(
        "Shift + Ctrl + X".parse::<Hotkey>().unwrap(),
        Hotkey::new(Modifier::new(true, false, true), 'X')
    );
    assert_eq!(
        "Alt+Shift+Ctrl+Q".parse::<Hotkey>().unwrap(),
        Hotkey::new(Modifier::new(true, true, true), 'Q')
    );
}

#[test]
fn parse_space_key() {
    let hk: Hotkey = "Ctrl+Space".parse().unwrap();
    assert_eq!(hk, Hotkey::new(Modifier::CTRL, ' '));
    assert_eq!(hk.to_string(), "Ctrl+Space");
    assert_eq!(hk.egui_key(), Some(egui::Key::Space));
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Hotkey>(), Err(HotkeyError::Empty));
    assert_eq!("Ctrl+".parse::<Hotkey>(), Err(HotkeyError::Empty));
    assert!(matches!("Meta+N".parse::<Hotkey>(), Err(HotkeyError::UnknownModifier(_))));
    assert!(matches!("Ctrl+Ctrl+N".parse::<Hotkey>(), Err(HotkeyError::DuplicateModifier(_))));
    assert!(matches!("Ctrl+Enter".parse::<Hotkey>(), Err(HotkeyError::UnknownKey(_))));
}

#[test]
fn display_orders_modifiers_and_round_trips() {
    let hk = "Shift+Alt+z".parse::<Hotkey>().unwrap();
    assert_eq!(hk.to_string(), "Alt+Shift+Z");
    for hk in [
        Hotkey::new(Modifier::NONE, 'N'),
        Hotkey::new(Modifier::SHIFT, 'C'),
        Hotkey::new(Modifier::CTRL.with(Modifier::ALT), 'Z'),
    ] {
        assert_eq!(hk.to_string().parse::<Hotkey>().unwrap(), hk);
    }
}

#[test]
fn hotkeys_serialize_as_strings() {
    let yaml = serde_yaml::to_string(&NavigatorHotkeys::default()).unwrap();
    assert!(yaml.contains("clear_lasso: Shift+C"), "{yaml}");
    let back: NavigatorHotkeys = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, NavigatorHotkeys::default());
    assert!(serde_yaml::from_str::<NavigatorHotkeys>("next_point: Hyper+N\n").is_err());
}

#[test]
fn default_bindings_resolve_to_actions() {
    let hk = NavigatorHotkeys::default();
    assert_eq!(hk.action_for('n', Modifier::NONE), Some(HotkeyAction::NextPoint));
    assert_eq!(hk.action_for('P', Modifier::NONE), Some(HotkeyAction::PrevPoint));
    assert_eq!(hk.action_for('C', Modifier::NONE), Some(HotkeyAction::ClearFocus));
    assert_eq!(hk.action_for('C', Modifier::SHIFT), Some(HotkeyAction::ClearLasso));
    assert_eq!(hk.action_for('N', Modifier::CTRL), None);
    assert_eq!(hk.get(HotkeyAction::ClearLasso).to_string(), "Shift+C");
}

#[test]
fn egui_modifiers_map_command_to_ctrl() {
    let m = egui::Modifiers {
        command: true,
        ..Default::default()
    };
    assert_eq!(Modifier::from_egui(&m), Modifier::CTRL);
    assert!(Modifier::from_egui(&egui::Modifiers::NONE).is_none());
}

#[test]
fn hotkeys_map_to_egui_keys() {
    assert_eq!(Hotkey::new(Modifier::NONE, 'n').egui_key(), Some(egui::Key::N));
}

#[test]
fn tooltip_with_no_hotkey_returns_description_only() {
    assert_eq!(format_button_tooltip("Clear", None), "Clear");
}

#[test]
fn tooltip_with_shift_hotkey() {
    let hk = Hotkey::new(Modifier::SHIFT, 'C');
    assert_eq!(format_button_tooltip("Clear lasso", Some(&hk)), "Clear lasso [Shift+C]");
}
