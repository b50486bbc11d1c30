use crate::config::*;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.get_bool("debug"), Ok(false));
    assert_eq!(config.get_bool("show_postfix"), Ok(false));
    assert_eq!(config.get_bool("show_tree"), Ok(false));
    assert_eq!(config.get_str("history_path"), Ok(&DEFAULT_HISTORY_PATH.to_owned()));
}

#[test]
fn set_and_get() {
    let mut config = Config::default();
    assert_eq!(config.set_bool("show_tree", true), Ok(()));
    assert_eq!(config.get_bool("show_tree"), Ok(true));
    assert_eq!(config.set_str("history_path", "/tmp/h"), Ok(()));
    assert_eq!(config.get_str("history_path"), Ok(&"/tmp/h".to_owned()));
}

#[test]
fn unknown_name() {
    let mut config = Config::default();
    let err = config.set_bool("nope", true).unwrap_err();
    assert_eq!(err.kind, ConfigErrKind::NameNotKnown("nope".to_owned()));
    assert!(config.get_bool("nope").is_err());
}

#[test]
fn wrong_type() {
    let config = Config::default();
    let err = config.get_str("debug").unwrap_err();
    assert!(matches!(err.kind, ConfigErrKind::ValueIsNotValid(name, _) if name == "debug"));
    assert!(config.get_bool("history_path").is_err());
}

#[test]
fn global_flag_defaults_to_false() {
    assert!(!flag("show_postfix"));
    assert!(!flag("not_a_setting"));
}
