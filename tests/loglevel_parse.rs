use std::str::FromStr;
use swap_names::config::types::LogLevel;
use swap_names::OverwritePolicy;

#[test]
fn parse_common_levels_case_insensitive() {
    assert_eq!(LogLevel::parse("quiet"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("Normal"), Some(LogLevel::Normal));
    assert_eq!(LogLevel::parse("warn"), Some(LogLevel::Normal));
    assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
}

#[test]
fn display_roundtrips_with_fromstr() {
    for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
        let s = lvl.to_string();
        assert_eq!(LogLevel::from_str(&s).unwrap(), lvl, "roundtrip failed for {s}");
    }
}

#[test]
fn fromstr_invalid_is_err() {
    assert!(LogLevel::from_str("loud").is_err());
    assert!(LogLevel::from_str("").is_err());
}

#[test]
fn overwrite_policy_parses_config_words() {
    assert_eq!("ask".parse::<OverwritePolicy>().unwrap(), OverwritePolicy::Ask);
    assert_eq!("Always".parse::<OverwritePolicy>().unwrap(), OverwritePolicy::Always);
    assert_eq!("never".parse::<OverwritePolicy>().unwrap(), OverwritePolicy::Never);
    assert!("sometimes".parse::<OverwritePolicy>().is_err());
    assert_eq!(OverwritePolicy::default(), OverwritePolicy::Ask);
}
