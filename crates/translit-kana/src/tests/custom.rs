use super::converter;
use crate::{KanaConverter, KanaTableError};
use translit_core::RuleTableError;

#[test]
fn test_custom_rule_added_to_both_scripts() {
    let c = KanaConverter::with_custom_rules("[mappings]\nxn = \"ん\"\n").unwrap();
    assert_eq!(c.to_hiragana("kaxn"), "かん");
    assert_eq!(c.to_katakana("kaxn"), "カん");
    // Defaults are untouched.
    assert_eq!(converter().to_hiragana("kaxn"), "かxん");
}

#[test]
fn test_custom_rule_overrides_default() {
    let toml = r#"
[mappings]
ka = "カ"
tt = { output = "T", length = 1 }
"#;
    let c = KanaConverter::with_custom_rules(toml).unwrap();
    assert_eq!(c.to_hiragana("ka"), "カ");
    assert_eq!(c.to_hiragana("kitte"), "きTて");
    // Long-vowel spellings are built from the defaults.
    assert_eq!(c.to_hiragana("kā"), "かー");
}

#[test]
fn test_custom_rules_invalid_toml() {
    let err = KanaConverter::with_custom_rules("not valid toml {{{").unwrap_err();
    assert!(matches!(err, KanaTableError::Rules(RuleTableError::Parse(_))));
}

#[test]
fn test_custom_rules_empty_table() {
    let err = KanaConverter::with_custom_rules("[mappings]\n").unwrap_err();
    assert!(matches!(err, KanaTableError::Rules(RuleTableError::Empty)));
}

#[test]
fn test_converter_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KanaConverter>();

    let c = converter();
    std::thread::scope(|s| {
        let a = s.spawn(|| c.to_hiragana("sakura"));
        let b = s.spawn(|| c.to_katakana("sakura"));
        assert_eq!(a.join().unwrap(), "さくら");
        assert_eq!(b.join().unwrap(), "サクラ");
    });
}
