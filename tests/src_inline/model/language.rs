use super::*;

#[test]
fn test_codes_match_form_mapping() {
    assert_eq!(TargetLanguage::French.code(), "fr");
    assert_eq!(TargetLanguage::German.code(), "de");
    assert_eq!(TargetLanguage::Spanish.code(), "es");
}

#[test]
fn test_parse_accepts_code_and_name() {
    assert_eq!("de".parse::<TargetLanguage>(), Ok(TargetLanguage::German));
    assert_eq!("Spanish".parse::<TargetLanguage>(), Ok(TargetLanguage::Spanish));
    assert_eq!(" FRENCH ".parse::<TargetLanguage>(), Ok(TargetLanguage::French));
}

#[test]
fn test_parse_rejects_unknown() {
    let err = "it".parse::<TargetLanguage>().unwrap_err();
    assert!(err.contains("fr|de|es"));
}

#[test]
fn test_default_is_french() {
    assert_eq!(TargetLanguage::default(), TargetLanguage::French);
}
