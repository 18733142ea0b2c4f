/*!
 * Tests for language utility functions
 */

use vocab_drill::language_utils::{
    LanguageCodeType, canonical_code, display_name, get_language_name, is_auto_detect, normalize_to_part2t,
    validate_language_code, validate_source_language,
};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    assert_eq!(validate_language_code("ru").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("deu").unwrap(), LanguageCodeType::Part2T);
    assert_eq!(validate_language_code("ger").unwrap(), LanguageCodeType::Part2B);
    assert_eq!(validate_language_code(" EN ").unwrap(), LanguageCodeType::Part1);

    assert!(validate_language_code("xyz").is_err());
    assert!(validate_language_code("e").is_err());
    assert!(validate_language_code("").is_err());
}

/// Test normalization of language codes to ISO 639-2/T format
#[test]
fn test_normalize_to_part2t_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fre").unwrap(), "fra");
    assert_eq!(normalize_to_part2t("RUS").unwrap(), "rus");
    assert!(normalize_to_part2t("zz").is_err());
}

/// Test language names used on deck headings
#[test]
fn test_languageNames_shouldResolveOrFallBack() {
    assert_eq!(get_language_name("ru").unwrap(), "Russian");
    assert_eq!(display_name("en"), "English");
    assert_eq!(display_name("auto"), "auto");
}

/// Source languages may request detection
#[test]
fn test_validateSourceLanguage_withAuto_shouldBeAccepted() {
    assert!(validate_source_language("auto").is_ok());
    assert!(validate_source_language("AUTO").is_ok());
    assert!(validate_source_language("ru").is_ok());
    assert!(validate_source_language("klingon").is_err());
}

/// Auto detection is recognized in any case
#[test]
fn test_is_auto_detect_shouldIgnoreCaseAndPadding() {
    assert!(is_auto_detect("auto"));
    assert!(is_auto_detect(" AUTO "));
    assert!(!is_auto_detect("en"));
    assert_eq!(canonical_code(" DE "), "de");
}
