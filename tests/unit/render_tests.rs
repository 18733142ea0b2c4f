/*!
 * Tests for flashcard and vocabulary rendering
 */

use vocab_drill::record::{TranslationRecord, normalize};
use vocab_drill::org_store::parse_headings;
use vocab_drill::render::{FlashcardType, heading_text, quote_body, render_flashcard, render_vocab_entry};

const ALL_TYPES: [FlashcardType; 3] = [
    FlashcardType::TwoSided,
    FlashcardType::SimpleTranslationFirst,
    FlashcardType::SimpleOriginalFirst,
];

fn sample() -> TranslationRecord {
    TranslationRecord::new("ru -> en", "привет", "hello", "hi; hey")
}

/// Rendering twice yields identical bytes
#[test]
fn test_renderFlashcard_withSameInput_shouldBeDeterministic() {
    for kind in ALL_TYPES {
        assert_eq!(render_flashcard(&sample(), kind), render_flashcard(&sample(), kind));
    }
    assert_eq!(render_vocab_entry(&sample()), render_vocab_entry(&sample()));
}

/// Only two-sided cards carry the property drawer
#[test]
fn test_renderFlashcard_propertyDrawer_shouldOnlyAppearForTwoSided() {
    let two_sided = render_flashcard(&sample(), FlashcardType::TwoSided);
    assert!(two_sided.contains(":PROPERTIES:\n:DRILL_CARD_TYPE: twosided\n:END:\n"));
    assert!(two_sided.starts_with("* ru -> en  :drill:\n"));

    for kind in [FlashcardType::SimpleTranslationFirst, FlashcardType::SimpleOriginalFirst] {
        let card = render_flashcard(&sample(), kind);
        assert!(!card.contains(":PROPERTIES:"));
        assert!(!card.contains("DRILL_CARD_TYPE"));
        assert!(card.starts_with("* ru -> en :drill:\n"));
    }
}

/// The two simple layouts differ only by swapping prompt and answer
#[test]
fn test_renderFlashcard_simpleVariants_shouldSwapPromptAndAnswer() {
    let record = sample();
    let translation_first = render_flashcard(&record, FlashcardType::SimpleTranslationFirst);
    let original_first = render_flashcard(&record, FlashcardType::SimpleOriginalFirst);

    let swapped = TranslationRecord {
        original_text: record.translation.clone(),
        translation: record.original_text.clone(),
        ..record.clone()
    };

    assert_eq!(translation_first, render_flashcard(&swapped, FlashcardType::SimpleOriginalFirst));
    assert_eq!(
        original_first,
        "* ru -> en :drill:\nпривет\n\n** Answer\nhello\n\n** Alternatives\nhi; hey\n\n"
    );
}

/// An empty alternatives field still renders its section
#[test]
fn test_renderFlashcard_withEmptyAlternatives_shouldKeepSection() {
    let record = normalize(&["ru -> en", "привет", "hello"]);

    for kind in ALL_TYPES {
        let card = render_flashcard(&record, kind);
        assert!(card.ends_with("** Alternatives\n\n\n"), "{:?}: {:?}", kind, card);
    }
}

/// Every entry ends with a blank line so appends stay separated
#[test]
fn test_render_everyEntry_shouldEndWithBlankLine() {
    for kind in ALL_TYPES {
        assert!(render_flashcard(&sample(), kind).ends_with("\n\n"));
    }
    assert!(render_vocab_entry(&sample()).ends_with("\n\n"));
}

/// The vocabulary entry omits languages and alternatives
#[test]
fn test_renderVocabEntry_shouldOmitLanguagesAndAlternatives() {
    let entry = render_vocab_entry(&sample());

    assert_eq!(entry, "* привет\n** hello\n\n");
    assert!(!entry.contains("ru -> en"));
    assert!(!entry.contains("hi; hey"));
}

/// Flashcard types round-trip through their config spelling
#[test]
fn test_flashcardType_serde_shouldUseSnakeCase() {
    let json = serde_json::to_string(&FlashcardType::SimpleTranslationFirst).unwrap();
    assert_eq!(json, "\"simple_translation_first\"");

    let parsed: FlashcardType = serde_json::from_str("\"two_sided\"").unwrap();
    assert_eq!(parsed, FlashcardType::TwoSided);
    assert_eq!(FlashcardType::default(), FlashcardType::TwoSided);
}

/// Bullet lines in a field are quoted so the card keeps a single top-level heading
#[test]
fn test_renderFlashcard_withBulletAlternatives_shouldQuoteThem() {
    let record = TranslationRecord::new("ru -> en", "привет", "hello", "* hi\n* hey\n,* quoted");

    for kind in ALL_TYPES {
        let card = render_flashcard(&record, kind);
        let top_level = parse_headings(&card).iter().filter(|heading| heading.level == 1).count();

        assert_eq!(top_level, 1, "{} card has stray headings", kind);
        assert!(card.contains("** Alternatives\n,* hi\n,* hey\n,,* quoted\n\n"));
    }
}

/// Body text without heading-like lines is left alone
#[test]
fn test_quoteBody_withPlainText_shouldNotChange() {
    assert_eq!(quote_body("hi; hey\n  * indented\n*bold*"), "hi; hey\n  * indented\n*bold*");
    assert_eq!(quote_body("*\n** x"), ",*\n,** x");
    assert_eq!(quote_body(""), "");
}

/// A multi-line language line stays on the heading with its tag
#[test]
fn test_renderFlashcard_withMultiLineLanguages_shouldKeepTagOnHeading() {
    let record = TranslationRecord::new("Russian ->\n  English", "привет", "hello", "");

    assert!(render_flashcard(&record, FlashcardType::TwoSided).starts_with("* Russian -> English  :drill:\n"));
    assert!(render_flashcard(&record, FlashcardType::SimpleOriginalFirst).starts_with("* Russian -> English :drill:\n"));
}

/// Vocabulary headings are flattened onto one line each
#[test]
fn test_renderVocabEntry_withMultiLineFields_shouldFlattenHeadings() {
    let record = TranslationRecord::new("ru -> en", "добрый\nдень", "good\n* day", "");

    assert_eq!(render_vocab_entry(&record), "* добрый день\n** good * day\n\n");
    assert_eq!(heading_text("\n  a \n\n b\n"), "a b");
}
