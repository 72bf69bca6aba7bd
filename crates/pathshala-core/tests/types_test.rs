//! Data model behavior: effective price, flags, vocabulary tokens, slugs, serde shape.

use pathshala_core::types::{category_slug, Category, Instructor, SyllabusSection};
use pathshala_core::{CatalogError, CatalogErrorCode, Course, Language, Level, PromoFlag};

fn course(price: u32, discount_price: Option<u32>) -> Course {
    Course {
        id: "c1".to_string(),
        title: "Complete Web Development".to_string(),
        description: "HTML, CSS, JavaScript".to_string(),
        image: "web.jpg".to_string(),
        price,
        discount_price,
        instructor: Instructor {
            id: "i1".to_string(),
            name: "Aarav Sharma".to_string(),
            avatar: "aarav.jpg".to_string(),
            role: "Senior Developer".to_string(),
            bio: "Builds things.".to_string(),
            courses: 3,
            students: 1200,
            rating: 4.7,
            social: None,
        },
        category: Category {
            id: "web".to_string(),
            name: "Web Development".to_string(),
            icon: "globe".to_string(),
            courses: 36,
        },
        level: Level::Beginner,
        language: Language::Both,
        duration: "12 weeks".to_string(),
        lessons: 48,
        rating: 4.8,
        enrolled_students: 320,
        featured: true,
        popular: false,
        new: true,
        syllabus: vec![
            SyllabusSection {
                title: "Foundations".to_string(),
                duration: "2 weeks".to_string(),
                topics: vec!["HTML".to_string(), "CSS".to_string()],
            },
            SyllabusSection {
                title: "Scripting".to_string(),
                duration: "3 weeks".to_string(),
                topics: vec!["JavaScript".to_string()],
            },
        ],
    }
}

#[test]
fn effective_price_prefers_discount() {
    assert_eq!(course(2000, Some(1500)).effective_price(), 1500);
    assert_eq!(course(2000, None).effective_price(), 2000);
}

#[test]
fn zero_discount_is_still_a_discount() {
    let free = course(2000, Some(0));
    assert_eq!(free.effective_price(), 0);
    assert!(free.is_discounted());
}

#[test]
fn flags_are_independent() {
    let c = course(1000, None);
    assert!(c.has_flag(PromoFlag::Featured));
    assert!(!c.has_flag(PromoFlag::Popular));
    assert!(c.has_flag(PromoFlag::New));
}

#[test]
fn topic_count_sums_sections() {
    assert_eq!(course(1000, None).topic_count(), 3);
}

#[test]
fn both_satisfies_every_language() {
    assert!(Language::Both.satisfies(Language::English));
    assert!(Language::Both.satisfies(Language::Nepali));
    assert!(Language::English.satisfies(Language::English));
    assert!(!Language::English.satisfies(Language::Nepali));
    assert!(!Language::Nepali.satisfies(Language::English));
}

#[test]
fn tokens_parse_case_insensitively() {
    assert_eq!("Beginner".parse::<Level>().unwrap(), Level::Beginner);
    assert_eq!(" advanced ".parse::<Level>().unwrap(), Level::Advanced);
    assert_eq!("NEPALI".parse::<Language>().unwrap(), Language::Nepali);
    assert_eq!("popular".parse::<PromoFlag>().unwrap(), PromoFlag::Popular);
}

#[test]
fn unknown_token_is_unknown_value() {
    let err = "expert".parse::<Level>().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnknownValue { field: "level", ref value } if value == "expert"
    ));
    assert_eq!(err.error_code(), "CATALOG_UNKNOWN_VALUE");
    assert!(err.coded_message().starts_with("[CATALOG_UNKNOWN_VALUE]"));
}

#[test]
fn display_matches_data_spelling() {
    for level in Level::ALL {
        assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
    }
    for language in Language::ALL {
        assert_eq!(language.to_string().parse::<Language>().unwrap(), language);
    }
    assert_eq!(PromoFlag::New.to_string(), "new");
}

#[test]
fn slug_lowercases_and_hyphenates() {
    assert_eq!(category_slug("Web Development"), "web-development");
    assert_eq!(category_slug("UI/UX Design"), "ui/ux-design");
    assert_eq!(category_slug("  Computer \t Science "), "computer-science");
    assert_eq!(category_slug("web--development"), "web-development");
    assert_eq!(category_slug(" - Data - Science - "), "data-science");
    assert_eq!(category_slug(""), "");
}

#[test]
fn course_json_uses_camel_case_and_optional_fields() {
    let json = serde_json::to_value(course(2000, Some(1500))).unwrap();
    assert_eq!(json["discountPrice"], 1500);
    assert_eq!(json["enrolledStudents"], 320);
    assert_eq!(json["level"], "Beginner");
    assert_eq!(json["language"], "Both");

    let plain = serde_json::to_value(course(2000, None)).unwrap();
    assert!(plain.get("discountPrice").is_none());
}

#[test]
fn missing_flags_default_to_false() {
    let mut json = serde_json::to_value(course(1000, None)).unwrap();
    let obj = json.as_object_mut().unwrap();
    obj.remove("featured");
    obj.remove("popular");
    obj.remove("new");
    obj.remove("syllabus");

    let parsed: Course = serde_json::from_value(json).unwrap();
    assert!(!parsed.featured && !parsed.popular && !parsed.new);
    assert!(parsed.syllabus.is_empty());
}
