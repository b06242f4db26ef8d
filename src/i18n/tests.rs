use super::*;
use cargotrack_store::TrekMatch;

#[test]
fn test_all_keys_resolve_in_both_languages() {
    let keys = [
        "btn_search",
        "btn_feedback",
        "btn_contacts",
        "btn_language",
        "btn_admin_panel",
        "btn_uzbek",
        "btn_russian",
        "btn_back",
        "btn_by_trek_code",
        "btn_by_customer_code",
        "btn_upload_database",
        "welcome",
        "choose_button",
        "select_search_type",
        "enter_trek_code",
        "enter_customer_code",
        "trek_code_empty",
        "customer_code_empty",
        "feedback_prompt",
        "feedback_thanks",
        "feedback_failed",
        "back_to_main",
        "back_to_search_type",
        "contacts",
        "language_prompt",
        "language_set_uz",
        "language_set_ru",
        "language_invalid",
        "admin_welcome",
        "admin_denied",
        "admin_wrong_command",
        "upload_prompt",
        "upload_no_permission",
        "upload_wrong_state",
        "upload_invalid_format",
        "upload_success",
        "send_failed",
    ];
    for key in keys {
        for lang in [Lang::Uz, Lang::Ru] {
            let val = t(key, lang);
            assert_ne!(val, "???", "key '{key}' should resolve for {lang:?}");
        }
    }
}

#[test]
fn test_unknown_key_is_placeholder() {
    assert_eq!(t("no_such_key", Lang::Uz), "???");
}

#[test]
fn test_button_labels_differ_between_languages() {
    // The Russian-language button is the one deliberate exception.
    for key in ["btn_search", "btn_back", "btn_by_trek_code", "btn_uzbek"] {
        assert_ne!(t(key, Lang::Uz), t(key, Lang::Ru), "{key}");
    }
    assert_eq!(t("btn_russian", Lang::Uz), t("btn_russian", Lang::Ru));
}

#[test]
fn test_trek_found_block_excludes_tracking_column() {
    let item = TrekMatch {
        shipping_name: "Phone case".into(),
        package_number: "P-12".into(),
        weight_kg: "0.4".into(),
        quantity: "3".into(),
        flight: "FL-201".into(),
        customer_code: "CUST7".into(),
    };
    let block = trek_found(Lang::Uz, "TRK001", &item);
    assert!(block.contains("TRK001"), "query code is echoed");
    assert!(block.contains("Phone case"));
    assert!(block.contains("FL-201"));
    assert!(block.contains("CUST7"));

    let ru = trek_found(Lang::Ru, "TRK001", &item);
    assert!(ru.contains("Груз найден"));
}

#[test]
fn test_not_found_lines_carry_the_query() {
    assert!(trek_not_found(Lang::Uz, "ZZZ").contains("ZZZ"));
    assert!(customer_not_found(Lang::Ru, "CUST1").contains("CUST1"));
}
