use frisbo_client::utils::config::{get_env_non_empty, get_env_or_default, get_env_or_none};

#[test]
fn test_missing_variables_fall_back() {
    assert_eq!(get_env_or_default("FRISBO_TEST_MISSING_TIMEOUT", 30u64), 30);
    assert_eq!(get_env_or_none::<u64>("FRISBO_TEST_MISSING_TIMEOUT"), None);
    assert_eq!(get_env_non_empty("FRISBO_TEST_MISSING_EMAIL"), None);
}

#[test]
fn test_present_variables_are_parsed() {
    unsafe {
        std::env::set_var("FRISBO_TEST_UTILS_TIMEOUT", " 12 ");
        std::env::set_var("FRISBO_TEST_UTILS_BLANK", "   ");
        std::env::set_var("FRISBO_TEST_UTILS_BAD", "twelve");
    }
    assert_eq!(get_env_or_default("FRISBO_TEST_UTILS_TIMEOUT", 30u64), 12);
    assert_eq!(get_env_non_empty("FRISBO_TEST_UTILS_BLANK"), None);
    assert_eq!(get_env_or_default("FRISBO_TEST_UTILS_BAD", 30u64), 30);
    assert_eq!(get_env_or_none::<u64>("FRISBO_TEST_UTILS_BAD"), None);
}
