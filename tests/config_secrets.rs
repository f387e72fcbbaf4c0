use std::fs;

use tourist_converter::config::{self, COUNTRY_DATA_KEY_ENV, TRANSLATE_API_KEY_ENV};

#[test]
fn environment_keys_never_reach_the_config_file() {
    let dir = std::env::temp_dir().join(format!("tourist_converter_secrets_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    let _ = fs::remove_file(&path);

    std::env::set_var(TRANSLATE_API_KEY_ENV, "translate-key-from-env");
    std::env::set_var(COUNTRY_DATA_KEY_ENV, "country-key-from-env");

    let mut cfg = config::load_or_default(&path).expect("defaults written");
    assert_eq!(cfg.translation.resolved_api_key(), Some("translate-key-from-env"));
    assert_eq!(cfg.country_data.resolved_api_key(), Some("country-key-from-env"));

    cfg.default_category = "Speed".into();
    cfg.save(&path).expect("saved");
    let text = fs::read_to_string(&path).expect("read back");
    assert!(text.contains("Speed"));
    assert!(!text.contains("translate-key-from-env"));
    assert!(!text.contains("country-key-from-env"));

    std::env::remove_var(TRANSLATE_API_KEY_ENV);
    std::env::remove_var(COUNTRY_DATA_KEY_ENV);
    let reloaded = config::load_or_default(&path).expect("reloaded");
    assert_eq!(reloaded.translation.resolved_api_key(), None);
    assert_eq!(reloaded.default_category, "Speed");
}
