#[cfg(test)]
mod tests {
    use crate::configuration::read_configuration;

    #[test]
    fn test_read_configuration() {
        // Create a dummy config file for testing in the project root
        let test_file_path = "test_config.json";
        let json_data = r#"{"theme": "Light", "autosave_path": "./scratch_autosave.html"}"#;
        std::fs::write(test_file_path, json_data).expect("Failed to create test file");

        let config = read_configuration(test_file_path);

        assert_eq!(config.theme, "Light");
        assert_eq!(config.autosave_path, "./scratch_autosave.html");
        // The version always comes from the build, never the file.
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));

        std::fs::remove_file(test_file_path).expect("Failed to remove test file");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = read_configuration("non_existent_config.json");

        assert_eq!(config.theme, "Dark");
        assert_eq!(config.autosave_path, "./.vellum_autosave.html");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_invalid_json_falls_back_to_defaults() {
        let test_file_path = "test_config_invalid.json";
        let invalid_json_data = r#"{"theme": "Light", "autosave_path""#;
        std::fs::write(test_file_path, invalid_json_data).expect("Failed to create test file");

        let config = read_configuration(test_file_path);
        assert_eq!(config.theme, "Dark");
        assert_eq!(config.autosave_path, "./.vellum_autosave.html");

        std::fs::remove_file(test_file_path).expect("Failed to remove test file");
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let test_file_path = "test_config_partial.json";
        std::fs::write(test_file_path, r#"{"theme": "Nord"}"#)
            .expect("Failed to create test file");

        let config = read_configuration(test_file_path);
        assert_eq!(config.theme, "Nord");
        assert_eq!(config.autosave_path, "./.vellum_autosave.html");

        std::fs::remove_file(test_file_path).expect("Failed to remove test file");
    }
}
