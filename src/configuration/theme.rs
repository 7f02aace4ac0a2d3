use iced::Theme;

pub fn convert_str_to_theme(theme_str: String) -> Theme {
    // Accept either the Debug name ("CatppuccinMacchiato") or the Display
    // name ("Catppuccin Macchiato") of any built-in theme.
    let found_theme = Theme::ALL.iter().find(|theme_variant| {
        theme_str == format!("{:?}", theme_variant) || theme_str == theme_variant.to_string()
    });

    match found_theme {
        Some(theme) => theme.clone(),
        None => {
            eprintln!(
                "Warning: Theme '{}' not recognized or is a custom theme. Defaulting to Dark.",
                theme_str
            );
            Theme::Dark
        }
    }
}
