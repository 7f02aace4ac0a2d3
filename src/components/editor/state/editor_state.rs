#[derive(Debug)]
pub struct EditorState {
    // Core state
    app_version: String,
    autosave_path: String,

    // URL dialog states
    show_link_input: bool,
    link_url_input: String,
    show_image_input: bool,
    image_url_input: String,

    // Toolbar control states
    font_name: Option<String>,
    font_size: Option<String>,
    fore_color_input: String,
    hilite_color_input: String,

    // Status bar
    last_autosave: Option<String>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            app_version: String::new(),
            autosave_path: String::new(),
            show_link_input: false,
            link_url_input: String::new(),
            show_image_input: false,
            image_url_input: String::new(),
            font_name: None,
            font_size: None,
            fore_color_input: String::new(),
            hilite_color_input: String::new(),
            last_autosave: None,
        }
    }

    // Accessor methods
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    pub fn autosave_path(&self) -> &str {
        &self.autosave_path
    }

    pub fn show_link_input(&self) -> bool {
        self.show_link_input
    }

    pub fn link_url_input(&self) -> &str {
        &self.link_url_input
    }

    pub fn show_image_input(&self) -> bool {
        self.show_image_input
    }

    pub fn image_url_input(&self) -> &str {
        &self.image_url_input
    }

    pub fn font_name(&self) -> Option<&String> {
        self.font_name.as_ref()
    }

    pub fn font_size(&self) -> Option<&String> {
        self.font_size.as_ref()
    }

    pub fn fore_color_input(&self) -> &str {
        &self.fore_color_input
    }

    pub fn hilite_color_input(&self) -> &str {
        &self.hilite_color_input
    }

    pub fn last_autosave(&self) -> Option<&String> {
        self.last_autosave.as_ref()
    }

    // Dialog state management
    pub fn is_any_dialog_open(&self) -> bool {
        self.show_link_input || self.show_image_input
    }

    // Mutator methods
    pub fn set_app_version(&mut self, version: String) {
        self.app_version = version;
    }

    pub fn set_autosave_path(&mut self, path: String) {
        self.autosave_path = path;
    }

    pub fn set_font_name(&mut self, name: Option<String>) {
        self.font_name = name;
    }

    pub fn set_font_size(&mut self, size: Option<String>) {
        self.font_size = size;
    }

    pub fn set_fore_color_input(&mut self, color: String) {
        self.fore_color_input = color;
    }

    pub fn set_hilite_color_input(&mut self, color: String) {
        self.hilite_color_input = color;
    }

    pub fn set_last_autosave(&mut self, label: String) {
        self.last_autosave = Some(label);
    }

    // Dialog management. Opening either prompt closes the other and
    // pre-fills the input the way the original URL prompt did.
    pub fn show_link_dialog(&mut self) {
        self.show_image_input = false;
        self.show_link_input = true;
        self.link_url_input = String::from("https://");
    }

    pub fn hide_link_dialog(&mut self) {
        self.show_link_input = false;
        self.link_url_input = String::new();
    }

    pub fn update_link_url(&mut self, url: String) {
        if self.show_link_input {
            self.link_url_input = url;
        }
    }

    pub fn show_image_dialog(&mut self) {
        self.show_link_input = false;
        self.show_image_input = true;
        self.image_url_input = String::from("https://");
    }

    pub fn hide_image_dialog(&mut self) {
        self.show_image_input = false;
        self.image_url_input = String::new();
    }

    pub fn update_image_url(&mut self, url: String) {
        if self.show_image_input {
            self.image_url_input = url;
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
