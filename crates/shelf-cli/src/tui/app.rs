//! Application state and logic

use std::time::{Duration, Instant};

use shelf_core::{Config, CopyRequest, Library, Route, Surface};

use super::surface::TuiSurface;

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Typing in the search box (after pressing /)
    Search,
    /// Filling the add-book form (after pressing a)
    Form,
    /// Typing a fragment to go to (after pressing g)
    Goto,
}

/// Field of the add-book form that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Isbn,
    Year,
    Cover,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Author,
        FormField::Isbn,
        FormField::Year,
        FormField::Cover,
    ];

    /// Move to the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Isbn,
            FormField::Isbn => FormField::Year,
            FormField::Year => FormField::Cover,
            FormField::Cover => FormField::Title,
        }
    }

    /// Move to the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Cover,
            FormField::Author => FormField::Title,
            FormField::Isbn => FormField::Author,
            FormField::Year => FormField::Isbn,
            FormField::Cover => FormField::Year,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Isbn => "ISBN",
            FormField::Year => "Year",
            FormField::Cover => "Cover URL",
        }
    }
}

/// Application state
pub struct App {
    /// Controller and the terminal page it draws on
    pub library: Library<TuiSurface>,
    /// Whether the app should exit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Focused form field
    pub form_field: FormField,
    /// Fragment being typed in goto mode
    pub goto_input: String,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// When the status message was set (for auto-dismiss)
    pub status_message_time: Option<Instant>,
    /// Whether help overlay is visible
    pub show_help: bool,
}

impl App {
    /// Create the app over the sample catalog and draw the first page
    pub fn new(config: Config) -> Self {
        let mut library = Library::new(TuiSurface::new(), config);
        library.start();

        Self {
            library,
            should_quit: false,
            input_mode: InputMode::Normal,
            form_field: FormField::Title,
            goto_input: String::new(),
            status_message: None,
            status_message_time: None,
            show_help: false,
        }
    }

    pub fn surface(&self) -> &TuiSurface {
        self.library.surface()
    }

    pub fn surface_mut(&mut self) -> &mut TuiSurface {
        self.library.surface_mut()
    }

    pub fn route(&self) -> &Route {
        self.library.route()
    }

    /// Set a status message (will auto-dismiss after 3 seconds)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_time = Some(Instant::now());
    }

    /// Expire the status message and copy labels
    pub fn tick(&mut self) {
        let now = Instant::now();
        if let Some(time) = self.status_message_time {
            if now.duration_since(time) > Duration::from_secs(3) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
        self.library.tick(now);
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn move_up(&mut self) {
        self.surface_mut().select_prev();
    }

    pub fn move_down(&mut self) {
        self.surface_mut().select_next();
    }

    pub fn move_to_first(&mut self) {
        self.surface_mut().select_first();
    }

    pub fn move_to_last(&mut self) {
        self.surface_mut().select_last();
    }

    pub fn scroll_detail_up(&mut self) {
        let surface = self.surface_mut();
        surface.detail_scroll = surface.detail_scroll.saturating_sub(5);
    }

    pub fn scroll_detail_down(&mut self) {
        let surface = self.surface_mut();
        surface.detail_scroll = surface.detail_scroll.saturating_add(5);
    }

    /// Open the highlighted card
    pub fn open_selected(&mut self) {
        if let Some(id) = self.surface().current_card().map(|c| c.id.clone()) {
            self.library.open_book(&id);
        }
    }

    /// Start copying the ISBN of the highlighted card
    pub fn copy_selected(&mut self) -> Option<CopyRequest> {
        let id = self.surface().current_card().map(|c| c.id.clone())?;
        self.library.begin_copy(&id)
    }

    /// "Back to results"
    pub fn back(&mut self) {
        if self.route().is_detail() {
            self.library.back();
        }
    }

    /// Clear action
    pub fn clear(&mut self) {
        self.library.clear();
        self.set_status("Cleared");
    }

    /// Open the detail page's external link in the browser
    pub fn open_external(&mut self) {
        let url = self
            .surface()
            .detail
            .as_ref()
            .and_then(|d| d.external_url.clone());

        match url {
            Some(url) => match open::that(&url) {
                Ok(()) => self.set_status(format!("Opened {}", url)),
                Err(e) => self.set_status(format!("Failed to open: {}", e)),
            },
            None => self.set_status("No external link for this book"),
        }
    }

    /// Enter search mode; typing edits the search box live
    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Search;
    }

    /// Enter form mode on the first field
    pub fn enter_form_mode(&mut self) {
        self.input_mode = InputMode::Form;
        self.form_field = FormField::Title;
    }

    /// Enter goto mode with the current fragment pre-filled
    pub fn enter_goto_mode(&mut self) {
        self.input_mode = InputMode::Goto;
        self.goto_input = self
            .surface()
            .fragment()
            .map(|f| format!("#{}", f))
            .unwrap_or_else(|| "#".to_string());
    }

    /// Back to normal mode
    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Insert a character into whatever input has focus
    pub fn insert_char(&mut self, c: char) {
        match self.input_mode {
            InputMode::Search => {
                let mut query = self.surface().search.clone();
                query.push(c);
                self.library.search(&query);
            }
            InputMode::Form => self.form_value_mut().push(c),
            InputMode::Goto => self.goto_input.push(c),
            InputMode::Normal => {}
        }
    }

    /// Delete the last character of whatever input has focus
    pub fn delete_char(&mut self) {
        match self.input_mode {
            InputMode::Search => {
                let mut query = self.surface().search.clone();
                if query.pop().is_some() {
                    self.library.search(&query);
                }
            }
            InputMode::Form => {
                self.form_value_mut().pop();
            }
            InputMode::Goto => {
                self.goto_input.pop();
            }
            InputMode::Normal => {}
        }
    }

    /// Focus the next form field
    pub fn next_field(&mut self) {
        self.form_field = self.form_field.next();
    }

    /// Focus the previous form field
    pub fn prev_field(&mut self) {
        self.form_field = self.form_field.prev();
    }

    /// Value of a form field
    pub fn form_value(&self, field: FormField) -> &str {
        let form = &self.surface().form;
        match field {
            FormField::Title => &form.title,
            FormField::Author => &form.author,
            FormField::Isbn => &form.isbn,
            FormField::Year => &form.year,
            FormField::Cover => &form.cover,
        }
    }

    fn form_value_mut(&mut self) -> &mut String {
        let field = self.form_field;
        let form = &mut self.surface_mut().form;
        match field {
            FormField::Title => &mut form.title,
            FormField::Author => &mut form.author,
            FormField::Isbn => &mut form.isbn,
            FormField::Year => &mut form.year,
            FormField::Cover => &mut form.cover,
        }
    }

    /// Submit the add-book form
    pub fn submit_form(&mut self) {
        let form = self.surface().form.clone();
        match self.library.submit(form) {
            Ok(id) => {
                self.exit_input_mode();
                self.set_status(format!("Added book {}", id));
            }
            Err(e) => {
                self.surface_mut().alert(&e.to_string());
            }
        }
    }

    /// Go to the fragment typed in goto mode
    pub fn submit_goto(&mut self) {
        let fragment = std::mem::take(&mut self.goto_input);
        self.library.navigate(&fragment);
        self.exit_input_mode();
        if !self.route().is_detail() && !fragment.trim_start_matches('#').is_empty() {
            self.set_status(format!("Nothing to show for {}", fragment));
        }
    }
}
