use crossterm::event::KeyCode;
use folio_engine::catalog::{self, PostKind, PostSummary, SortOption};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
}

/// Reader state: the loaded catalog and the current view over it.
pub struct App {
    posts: Vec<PostSummary>,
    visible: Vec<PostSummary>,
    pub list_state: ListState,
    sort: SortOption,
    category: Option<String>,
    search: String,
    mode: Mode,
}

impl App {
    pub fn new(posts: Vec<PostSummary>) -> Self {
        let mut app = Self {
            posts,
            visible: Vec::new(),
            list_state: ListState::default(),
            sort: SortOption::default(),
            category: None,
            search: String::new(),
            mode: Mode::Browse,
        };
        app.refresh();
        app
    }

    pub fn visible(&self) -> &[PostSummary] {
        &self.visible
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> Option<&PostSummary> {
        self.list_state
            .selected()
            .and_then(|index| self.visible.get(index))
    }

    /// Re-filter and re-sort, keeping the selection in range.
    fn refresh(&mut self) {
        let filtered = catalog::filter_posts(&self.posts, &self.search, self.category.as_deref());
        self.visible = catalog::sort_posts(&filtered, self.sort);
        let selected = match self.list_state.selected() {
            _ if self.visible.is_empty() => None,
            Some(i) => Some(i.min(self.visible.len() - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    pub fn next_post(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.visible.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_post(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.refresh();
    }

    /// All categories, then back to no filter.
    pub fn cycle_category(&mut self) {
        let categories = catalog::categories(&self.posts);
        self.category = match &self.category {
            None => categories.first().cloned(),
            Some(current) => categories
                .iter()
                .position(|c| c == current)
                .and_then(|i| categories.get(i + 1))
                .cloned(),
        };
        self.list_state.select(Some(0));
        self.refresh();
    }

    /// Returns `true` when the reader should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Browse => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => self.next_post(),
                KeyCode::Up | KeyCode::Char('k') => self.previous_post(),
                KeyCode::Char('s') => self.cycle_sort(),
                KeyCode::Char('c') => self.cycle_category(),
                KeyCode::Char('/') => self.mode = Mode::Search,
                _ => {}
            },
            Mode::Search => match code {
                KeyCode::Enter | KeyCode::Esc => self.mode = Mode::Browse,
                KeyCode::Backspace => {
                    self.search.pop();
                    self.refresh();
                }
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.refresh();
                }
                _ => {}
            },
        }
        false
    }

    /// Lines for the detail pane.
    pub fn detail_lines(&self) -> Vec<String> {
        let Some(post) = self.selected() else {
            return vec!["No posts match".to_string()];
        };

        let kind = match post.kind {
            PostKind::Component => "component",
            PostKind::Markdown => "markdown",
        };
        let mut lines = vec![
            post.title.clone(),
            String::new(),
            format!("Date:     {}", post.date),
            format!("Category: {}", post.category),
            format!("Tags:     {}", post.tags.join(", ")),
            format!("File:     {} ({kind})", post.relative_path),
            String::new(),
            post.summary.clone(),
        ];
        let body = post.body_lines();
        if !body.is_empty() {
            lines.push(String::new());
            lines.extend(body);
        }
        lines
    }
}
