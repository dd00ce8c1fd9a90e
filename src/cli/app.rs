//! Terminal front end: maps key presses onto navigation actions and renders
//! the current screen as text.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::cli::output::{styled, MessageKind, OutputPreferences};
use crate::cli::ui::{
    detail_view::DetailView,
    formatting,
    navigation::NavKey,
    table_renderer::{Table, TableColumn},
};
use crate::config::Config;
use crate::currency::{format_currency_value, format_date, CurrencyCode, LocaleConfig};
use crate::errors::ExpenseError;
use crate::expenses::{self, classify, Expense};
use crate::navigation::{NavAction, NavigationController, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppOutcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Navigate(NavAction),
    Quit,
}

struct MenuItem {
    label: &'static str,
    action: MenuAction,
    notice: Option<&'static str>,
}

const fn item(label: &'static str, action: NavAction) -> MenuItem {
    MenuItem {
        label,
        action: MenuAction::Navigate(action),
        notice: None,
    }
}

const fn item_with_notice(
    label: &'static str,
    action: NavAction,
    notice: &'static str,
) -> MenuItem {
    MenuItem {
        label,
        action: MenuAction::Navigate(action),
        notice: Some(notice),
    }
}

const LOGIN_MENU: &[MenuItem] = &[
    item_with_notice("Sign in", NavAction::ReplaceTop(Screen::Home), "Signed in"),
    item("Create an account", NavAction::Push(Screen::Register)),
    MenuItem {
        label: "Quit",
        action: MenuAction::Quit,
        notice: None,
    },
];

const REGISTER_MENU: &[MenuItem] = &[
    item_with_notice(
        "Register",
        NavAction::Pop,
        "Account created, you can sign in now",
    ),
    item("Back to login", NavAction::Pop),
];

const HOME_MENU: &[MenuItem] = &[
    item("View expenses", NavAction::Push(Screen::ExpenseList)),
    item("Profile", NavAction::Push(Screen::Profile)),
    item("Settings", NavAction::Push(Screen::Settings)),
    item_with_notice("Logout", NavAction::ResetTo(Screen::Login), "Signed out"),
];

const BACK_MENU: &[MenuItem] = &[item("Back", NavAction::Pop)];

fn menu_for(screen: Screen) -> &'static [MenuItem] {
    match screen {
        Screen::Login => LOGIN_MENU,
        Screen::Register => REGISTER_MENU,
        Screen::Home => HOME_MENU,
        Screen::Profile | Screen::Settings => BACK_MENU,
        Screen::ExpenseList => &[],
    }
}

/// Presentation state layered over a [`NavigationController`].
pub struct App {
    nav: NavigationController,
    expenses: Vec<Expense>,
    config: Config,
    prefs: OutputPreferences,
    currency: CurrencyCode,
    locale: LocaleConfig,
    today: NaiveDate,
    cursor: usize,
    dialog_open: bool,
    category_filter: Option<String>,
    recent_only: bool,
    status: Option<(MessageKind, String)>,
}

impl App {
    /// Starts on the login screen with the seed expense list.
    pub fn new(config: Config, today: NaiveDate) -> Result<Self, ExpenseError> {
        let expenses = expenses::seed_expenses(today)?;
        Ok(Self::with_expenses(config, today, expenses))
    }

    pub fn with_expenses(config: Config, today: NaiveDate, expenses: Vec<Expense>) -> Self {
        let prefs = OutputPreferences {
            plain_mode: config.plain_mode,
            screen_reader_mode: false,
        };
        Self {
            nav: NavigationController::new(),
            expenses,
            currency: config.currency_code(),
            locale: config.locale_config(),
            config,
            prefs,
            today,
            cursor: 0,
            dialog_open: false,
            category_filter: None,
            recent_only: false,
            status: None,
        }
    }

    pub fn navigator(&self) -> &NavigationController {
        &self.nav
    }

    pub fn current_screen(&self) -> Screen {
        self.nav.current()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    pub fn recent_only(&self) -> bool {
        self.recent_only
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(_, message)| message.as_str())
    }

    /// Expenses shown on the list screen after the active filters.
    pub fn visible_expenses(&self) -> Vec<&Expense> {
        let scoped = if self.recent_only {
            expenses::filter_recent(
                &self.expenses,
                self.today.and_time(NaiveTime::MIN),
                self.config.recent_window(),
            )
        } else {
            self.expenses.iter().collect()
        };
        match &self.category_filter {
            Some(category) => expenses::filter_by_category(scoped, category),
            None => scoped,
        }
    }

    pub fn selected_expense(&self) -> Option<&Expense> {
        self.visible_expenses().get(self.cursor).copied()
    }

    pub fn handle(&mut self, key: NavKey) -> AppOutcome {
        self.status = None;
        if key == NavKey::Char('q') {
            return AppOutcome::Quit;
        }

        if self.dialog_open {
            if matches!(key, NavKey::Esc | NavKey::Enter | NavKey::Left) {
                self.dialog_open = false;
            }
            return AppOutcome::Continue;
        }

        match key {
            NavKey::Up => self.cursor = self.cursor.saturating_sub(1),
            NavKey::Down => {
                if self.cursor + 1 < self.item_count() {
                    self.cursor += 1;
                }
            }
            NavKey::Esc | NavKey::Left => self.navigate(NavAction::Pop, None),
            NavKey::Enter | NavKey::Right => return self.activate(self.cursor),
            NavKey::Char(c) => return self.shortcut(c),
            NavKey::Unknown => {}
        }
        AppOutcome::Continue
    }

    fn item_count(&self) -> usize {
        match self.current_screen() {
            Screen::ExpenseList => self.visible_expenses().len(),
            screen => menu_for(screen).len(),
        }
    }

    fn shortcut(&mut self, c: char) -> AppOutcome {
        match (self.current_screen(), c) {
            (Screen::ExpenseList, 'f') => self.cycle_category_filter(),
            (Screen::ExpenseList, 'r') => self.toggle_recent(),
            (screen, digit) if screen != Screen::ExpenseList => {
                if let Some(index) = digit.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    if index < menu_for(screen).len() {
                        self.cursor = index;
                        return self.activate(index);
                    }
                }
            }
            _ => {}
        }
        AppOutcome::Continue
    }

    fn activate(&mut self, index: usize) -> AppOutcome {
        let screen = self.current_screen();
        if screen == Screen::ExpenseList {
            self.dialog_open = self.selected_expense().is_some();
            return AppOutcome::Continue;
        }
        match menu_for(screen).get(index) {
            Some(MenuItem {
                action: MenuAction::Navigate(action),
                notice,
                ..
            }) => self.navigate(*action, *notice),
            Some(MenuItem {
                action: MenuAction::Quit,
                ..
            }) => return AppOutcome::Quit,
            None => {}
        }
        AppOutcome::Continue
    }

    fn navigate(&mut self, action: NavAction, notice: Option<&str>) {
        match self.nav.apply(action) {
            Ok(screen) => {
                debug!(?action, current = %screen, depth = self.nav.depth(), "navigated");
                self.cursor = 0;
                self.dialog_open = false;
                if let Some(notice) = notice {
                    self.status = Some((MessageKind::Success, notice.to_string()));
                }
            }
            Err(err) => {
                self.status = Some((MessageKind::Warning, format!("{err}; press q to quit")));
            }
        }
    }

    fn cycle_category_filter(&mut self) {
        let categories: Vec<String> = expenses::total_by_category(&self.expenses)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        let next = match &self.category_filter {
            None => categories.first().cloned(),
            Some(current) => categories
                .iter()
                .position(|name| name.eq_ignore_ascii_case(current))
                .and_then(|idx| categories.get(idx + 1))
                .cloned(),
        };
        debug!(filter = ?next, "category filter changed");
        self.category_filter = next;
        self.cursor = 0;
    }

    fn toggle_recent(&mut self) {
        self.recent_only = !self.recent_only;
        self.cursor = 0;
    }

    fn money(&self, amount: f64) -> String {
        format_currency_value(amount, &self.currency, &self.locale)
    }

    pub fn render(&self) -> String {
        let screen = self.current_screen();
        let mut out = vec![
            styled(MessageKind::Section, screen.title(), &self.prefs),
            self.breadcrumb(),
            String::new(),
        ];

        match screen {
            Screen::Login => {
                out.push("Welcome back! Sign in to track your spending.".to_string());
                out.push(String::new());
                out.extend(self.render_menu(screen));
            }
            Screen::Register => {
                out.push("Fill in your name, email and password to get started.".to_string());
                out.push(String::new());
                out.extend(self.render_menu(screen));
            }
            Screen::Home => {
                out.extend(self.render_dashboard());
                out.push(String::new());
                out.extend(self.render_menu(screen));
            }
            Screen::ExpenseList => out.extend(self.render_expense_list()),
            Screen::Profile => {
                out.push("Signed in as demo@example.com".to_string());
                out.push(String::new());
                out.extend(self.render_menu(screen));
            }
            Screen::Settings => {
                out.push(format!("Currency       {}", self.currency.as_str()));
                out.push(format!("Locale         {}", self.locale.language_tag));
                out.push(format!(
                    "Recent window  {} days",
                    self.config.recent_window_days
                ));
                out.push(format!(
                    "Plain output   {}",
                    if self.prefs.plain_mode { "on" } else { "off" }
                ));
                out.push(String::new());
                out.extend(self.render_menu(screen));
            }
        }

        if self.dialog_open {
            if let Some(expense) = self.selected_expense() {
                out.push(String::new());
                out.push(self.render_details(expense));
            }
        }

        if let Some((kind, message)) = &self.status {
            out.push(String::new());
            out.push(styled(*kind, message, &self.prefs));
        }

        out.push(String::new());
        out.push(formatting::navigation_hint(&self.prefs));
        out.join("\n")
    }

    fn breadcrumb(&self) -> String {
        self.nav
            .stack()
            .iter()
            .map(|screen| screen.title())
            .collect::<Vec<_>>()
            .join(" > ")
    }

    fn render_menu(&self, screen: Screen) -> Vec<String> {
        menu_for(screen)
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let marker = if idx == self.cursor { ">" } else { " " };
                format!("{marker} {}. {}", idx + 1, item.label)
            })
            .collect()
    }

    fn render_dashboard(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Total spending  {}", self.money(expenses::total(&self.expenses))),
            format!("Transactions    {}", self.expenses.len()),
            String::new(),
            "By category".to_string(),
        ];
        for (category, sum) in expenses::total_by_category(&self.expenses) {
            let style = classify(&category);
            lines.push(format!(
                "  {} {:<16} {}",
                formatting::category_badge(style, &self.prefs),
                category,
                self.money(sum)
            ));
        }
        lines
    }

    fn render_expense_list(&self) -> Vec<String> {
        let visible = self.visible_expenses();
        let scope = match (&self.category_filter, self.recent_only) {
            (None, false) => "All expenses".to_string(),
            (Some(category), false) => category.clone(),
            (None, true) => format!("Last {} days", self.config.recent_window_days),
            (Some(category), true) => format!(
                "{category}, last {} days",
                self.config.recent_window_days
            ),
        };
        let mut lines = vec![format!("Showing: {scope}"), String::new()];

        if visible.is_empty() {
            lines.push("No expenses match the current filter.".to_string());
        } else {
            let mut table = Table::new(vec![
                TableColumn::left(""),
                TableColumn::left("Title").with_max_width(24),
                TableColumn::left("Category"),
                TableColumn::left("Date"),
                TableColumn::right("Amount"),
            ]);
            table.plain = self.prefs.plain_mode;
            table.selected = Some(self.cursor);
            for expense in &visible {
                let style = classify(expense.category());
                table.push_row(vec![
                    formatting::category_badge(style, &self.prefs),
                    expense.title().to_string(),
                    formatting::paint(expense.category(), style.color, &self.prefs),
                    format_date(&self.locale, expense.date()),
                    self.money(expense.amount()),
                ]);
            }
            lines.push(table.render());
        }

        lines.push(String::new());
        lines.push(format!("Total: {}", self.money(expenses::total(visible))));
        lines.push("f: cycle category filter  r: toggle recent only".to_string());
        lines
    }

    fn render_details(&self, expense: &Expense) -> String {
        DetailView::new(expense.title())
            .with_field("Amount", self.money(expense.amount()))
            .with_field("Category", expense.category())
            .with_field("Date", format_date(&self.locale, expense.date()))
            .with_field("Description", expense.description())
            .with_field("ID", expense.id())
            .with_footer("Press Enter or Esc to close")
            .render(self.prefs.plain_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = Config {
            plain_mode: true,
            ..Config::default()
        };
        App::new(config, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).expect("seed is valid")
    }

    #[test]
    fn sign_in_replaces_login() {
        let mut app = app();
        assert_eq!(app.handle(NavKey::Enter), AppOutcome::Continue);
        assert_eq!(app.navigator().stack(), &[Screen::Home]);
        assert_eq!(app.status(), Some("Signed in"));
    }

    #[test]
    fn escape_on_login_reports_refusal() {
        let mut app = app();
        app.handle(NavKey::Esc);
        assert_eq!(app.current_screen(), Screen::Login);
        assert!(app.status().unwrap_or_default().contains("cannot pop"));
    }

    #[test]
    fn digit_shortcut_activates_menu_item() {
        let mut app = app();
        app.handle(NavKey::Char('2'));
        assert_eq!(app.navigator().stack(), &[Screen::Login, Screen::Register]);
        app.handle(NavKey::Char('9'));
        assert_eq!(app.current_screen(), Screen::Register);
    }

    #[test]
    fn cursor_is_clamped_to_menu() {
        let mut app = app();
        for _ in 0..10 {
            app.handle(NavKey::Down);
        }
        assert_eq!(app.cursor(), LOGIN_MENU.len() - 1);
        app.handle(NavKey::Up);
        assert_eq!(app.cursor(), LOGIN_MENU.len() - 2);
    }

    #[test]
    fn quit_menu_item_ends_session() {
        let mut app = app();
        assert_eq!(app.handle(NavKey::Char('3')), AppOutcome::Quit);
    }

    #[test]
    fn filter_cycle_wraps_back_to_all() {
        let mut app = app();
        app.handle(NavKey::Enter);
        app.handle(NavKey::Enter);
        assert_eq!(app.current_screen(), Screen::ExpenseList);

        let mut seen = Vec::new();
        loop {
            app.handle(NavKey::Char('f'));
            match app.category_filter() {
                Some(category) => seen.push(category.to_string()),
                None => break,
            }
        }
        assert_eq!(
            seen,
            vec!["Food", "Transportation", "Utilities", "Entertainment", "Health"]
        );
    }

    #[test]
    fn dialog_swallows_navigation_until_closed() {
        let mut app = app();
        app.handle(NavKey::Enter);
        app.handle(NavKey::Enter);
        app.handle(NavKey::Down);
        app.handle(NavKey::Enter);
        assert!(app.is_dialog_open());
        assert_eq!(app.selected_expense().map(Expense::title), Some("Fuel"));

        app.handle(NavKey::Down);
        assert_eq!(app.cursor(), 1);
        app.handle(NavKey::Esc);
        assert!(!app.is_dialog_open());
        assert_eq!(app.current_screen(), Screen::ExpenseList);
    }
}
