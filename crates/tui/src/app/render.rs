//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main layout (header, profile and settings summary, rows, footer)
//! - Render toasts and the popup surface on top
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except list selection and recorded areas)

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::app::state::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::popup::render_popup;
use crate::services::AccountState;
use crate::ui::toast::render_toasts;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let account = self.account_state();

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(f.area());

        self.render_header(f, header_area, &account);

        let [summary_area, list_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(body_area);
        self.render_summary(f, summary_area, &account);
        self.render_rows(f, list_area, &account);
        self.render_footer(f, footer_area);

        render_toasts(f, &self.toasts, &self.theme);

        // Popup last so it covers everything, toasts included.
        let theme = self.theme;
        render_popup(f, &mut self.engine, &theme);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, account: &AccountState) {
        let theme = self.theme;
        let who = match (&account.auth, &account.profile) {
            (Some(_), Some(profile)) => Span::styled(
                format!("{} <{}>", profile.name, profile.email),
                Style::default().fg(theme.accent),
            ),
            (Some(auth), None) => Span::styled(auth.email.clone(), Style::default().fg(theme.accent)),
            (None, _) => Span::styled("Not signed in", Style::default().fg(theme.text_dim)),
        };

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "Typist",
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Settings", Style::default().fg(theme.text)),
            Span::raw(" | "),
            who,
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        f.render_widget(header, area);
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, account: &AccountState) {
        let theme = self.theme;
        let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.text_dim));

        let mut lines = vec![
            Line::from(vec![
                label("Font: "),
                Span::raw(self.settings.font_family_display()),
            ]),
            Line::from(vec![
                label("Font size: "),
                Span::raw(self.settings.font_size.to_string()),
            ]),
            Line::from(vec![
                label("Theme: "),
                Span::raw(self.settings.color_theme.display_name()),
            ]),
            Line::default(),
        ];

        if let Some(profile) = account.profile.as_ref() {
            lines.push(Line::from(vec![
                label("Personal bests: "),
                Span::raw(profile.personal_bests.entry_count().to_string()),
            ]));
            lines.push(Line::from(vec![
                label("Tags: "),
                Span::raw(profile.tags.len().to_string()),
            ]));
            lines.push(Line::from(vec![
                label("Discord: "),
                Span::raw(if profile.discord_id.is_some() {
                    "linked"
                } else {
                    "not linked"
                }),
            ]));
        }
        if let Some(provider) = account.primary_provider() {
            lines.push(Line::from(vec![
                label("Sign-in: "),
                Span::raw(provider.as_str()),
            ]));
        }

        let summary = Paragraph::new(lines).block(
            Block::default()
                .title(" Profile ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        f.render_widget(summary, area);
    }

    fn render_rows(&mut self, f: &mut Frame, area: Rect, account: &AccountState) {
        let theme = self.theme;
        let items: Vec<ListItem> = crate::app::SettingsRow::build(account)
            .into_iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<9}", row.section),
                        Style::default().fg(theme.text_dim),
                    ),
                    Span::styled(row.label, Style::default().fg(theme.text)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Actions ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            )
            .highlight_style(
                Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.list_area = area;
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let theme = self.theme;
        let mut spans = Vec::new();
        if self.loading {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!(" {frame} Loading... "),
                Style::default().fg(theme.warning),
            ));
            spans.push(Span::raw("|"));
        }
        spans.push(Span::raw(" j/k:Move | Enter:Open | r:Reload "));
        spans.push(Span::raw("|"));
        spans.push(Span::styled(" q:Quit ", Style::default().fg(theme.error)));

        let footer = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        f.render_widget(footer, area);
    }
}
