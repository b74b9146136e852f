use crate::ui::catalog::CatalogState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Page title plus the basket summary.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &CatalogState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (indicator, indicator_style) = match state {
            CatalogState::Loading => ("●", Style::default().fg(HEADER_SEPARATOR)),
            CatalogState::Error { .. } => ("●", Style::default().fg(STATUS_ERROR)),
            CatalogState::Ready(_) => ("●", Style::default().fg(STATUS_OK)),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(indicator, indicator_style),
            Span::styled("  ", text_style),
            Span::styled(
                "Products",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(view) = state.view() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(basket_summary(view.basket().len()), text_style));
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("${:.2}", view.basket().total()),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn basket_summary(count: usize) -> String {
    match count {
        1 => "Basket: 1 item".to_string(),
        n => format!("Basket: {} items", n),
    }
}
