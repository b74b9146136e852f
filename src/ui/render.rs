use crate::catalog::{Product, ALL_CATEGORIES};
use crate::ui::app::{App, Focus};
use crate::ui::catalog::{CatalogState, CatalogView};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect, controls_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, PRICE,
    STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.catalog()), header);
    frame.render_widget(Clear, body);
    match app.catalog() {
        CatalogState::Loading => frame.render_widget(status_message("loading...", HEADER_TEXT), body),
        // Generic indicator only; details go to the log.
        CatalogState::Error { .. } => {
            frame.render_widget(status_message("failed to load", STATUS_ERROR), body)
        }
        CatalogState::Ready(view) => draw_ready(frame, body, view, app.focus()),
    }
    frame.render_widget(
        Footer::new().widget(footer, app.focus(), app.notice()),
        footer,
    );

    if app.focus() == Focus::Basket {
        if let Some(view) = app.view() {
            draw_basket(frame, area, view);
        }
    }
}

fn status_message(text: &'static str, color: ratatui::style::Color) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE))
}

fn draw_ready(frame: &mut Frame<'_>, body: Rect, view: &CatalogView, focus: Focus) {
    let (controls, count, list_area) = body_regions(body);
    let (category_area, search_area) = controls_regions(controls);

    frame.render_widget(category_selector(view), category_area);

    let search_focused = focus == Focus::Search;
    let query = &view.filter().query;
    let search_border = if search_focused { ACCENT } else { GLOBAL_BORDER };
    let search = Paragraph::new(query.clone()).block(
        Block::default()
            .title(" Search (/) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(search_border)),
    );
    frame.render_widget(search, search_area);
    if search_focused && search_area.width > 2 && search_area.height > 2 {
        let width = u16::try_from(Span::raw(query.as_str()).width()).unwrap_or(u16::MAX);
        let offset = width.min(search_area.width - 3);
        frame.set_cursor_position((search_area.x + 1 + offset, search_area.y + 1));
    }

    frame.render_widget(
        Paragraph::new(format!(" {} items", view.item_count()))
            .style(Style::default().fg(HEADER_TEXT)),
        count,
    );

    let items: Vec<ListItem> = view.visible().iter().map(product_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(view.selected_index());
    frame.render_stateful_widget(list, list_area, &mut state);
}

fn category_selector(view: &CatalogView) -> Paragraph<'static> {
    let selected = view.filter().category.label().to_string();
    let separator = Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR));

    let mut spans = Vec::new();
    let options = std::iter::once(ALL_CATEGORIES.to_string()).chain(view.categories().iter().cloned());
    for (idx, option) in options.enumerate() {
        if idx > 0 {
            spans.push(separator.clone());
        }
        let style = if option == selected {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(option, style));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Category (Tab) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn product_item(product: &Product) -> ListItem<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(HEADER_SEPARATOR);
    let stock_style = if product.in_stock() {
        muted
    } else {
        Style::default().fg(STATUS_ERROR)
    };

    ListItem::new(Line::from(vec![
        Span::styled(product.title.clone(), text_style),
        Span::styled("  ", text_style),
        Span::styled(
            format!("${:.2}", product.discounted_price()),
            Style::default().fg(PRICE),
        ),
        Span::styled(
            format!(
                "  (${:.2} -{:.1}%)",
                product.price, product.discount_percentage
            ),
            muted,
        ),
        Span::styled(format!("  stock {}", product.stock), stock_style),
        Span::styled(format!("  [{}]", product.category), muted),
    ]))
}

fn draw_basket(frame: &mut Frame<'_>, area: Rect, view: &CatalogView) {
    let popup = centered_rect(60, 60, area);
    let basket = view.basket();

    let lines: Vec<Line> = if basket.is_empty() {
        vec![Line::from(Span::styled(
            " Basket is empty.",
            Style::default().fg(HEADER_SEPARATOR),
        ))]
    } else {
        let mut lines: Vec<Line> = basket
            .items()
            .iter()
            .enumerate()
            .map(|(idx, product)| {
                Line::from(vec![
                    Span::styled(format!(" {:>2}. ", idx + 1), Style::default().fg(HEADER_SEPARATOR)),
                    Span::styled(product.title.clone(), Style::default().fg(HEADER_TEXT)),
                    Span::styled(
                        format!("  ${:.2}", product.discounted_price()),
                        Style::default().fg(PRICE),
                    ),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" Total: ${:.2}", basket.total()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(format!(" Basket ({}) ", basket.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}
