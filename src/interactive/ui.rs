use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::Title, Block, Borders, Cell as TableCell, Paragraph, Row as TableRow, Table,
        TableState, Tabs, Wrap,
    },
    Frame,
};

use super::app::DashboardApp;
use super::layout::{app_layout, centered_rect};
use crate::models::Resource;
use crate::view::{Cell, TableBody, TableModel, Tone, ViewModel};

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Default => Color::White,
        Tone::Strong => Color::White,
        Tone::Muted => Color::DarkGray,
        Tone::Link => Color::LightBlue,
        Tone::Primary => Color::Blue,
        Tone::Secondary => Color::Rgb(108, 117, 125),
        Tone::Info => Color::Cyan,
        Tone::Success => Color::Green,
        Tone::Marker => Color::Red,
        Tone::Gold => Color::Rgb(255, 215, 0),
        Tone::Silver => Color::Rgb(192, 192, 192),
        Tone::Bronze => Color::Rgb(205, 127, 50),
    }
}

fn span_style(tone: Tone, badge: bool) -> Style {
    if badge {
        let fg = match tone {
            Tone::Gold | Tone::Silver | Tone::Info => Color::Black,
            _ => Color::White,
        };
        return Style::default()
            .bg(tone_color(tone))
            .fg(fg)
            .add_modifier(Modifier::BOLD);
    }

    let style = Style::default().fg(tone_color(tone));
    match tone {
        Tone::Strong => style.add_modifier(Modifier::BOLD),
        Tone::Link => style.add_modifier(Modifier::UNDERLINED),
        _ => style,
    }
}

fn cell_line(cell: &Cell) -> Line<'static> {
    let mut spans = Vec::with_capacity(cell.spans.len() * 2);
    for (i, span) in cell.spans.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let text = if span.badge {
            format!(" {} ", span.text)
        } else {
            span.text.clone()
        };
        spans.push(Span::styled(text, span_style(span.tone, span.badge)));
    }
    Line::from(spans)
}

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let layout = app_layout(frame.size());

    draw_tabs(frame, layout.tabs, app);

    let config = app.view().config();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", config.heading()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));

    match app.view().render() {
        ViewModel::Loading(text) => draw_message(
            frame,
            layout.main,
            block,
            Line::from(Span::styled(text, Style::default().fg(Color::Yellow))),
        ),
        ViewModel::Error(message) => draw_message(
            frame,
            layout.main,
            block,
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(message, Style::default().fg(Color::Red)),
            ]),
        ),
        ViewModel::Table(table) => draw_table(frame, layout.main, block, &table, app.selected),
    }

    draw_footer(frame, layout.footer);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let titles: Vec<Line> = Resource::ALL
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(format!("{} {}", i + 1, r.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " OctoFit Tracker ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        )
        .select(app.active().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    frame.render_widget(tabs, area);
}

fn draw_message(frame: &mut Frame, area: Rect, block: Block, line: Line) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let target = centered_rect(inner.width, 1, inner);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, target);
}

fn draw_table(frame: &mut Frame, area: Rect, block: Block, table: &TableModel, selected: usize) {
    let block = block.title(
        Title::from(Span::styled(
            format!(" {} ", table.badge),
            Style::default().bg(tone_color(Tone::Secondary)).fg(Color::White),
        ))
        .alignment(Alignment::Right),
    );

    let widths: Vec<Constraint> = table
        .column_widths()
        .iter()
        .map(|w| Constraint::Length(*w as u16))
        .collect();

    let header = TableRow::new(table.header.iter().map(|h| {
        TableCell::from(Span::styled(
            h.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    }))
    .bottom_margin(1);

    let rows: Vec<TableRow> = table
        .rows()
        .iter()
        .map(|row| TableRow::new(row.cells.iter().map(|c| TableCell::from(cell_line(c)))))
        .collect();

    let inner = block.inner(area);
    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .highlight_style(Style::default().bg(Color::Rgb(30, 35, 50)).add_modifier(Modifier::BOLD));

    let mut state = TableState::default();
    if !table.rows().is_empty() {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(widget, area, &mut state);

    if let TableBody::Empty(message) = &table.body {
        // below the header and its margin
        let body = Rect {
            y: inner.y.saturating_add(2),
            height: inner.height.saturating_sub(2),
            ..inner
        };
        if body.height > 0 {
            let paragraph = Paragraph::new(Span::styled(message.clone(), Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, centered_rect(body.width, 1, body));
        }
    }
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::DarkGray);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" ←/→ 1-5", key),
        Span::styled(" switch  ", label),
        Span::styled("↑/↓", key),
        Span::styled(" select  ", label),
        Span::styled("q", key),
        Span::styled(" quit", label),
    ]));
    frame.render_widget(footer, area);
}
