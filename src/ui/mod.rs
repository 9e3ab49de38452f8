pub mod layout;
pub mod utils;

use crate::app::App;
use crate::models::Button;
use crate::ui::layout::ScreenLayout;
use crate::ui::utils::{hex_to_rgb, BG, BRAND, SUB, SUB_ALT, TEXT};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const TITLE: &str = "Fortune Teller";

pub fn render(f: &mut Frame, app: &App) {
    f.render_widget(
        Block::default().style(Style::default().bg(hex_to_rgb(BG))),
        f.area(),
    );

    let layout = ScreenLayout::compute(f.area(), app.art_height());

    f.render_widget(
        Block::default()
            .title(format!(" {} ", TITLE))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .style(Style::default().fg(hex_to_rgb(SUB_ALT))),
        layout.frame,
    );

    draw_title(f, app, layout.title);
    draw_log(f, app, &layout);

    for button in Button::ALL {
        draw_button(f, button, app.focus == button, layout.button_area(button));
    }

    let hint = Paragraph::new("enter: activate | tab: switch | f: fortune | q: quit")
        .style(Style::default().fg(hex_to_rgb(SUB)))
        .alignment(Alignment::Center);
    let area = f.area();
    if layout.frame.bottom() < area.bottom() {
        f.render_widget(hint, Rect::new(area.x, area.bottom() - 1, area.width, 1));
    }
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let brand = hex_to_rgb(BRAND);
    let mut lines: Vec<Line> = Vec::new();

    if let Some(art) = &app.title_art {
        // equal widths keep the rows lined up once centered
        let width = art.width();
        for row in &art.lines {
            lines.push(Line::from(Span::styled(
                format!("{:<width$}", row),
                Style::default().fg(hex_to_rgb(TEXT)),
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        TITLE,
        Style::default().fg(brand).add_modifier(Modifier::BOLD),
    )));

    // keep the heading visible when the art does not fit
    let skip = lines.len().saturating_sub(area.height as usize);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    f.render_widget(Paragraph::new(visible).alignment(Alignment::Center), area);
}

fn draw_log(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let text_area = layout.log_text();
    let visual_lines = app.teller.log().visual_lines(text_area.width);

    let block = Block::default()
        .title(" Your Fortunes ")
        .borders(Borders::ALL)
        .style(Style::default().fg(hex_to_rgb(SUB_ALT)));

    let body: Vec<Line> = if app.teller.log().is_empty() {
        vec![Line::from(Span::styled(
            "Press \"Read My Fortune!\" to begin.",
            Style::default().fg(hex_to_rgb(SUB)),
        ))]
    } else {
        visual_lines
            .iter()
            .map(|l| {
                Line::from(Span::styled(
                    l.as_str(),
                    Style::default().fg(hex_to_rgb(TEXT)),
                ))
            })
            .collect()
    };

    f.render_widget(
        Paragraph::new(body).block(block).scroll((app.scroll, 0)),
        layout.log,
    );

    let max_scroll = visual_lines.len().saturating_sub(text_area.height as usize);
    if max_scroll > 0 {
        let mut state = ScrollbarState::new(visual_lines.len())
            .viewport_content_length(text_area.height as usize)
            .position(app.scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            layout.log.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}

fn draw_button(f: &mut Frame, button: Button, focused: bool, area: Rect) {
    let style = if focused {
        Style::default()
            .fg(hex_to_rgb(BRAND))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(hex_to_rgb(SUB))
    };

    f.render_widget(
        Paragraph::new(button.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::fortune::{FortuneTeller, MessageStore};
    use crate::models::TitleArt;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn app(art: Option<TitleArt>) -> App {
        let store = MessageStore::new(vec!["Beware of Tuesdays and tofu.".to_string()]).unwrap();
        let mut app = App::new(FortuneTeller::new(store, StdRng::seed_from_u64(0)), art);
        app.resize(100, 40);
        app
    }

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| super::render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_title_and_buttons() {
        let text = screen_text(&draw(&app(None)));
        assert!(text.contains("Fortune Teller"));
        assert!(text.contains("Read My Fortune!"));
        assert!(text.contains("Quit"));
        assert!(text.contains("to begin."));
    }

    #[test]
    fn test_renders_title_art() {
        let art = TitleArt {
            lines: vec!["(( crystal ))".to_string()],
        };
        let text = screen_text(&draw(&app(Some(art))));
        assert!(text.contains("(( crystal ))"));
    }

    fn first_column(buffer: &Buffer, needle: &str) -> Option<usize> {
        screen_text(buffer)
            .lines()
            .find_map(|line| line.find(needle).map(|b| line[..b].chars().count()))
    }

    #[test]
    fn test_title_art_rows_stay_aligned() {
        let rows = ["    .-\"\"-.", "   ( oo )", "  /|____|\\", "     ||"];
        let art = TitleArt {
            lines: rows.iter().map(|r| r.to_string()).collect(),
        };
        let buffer = draw(&app(Some(art)));

        let columns: Vec<usize> = rows
            .iter()
            .map(|r| first_column(&buffer, r.trim_start()).unwrap())
            .collect();
        for (row, col) in rows.iter().zip(&columns) {
            let indent = row.len() - row.trim_start().len();
            assert_eq!(col - indent, columns[0] - 4);
        }
    }

    #[test]
    fn test_scrollbar_thumb_shows_visible_share() {
        let mut app = app(None);
        for _ in 0..40 {
            app.read_fortune().unwrap();
        }
        let buffer = draw(&app);

        let track = app.layout().log_text();
        let column = app.layout().log.right() - 1;
        let thumb = (track.y..track.bottom())
            .filter(|y| buffer[(column, *y)].symbol() == "█")
            .count();

        assert!(thumb > 0);
        // 22 visible rows out of 40 lines
        assert!(thumb * 2 < track.height as usize);
    }

    #[test]
    fn test_renders_told_fortunes() {
        let mut app = app(None);
        app.read_fortune().unwrap();
        app.read_fortune().unwrap();

        let text = screen_text(&draw(&app));
        assert_eq!(text.matches("Beware of Tuesdays and tofu.").count(), 2);
        assert!(!text.contains("to begin."));
    }
}
