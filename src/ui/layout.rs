use crate::models::Button;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;
// heading row below the art
const HEADING_HEIGHT: u16 = 1;
// the art is dropped before the log shrinks below this
const MIN_LOG_HEIGHT: u16 = 8;

/// Screen regions shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub frame: Rect,
    pub title: Rect,
    pub log: Rect,
    pub read_button: Rect,
    pub quit_button: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, art_height: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Percentage(75),
                Constraint::Fill(1),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Percentage(75),
                Constraint::Fill(1),
            ])
            .split(vertical[1]);

        let frame = horizontal[1];
        let title_height = title_height(frame, art_height);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(title_height),
                Constraint::Min(3),
                Constraint::Length(BUTTON_HEIGHT),
            ])
            .split(frame);

        let read_width = button_width(Button::ReadFortune);
        let quit_width = button_width(Button::Quit);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(read_width),
                Constraint::Length(BUTTON_GAP),
                Constraint::Length(quit_width),
                Constraint::Fill(1),
            ])
            .split(sections[2]);

        Self {
            frame,
            title: sections[0],
            log: sections[1],
            read_button: buttons[1],
            quit_button: buttons[3],
        }
    }

    pub fn button_area(&self, button: Button) -> Rect {
        match button {
            Button::ReadFortune => self.read_button,
            Button::Quit => self.quit_button,
        }
    }

    pub fn button_at(&self, column: u16, row: u16) -> Option<Button> {
        let pos = Position::new(column, row);
        Button::ALL
            .into_iter()
            .find(|b| self.button_area(*b).contains(pos))
    }

    /// Text area inside the log border.
    pub fn log_text(&self) -> Rect {
        Rect::new(
            self.log.x.saturating_add(1),
            self.log.y.saturating_add(1),
            self.log.width.saturating_sub(2),
            self.log.height.saturating_sub(2),
        )
    }
}

fn title_height(frame: Rect, art_height: u16) -> u16 {
    let with_art = art_height.saturating_add(HEADING_HEIGHT);
    let room = frame
        .height
        .saturating_sub(2)
        .saturating_sub(BUTTON_HEIGHT);

    if room.saturating_sub(with_art) >= MIN_LOG_HEIGHT {
        with_art
    } else {
        HEADING_HEIGHT
    }
}

fn button_width(button: Button) -> u16 {
    // borders plus one column of padding each side
    button.label().chars().count() as u16 + 4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 120, 40), 10)
    }

    #[test]
    fn test_frame_is_three_quarters_and_centered() {
        let l = layout();
        assert_eq!(l.frame.width, 90);
        assert_eq!(l.frame.height, 30);
        assert_eq!(l.frame.x, 15);
        assert_eq!(l.frame.y, 5);
    }

    #[test]
    fn test_sections_are_stacked_inside_frame() {
        let l = layout();
        assert_eq!(l.title.height, 11);
        assert!(l.title.y < l.log.y);
        assert!(l.log.y < l.read_button.y);
        assert_eq!(l.read_button.height, BUTTON_HEIGHT);
        assert_eq!(l.read_button.y, l.quit_button.y);
        assert!(l.read_button.right() <= l.quit_button.x);
        assert!(l.frame.contains(Position::new(l.quit_button.x, l.quit_button.y)));
    }

    #[test]
    fn test_button_hit_testing() {
        let l = layout();
        let read = l.read_button;
        let quit = l.quit_button;

        assert_eq!(l.button_at(read.x, read.y), Some(Button::ReadFortune));
        assert_eq!(
            l.button_at(read.right() - 1, read.bottom() - 1),
            Some(Button::ReadFortune)
        );
        assert_eq!(l.button_at(quit.x + 1, quit.y + 1), Some(Button::Quit));
        assert_eq!(l.button_at(read.right(), read.y), None);
        assert_eq!(l.button_at(0, 0), None);
    }

    #[test]
    fn test_log_text_is_inside_border() {
        let l = layout();
        let text = l.log_text();
        assert_eq!(text.width, l.log.width - 2);
        assert_eq!(text.height, l.log.height - 2);
    }

    #[test]
    fn test_art_gives_way_on_small_terminal() {
        let l = ScreenLayout::compute(Rect::new(0, 0, 80, 24), 10);
        assert_eq!(l.title.height, HEADING_HEIGHT);
        assert!(l.log.height >= MIN_LOG_HEIGHT);
        assert_eq!(l.log_text().height, l.log.height - 2);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let l = ScreenLayout::compute(Rect::new(0, 0, 4, 2), 10);
        assert_eq!(l.log_text().width, l.log.width.saturating_sub(2));
    }
}
