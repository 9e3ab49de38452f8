use crate::fortune::{FortuneTeller, StoreError};
use crate::models::{Button, TitleArt};
use crate::ui::layout::ScreenLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::rngs::StdRng;
use ratatui::layout::Rect;

const WHEEL_STEP: u16 = 3;

pub struct App {
    pub should_quit: bool,
    pub teller: FortuneTeller<StdRng>,
    pub title_art: Option<TitleArt>,
    pub focus: Button,

    /// First visible line of the wrapped log.
    pub scroll: u16,

    pub area: Rect,
}

impl App {
    pub fn new(teller: FortuneTeller<StdRng>, title_art: Option<TitleArt>) -> Self {
        Self {
            should_quit: false,
            teller,
            title_art,
            focus: Button::ReadFortune,
            scroll: 0,
            area: Rect::new(0, 0, 80, 24),
        }
    }

    pub fn art_height(&self) -> u16 {
        self.title_art.as_ref().map(TitleArt::height).unwrap_or(0)
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.area, self.art_height())
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn quit(&mut self) {
        tracing::info!(
            told = self.teller.log().len(),
            catalog = self.teller.store().count(),
            "quitting"
        );
        self.should_quit = true;
    }

    pub fn read_fortune(&mut self) -> Result<(), StoreError> {
        self.teller.generate()?;
        self.scroll_to_end();
        Ok(())
    }

    pub fn activate(&mut self, button: Button) -> Result<(), StoreError> {
        self.focus = button;
        match button {
            Button::ReadFortune => self.read_fortune(),
            Button::Quit => {
                self.quit();
                Ok(())
            }
        }
    }

    /// Dispatches one terminal event. Once quit has been requested every
    /// further event is dropped.
    pub fn handle_event(&mut self, event: Event) -> Result<(), StoreError> {
        if self.should_quit {
            return Ok(());
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize(w, h) => {
                self.resize(w, h);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Result<(), StoreError> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char('f') => return self.activate(Button::ReadFortune),
            KeyCode::Enter | KeyCode::Char(' ') => return self.activate(self.focus),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = self.focus.next()
            }
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(self.page_height() as i32)),
            KeyCode::PageDown => self.scroll_by(self.page_height() as i32),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll_to_end(),
            _ => {}
        }
        Ok(())
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Result<(), StoreError> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(button) = self.layout().button_at(mouse.column, mouse.row) {
                    return self.activate(button);
                }
            }
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_STEP as i32)),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP as i32),
            _ => {}
        }
        Ok(())
    }

    fn page_height(&self) -> u16 {
        self.layout().log_text().height.max(1)
    }

    fn max_scroll(&self) -> u16 {
        let text = self.layout().log_text();
        let total = self.teller.log().visual_lines(text.width).len();
        total
            .saturating_sub(text.height as usize)
            .min(u16::MAX as usize) as u16
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = next as u16;
    }

    fn scroll_to_end(&mut self) {
        self.scroll = self.max_scroll();
    }
}
