use crossterm::event::KeyCode;
use log::warn;

use crate::color::Rgb;
use crate::generator::{ColorGenerator, UnitSource};
use crate::sink::{self, ColorSink};

use super::{AppEvent, TRIGGER_KEYS};

/// What the screen currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Canvas {
    pub background: Option<Rgb>,
    pub label: String,
}

impl ColorSink for Canvas {
    fn set_background(&mut self, color: &str) {
        match Rgb::from_hex(color) {
            Some(rgb) => self.background = Some(rgb),
            None => warn!("ignoring unparsable background {color:?}"),
        }
    }

    fn set_label(&mut self, color: &str) {
        self.label = color.to_string();
    }
}

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub canvas: Canvas,
    pub generated: usize,
    generator: ColorGenerator,
    rng: Box<dyn UnitSource>,
}

impl App {
    /// Creates the app and paints the first color.
    pub fn new(generator: ColorGenerator, rng: Box<dyn UnitSource>) -> Self {
        let mut app = Self {
            running: true,
            show_help: false,
            canvas: Canvas::default(),
            generated: 0,
            generator,
            rng,
        };
        app.update_background();
        app
    }

    pub fn update_background(&mut self) -> Rgb {
        self.generated += 1;
        sink::update_background(&self.generator, &mut *self.rng, &mut self.canvas)
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.running = false,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.show_help = true,
            key if TRIGGER_KEYS.contains(&key) => {
                self.update_background();
            }
            _ => {}
        }
    }
}
