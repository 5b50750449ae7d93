use super::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use glide_core::{Axis, ScrollCommand, WheelEvent};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            // Any key closes help
            self.toggle_help();
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if let KeyCode::Char(c) = key.code {
            if !ctrl {
                if let Some(command) = self.keys.get(&c).copied() {
                    self.run_command(command);
                    return;
                }
            }
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            // Line glides
            KeyCode::Up | KeyCode::Char('k') => self.run_command(ScrollCommand::LineUp),
            KeyCode::Down | KeyCode::Char('j') => self.run_command(ScrollCommand::LineDown),
            KeyCode::Left | KeyCode::Char('h') => self.run_command(ScrollCommand::LineLeft),
            KeyCode::Right | KeyCode::Char('l') => self.run_command(ScrollCommand::LineRight),
            // Page glides
            KeyCode::PageUp | KeyCode::Char('b') => self.run_command(ScrollCommand::PageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => self.run_command(ScrollCommand::PageDown),
            KeyCode::Char('u') if ctrl => self.run_command(ScrollCommand::PageUp),
            KeyCode::Char('d') if ctrl => self.run_command(ScrollCommand::PageDown),
            // Instant jumps
            KeyCode::Home | KeyCode::Char('g') => self.jump(Axis::Vertical, false),
            KeyCode::End | KeyCode::Char('G') => self.jump(Axis::Vertical, true),
            KeyCode::Char('0') => self.jump(Axis::Horizontal, false),
            KeyCode::Char('$') => self.jump(Axis::Horizontal, true),
            // Documents
            KeyCode::Tab => self.next_document(),
            KeyCode::BackTab => self.prev_document(),
            KeyCode::Char('x') => self.close_active(),
            // View
            KeyCode::Char('n') => self.toggle_line_numbers(),
            KeyCode::Char('?') => self.toggle_help(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
        let event = match mouse.kind {
            MouseEventKind::ScrollUp => WheelEvent::notch_up(shift),
            MouseEventKind::ScrollDown => WheelEvent::notch_down(shift),
            MouseEventKind::ScrollLeft => WheelEvent::notch_up(true),
            MouseEventKind::ScrollRight => WheelEvent::notch_down(true),
            _ => return,
        };
        self.wheel(event);
    }
}
