//! Key event handlers per page and overlay
//!
//! Local edits (text input, focus, checkboxes, scrolling) mutate state
//! directly; anything with side effects becomes a [`Message`].

use crate::form::{DropdownKind, FormField, FormTab};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::overlay::OverlayKind;
use crate::player::LoadState;
use crate::router::Route;
use crate::state::{AppState, Page};

/// Lines moved by PageUp/PageDown in the scene body
const PAGE_SCROLL: i32 = 10;

/// Convert key events to messages based on the current page
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if matches!(state.page, Page::Index(_)) {
        handle_key_form(state, key)
    } else {
        handle_key_player(state, key)
    }
}

fn handle_key_form(state: &mut AppState, key: InputKey) -> Option<Message> {
    let pointers = state.pointers.clone();
    let form = state.form_mut()?;

    // Modal notice swallows everything but its own dismissal
    if form.notice.is_some() {
        return match key {
            InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => {
                Some(Message::Dismiss(OverlayKind::Notice))
            }
            _ => None,
        };
    }

    if let Some(dropdown) = form.dropdown.as_mut() {
        return match key {
            InputKey::Up | InputKey::Char('k') => {
                dropdown.highlight_prev();
                None
            }
            InputKey::Down | InputKey::Char('j') => {
                dropdown.highlight_next();
                None
            }
            InputKey::Enter | InputKey::Char(' ') => {
                Some(Message::DropdownSelect(dropdown.highlighted))
            }
            InputKey::Esc => Some(Message::Dismiss(dropdown.kind.overlay())),
            _ => None,
        };
    }

    match key {
        InputKey::Tab | InputKey::Down => {
            form.focus = form.focus.next();
            return None;
        }
        InputKey::BackTab | InputKey::Up => {
            form.focus = form.focus.prev();
            return None;
        }
        _ => {}
    }

    match form.focus {
        FormField::Tabs => match key {
            InputKey::Left => Some(Message::SelectTab(FormTab::File)),
            InputKey::Right => Some(Message::SelectTab(FormTab::RecentChanges)),
            InputKey::Enter => Some(Message::SelectTab(form.tab)),
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },

        FormField::GithubUrl | FormField::Email => {
            let input = form.active_input()?;
            match key {
                InputKey::Enter => return Some(Message::SubmitForm),
                InputKey::Backspace => input.backspace(),
                InputKey::Delete => input.delete(),
                InputKey::Left => input.move_left(),
                InputKey::Right => input.move_right(),
                InputKey::Home => input.move_home(),
                InputKey::End => input.move_end(),
                InputKey::CharCtrl('u') => input.clear(),
                other => {
                    if let Some(c) = other.printable() {
                        input.insert(c);
                    }
                }
            }
            None
        }

        FormField::Proficiency | FormField::Depth => match key {
            InputKey::Enter | InputKey::Char(' ') => {
                let kind = if form.focus == FormField::Proficiency {
                    DropdownKind::Proficiency
                } else {
                    DropdownKind::Depth
                };
                form.open_dropdown(kind, &pointers);
                None
            }
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },

        FormField::FileTypes => match key {
            InputKey::Left | InputKey::Char('h') => {
                form.file_type_cursor = form.file_type_cursor.saturating_sub(1);
                None
            }
            InputKey::Right | InputKey::Char('l') => {
                if form.file_type_cursor + 1 < form.file_types.len() {
                    form.file_type_cursor += 1;
                }
                None
            }
            InputKey::Enter | InputKey::Char(' ') => {
                let idx = form.file_type_cursor;
                form.toggle_file_type(idx);
                None
            }
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },

        FormField::Submit => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::SubmitForm),
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },
    }
}

fn handle_key_player(state: &mut AppState, key: InputKey) -> Option<Message> {
    let seek_step = state.settings.player.seek_step();
    let page = state.player_mut()?;
    let script_id = page.script_id.clone();
    let loading = page.is_loading();

    let player = match &mut page.load {
        LoadState::Loaded(player) => player,
        LoadState::Loading | LoadState::Failed(_) => {
            return match key {
                InputKey::Esc | InputKey::Char('b') | InputKey::Backspace => {
                    Some(Message::Navigate(Route::Index))
                }
                InputKey::Char('r') if !loading => {
                    Some(Message::Navigate(Route::player(script_id)))
                }
                InputKey::Char('q') => Some(Message::Quit),
                _ => None,
            };
        }
    };

    let len = player.cursor.len();
    if let Some(toc) = player.toc.as_mut() {
        return match key {
            InputKey::Up | InputKey::Char('k') => {
                toc.select_prev();
                None
            }
            InputKey::Down | InputKey::Char('j') => {
                toc.select_next(len);
                None
            }
            InputKey::Home => {
                toc.selected = 0;
                None
            }
            InputKey::End => {
                toc.selected = len - 1;
                None
            }
            InputKey::Enter => Some(Message::JumpToScene(toc.selected)),
            InputKey::Esc | InputKey::Char('t') => Some(Message::Dismiss(OverlayKind::Toc)),
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        };
    }

    match key {
        InputKey::Right | InputKey::Char('l') | InputKey::Char('n') => Some(Message::NextScene),
        InputKey::Left | InputKey::Char('h') | InputKey::Char('p') => {
            Some(Message::PreviousScene)
        }
        InputKey::Char('t') => Some(Message::ToggleToc),
        InputKey::Tab => {
            player.cycle_highlight(true);
            None
        }
        InputKey::BackTab => {
            player.cycle_highlight(false);
            None
        }
        InputKey::Down | InputKey::Char('j') => {
            player.scroll_by(1);
            None
        }
        InputKey::Up | InputKey::Char('k') => {
            player.scroll_by(-1);
            None
        }
        InputKey::PageDown => {
            player.scroll_by(PAGE_SCROLL);
            None
        }
        InputKey::PageUp => {
            player.scroll_by(-PAGE_SCROLL);
            None
        }
        InputKey::Char('c') | InputKey::Char('y') => Some(Message::CopyHighlight),
        InputKey::Char(' ') => Some(Message::ToggleAudio),
        InputKey::Char(',') | InputKey::Char('<') => Some(Message::SeekAudio(-seek_step)),
        InputKey::Char('.') | InputKey::Char('>') => Some(Message::SeekAudio(seek_step)),
        InputKey::Char('e') => Some(Message::ExportScript),
        InputKey::Esc | InputKey::Char('b') | InputKey::Backspace => {
            Some(Message::Navigate(Route::Index))
        }
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
