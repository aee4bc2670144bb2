//! Terminal clipboard via OSC 52
//!
//! The terminal emulator owns the system clipboard; writing an OSC 52
//! sequence asks it to set the clipboard contents. Terminals without OSC 52
//! support ignore the sequence, so copying is fire-and-forget.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use vibeparse_core::prelude::*;

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Wrap a sequence for tmux passthrough (`ESC P tmux; ... ESC \`)
pub fn tmux_passthrough(sequence: &str) -> String {
    format!("\x1bPtmux;{}\x1b\\", sequence.replace('\x1b', "\x1b\x1b"))
}

/// Write `text` to the clipboard through `out`
pub fn write_clipboard(out: &mut impl Write, text: &str, inside_tmux: bool) -> Result<()> {
    let mut sequence = osc52_sequence(text);
    if inside_tmux {
        sequence = tmux_passthrough(&sequence);
    }
    out.write_all(sequence.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Copy `text` using the process's stdout
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let inside_tmux = std::env::var_os("TMUX").is_some();
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_clipboard(&mut lock, text, inside_tmux)?;
    debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_tmux_passthrough_doubles_escapes() {
        let wrapped = tmux_passthrough("\x1b]52;c;aGk=\x07");
        assert_eq!(wrapped, "\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\");
    }

    #[test]
    fn test_write_clipboard() {
        let mut out = Vec::new();
        write_clipboard(&mut out, "fn main() {}", false).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
    }
}
