//! System clipboard backed by `arboard`.

use log::debug;
use scratchpad_core::{ClipboardError, ClipboardPort, ClipboardResult};

/// Desktop clipboard opened on first use.
///
/// On Linux the copying process owns the selection, so a write blocks until
/// another client takes clipboard ownership. Otherwise the text would vanish
/// when `scratchpad` exits.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> ClipboardResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            debug!("event=clipboard_open module=cli status=ok");
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialized".to_string()))
    }
}

impl ClipboardPort for SystemClipboard {
    fn read_text(&mut self) -> ClipboardResult<String> {
        self.handle()?
            .get_text()
            .map_err(|err| ClipboardError::Read(err.to_string()))
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        let clipboard = self.handle()?;
        set_owned_text(clipboard, text).map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

#[cfg(target_os = "linux")]
fn set_owned_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    eprintln!(
        "Holding the notes on the clipboard until another program copies something (Ctrl-C to stop)."
    );
    clipboard.set().wait().text(text.to_string())
}

#[cfg(not(target_os = "linux"))]
fn set_owned_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}
