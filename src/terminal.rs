use std::io;

use ratatui::DefaultTerminal;

/// Runs `play` on a raw-mode, alternate-screen terminal and puts the terminal
/// back afterwards, whether setup, play or a panic ends the session.
pub fn session<T>(play: impl FnOnce(&mut DefaultTerminal) -> io::Result<T>) -> io::Result<T> {
    // try_init also installs a panic hook that restores the terminal
    guarded(ratatui::try_init, play, ratatui::try_restore)
}

/// Calls `leave` after `enter`, even when `enter` itself fails half way.
/// An error from `enter` or `play` is reported ahead of one from `leave`.
pub fn guarded<S, T>(
    enter: impl FnOnce() -> io::Result<S>,
    play: impl FnOnce(&mut S) -> io::Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let mut state = match enter() {
        Ok(state) => state,
        Err(e) => {
            let _ = leave();
            return Err(e);
        }
    };

    let played = play(&mut state);
    let left = leave();
    let value = played?;
    left?;
    Ok(value)
}
