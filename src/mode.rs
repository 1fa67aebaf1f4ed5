//! Console mode flags.
//!
//! Input and output handles share one `DWORD` mode word whose bits mean
//! different things depending on the handle. Both sets of names live on
//! [`ConsoleMode`]; bits the OS reports that have no name here are kept
//! when a mode is written back.

use bitflags::bitflags;

bitflags! {
    /// A console mode bit set (`CONSOLE_MODE`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConsoleMode: u32 {
        /// Input: Ctrl+C and editing keys are processed by the system.
        const PROCESSED_INPUT = 0x0001;
        /// Input: reads return only on carriage return.
        const LINE_INPUT = 0x0002;
        /// Input: typed characters are echoed.
        const ECHO_INPUT = 0x0004;
        /// Input: buffer size changes are reported.
        const WINDOW_INPUT = 0x0008;
        /// Input: mouse events are reported.
        const MOUSE_INPUT = 0x0010;
        /// Input: insert mode for line editing.
        const INSERT_MODE = 0x0020;
        /// Input: mouse selection and editing.
        const QUICK_EDIT_MODE = 0x0040;
        /// Input: required to change `INSERT_MODE` or `QUICK_EDIT_MODE`.
        const EXTENDED_FLAGS = 0x0080;
        /// Input: keys are delivered as VT sequences.
        const VIRTUAL_TERMINAL_INPUT = 0x0200;

        /// Output: control characters are processed.
        const PROCESSED_OUTPUT = 0x0001;
        /// Output: wrap at the end of a line.
        const WRAP_AT_EOL_OUTPUT = 0x0002;
        /// Output: VT sequences are interpreted.
        const VIRTUAL_TERMINAL_PROCESSING = 0x0004;
        /// Output: no implicit carriage return on line feed.
        const DISABLE_NEWLINE_AUTO_RETURN = 0x0008;
        /// Output: grid attributes honored for all code pages.
        const LVB_GRID_WORLDWIDE = 0x0010;

        const _ = !0;
    }
}

impl ConsoleMode {
    /// Returns true if every bit of `flags` is set.
    ///
    /// This is an all-of test, not `mode & flags != 0`: a multi-flag query
    /// is false when any one flag is off, and an empty query is false. For a
    /// single flag the two agree.
    #[inline]
    pub fn is_enabled(self, flags: ConsoleMode) -> bool {
        !flags.is_empty() && self.contains(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_and_output_names_share_bits() {
        assert_eq!(ConsoleMode::PROCESSED_INPUT.bits(), ConsoleMode::PROCESSED_OUTPUT.bits());
        assert_eq!(ConsoleMode::ECHO_INPUT, ConsoleMode::VIRTUAL_TERMINAL_PROCESSING);
    }

    #[test]
    fn test_is_enabled() {
        let mode = ConsoleMode::LINE_INPUT | ConsoleMode::ECHO_INPUT;
        assert!(mode.is_enabled(ConsoleMode::ECHO_INPUT));
        assert!(!mode.is_enabled(ConsoleMode::ECHO_INPUT | ConsoleMode::MOUSE_INPUT));
        assert!(!mode.is_enabled(ConsoleMode::empty()));
    }

    #[test]
    fn test_is_enabled_single_flag_matches_any_bit() {
        let mode = ConsoleMode::PROCESSED_INPUT | ConsoleMode::WINDOW_INPUT;
        for (_, flag) in ConsoleMode::all().iter_names() {
            assert_eq!(mode.is_enabled(flag), mode.intersects(flag), "{flag:?}");
        }
        let pair = ConsoleMode::WINDOW_INPUT | ConsoleMode::MOUSE_INPUT;
        assert!(mode.intersects(pair));
        assert!(!mode.is_enabled(pair));
    }

    #[test]
    fn test_collect_flag_list() {
        let flags = [ConsoleMode::PROCESSED_OUTPUT, ConsoleMode::VIRTUAL_TERMINAL_PROCESSING];
        let mode: ConsoleMode = flags.into_iter().collect();
        assert_eq!(mode.bits(), 0x0005);
    }
}
