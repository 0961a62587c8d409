//! Bidirectional scroll mirroring between the input and output panes
//!
//! This module keeps two scrollable panes (the text being edited and its
//! normalized rendering) at the same scroll position. When one pane reports
//! a scroll event, the mirror copies its offsets onto the other pane.
//!
//! Writing an offset programmatically raises the same scroll event on the
//! target pane that user scrolling does, so the mirror arms a guard flag
//! before each write and consumes the next incoming event as the echo of
//! that write. Without the guard the two panes would bounce events back and
//! forth indefinitely.
//!
//! The mirror owns no panels. The host supplies both handles on every call
//! and keeps them alive for the lifetime of the pane pair; the mirror itself
//! holds a single boolean between calls.

use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Panel Side
// ─────────────────────────────────────────────────────────────────────────────

/// Which pane a scroll event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    /// The editable input pane
    Input,
    /// The normalized output pane
    Output,
}

impl PanelSide {
    /// Get the opposite pane, i.e. the mirror target for an event from
    /// this side.
    pub fn other(self) -> Self {
        match self {
            PanelSide::Input => PanelSide::Output,
            PanelSide::Output => PanelSide::Input,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scroll Offset
// ─────────────────────────────────────────────────────────────────────────────

/// A vertical and horizontal scroll position, in the host's own units
/// (typically pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    /// Vertical offset from the top of the content
    pub top: f32,
    /// Horizontal offset from the left of the content
    pub left: f32,
}

impl ScrollOffset {
    /// Create an offset from its vertical and horizontal components.
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scroll Surface
// ─────────────────────────────────────────────────────────────────────────────

/// A host-owned scrollable pane.
///
/// The mirror only needs to read the current offsets of the event's source
/// pane and write them onto the target pane; everything else about the pane
/// stays opaque.
pub trait ScrollSurface {
    /// Current scroll position of the pane.
    fn scroll_offset(&self) -> ScrollOffset;

    /// Move the pane to the given scroll position.
    ///
    /// In a UI host this write is expected to raise a scroll event on the
    /// pane, which the host reports back through
    /// [`ScrollMirror::on_scroll`] like any other scroll event.
    fn set_scroll_offset(&mut self, offset: ScrollOffset);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scroll Mirror
// ─────────────────────────────────────────────────────────────────────────────

/// Mirrors scroll offsets between two panes while preventing feedback loops.
///
/// The guard is a single flag shared by both directions: if both panes
/// scroll from independent user input in the same tick, the second event is
/// consumed as if it were an echo.
#[derive(Debug, Default)]
pub struct ScrollMirror {
    /// True while an offset propagation is in flight, i.e. between writing
    /// the target pane and receiving the echo event for that write
    syncing: bool,
}

impl ScrollMirror {
    /// Create a mirror with the guard disarmed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the mirror is waiting to consume an echo event.
    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    /// Handle a scroll event from one of the two panes.
    ///
    /// `source` names the pane the event came from; `input` and `output`
    /// are the pane handles, either of which may be absent while not yet
    /// mounted. A missing handle makes the call a silent no-op for that
    /// direction.
    pub fn on_scroll<'a>(
        &mut self,
        source: PanelSide,
        input: Option<&'a mut dyn ScrollSurface>,
        output: Option<&'a mut dyn ScrollSurface>,
    ) {
        if self.syncing {
            // Echo of our own write on the target pane; consume the guard
            // instead of bouncing the event back to the source.
            self.syncing = false;
            return;
        }

        self.syncing = true;

        let (source_pane, target_pane) = match source {
            PanelSide::Input => (input, output),
            PanelSide::Output => (output, input),
        };

        if let (Some(source_pane), Some(target_pane)) = (source_pane, target_pane) {
            let offset = source_pane.scroll_offset();
            debug!("mirroring scroll from {:?}: {:?}", source, offset);
            target_pane.set_scroll_offset(offset);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub pane that records every offset write.
    #[derive(Debug, Default)]
    struct StubPanel {
        offset: ScrollOffset,
        writes: usize,
    }

    impl StubPanel {
        fn at(top: f32, left: f32) -> Self {
            Self {
                offset: ScrollOffset::new(top, left),
                writes: 0,
            }
        }
    }

    impl ScrollSurface for StubPanel {
        fn scroll_offset(&self) -> ScrollOffset {
            self.offset
        }

        fn set_scroll_offset(&mut self, offset: ScrollOffset) {
            self.offset = offset;
            self.writes += 1;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panel Side Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_panel_side_other() {
        assert_eq!(PanelSide::Input.other(), PanelSide::Output);
        assert_eq!(PanelSide::Output.other(), PanelSide::Input);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mirroring Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_new_mirror_is_idle() {
        let mirror = ScrollMirror::new();
        assert!(!mirror.is_syncing());
    }

    #[test]
    fn test_mirrors_input_to_output() {
        let mut mirror = ScrollMirror::new();
        let mut input = StubPanel::at(50.0, 10.0);
        let mut output = StubPanel::default();

        mirror.on_scroll(PanelSide::Input, Some(&mut input), Some(&mut output));

        assert_eq!(output.offset, ScrollOffset::new(50.0, 10.0));
        assert_eq!(output.writes, 1);
        assert_eq!(input.writes, 0);
    }

    #[test]
    fn test_mirrors_output_to_input() {
        let mut mirror = ScrollMirror::new();
        let mut input = StubPanel::default();
        let mut output = StubPanel::at(120.0, 0.0);

        mirror.on_scroll(PanelSide::Output, Some(&mut input), Some(&mut output));

        assert_eq!(input.offset, ScrollOffset::new(120.0, 0.0));
        assert_eq!(input.writes, 1);
        assert_eq!(output.writes, 0);
    }

    #[test]
    fn test_echo_is_swallowed() {
        let mut mirror = ScrollMirror::new();
        let mut input = StubPanel::at(50.0, 10.0);
        let mut output = StubPanel::default();

        // User scrolls the input pane; the mirror writes the output pane.
        mirror.on_scroll(PanelSide::Input, Some(&mut input), Some(&mut output));
        assert!(mirror.is_syncing());

        // The write raises a scroll event on the output pane. It must not
        // bounce back into the input pane.
        mirror.on_scroll(PanelSide::Output, Some(&mut input), Some(&mut output));

        assert_eq!(input.offset, ScrollOffset::new(50.0, 10.0));
        assert_eq!(input.writes, 0);
        assert!(!mirror.is_syncing());
    }

    #[test]
    fn test_mirrors_again_after_echo() {
        let mut mirror = ScrollMirror::new();
        let mut input = StubPanel::at(50.0, 10.0);
        let mut output = StubPanel::default();

        mirror.on_scroll(PanelSide::Input, Some(&mut input), Some(&mut output));
        mirror.on_scroll(PanelSide::Output, Some(&mut input), Some(&mut output));

        // A later genuine scroll on the output pane propagates normally.
        output.offset = ScrollOffset::new(200.0, 5.0);
        mirror.on_scroll(PanelSide::Output, Some(&mut input), Some(&mut output));

        assert_eq!(input.offset, ScrollOffset::new(200.0, 5.0));
        assert_eq!(input.writes, 1);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Missing Panel Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_missing_target_is_a_no_op() {
        let mut mirror = ScrollMirror::new();
        let mut input = StubPanel::at(50.0, 10.0);

        mirror.on_scroll(PanelSide::Input, Some(&mut input), None);

        assert_eq!(input.writes, 0);
    }

    #[test]
    fn test_missing_source_is_a_no_op() {
        let mut mirror = ScrollMirror::new();
        let mut output = StubPanel::default();

        mirror.on_scroll(PanelSide::Input, None, Some(&mut output));

        assert_eq!(output.writes, 0);
        assert_eq!(output.offset, ScrollOffset::default());
    }

    #[test]
    fn test_guard_stays_armed_after_missing_target() {
        // With no target there is no write and therefore no echo, so the
        // armed guard consumes the next genuine event instead.
        let mut mirror = ScrollMirror::new();
        let mut input = StubPanel::at(50.0, 10.0);
        let mut output = StubPanel::at(80.0, 0.0);

        mirror.on_scroll(PanelSide::Input, Some(&mut input), None);
        assert!(mirror.is_syncing());

        mirror.on_scroll(PanelSide::Output, Some(&mut input), Some(&mut output));
        assert_eq!(input.writes, 0);
        assert!(!mirror.is_syncing());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Shared Guard Tradeoff Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_simultaneous_scrolls_second_is_consumed() {
        // Both panes scroll from independent user input before the echo of
        // the first write arrives. The single shared flag cannot tell the
        // second user event apart from an echo, so it is consumed.
        let mut mirror = ScrollMirror::new();
        let mut input = StubPanel::at(50.0, 10.0);
        let mut output = StubPanel::at(90.0, 0.0);

        mirror.on_scroll(PanelSide::Input, Some(&mut input), Some(&mut output));
        assert_eq!(output.offset, ScrollOffset::new(50.0, 10.0));

        // The user also scrolled the output pane in the same tick; this
        // event is treated as the echo and dropped.
        output.offset = ScrollOffset::new(300.0, 0.0);
        mirror.on_scroll(PanelSide::Output, Some(&mut input), Some(&mut output));

        assert_eq!(input.offset, ScrollOffset::new(50.0, 10.0));
        assert_eq!(input.writes, 0);
    }
}
