//! Search bar widget
//!
//! Wraps the embedded chat and lets the user switch between an inline
//! layout and one that takes over the whole screen.

use poliseek_domain::SearchBarMode;

/// Width cap of the inline layout
pub const NORMAL_MAX_WIDTH: usize = 1002;
/// Width cap of the inner area when maximized
pub const MAXIMIZED_MAX_WIDTH: usize = 1400;
const MIN_WIDTH: usize = 12;

/// The chat surface hosted by the search bar
pub trait ChatEmbed {
    /// Told whenever the search bar changes size
    fn set_maximized(&mut self, maximized: bool);

    /// Content lines for an area `width` columns wide
    fn lines(&self, width: usize) -> Vec<String>;
}

/// Icon on the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBarIcon {
    Maximize2,
    Minimize2,
}

impl SearchBarIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SearchBarIcon::Maximize2 => "[+]",
            SearchBarIcon::Minimize2 => "[-]",
        }
    }
}

/// Style classes and icon for the current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBarLayout {
    pub container: &'static str,
    pub inner: &'static str,
    pub icon: SearchBarIcon,
}

impl SearchBarLayout {
    const NORMAL: SearchBarLayout = SearchBarLayout {
        container: "w-full max-w-[1002px]",
        inner: "w-full",
        icon: SearchBarIcon::Maximize2,
    };

    const MAXIMIZED: SearchBarLayout = SearchBarLayout {
        container: "fixed inset-0 z-50 p-1 sm:p-4 bg-white/95 flex items-center justify-center",
        inner: "w-full h-full max-w-[1400px] flex items-center",
        icon: SearchBarIcon::Minimize2,
    };

    pub fn for_mode(mode: SearchBarMode) -> Self {
        match mode {
            SearchBarMode::Normal => Self::NORMAL,
            SearchBarMode::Maximized => Self::MAXIMIZED,
        }
    }
}

pub struct SearchBar<C: ChatEmbed> {
    mode: SearchBarMode,
    chat: C,
}

impl<C: ChatEmbed> SearchBar<C> {
    pub fn new(mut chat: C) -> Self {
        chat.set_maximized(false);
        Self {
            mode: SearchBarMode::Normal,
            chat,
        }
    }

    pub fn mode(&self) -> SearchBarMode {
        self.mode
    }

    pub fn chat(&self) -> &C {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut C {
        &mut self.chat
    }

    /// Flip between normal and maximized, keeping the chat in step
    pub fn toggle_maximize(&mut self) -> SearchBarMode {
        self.mode = self.mode.toggled();
        self.chat.set_maximized(self.mode.is_maximized());
        self.mode
    }

    pub fn layout(&self) -> SearchBarLayout {
        SearchBarLayout::for_mode(self.mode)
    }

    /// Draw the widget into `width` terminal columns.
    ///
    /// Inline: a single-line box capped at [`NORMAL_MAX_WIDTH`]. Maximized: a
    /// padded double-line box using the full width up to
    /// [`MAXIMIZED_MAX_WIDTH`], with a blank line above and below.
    pub fn render(&self, width: usize) -> Vec<String> {
        let maximized = self.mode.is_maximized();
        let (outer_pad, cap) = if maximized {
            (1, MAXIMIZED_MAX_WIDTH)
        } else {
            (0, NORMAL_MAX_WIDTH)
        };
        let frame_width = width
            .saturating_sub(outer_pad * 2)
            .min(cap)
            .max(MIN_WIDTH);
        let inner_width = frame_width - 4;
        let pad = " ".repeat(outer_pad);

        let (h, v, tl, tr, bl, br) = if maximized {
            ('═', '║', '╔', '╗', '╚', '╝')
        } else {
            ('─', '│', '┌', '┐', '└', '┘')
        };

        let icon = self.layout().icon.glyph();
        let top_run = frame_width - 2 - icon.len() - 1;
        let mut lines = Vec::new();
        if maximized {
            lines.push(String::new());
        }
        lines.push(format!(
            "{}{}{}{}{}{}",
            pad,
            tl,
            h.to_string().repeat(top_run),
            icon,
            h,
            tr
        ));
        for line in self.chat.lines(inner_width) {
            let fill = inner_width.saturating_sub(line.chars().count());
            lines.push(format!("{}{} {}{} {}", pad, v, line, " ".repeat(fill), v));
        }
        lines.push(format!(
            "{}{}{}{}",
            pad,
            bl,
            h.to_string().repeat(frame_width - 2),
            br
        ));
        if maximized {
            lines.push(String::new());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeChat {
        maximized: bool,
        calls: Vec<bool>,
    }

    impl ChatEmbed for FakeChat {
        fn set_maximized(&mut self, maximized: bool) {
            self.maximized = maximized;
            self.calls.push(maximized);
        }

        fn lines(&self, _width: usize) -> Vec<String> {
            vec!["hello".to_string()]
        }
    }

    #[test]
    fn test_starts_normal() {
        let bar = SearchBar::new(FakeChat::default());
        assert_eq!(bar.mode(), SearchBarMode::Normal);
        assert!(!bar.chat().maximized);
        assert_eq!(bar.layout().icon, SearchBarIcon::Maximize2);
        assert_eq!(bar.layout().container, "w-full max-w-[1002px]");
        assert_eq!(bar.layout().inner, "w-full");
    }

    #[test]
    fn test_toggle_forwards_to_chat() {
        let mut bar = SearchBar::new(FakeChat::default());

        assert_eq!(bar.toggle_maximize(), SearchBarMode::Maximized);
        assert!(bar.chat().maximized);
        assert_eq!(bar.layout().icon, SearchBarIcon::Minimize2);
        assert_eq!(
            bar.layout().container,
            "fixed inset-0 z-50 p-1 sm:p-4 bg-white/95 flex items-center justify-center"
        );
        assert_eq!(
            bar.layout().inner,
            "w-full h-full max-w-[1400px] flex items-center"
        );

        assert_eq!(bar.toggle_maximize(), SearchBarMode::Normal);
        assert!(!bar.chat().maximized);
        assert_eq!(bar.chat().calls, [false, true, false]);
    }

    #[test]
    fn test_render_normal_box() {
        let bar = SearchBar::new(FakeChat::default());
        let lines = bar.render(20);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[0].contains("[+]"));
        assert_eq!(lines[1], "│ hello            │");
        assert_eq!(lines[1].chars().count(), 20);
        assert!(lines[2].starts_with('└'));
    }

    #[test]
    fn test_render_maximized_is_padded() {
        let mut bar = SearchBar::new(FakeChat::default());
        bar.toggle_maximize();
        let lines = bar.render(20);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].is_empty());
        assert!(lines[1].starts_with(" ╔"));
        assert!(lines[1].contains("[-]"));
        assert_eq!(lines[2].chars().count(), 19);
        assert!(lines[4].is_empty());
    }

    #[test]
    fn test_render_caps_normal_width() {
        let bar = SearchBar::new(FakeChat::default());
        let lines = bar.render(5000);
        assert_eq!(lines[1].chars().count(), NORMAL_MAX_WIDTH);
    }

    #[test]
    fn test_render_never_underflows() {
        let bar = SearchBar::new(FakeChat::default());
        let lines = bar.render(0);
        assert_eq!(lines[0].chars().count(), MIN_WIDTH);
    }
}
