/// Scroll-aware header visibility.
///
/// Scrolling down past `HIDE_AFTER_PX` hides the header; any upward scroll
/// shows it again. Other movements leave it unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavVisibility {
    last_scroll_y: f64,
    visible: bool,
}

impl NavVisibility {
    pub const HIDE_AFTER_PX: f64 = 80.0;

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feed the current vertical scroll offset; returns the new visibility.
    pub fn on_scroll(&mut self, current: f64) -> bool {
        if current > self.last_scroll_y && current > Self::HIDE_AFTER_PX {
            self.visible = false;
        } else if current < self.last_scroll_y {
            self.visible = true;
        }
        self.last_scroll_y = current;
        self.visible
    }
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self {
            last_scroll_y: 0.0,
            visible: true,
        }
    }
}
