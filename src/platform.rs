//! Window-system seam.
//!
//! The core never talks to a GUI toolkit directly. It computes IDs,
//! titles, and geometry, and issues the handful of operations below
//! against `PlatformWindow`. Whatever binds this crate to a real
//! display implements `Platform`; the `headless` implementation backs
//! the test suite and the smoke binary.

use crate::geometry::Rect;

/// A single display's bounds in global top-left coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayBounds {
    pub fn rect(&self) -> Rect {
        Rect::new(self.origin_x, self.origin_y, self.width, self.height)
    }
}

/// Source of screen geometry.
pub trait Screen {
    /// Usable bounds of the primary display, excluding OS-reserved
    /// areas like menu bars and docks.
    fn visual_bounds(&self) -> Rect;
}

/// Everything needed to open one note window.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub bounds: Rect,
    pub title: String,
    /// Undecorated, transparent-background stage.
    pub frameless: bool,
    pub always_on_top: bool,
    pub skip_taskbar: bool,
    /// Opaque stylesheet identifiers attached to the window's scene.
    pub stylesheets: Vec<&'static str>,
}

/// A live window. All operations are issued from the UI thread.
pub trait PlatformWindow {
    fn set_bounds(&mut self, bounds: Rect);
    fn set_title(&mut self, title: &str);
    fn set_always_on_top(&mut self, on_top: bool);
    fn close(&mut self);
}

/// Window-system binding: screen geometry plus window creation.
pub trait Platform: Screen {
    fn open_window(&mut self, config: &WindowConfig) -> Box<dyn PlatformWindow>;
}

pub mod headless {
    //! Display-free `Platform` implementation.
    //!
    //! Records every window operation in a shared log so tests and
    //! the smoke binary can assert on the exact stream a real toolkit
    //! binding would receive.

    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::{Platform, PlatformWindow, Screen, WindowConfig};
    use crate::geometry::Rect;

    /// One recorded window operation. `window` is a serial number
    /// assigned at open time, in open order.
    #[derive(Debug, Clone, PartialEq)]
    pub enum WindowOp {
        Opened {
            window: usize,
            title: String,
            bounds: Rect,
            frameless: bool,
            always_on_top: bool,
            stylesheets: Vec<&'static str>,
        },
        SetBounds {
            window: usize,
            bounds: Rect,
        },
        SetTitle {
            window: usize,
            title: String,
        },
        SetAlwaysOnTop {
            window: usize,
            on_top: bool,
        },
        Closed {
            window: usize,
        },
    }

    type OpLog = Arc<Mutex<Vec<WindowOp>>>;

    pub struct HeadlessPlatform {
        visual_bounds: Rect,
        ops: OpLog,
        next_window: usize,
    }

    impl HeadlessPlatform {
        pub fn new(visual_bounds: Rect) -> Self {
            Self {
                visual_bounds,
                ops: Arc::new(Mutex::new(Vec::new())),
                next_window: 0,
            }
        }

        /// Snapshot of everything recorded so far, in issue order.
        pub fn ops(&self) -> Vec<WindowOp> {
            self.ops.lock().clone()
        }
    }

    impl Screen for HeadlessPlatform {
        fn visual_bounds(&self) -> Rect {
            self.visual_bounds
        }
    }

    impl Platform for HeadlessPlatform {
        fn open_window(&mut self, config: &WindowConfig) -> Box<dyn PlatformWindow> {
            let serial = self.next_window;
            self.next_window += 1;
            self.ops.lock().push(WindowOp::Opened {
                window: serial,
                title: config.title.clone(),
                bounds: config.bounds,
                frameless: config.frameless,
                always_on_top: config.always_on_top,
                stylesheets: config.stylesheets.clone(),
            });
            Box::new(HeadlessWindow {
                serial,
                ops: Arc::clone(&self.ops),
                open: true,
            })
        }
    }

    pub struct HeadlessWindow {
        serial: usize,
        ops: OpLog,
        open: bool,
    }

    impl PlatformWindow for HeadlessWindow {
        fn set_bounds(&mut self, bounds: Rect) {
            self.ops.lock().push(WindowOp::SetBounds {
                window: self.serial,
                bounds,
            });
        }

        fn set_title(&mut self, title: &str) {
            self.ops.lock().push(WindowOp::SetTitle {
                window: self.serial,
                title: title.to_string(),
            });
        }

        fn set_always_on_top(&mut self, on_top: bool) {
            self.ops.lock().push(WindowOp::SetAlwaysOnTop {
                window: self.serial,
                on_top,
            });
        }

        fn close(&mut self) {
            if self.open {
                self.open = false;
                self.ops.lock().push(WindowOp::Closed {
                    window: self.serial,
                });
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_bounds_to_rect() {
        let display = DisplayBounds {
            origin_x: 1920.0,
            origin_y: 0.0,
            width: 1280.0,
            height: 720.0,
        };
        assert_eq!(display.rect(), Rect::new(1920.0, 0.0, 1280.0, 720.0));
    }
}
