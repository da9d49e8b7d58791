// Double-buffered device state with edge detection

/// A raw capture of one device's state at a single polling instant.
///
/// `Default` must describe the neutral "nothing active" state.
pub trait Snapshot: Default {
    /// Identifier of a single input element (key, mouse button, pad button)
    type Element: Copy;

    /// Whether the element is held down in this snapshot
    fn is_active(&self, element: Self::Element) -> bool;

    /// The "nothing active" state a fresh tracker uses as its previous tick.
    ///
    /// Anything held in the first poll then counts as a press. Devices with
    /// continuous values (cursor position, scroll totals) override this to
    /// carry them over, so their first-tick deltas are zero.
    fn baseline(&self) -> Self {
        Self::default()
    }
}

/// Holds the current and previous snapshot of a device
///
/// Snapshots are never modified in place: `advance` moves `current` into
/// `previous` and stores the new one, so the pair is always consistent.
#[derive(Debug, Clone)]
pub struct EdgeTracker<S: Snapshot> {
    previous: S,
    current: S,
}

impl<S: Snapshot> EdgeTracker<S> {
    /// Create a tracker from the first real poll of the device
    pub fn new(initial: S) -> Self {
        Self {
            previous: initial.baseline(),
            current: initial,
        }
    }

    /// Push a freshly polled snapshot, discarding the oldest one
    pub fn advance(&mut self, next: S) {
        self.previous = std::mem::replace(&mut self.current, next);
    }

    /// Snapshot from the latest poll
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Snapshot from the poll before the latest one
    pub fn previous(&self) -> &S {
        &self.previous
    }

    /// Check if an element is currently held
    pub fn is_down(&self, element: S::Element) -> bool {
        self.current.is_active(element)
    }

    /// Check if an element is currently not held
    pub fn is_up(&self, element: S::Element) -> bool {
        !self.current.is_active(element)
    }

    /// Check if an element was held on the previous tick
    pub fn was_down(&self, element: S::Element) -> bool {
        self.previous.is_active(element)
    }

    /// Check if an element went from up to down on this tick
    pub fn just_pressed(&self, element: S::Element) -> bool {
        self.is_down(element) && !self.was_down(element)
    }

    /// Check if an element went from down to up on this tick
    pub fn just_released(&self, element: S::Element) -> bool {
        !self.is_down(element) && self.was_down(element)
    }
}
