use crate::domain::ItemDescriptor;

#[derive(Clone, Debug)]
struct Released {
    item: ItemDescriptor,
    // session time of the first tick that saw the release
    at: Option<f64>,
}

impl Released {
    fn fresh(&self, now: f64, grace: f64) -> bool {
        self.at.map_or(true, |at| now - at <= grace)
    }
}

/// What the controller reports for the hand pointing at the panel.
///
/// A released item stays visible to placement for a short grace window so the
/// cell check in the same or next tick still sees it after the grab ended.
/// The window opens on the tick that first sees the release, however long
/// that tick was.
#[derive(Clone, Debug, Default)]
pub struct HandState {
    held: Option<ItemDescriptor>,
    released: Option<Released>,
    select_pressed: bool,
    select_released_this_frame: bool,
}

impl HandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<&ItemDescriptor> {
        self.held.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Item is now in the hand; replaces whatever was held before
    pub fn grab(&mut self, item: ItemDescriptor) {
        self.held = Some(item);
    }

    /// Let go of the held item; the grace window starts with the next tick
    pub fn release(&mut self) -> Option<&ItemDescriptor> {
        let item = self.held.take()?;
        self.released = Some(Released { item, at: None });
        self.released.as_ref().map(|r| &r.item)
    }

    /// Forget the held item without making it placeable (host destroyed it)
    pub fn drop_held(&mut self) -> Option<ItemDescriptor> {
        self.held.take()
    }

    pub fn set_select(&mut self, pressed: bool, released_this_frame: bool) {
        self.select_pressed = pressed;
        self.select_released_this_frame = released_this_frame;
    }

    pub fn select_pressed(&self) -> bool {
        self.select_pressed
    }

    pub fn select_released_this_frame(&self) -> bool {
        self.select_released_this_frame
    }

    /// Most recently released item if still inside the grace window
    pub fn last_released(&self, now: f64, grace: f64) -> Option<&ItemDescriptor> {
        self.released
            .as_ref()
            .filter(|r| r.fresh(now, grace))
            .map(|r| &r.item)
    }

    pub fn take_last_released(&mut self) -> Option<ItemDescriptor> {
        self.released.take().map(|r| r.item)
    }

    /// Start the grace window of a release made since the last tick
    pub(crate) fn stamp(&mut self, now: f64) {
        if let Some(r) = self.released.as_mut() {
            r.at.get_or_insert(now);
        }
    }

    pub(crate) fn expire(&mut self, now: f64, grace: f64) {
        if matches!(&self.released, Some(r) if !r.fresh(now, grace)) {
            self.released = None;
        }
    }

    /// The release edge lasts a single tick
    pub(crate) fn end_frame(&mut self) {
        self.select_released_this_frame = false;
    }
}
