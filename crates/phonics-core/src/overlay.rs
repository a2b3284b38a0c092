/// The picture shown over a card, filled in asynchronously by the front end.
///
/// Each request gets a fresh generation. A result is only accepted if it
/// carries the generation of the request still pending; anything else
/// arrived after the child moved on and is dropped.
#[derive(Debug, Clone, Default)]
pub struct ImageOverlay {
    generation: u32,
    state: OverlayState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Hidden,
    Pending { term: String },
    Shown { term: String, url: String },
}

impl ImageOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup for `term`. Returns the generation the result must echo.
    pub fn request(&mut self, term: impl Into<String>) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.state = OverlayState::Pending { term: term.into() };
        self.generation
    }

    /// Accept a fetched image. Returns false for stale or unexpected results.
    pub fn resolve(&mut self, generation: u32, url: impl Into<String>) -> bool {
        if generation != self.generation {
            log::debug!("dropping stale image result {generation} (current {})", self.generation);
            return false;
        }
        match std::mem::take(&mut self.state) {
            OverlayState::Pending { term } => {
                self.state = OverlayState::Shown {
                    term,
                    url: url.into(),
                };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// A lookup failed. The pending slot is quietly emptied.
    pub fn fail(&mut self, generation: u32) {
        if generation == self.generation && matches!(self.state, OverlayState::Pending { .. }) {
            log::debug!("image lookup {generation} failed");
            self.state = OverlayState::Hidden;
        }
    }

    /// Hide the overlay and invalidate any lookup in flight.
    /// Returns whether anything was pending or shown.
    pub fn clear(&mut self) -> bool {
        let was_visible = self.state != OverlayState::Hidden;
        if was_visible {
            self.generation = self.generation.wrapping_add(1);
        }
        self.state = OverlayState::Hidden;
        was_visible
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn url(&self) -> Option<&str> {
        match &self.state {
            OverlayState::Shown { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn term(&self) -> Option<&str> {
        match &self.state {
            OverlayState::Pending { term } | OverlayState::Shown { term, .. } => Some(term.as_str()),
            OverlayState::Hidden => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, OverlayState::Pending { .. })
    }
}
