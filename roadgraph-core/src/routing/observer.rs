//! Hooks for watching a search progress, e.g. to animate it on a map

/// Receives every location a search finalizes, in order.
///
/// Called synchronously from inside the search loop. Observers cannot
/// influence the search.
pub trait SearchObserver<C> {
    fn on_visit(&mut self, location: &C);
}

impl<C, F> SearchObserver<C> for F
where
    F: FnMut(&C),
{
    fn on_visit(&mut self, location: &C) {
        self(location);
    }
}

/// Observer that records the visit order
#[derive(Debug, Clone)]
pub struct VisitLog<C> {
    visits: Vec<C>,
}

impl<C> VisitLog<C> {
    pub fn new() -> Self {
        Self { visits: Vec::new() }
    }

    pub fn visits(&self) -> &[C] {
        &self.visits
    }

    pub fn into_visits(self) -> Vec<C> {
        self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

impl<C> Default for VisitLog<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy> SearchObserver<C> for VisitLog<C> {
    fn on_visit(&mut self, location: &C) {
        self.visits.push(*location);
    }
}
