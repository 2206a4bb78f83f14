use crate::Error;

/// Limits applied to a single search call.
///
/// The default places no limits: every search explores until it reaches the
/// goal or exhausts the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchConfig {
    /// Upper bound on the accumulated road length of a returned route.
    /// Honored by Dijkstra and A*.
    pub max_cost: Option<f64>,
    /// Upper bound on the number of road segments in a returned route.
    /// Honored by breadth-first search.
    pub max_hops: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = Some(max_hops);
        self
    }

    /// Checks that the configured limits make sense
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when `max_cost` is negative or NaN.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(max_cost) = self.max_cost {
            if max_cost.is_nan() || max_cost < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "max_cost must be a non-negative number, got {max_cost}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn exceeds_cost(&self, cost: f64) -> bool {
        self.max_cost.is_some_and(|max| cost > max)
    }

    pub(crate) fn exceeds_hops(&self, hops: usize) -> bool {
        self.max_hops.is_some_and(|max| hops > max)
    }
}
