//! Game configuration options.

/// Configuration options for a Klondike game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use patience::KlondikeOptions;
///
/// let options = KlondikeOptions::default()
///     .with_draw_count(1)
///     .with_redeal_limit(Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KlondikeOptions {
    /// Cards moved from the reserve to the discard pile per draw. Zero
    /// draws one.
    pub draw_count: u8,
    /// Number of times the discard pile may be recycled into the reserve.
    /// `None` for no limit.
    pub redeal_limit: Option<u32>,
}

impl Default for KlondikeOptions {
    fn default() -> Self {
        Self {
            draw_count: 3,
            redeal_limit: None,
        }
    }
}

impl KlondikeOptions {
    /// Sets the number of cards drawn at a time.
    ///
    /// Zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::KlondikeOptions;
    ///
    /// let options = KlondikeOptions::default().with_draw_count(1);
    /// assert_eq!(options.draw_count, 1);
    /// ```
    #[must_use]
    pub const fn with_draw_count(mut self, draw_count: u8) -> Self {
        self.draw_count = if draw_count == 0 { 1 } else { draw_count };
        self
    }

    /// Sets how many times the discard pile may be turned over.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::KlondikeOptions;
    ///
    /// let options = KlondikeOptions::default().with_redeal_limit(Some(0));
    /// assert_eq!(options.redeal_limit, Some(0));
    /// ```
    #[must_use]
    pub const fn with_redeal_limit(mut self, limit: Option<u32>) -> Self {
        self.redeal_limit = limit;
        self
    }
}
