//! Listing state containers: canonical dataset plus the displayed result set.

use super::AssetSummary;

/// Whether the ranked listing has been requested or stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingStatus {
    #[default]
    Idle,
    InFlight,
    Loaded,
}

/// The canonical dataset and the display result set.
///
/// The canonical dataset is written once, by the first successful listing load.
/// The display result set is replaced wholesale by each applied update; it is
/// never merged. Every replacement request is stamped with a generation so a
/// response issued before a newer request can be recognised and dropped.
#[derive(Debug, Clone, Default)]
pub struct AssetBoard {
    canonical: Vec<AssetSummary>,
    results: Vec<AssetSummary>,
    status: ListingStatus,
    generation: u64,
    /// The newest display request asked for the canonical dataset.
    follows_canonical: bool,
}

impl AssetBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial ranked listing. Empty until the first successful load.
    pub fn canonical(&self) -> &[AssetSummary] {
        &self.canonical
    }

    /// What the rendering layer should show.
    pub fn results(&self) -> &[AssetSummary] {
        &self.results
    }

    pub fn status(&self) -> ListingStatus {
        self.status
    }

    pub fn is_loaded(&self) -> bool {
        self.status == ListingStatus::Loaded
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark the listing request as issued. Returns the generation it was
    /// issued under, or `None` if a load is running or already succeeded.
    pub(crate) fn begin_listing(&mut self) -> Option<u64> {
        match self.status {
            ListingStatus::Idle => {
                self.status = ListingStatus::InFlight;
                Some(self.generation)
            }
            ListingStatus::InFlight | ListingStatus::Loaded => None,
        }
    }

    /// Store the listing as the canonical dataset.
    ///
    /// The display result set is seeded too, unless a search was issued after
    /// the listing request. A restore issued meanwhile still gets the listing.
    /// Returns whether it was seeded.
    pub(crate) fn seed(&mut self, listing: Vec<AssetSummary>, issued_at: u64) -> bool {
        self.status = ListingStatus::Loaded;
        let display = issued_at == self.generation || self.follows_canonical;
        if display {
            self.results = listing.clone();
        }
        self.canonical = listing;
        display
    }

    /// A failed listing load leaves everything empty and allows another attempt.
    pub(crate) fn listing_failed(&mut self) {
        if self.status == ListingStatus::InFlight {
            self.status = ListingStatus::Idle;
        }
    }

    /// Stamp a new search request; earlier in-flight searches become stale.
    pub(crate) fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.follows_canonical = false;
        self.generation
    }

    /// Reset the display to the canonical dataset. Supersedes in-flight searches.
    pub(crate) fn restore_canonical(&mut self) {
        self.generation += 1;
        self.follows_canonical = true;
        self.results = self.canonical.clone();
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Replace the display with search matches, if the request is still current.
    pub(crate) fn apply_search(&mut self, generation: u64, matches: Vec<AssetSummary>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.results = matches;
        true
    }
}
