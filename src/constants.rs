//! Global constants for the Zeta Design site

/// Most images shown in a card carousel
pub const MAX_CARD_IMAGES: usize = 5;

/// Fewest images any carousel shows; a single source is duplicated up to this
pub const MIN_CAROUSEL_IMAGES: usize = 2;

/// Embed cells rendered in the social grid
pub const MAX_EMBEDS: usize = 6;

/// Embed script version written on each embed
pub const EMBED_VERSION: &str = "14";

/// Chip filter key meaning "no filtering"
pub const ALL_FILTER: &str = "all";

/// Separator between location and year in the modal meta line
pub const META_SEPARATOR: &str = " • ";

/// Alt-text stand-in for a project without a title
pub const UNTITLED: &str = "Project";

/// Name used in the inquiry subject when the sender leaves it blank
pub const ANONYMOUS_SENDER: &str = "Client";

/// Card affordance glyph
pub const ARROW_GLYPH: &str = "→";

/// Element ids and selectors of the fixed page structure.
pub mod page {
    /// Project grid container
    pub const GRID: &str = "projectsGrid";
    /// Filter chips, each carrying `data-filter`
    pub const CHIPS: &str = ".chip";
    /// Attribute holding a chip's category key
    pub const FILTER_ATTRIBUTE: &str = "data-filter";
    /// Contact form
    pub const CONTACT_FORM: &str = "contactForm";
    /// Detail modal overlay
    pub const MODAL: &str = "projectModal";
    pub const MODAL_TITLE: &str = "modalTitle";
    pub const MODAL_CATEGORY: &str = "modalCategory";
    pub const MODAL_META: &str = "modalMeta";
    pub const MODAL_DESCRIPTION: &str = "modalDescription";
    pub const MODAL_MAIN_IMAGE: &str = "modalMainImage";
    pub const MODAL_THUMBS: &str = "modalThumbs";
    /// Mobile nav toggle button
    pub const NAV_TOGGLE: &str = ".nav-toggle";
    /// Nav link list
    pub const NAV: &str = ".nav";
    /// Social embed grid
    pub const EMBEDS: &str = "igGrid";
}

/// Global names the page may define before the script runs.
pub mod globals {
    /// Project records
    pub const PROJECTS: &str = "__PROJECTS__";
    /// Site configuration
    pub const SITE_CONFIG: &str = "__SITE_CONFIG__";
    /// Embed script namespace (`instgrm.Embeds.process`)
    pub const EMBED_SCRIPT: &str = "instgrm";
}
