//! Site application state and message dispatch.

use zeta_ui::{Application, Host};

use crate::config::SiteConfig;
use crate::embeds::{EmbedCell, embed_cells};
use crate::filter::FilterBar;
use crate::grid::Grid;
use crate::handlers::{self, Opener};
use crate::message::{Effect, Message};
use crate::modal::ProjectModal;
use crate::model::ProjectStore;
use crate::nav::NavState;

/// All interaction state of the page.
///
/// `F` is the host's focus handle: a DOM element in the browser, anything
/// cloneable in tests.
pub struct SiteApp<F> {
    config: SiteConfig,
    store: ProjectStore,
    filter: FilterBar,
    grid: Grid,
    modal: ProjectModal<F>,
    nav: NavState,
}

impl<F: Clone> SiteApp<F> {
    pub fn new(config: SiteConfig, store: ProjectStore, filter: FilterBar) -> Self {
        Self {
            config,
            store,
            filter,
            grid: Grid::new(),
            modal: ProjectModal::new(),
            nav: NavState::default(),
        }
    }

    /// Drop the detail modal for a page that has no modal markup.
    pub fn without_modal(mut self) -> Self {
        self.modal = ProjectModal::disabled();
        self
    }

    /// First render: every project, whichever chip the page marked active.
    pub fn init(&mut self) -> Vec<Effect<F>> {
        log::info!("🚀 Rendering {} projects", self.store.len());
        self.grid.render(&self.store, &self.store.all());
        vec![Effect::RenderGrid(self.grid.views(&self.store))]
    }

    /// Cells for the social embed grid.
    pub fn embed_cells(&self) -> Vec<EmbedCell> {
        embed_cells(&self.config.embed_posts)
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterBar {
        &self.filter
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn modal(&self) -> &ProjectModal<F> {
        &self.modal
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }
}

impl<F: Clone> Application for SiteApp<F> {
    type Focus = F;
    type Message = Message;
    type Effect = Effect<F>;

    fn update<H>(&mut self, message: Message, host: &H) -> Vec<Effect<F>>
    where
        H: Host<Focus = F>,
    {
        let mut effects = Vec::new();
        match message {
            Message::ChipSelected(index) => handlers::handle_chip(
                index,
                &mut self.filter,
                &self.store,
                &mut self.grid,
                &mut effects,
            ),
            Message::CardClicked { card, hit } => {
                let opener = Opener {
                    store: &self.store,
                    modal: &mut self.modal,
                    host,
                };
                handlers::handle_card_click(card, hit, &mut self.grid, opener, &mut effects)
            }
            Message::CardKey { card, key, hit } => {
                let opener = Opener {
                    store: &self.store,
                    modal: &mut self.modal,
                    host,
                };
                handlers::handle_card_key(card, key, hit, &self.grid, opener, &mut effects)
            }
            Message::ModalClicked(hit) => {
                handlers::handle_modal_click(hit, &mut self.modal, &self.store, &mut effects)
            }
            Message::KeyPressed(key) => handlers::handle_key(key, &mut self.modal, &mut effects),
            Message::ContactSubmitted(form) => {
                handlers::handle_contact(&form, &self.config, &mut effects)
            }
            Message::NavToggled => handlers::handle_nav_toggle(&mut self.nav, &mut effects),
            Message::NavLinkClicked => handlers::handle_nav_link(&mut self.nav, &mut effects),
        }
        effects
    }
}
