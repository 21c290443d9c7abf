//! Message handlers for the site.
//!
//! Each handler processes one kind of message against the pieces of state it
//! needs, keeping `SiteApp::update` a plain dispatch.

use zeta_ui::{CarouselHit, Host, Key, ModalHit, handle_carousel_click};

use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::filter::FilterBar;
use crate::grid::Grid;
use crate::message::Effect;
use crate::modal::ProjectModal;
use crate::model::ProjectStore;
use crate::nav::NavState;
use crate::views::{DetailView, main_image};

/// Handle a filter chip click: activate it and re-render the grid.
pub fn handle_chip<F>(
    index: usize,
    filter: &mut FilterBar,
    store: &ProjectStore,
    grid: &mut Grid,
    effects: &mut Vec<Effect<F>>,
) {
    let Some(selected) = filter.select(index) else {
        return;
    };
    let projects = store.filter(selected);
    grid.render(store, &projects);
    effects.push(Effect::ActivateChip(index));
    effects.push(Effect::RenderGrid(grid.views(store)));
}

/// What opening a project needs: the records, the modal, and the host to
/// capture focus and scroll position from.
pub struct Opener<'a, H: Host> {
    pub store: &'a ProjectStore,
    pub modal: &'a mut ProjectModal<H::Focus>,
    pub host: &'a H,
}

/// Handle a click on a card.
///
/// The card's carousel sees the click first; only a click it leaves alone
/// opens the project.
pub fn handle_card_click<H: Host>(
    card: usize,
    hit: CarouselHit,
    grid: &mut Grid,
    opener: Opener<'_, H>,
    effects: &mut Vec<Effect<H::Focus>>,
) {
    let Some(state) = grid.card_mut(card) else {
        log::warn!("⚠️  Click on unknown card {}", card);
        return;
    };

    if handle_carousel_click(&mut state.carousel, hit).is_captured() {
        if state.carousel.is_navigable() {
            effects.push(Effect::SetCarouselActive {
                card,
                active: state.carousel.active(),
            });
        }
    } else {
        open_project(state.project, opener, effects);
    }
}

/// Handle a key press on a card. Enter and Space open it.
///
/// Keys pressed on the carousel's own buttons belong to those buttons.
pub fn handle_card_key<H: Host>(
    card: usize,
    key: Key,
    hit: CarouselHit,
    grid: &Grid,
    opener: Opener<'_, H>,
    effects: &mut Vec<Effect<H::Focus>>,
) {
    if !key.activates() || hit.is_inside() {
        return;
    }
    if let Some(state) = grid.card(card) {
        open_project(state.project, opener, effects);
    }
}

/// Open the modal on `project`.
fn open_project<H: Host>(
    project: usize,
    opener: Opener<'_, H>,
    effects: &mut Vec<Effect<H::Focus>>,
) {
    let Opener { store, modal, host } = opener;
    if !modal.is_enabled() {
        log::debug!("No modal on this page, project {} not opened", project);
        return;
    }
    let Some(record) = store.get(project) else {
        log::warn!("⚠️  No project {} to open", project);
        return;
    };

    let focused = host.focused();
    let scroll_offset = host.scroll_offset();
    let image_count = record.modal_images().len();
    let lock = modal.open(project, image_count, focused, scroll_offset);

    effects.push(Effect::PopulateModal(DetailView::build(record, modal.thumbs())));
    effects.push(Effect::ShowModal);
    if let Some(lock) = lock {
        effects.push(Effect::LockScroll(lock));
    }
    effects.push(Effect::FocusModal);
}

/// Handle a click inside the modal overlay.
pub fn handle_modal_click<F>(
    hit: ModalHit,
    modal: &mut ProjectModal<F>,
    store: &ProjectStore,
    effects: &mut Vec<Effect<F>>,
) {
    if !modal.is_open() {
        return;
    }
    match hit {
        ModalHit::Thumbnail(index) => {
            let Some(record) = modal.current().and_then(|p| store.get(p)) else {
                return;
            };
            let images = record.modal_images();
            if let (Some(src), Some(_)) = (images.get(index), modal.select_thumbnail(index)) {
                effects.push(Effect::SelectThumbnail {
                    index,
                    image: main_image(record, src),
                });
            }
        }
        ModalHit::Close | ModalHit::Backdrop => close_modal(modal, effects),
        ModalHit::Panel => {}
    }
}

/// Handle a page-level key press. Escape closes an open modal.
pub fn handle_key<F>(key: Key, modal: &mut ProjectModal<F>, effects: &mut Vec<Effect<F>>) {
    if key == Key::Escape && modal.is_open() {
        close_modal(modal, effects);
    }
}

fn close_modal<F>(modal: &mut ProjectModal<F>, effects: &mut Vec<Effect<F>>) {
    let Some(restore) = modal.close() else {
        return;
    };
    effects.push(Effect::HideModal);
    effects.push(Effect::UnlockScroll {
        offset: restore.scroll_offset,
    });
    if let Some(focus) = restore.focus {
        effects.push(Effect::RestoreFocus(focus));
    }
}

/// Handle a contact form submission: open the pre-filled mail link.
pub fn handle_contact<F>(form: &ContactForm, config: &SiteConfig, effects: &mut Vec<Effect<F>>) {
    log::info!("✉️  Opening mail client for inquiry");
    effects.push(Effect::Navigate(form.mailto(config)));
}

/// Handle the mobile nav toggle.
pub fn handle_nav_toggle<F>(nav: &mut NavState, effects: &mut Vec<Effect<F>>) {
    let open = nav.toggle();
    log::debug!("☰ Nav {}", if open { "opened" } else { "closed" });
    effects.push(Effect::SetNavOpen(open));
}

/// Handle a followed nav link: collapse the nav.
pub fn handle_nav_link<F>(nav: &mut NavState, effects: &mut Vec<Effect<F>>) {
    nav.close();
    effects.push(Effect::SetNavOpen(false));
}
