/// Static markup preview for native builds.
///
/// Usage: `zeta-preview [projects.json] [config.json]`
///
/// Prints the grid exactly as the page would first render it, followed by the
/// embed cells. Useful for checking a project file before publishing it.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = preview::run() {
        eprintln!("Preview error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod preview {
    use std::path::Path;

    use zeta_site::views::markup;
    use zeta_site::{Effect, ProjectStore, SiteApp, SiteConfig, SiteError};

    fn load_config(path: Option<&Path>) -> Result<SiteConfig, SiteError> {
        match path {
            Some(path) => SiteConfig::from_json(&std::fs::read_to_string(path)?),
            None => Ok(SiteConfig::default()),
        }
    }

    fn load_store(path: Option<&Path>) -> Result<ProjectStore, SiteError> {
        match path {
            Some(path) => ProjectStore::from_json(&std::fs::read_to_string(path)?),
            None => Ok(ProjectStore::default()),
        }
    }

    pub fn run() -> Result<(), SiteError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let projects_path = args.first().map(Path::new);
        let config_path = args.get(1).map(Path::new);

        let config = load_config(config_path)?;
        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .parse_default_env()
            .init();

        let store = load_store(projects_path)?;
        log::info!("📁 {} projects loaded", store.len());

        let mut app: SiteApp<()> = SiteApp::new(config, store, Default::default());
        for effect in app.init() {
            if let Effect::RenderGrid(cards) = effect {
                println!("{}", markup::grid_html(&cards));
            }
        }
        println!("{}", markup::embeds_html(&app.embed_cells()));
        Ok(())
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
