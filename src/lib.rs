//! docnav - declarative navigation model for documentation sites.
//!
//! A site config describes the site metadata, the top navigation bar and
//! sidebar trees keyed by path prefix. docnav validates that config once into
//! an immutable [`model::NavigationModel`], which a renderer then queries per
//! page:
//!
//! ```
//! use docnav::config::{self, ConfigFormat, NormalizeOptions};
//!
//! let toml = r#"
//! title = "Docs"
//!
//! [[themeConfig.nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [themeConfig.sidebar]
//! "/guide/" = [{ text = "Basics", link = "/guide/basics" }]
//! "/guide/advanced/" = [{ text = "Internals", link = "/guide/advanced/internals" }]
//! "#;
//!
//! let model = config::from_str(toml, ConfigFormat::Toml, NormalizeOptions::default())?;
//! assert_eq!(model.site().title, "Docs");
//! assert_eq!(model.nav()[0].href(), Some("/guide/"));
//! assert_eq!(model.sidebar_for("/guide/advanced/x")[0].text(), "Internals");
//! assert!(model.sidebar_for("/blog/").is_empty());
//! # Ok::<(), docnav::config::ConfigError>(())
//! ```
//!
//! # Modules
//!
//! | Module   | Purpose                                            |
//! |----------|----------------------------------------------------|
//! | `config` | Loading, normalization, errors, reload handle      |
//! | `model`  | Immutable model types and sidebar resolution       |
//! | `logger` | `log!` / `debug!` macros                           |
//! | `utils`  | Hashing and pluralization helpers                  |

pub mod config;
pub mod logger;
pub mod model;
pub mod utils;

pub use config::{ConfigError, ModelHandle, NormalizeOptions, Normalizer};
pub use model::{NavEntry, NavigationModel, SidebarItem, SiteConfig};
