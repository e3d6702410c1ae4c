pub mod assets;
pub mod contact;
pub mod project;
pub mod route;
pub mod section;
pub mod site;

pub use assets::{AssetCatalog, MockupImage, NoAssets, StaticAssets, resolve_mockup_image};
pub use contact::{ContactInfo, encode_uri_component, mailto_link};
pub use project::{Mockup, MockupView, Project, ProjectDetail, ProjectLinks, project_by_id, projects};
pub use route::{ProjectView, Resolved, Route};
pub use section::{SECTIONS, Section};
pub use site::{ABOUT, CONTACT, HERO};
