//! Integration test: static site data, routes, and the contact link.

use folio_core::model::{
    ContactInfo, MockupImage, NoAssets, ProjectView, Route, StaticAssets, mailto_link, projects,
    resolve_mockup_image,
};
use folio_protocol::ProjectCategoryTheme;

#[test]
fn default_mailto_matches_encode_uri_component() {
    let expected = concat!(
        "mailto:SEU_EMAIL@dominio.com",
        "?subject=Projeto%20%2F%20Parceria%20%E2%80%94%20Portf%C3%B3lio",
        "&body=Oi%20Helam%C3%A3!%20Vi%20seu%20portf%C3%B3lio%20e%20queria%20falar%20sobre%3A",
        "%0A%0A%E2%80%A2%20Contexto%3A",
        "%0A%E2%80%A2%20Objetivo%3A",
        "%0A%E2%80%A2%20Prazo%2Furg%C3%AAncia%3A",
        "%0A%E2%80%A2%20Stack%2Fambiente%20atual%3A",
        "%0A%0APode%20me%20responder%20por%20aqui.%20Obrigado!",
    );
    assert_eq!(ContactInfo::default().mailto(), expected);
}

#[test]
fn mailto_keeps_unreserved_marks() {
    assert_eq!(
        mailto_link("a@b.c", "it's (ok)*", "~_-."),
        "mailto:a@b.c?subject=it's%20(ok)*&body=~_-."
    );
}

#[test]
fn every_project_route_resolves_to_its_project() {
    for project in projects() {
        let resolved = Route::resolve(&project.path());
        assert!(!resolved.redirected);
        let Route::Project(id) = resolved.route else {
            panic!("{} did not resolve to a project route", project.path());
        };
        let found = ProjectView::for_id(&id).project().map(|p| p.id);
        assert_eq!(found, Some(project.id));
    }
}

#[test]
fn categories_follow_the_catalog() {
    let category = |id: &str| {
        projects()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.category)
    };
    assert_eq!(category("maria-fumaca"), Some(ProjectCategoryTheme::Ui));
    assert_eq!(category("ownfleet-cg"), Some(ProjectCategoryTheme::Bot));
    assert_eq!(category("rotaz"), Some(ProjectCategoryTheme::Api));
}

#[test]
fn missing_images_fall_back_to_placeholders() {
    let assets = StaticAssets::new(["maria-fumaca/mobile.webp"]);
    let mut assets_found = 0;
    for project in projects() {
        for mockup in project.detail.mockups {
            assert!(matches!(
                resolve_mockup_image(mockup, &NoAssets),
                MockupImage::Placeholder { view } if view == mockup.view
            ));
            if let MockupImage::Asset { path } = resolve_mockup_image(mockup, &assets) {
                assert_eq!(path, "maria-fumaca/mobile.webp");
                assets_found += 1;
            }
        }
    }
    assert_eq!(assets_found, 1);
}
