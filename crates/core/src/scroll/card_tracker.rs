use folio_protocol::{CardBox, ProjectCategoryTheme, Rect};

use crate::config::CardConfig;
use crate::layout::LayoutProbe;
use crate::model::project::project_by_id;
use crate::theme_store::ThemeWriter;

/// Share of `card` visible inside the viewport band left after the top and
/// bottom root margins, in `[0, 1]`.
pub fn intersection_ratio(card: &Rect, viewport_height: f64, config: &CardConfig) -> f64 {
    if card.h <= 0.0 {
        return 0.0;
    }
    let band_top = viewport_height * config.margin_top_fraction;
    let band_bottom = viewport_height * (1.0 - config.margin_bottom_fraction);
    let visible = card.bottom().min(band_bottom) - card.top().max(band_top);
    (visible / card.h).clamp(0.0, 1.0)
}

/// Card with the highest positive ratio. Ties go to the earlier card.
pub fn most_visible<'a>(
    cards: &'a [CardBox],
    viewport_height: f64,
    config: &CardConfig,
) -> Option<&'a CardBox> {
    let mut best: Option<(&CardBox, f64)> = None;
    for card in cards {
        let ratio = intersection_ratio(&card.rect, viewport_height, config);
        if ratio > 0.0 && best.is_none_or(|(_, r)| ratio > r) {
            best = Some((card, ratio));
        }
    }
    best.map(|(card, _)| card)
}

/// Feeds the project theme from whichever card is most in view.
#[derive(Debug)]
pub struct CardTracker {
    config: CardConfig,
    focused: Option<String>,
    mounted: bool,
}

impl CardTracker {
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            focused: None,
            mounted: false,
        }
    }

    pub fn mount(&mut self) {
        self.mounted = true;
        self.focused = None;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.focused = None;
    }

    /// Returns the category written, if any. Nothing is written when no card
    /// intersects the band.
    pub fn update(
        &mut self,
        layout: &dyn LayoutProbe,
        writer: &ThemeWriter<ProjectCategoryTheme>,
    ) -> Option<ProjectCategoryTheme> {
        if !self.mounted {
            return None;
        }
        let cards = layout.card_boxes();
        let winner = most_visible(&cards, layout.viewport().height, &self.config)?;
        let Some(project) = project_by_id(&winner.project_id) else {
            log::debug!("card `{}` has no project entry", winner.project_id);
            return None;
        };
        if self.focused.as_deref() != Some(project.id) {
            log::debug!("focused project card: {}", project.id);
            self.focused = Some(project.id.to_string());
        }
        writer.set(project.category);
        Some(project.category)
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutSnapshot;
    use crate::theme_store::theme_channel;
    use folio_protocol::Viewport;

    #[test]
    fn ratio_respects_root_margin() {
        let config = CardConfig::default();
        // band is [350, 550) in a 1000px viewport
        assert_eq!(intersection_ratio(&Rect::new(0.0, 0.0, 100.0, 300.0), 1000.0, &config), 0.0);
        assert_eq!(intersection_ratio(&Rect::new(0.0, 400.0, 100.0, 100.0), 1000.0, &config), 1.0);
        assert_eq!(intersection_ratio(&Rect::new(0.0, 450.0, 100.0, 200.0), 1000.0, &config), 0.5);
    }

    #[test]
    fn tie_goes_to_earlier_card() {
        let config = CardConfig::default();
        let cards = vec![
            CardBox { project_id: "a".into(), rect: Rect::new(0.0, 300.0, 10.0, 100.0) },
            CardBox { project_id: "b".into(), rect: Rect::new(0.0, 500.0, 10.0, 100.0) },
        ];
        assert_eq!(most_visible(&cards, 1000.0, &config).map(|c| c.project_id.as_str()), Some("a"));
    }

    #[test]
    fn writes_winning_category_only() {
        let (writer, reader) = theme_channel(ProjectCategoryTheme::Ui);
        let mut tracker = CardTracker::new(CardConfig::default());
        tracker.mount();
        let viewport = Viewport::new(0.0, 1280.0, 1000.0, 4000.0);

        let layout = LayoutSnapshot::new(viewport)
            .with_card("maria-fumaca", Rect::new(0.0, -200.0, 600.0, 400.0))
            .with_card("ownfleet-cg", Rect::new(0.0, 360.0, 600.0, 400.0));
        assert_eq!(tracker.update(&layout, &writer), Some(ProjectCategoryTheme::Bot));
        assert_eq!(reader.get(), ProjectCategoryTheme::Bot);
        assert_eq!(tracker.focused(), Some("ownfleet-cg"));

        let nothing = LayoutSnapshot::new(viewport).with_card("rotaz", Rect::new(0.0, 2000.0, 600.0, 400.0));
        assert_eq!(tracker.update(&nothing, &writer), None);
        assert_eq!(reader.get(), ProjectCategoryTheme::Bot);
    }
}
