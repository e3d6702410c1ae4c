use folio_protocol::PageSectionTheme;

use crate::config::DriverConfig;
use crate::layout::LayoutProbe;
use crate::model::section::{SECTIONS, Section};
use crate::scheduler::{PageTimer, Scheduler, TimerId};
use crate::theme_store::ThemeWriter;

/// Viewport-relative y of the probe line.
pub fn probe_y(viewport_height: f64, config: &DriverConfig) -> f64 {
    viewport_height * config.probe_fraction + config.probe_offset_px
}

/// First section, in document order, whose box straddles the probe line.
pub fn section_at_probe(layout: &dyn LayoutProbe, probe: f64) -> Option<PageSectionTheme> {
    SECTIONS
        .iter()
        .map(|s| s.theme)
        .find(|theme| layout.section_rect(*theme).is_some_and(|r| r.contains_y(probe)))
}

/// Keeps the page theme in step with whichever section sits under the
/// probe line.
///
/// Scroll and resize only request a frame; layout is read once, inside the
/// frame, no matter how many notifications arrived before it.
#[derive(Debug)]
pub struct SectionThemeDriver {
    config: DriverConfig,
    active: Option<PageSectionTheme>,
    frame: Option<TimerId>,
    mounted: bool,
}

impl SectionThemeDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            active: None,
            frame: None,
            mounted: false,
        }
    }

    /// Emit the initial theme and start listening.
    pub fn mount(&mut self, writer: &ThemeWriter<PageSectionTheme>) {
        self.mounted = true;
        let initial = Section::first().theme;
        self.active = Some(initial);
        writer.set(initial);
    }

    pub fn unmount(&mut self, sched: &mut Scheduler<PageTimer>) {
        if let Some(id) = self.frame.take() {
            sched.cancel(id);
        }
        self.mounted = false;
        self.active = None;
    }

    /// Ask for a recompute on the next frame. Returns `false` when one is
    /// already pending.
    pub fn request_recompute(&mut self, sched: &mut Scheduler<PageTimer>) -> bool {
        if !self.mounted || self.frame.is_some_and(|id| sched.is_live(id)) {
            return false;
        }
        self.frame = Some(sched.request_frame(PageTimer::SectionFrame));
        true
    }

    /// The pending frame arrived.
    pub fn on_frame(
        &mut self,
        layout: &dyn LayoutProbe,
        writer: &ThemeWriter<PageSectionTheme>,
    ) -> Option<PageSectionTheme> {
        self.frame = None;
        self.recompute(layout, writer)
    }

    /// Returns the new theme if it changed.
    pub fn recompute(
        &mut self,
        layout: &dyn LayoutProbe,
        writer: &ThemeWriter<PageSectionTheme>,
    ) -> Option<PageSectionTheme> {
        if !self.mounted {
            return None;
        }
        let probe = probe_y(layout.viewport().height, &self.config);
        let next = section_at_probe(layout, probe)
            .or(self.active)
            .unwrap_or(Section::first().theme);
        if self.active == Some(next) {
            return None;
        }
        log::debug!("section under probe ({probe:.0}px): {next}");
        self.active = Some(next);
        writer.set(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutSnapshot;
    use crate::theme_store::theme_channel;
    use folio_protocol::{Rect, Viewport};

    /// Four stacked 800px sections scrolled to `scroll_y` in an 800px window.
    fn page(scroll_y: f64) -> LayoutSnapshot {
        let mut layout = LayoutSnapshot::new(Viewport::new(scroll_y, 1280.0, 800.0, 3200.0));
        for (i, theme) in PageSectionTheme::ALL.into_iter().enumerate() {
            let top = i as f64 * 800.0 - scroll_y;
            layout = layout.with_section(theme, Rect::new(0.0, top, 1280.0, 800.0));
        }
        layout
    }

    #[test]
    fn probe_sits_below_the_header() {
        assert_eq!(probe_y(1000.0, &DriverConfig::default()), 232.0);
    }

    #[test]
    fn picks_section_under_probe() {
        let (writer, reader) = theme_channel(PageSectionTheme::Home);
        let mut d = SectionThemeDriver::new(DriverConfig::default());
        d.mount(&writer);
        // probe at 188px: 800 + 188 lands in projects
        assert_eq!(d.recompute(&page(700.0), &writer), Some(PageSectionTheme::Projects));
        assert_eq!(reader.get(), PageSectionTheme::Projects);
        assert_eq!(d.recompute(&page(2500.0), &writer), Some(PageSectionTheme::Contact));
    }

    #[test]
    fn redundant_recompute_is_silent() {
        let (writer, reader) = theme_channel(PageSectionTheme::Home);
        let mut d = SectionThemeDriver::new(DriverConfig::default());
        d.mount(&writer);
        d.recompute(&page(900.0), &writer);
        let version = reader.version();
        assert_eq!(d.recompute(&page(900.0), &writer), None);
        assert_eq!(d.recompute(&page(950.0), &writer), None);
        assert_eq!(reader.version(), version);
    }

    #[test]
    fn gap_keeps_previous_section() {
        let (writer, reader) = theme_channel(PageSectionTheme::Home);
        let mut d = SectionThemeDriver::new(DriverConfig::default());
        d.mount(&writer);
        d.recompute(&page(1700.0), &writer);
        let empty = LayoutSnapshot::new(Viewport::new(0.0, 1280.0, 800.0, 3200.0));
        assert_eq!(d.recompute(&empty, &writer), None);
        assert_eq!(reader.get(), PageSectionTheme::About);
    }

    #[test]
    fn bursts_coalesce_into_one_frame() {
        let (writer, _reader) = theme_channel(PageSectionTheme::Home);
        let mut sched = Scheduler::new(0.0);
        let mut d = SectionThemeDriver::new(DriverConfig::default());
        d.mount(&writer);
        assert!(d.request_recompute(&mut sched));
        assert!(!d.request_recompute(&mut sched));
        assert!(!d.request_recompute(&mut sched));
        assert_eq!(sched.live(), 1);

        let frames = sched.begin_frame(16.0);
        assert_eq!(frames, vec![PageTimer::SectionFrame]);
        d.on_frame(&page(900.0), &writer);
        assert!(d.request_recompute(&mut sched));
        d.unmount(&mut sched);
        assert_eq!(sched.live(), 0);
    }
}
