/// Reading progress in percent, clamped to `[0, 100]`. A page that does not
/// scroll reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_page_is_zero() {
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 800.0), 0.0);
    }
}
