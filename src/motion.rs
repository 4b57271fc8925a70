/// Largest parallax displacement of the hero background, in percent.
pub const MAX_PARALLAX_PERCENT: f64 = 50.0;

// a page that cannot scroll reports 0
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn parallax_offset(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0) * MAX_PARALLAX_PERCENT
}

/// Remembers whether an element has already played its entrance animation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EntranceLatch {
    was_intersecting: bool,
    revealed: bool,
}

impl EntranceLatch {
    /// Feeds the latest intersection state. Returns `true` only on the
    /// observation that triggers the animation; every later call is `false`.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let fired = !self.revealed && intersecting && !self.was_intersecting;
        self.was_intersecting = intersecting;
        if fired {
            self.revealed = true;
        }
        fired
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub step: f64,
}

impl Stagger {
    pub const HEADINGS: Stagger = Stagger { step: 0.1 };
    pub const BADGES: Stagger = Stagger { step: 0.1 };
    pub const CARDS: Stagger = Stagger { step: 0.2 };

    pub fn delay_for(&self, index: usize) -> f64 {
        self.step * index as f64
    }
}

/// Starting pose of an element before its entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    #[default]
    FadeInUp,
    Rise,
    ScaleIn,
    SlideFromLeft,
    SlideFromRight,
}

impl Motion {
    pub fn alternating(index: usize) -> Motion {
        if index % 2 == 0 {
            Motion::SlideFromLeft
        } else {
            Motion::SlideFromRight
        }
    }

    pub fn initial_transform(&self) -> &'static str {
        match self {
            Motion::FadeInUp => "translateY(60px)",
            Motion::Rise => "translateY(30px)",
            Motion::ScaleIn => "scale(0.8)",
            Motion::SlideFromLeft => "translateX(-30px)",
            Motion::SlideFromRight => "translateX(30px)",
        }
    }

    pub fn duration(&self) -> f64 {
        match self {
            Motion::FadeInUp => 0.6,
            _ => 0.5,
        }
    }

    pub fn style(&self, delay: f64) -> String {
        format!(
            "--reveal-from: {}; transition-duration: {:.2}s; transition-delay: {:.2}s",
            self.initial_transform(),
            self.duration(),
            delay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_parallax_endpoints_and_midpoints() {
        assert!(approx(parallax_offset(0.0), 0.0));
        assert!(approx(parallax_offset(1.0), 50.0));
        assert!(approx(parallax_offset(0.4), 20.0));
        assert!(approx(parallax_offset(0.5), 25.0));
    }

    #[test]
    fn test_parallax_clamps() {
        assert!(approx(parallax_offset(-0.3), 0.0));
        assert!(approx(parallax_offset(1.7), 50.0));
        assert!(approx(parallax_offset(f64::NAN), 0.0));
    }

    #[test]
    fn test_scroll_progress() {
        // 3000px page, 1000px viewport => 2000px of travel
        assert!(approx(scroll_progress(0.0, 3000.0, 1000.0), 0.0));
        assert!(approx(scroll_progress(800.0, 3000.0, 1000.0), 0.4));
        assert!(approx(scroll_progress(2000.0, 3000.0, 1000.0), 1.0));
        // overscroll bounce
        assert!(approx(scroll_progress(2100.0, 3000.0, 1000.0), 1.0));
        assert!(approx(scroll_progress(-40.0, 3000.0, 1000.0), 0.0));
    }

    #[test]
    fn test_scroll_progress_unscrollable_page() {
        assert!(approx(scroll_progress(0.0, 800.0, 1000.0), 0.0));
        assert!(approx(scroll_progress(10.0, 1000.0, 1000.0), 0.0));
    }

    #[test]
    fn test_scroll_progress_after_resize() {
        // same scroll offset, taller window => less travel left
        assert!(approx(scroll_progress(800.0, 3000.0, 1000.0), 0.4));
        assert!(approx(scroll_progress(800.0, 3000.0, 1400.0), 0.5));
        // window size not measured yet
        assert!(approx(scroll_progress(800.0, 3000.0, f64::INFINITY), 0.0));
    }

    #[test]
    fn test_scroll_feeds_parallax() {
        let progress = scroll_progress(800.0, 3000.0, 1000.0);
        assert!(approx(parallax_offset(progress), 20.0));
    }

    #[test]
    fn test_latch_fires_once() {
        let mut latch = EntranceLatch::default();
        assert!(!latch.is_revealed());
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // leave and re-enter the viewport
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_visible_on_first_observation() {
        let mut latch = EntranceLatch::default();
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_stagger() {
        assert!(approx(Stagger::BADGES.delay_for(0), 0.0));
        assert!(approx(Stagger::BADGES.delay_for(11), 1.1));
        assert!(approx(Stagger::CARDS.delay_for(2), 0.4));
    }

    #[test]
    fn test_motion_alternates() {
        assert_eq!(Motion::alternating(0), Motion::SlideFromLeft);
        assert_eq!(Motion::alternating(1), Motion::SlideFromRight);
        assert_eq!(Motion::alternating(4), Motion::SlideFromLeft);
    }

    #[test]
    fn test_motion_style() {
        assert_eq!(
            Motion::FadeInUp.style(0.2),
            "--reveal-from: translateY(60px); transition-duration: 0.60s; transition-delay: 0.20s"
        );
        assert!(Motion::ScaleIn.style(0.0).contains("scale(0.8)"));
    }
}
