//! Sound on/off state and clip selection
//!
//! Kept apart from the `HtmlAudioElement` handling so it runs natively.

use game_core::MatchEvent;

/// One of the three effect files, indexed in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    LeftPaddleHit,
    RightPaddleHit,
    Score,
}

impl Clip {
    pub const ALL: [Clip; 3] = [Clip::LeftPaddleHit, Clip::RightPaddleHit, Clip::Score];

    pub fn src(self) -> &'static str {
        match self {
            Clip::LeftPaddleHit => "sounds/left-paddle-hit.wav",
            Clip::RightPaddleHit => "sounds/right-paddle-hit.wav",
            Clip::Score => "sounds/score.wav",
        }
    }

    pub fn for_event(event: MatchEvent) -> Self {
        match event {
            MatchEvent::LeftPaddleHit => Clip::LeftPaddleHit,
            MatchEvent::RightPaddleHit => Clip::RightPaddleHit,
            MatchEvent::Scored => Clip::Score,
        }
    }
}

/// Result of flipping the switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    pub enabled: bool,
    /// Set only on the first toggle
    pub preload: bool,
}

#[derive(Debug, Clone)]
pub struct SoundSwitch {
    enabled: bool,
    preloaded: bool,
}

impl Default for SoundSwitch {
    fn default() -> Self {
        Self {
            enabled: true,
            preloaded: false,
        }
    }
}

impl SoundSwitch {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) -> Toggled {
        self.enabled = !self.enabled;
        let preload = !self.preloaded;
        self.preloaded = true;
        Toggled {
            enabled: self.enabled,
            preload,
        }
    }

    /// Clip to play for `event`, `None` while muted
    pub fn clip_for(&self, event: MatchEvent) -> Option<Clip> {
        self.enabled.then(|| Clip::for_event(event))
    }

    pub fn test_clip(&self) -> Option<Clip> {
        self.enabled.then_some(Clip::LeftPaddleHit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_enabled() {
        let switch = SoundSwitch::default();
        assert!(switch.is_enabled());
        assert_eq!(switch.clip_for(MatchEvent::Scored), Some(Clip::Score));
    }

    #[test]
    fn test_toggle_alternates() {
        let mut switch = SoundSwitch::default();
        assert!(!switch.toggle().enabled);
        assert!(!switch.is_enabled());
        assert!(switch.toggle().enabled);
        assert!(switch.is_enabled());
    }

    #[test]
    fn test_preload_only_on_first_toggle() {
        let mut switch = SoundSwitch::default();
        let preloads: Vec<bool> = (0..4).map(|_| switch.toggle().preload).collect();
        assert_eq!(preloads, vec![true, false, false, false]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut switch = SoundSwitch::default();
        switch.toggle();

        for event in [
            MatchEvent::LeftPaddleHit,
            MatchEvent::RightPaddleHit,
            MatchEvent::Scored,
        ] {
            assert_eq!(switch.clip_for(event), None);
        }
        assert_eq!(switch.test_clip(), None);
    }

    #[test]
    fn test_events_pick_their_clip() {
        let switch = SoundSwitch::default();
        assert_eq!(
            switch.clip_for(MatchEvent::LeftPaddleHit),
            Some(Clip::LeftPaddleHit)
        );
        assert_eq!(
            switch.clip_for(MatchEvent::RightPaddleHit),
            Some(Clip::RightPaddleHit)
        );
        assert_eq!(switch.test_clip(), Some(Clip::LeftPaddleHit));
    }

    #[test]
    fn test_clip_order_matches_indices() {
        for (i, clip) in Clip::ALL.iter().enumerate() {
            assert_eq!(*clip as usize, i);
        }
        assert_eq!(Clip::Score.src(), "sounds/score.wav");
    }
}
