use crate::play::state::BaseState;
use serde::{Deserialize, Serialize};

/// Scorebook category of the resolved play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayLabel {
    Out,
    Single,
    Double,
    Triple,
    HomeRun,
    FlyOut,
    GroundOut,
    DoublePlay,
    Error,
    ForceOut,
    TagOut,
}

impl PlayLabel {
    /// True for labels where the batter reached base safely.
    pub fn batter_reached(&self) -> bool {
        matches!(
            self,
            PlayLabel::Single
                | PlayLabel::Double
                | PlayLabel::Triple
                | PlayLabel::HomeRun
                | PlayLabel::Error
                | PlayLabel::ForceOut
                | PlayLabel::TagOut
        )
    }
}

/// Final accounting of one play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub outs_recorded: u8,
    pub runs_scored: u8,
    pub bases: BaseState,
    pub label: PlayLabel,
}

impl PlayOutcome {
    /// Runners stranded on base when the play ended.
    pub fn runners_on(&self) -> u8 {
        self.bases.runner_count()
    }
}
