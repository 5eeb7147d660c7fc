/// Errors raised when malformed input reaches the progression core.
///
/// The boundary layer ([`crate::input`]) is expected to reject bad user input
/// before it gets here; these variants exist so the core fails fast instead of
/// producing nonsense when that contract is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// Round index outside `1..=max`.
    #[error("round {round} is outside 1..={max}")]
    RoundOutOfRange { round: u32, max: u32 },

    /// Stage index outside `1..=max`.
    #[error("stage {stage} is outside 1..={max}")]
    StageOutOfRange { stage: u32, max: u32 },

    /// Points inside a stage exceed that stage's threshold.
    #[error("stage {stage} holds {points} points but its threshold is {threshold}")]
    StagePointsOverThreshold {
        stage: u32,
        points: u32,
        threshold: u32,
    },

    /// The lifetime total disagrees with round, stage and stage points.
    #[error("total {total_points} does not match round/stage progress (expected {expected})")]
    InconsistentTotal { total_points: u32, expected: u32 },

    /// A reward table declares a stage that needs no points to complete.
    #[error("reward table stage {stage} has a zero point threshold")]
    ZeroThreshold { stage: u32 },

    /// A reward table's thresholds do not fit the point counters.
    #[error("reward table thresholds overflow the point counters")]
    ThresholdOverflow,
}
