/// Progressive reveal of the stick figure
use serde::Serialize;
use tracing::trace;

/// Body parts, in reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    LeftEye,
    RightEye,
    Frown,
}

impl BodyPart {
    pub const ALL: [BodyPart; 9] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
        BodyPart::LeftEye,
        BodyPart::RightEye,
        BodyPart::Frown,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

pub const PART_COUNT: usize = BodyPart::ALL.len();

/// Once this many single steps were taken, the next step reveals everything left.
pub const BATCH_THRESHOLD: usize = 5;

/// Count added by the batched final step.
pub const BATCH_STEP: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HangmanFigure {
    revealed_count: usize,
    visible: [bool; PART_COUNT],
}

impl HangmanFigure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reveal steps taken this round.
    ///
    /// Tracks wrong guesses one-for-one until the batched step, which adds
    /// [`BATCH_STEP`] while exposing every remaining part.
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn is_visible(&self, part: BodyPart) -> bool {
        self.visible[part.index()]
    }

    pub fn visible_parts(&self) -> Vec<BodyPart> {
        BodyPart::ALL
            .into_iter()
            .filter(|p| self.is_visible(*p))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.visible.iter().all(|v| *v)
    }

    /// Reveal the next step and return the parts it exposed.
    ///
    /// Returns an empty list when nothing is left to reveal.
    pub fn advance(&mut self) -> Vec<BodyPart> {
        if self.is_complete() {
            return Vec::new();
        }

        let newly = if self.revealed_count < BATCH_THRESHOLD {
            let part = BodyPart::ALL[self.revealed_count];
            self.revealed_count += 1;
            vec![part]
        } else {
            self.revealed_count += BATCH_STEP;
            self.hidden_parts()
        };

        for part in &newly {
            self.visible[part.index()] = true;
        }
        trace!(revealed_count = self.revealed_count, parts = ?newly, "figure advanced");
        newly
    }

    /// Force every part visible. The step count is left alone.
    pub fn reveal_all(&mut self) {
        self.visible = [true; PART_COUNT];
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn hidden_parts(&self) -> Vec<BodyPart> {
        BodyPart::ALL
            .into_iter()
            .filter(|p| !self.is_visible(*p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_steps_follow_part_order() {
        let mut figure = HangmanFigure::new();
        for (i, expected) in BodyPart::ALL[..BATCH_THRESHOLD].iter().enumerate() {
            assert_eq!(figure.advance(), vec![*expected]);
            assert_eq!(figure.revealed_count(), i + 1);
        }
        assert_eq!(figure.visible_parts(), BodyPart::ALL[..5].to_vec());
        assert!(!figure.is_complete());
    }

    #[test]
    fn sixth_step_batches_the_last_four_parts() {
        let mut figure = HangmanFigure::new();
        for _ in 0..BATCH_THRESHOLD {
            figure.advance();
        }

        let batch = figure.advance();
        assert_eq!(
            batch,
            vec![
                BodyPart::RightLeg,
                BodyPart::LeftEye,
                BodyPart::RightEye,
                BodyPart::Frown
            ]
        );
        assert_eq!(figure.revealed_count(), 8);
        assert!(figure.is_complete());

        // nothing left
        assert!(figure.advance().is_empty());
        assert_eq!(figure.revealed_count(), 8);
    }

    #[test]
    fn reveal_all_and_reset() {
        let mut figure = HangmanFigure::new();
        figure.advance();
        figure.reveal_all();
        assert!(figure.is_complete());
        assert_eq!(figure.revealed_count(), 1);

        figure.reset();
        assert_eq!(figure, HangmanFigure::new());
        assert!(figure.visible_parts().is_empty());
    }
}
