//! Builder for constructing hand drivers.

use crate::builder::error::BuildError;
use crate::config::GraspConfig;
use crate::core::HandId;
use crate::driver::HandDriver;

/// Builder for constructing a [`HandDriver`] with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct HandDriverBuilder {
    hand: Option<HandId>,
    config: GraspConfig,
}

impl HandDriverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand this driver classifies for (required).
    pub fn hand(mut self, hand: HandId) -> Self {
        self.hand = Some(hand);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GraspConfig) -> Self {
        self.config = config;
        self
    }

    pub fn two_handed_grasp(mut self, enabled: bool) -> Self {
        self.config.two_handed_grasp = enabled;
        self
    }

    /// Build the driver.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<HandDriver, BuildError> {
        let hand = self.hand.ok_or(BuildError::MissingHand)?;
        Ok(HandDriver::new(hand, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_hand() {
        let result = HandDriverBuilder::new().build();
        assert_eq!(result.unwrap_err(), BuildError::MissingHand);
    }

    #[test]
    fn builder_defaults_to_single_handed() {
        let driver = HandDriverBuilder::new().hand(HandId(4)).build().unwrap();
        assert_eq!(driver.hand(), HandId(4));
        assert!(!driver.config().two_handed_grasp);
    }

    #[test]
    fn later_calls_override_config() {
        let driver = HandDriverBuilder::new()
            .hand(HandId(1))
            .two_handed_grasp(true)
            .config(GraspConfig::default())
            .build()
            .unwrap();
        assert!(!driver.config().two_handed_grasp);

        let driver = HandDriverBuilder::new()
            .config(GraspConfig::default())
            .two_handed_grasp(true)
            .hand(HandId(1))
            .build()
            .unwrap();
        assert!(driver.config().two_handed_grasp);
    }

    #[test]
    fn missing_hand_message_is_actionable() {
        assert_eq!(
            BuildError::MissingHand.to_string(),
            "Hand not specified. Call .hand(id) before .build()"
        );
    }
}
