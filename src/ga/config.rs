//! Optimizer configuration.
//!
//! Defaults reproduce the reference search budget: 5 generations of 200
//! candidates, 20 survivors, 10% mutation chance, no item skipping.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Genetic search parameters.
///
/// # Example
///
/// ```
/// use u_allocate::ga::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_generations(10)
///     .with_population_size(50)
///     .with_survivors(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Number of breeding rounds after initialization.
    pub generations: usize,
    /// Candidates per generation.
    pub population_size: usize,
    /// Candidates kept after each selection.
    pub survivors: usize,
    /// Probability of a mutation swap (initial perturbation and each
    /// step of the geometric mutation loop).
    pub mutation_chance: f64,
    /// Probability of skipping an item while building an initial candidate.
    pub skip_chance: f64,
    /// Seed for the per-call random source. `None` = OS entropy.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            generations: 5,
            population_size: 200,
            survivors: 20,
            mutation_chance: 0.10,
            skip_chance: 0.0,
            seed: None,
        }
    }
}

impl OptimizerConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of survivors per generation.
    pub fn with_survivors(mut self, survivors: usize) -> Self {
        self.survivors = survivors;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_chance(mut self, mutation_chance: f64) -> Self {
        self.mutation_chance = mutation_chance;
        self
    }

    /// Sets the initial-population item skip probability.
    pub fn with_skip_chance(mut self, skip_chance: f64) -> Self {
        self.skip_chance = skip_chance;
        self
    }

    /// Fixes the random seed (reproducible runs).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks parameter consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.survivors == 0 {
            return Err(ConfigError::NoSurvivors);
        }
        if self.survivors > self.population_size {
            return Err(ConfigError::TooManySurvivors {
                survivors: self.survivors,
                population_size: self.population_size,
            });
        }
        check_probability("mutation_chance", self.mutation_chance)?;
        if self.mutation_chance >= 1.0 {
            // The geometric mutation loop only stops on a failed draw.
            return Err(ConfigError::CertainMutation(self.mutation_chance));
        }
        check_probability("skip_chance", self.skip_chance)?;
        Ok(())
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OptimizerConfig::default();
        assert_eq!(config.generations, 5);
        assert_eq!(config.population_size, 200);
        assert_eq!(config.survivors, 20);
        assert!((config.mutation_chance - 0.1).abs() < 1e-12);
        assert_eq!(config.skip_chance, 0.0);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(
            OptimizerConfig::default().with_population_size(0).validate(),
            Err(ConfigError::EmptyPopulation)
        );
        assert_eq!(
            OptimizerConfig::default().with_survivors(0).validate(),
            Err(ConfigError::NoSurvivors)
        );
        assert!(matches!(
            OptimizerConfig::default()
                .with_population_size(10)
                .with_survivors(11)
                .validate(),
            Err(ConfigError::TooManySurvivors { .. })
        ));
        assert!(matches!(
            OptimizerConfig::default().with_mutation_chance(1.5).validate(),
            Err(ConfigError::InvalidProbability { field: "mutation_chance", .. })
        ));
        assert_eq!(
            OptimizerConfig::default().with_mutation_chance(1.0).validate(),
            Err(ConfigError::CertainMutation(1.0))
        );
        // NaN is outside every range.
        assert!(OptimizerConfig::default()
            .with_skip_chance(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{ "generations": 12, "seed": 7 }"#).unwrap();
        assert_eq!(config.generations, 12);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.population_size, 200);
    }

    #[test]
    fn test_json_round_trip() {
        let config = OptimizerConfig::default().with_survivors(4).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: OptimizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
