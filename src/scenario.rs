//! Scenario runner for labeled multi-rate projection batches
//!
//! Holds one set of base assumptions, then re-projects them under any number
//! of return-rate scenarios without rebuilding the inputs each time.

use serde::Serialize;

use crate::projection::{project, ProjectionInput, ProjectionResult};

/// A labeled return-rate scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub annual_return_pct: f64,
    pub description: &'static str,
}

/// The scenario set shown on the Projections screen
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Conservative",
            annual_return_pct: 5.0,
            description: "Lower risk, stable growth",
        },
        Scenario {
            name: "Moderate",
            annual_return_pct: 7.0,
            description: "Balanced risk and return",
        },
        Scenario {
            name: "Aggressive",
            annual_return_pct: 9.0,
            description: "Higher risk, potential for greater returns",
        },
    ]
}

/// Pre-loaded runner for projecting one input under many scenarios
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Base projection assumptions
    base_input: ProjectionInput,
}

impl ScenarioRunner {
    /// Create a runner over the given base assumptions
    pub fn new(base_input: ProjectionInput) -> Self {
        Self { base_input }
    }

    /// Run a single projection with the base assumptions
    pub fn run(&self) -> ProjectionResult {
        project(&self.base_input)
    }

    /// Run one projection per scenario, varying only the return rate.
    /// Output order follows the scenario order.
    pub fn run_scenarios(&self, scenarios: &[Scenario]) -> Vec<(Scenario, ProjectionResult)> {
        scenarios
            .iter()
            .map(|scenario| {
                let input = self.base_input.with_return_pct(scenario.annual_return_pct);
                (scenario.clone(), project(&input))
            })
            .collect()
    }

    /// Run projections for multiple independent inputs
    pub fn run_batch(inputs: &[ProjectionInput]) -> Vec<ProjectionResult> {
        inputs.iter().map(project).collect()
    }

    /// Get reference to the base assumptions for inspection
    pub fn base_input(&self) -> &ProjectionInput {
        &self.base_input
    }

    /// Get mutable reference to the base assumptions for customization
    pub fn base_input_mut(&mut self) -> &mut ProjectionInput {
        &mut self.base_input
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(ProjectionInput::default())
    }
}
