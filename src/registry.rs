//! Training-task registry.
//!
//! Maps gym-style task identifiers to the environment and agent configuration
//! entry points the external training framework resolves at startup. The
//! registry itself is declarative: registration is the only operation with
//! any rule attached (ids must be unique).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One registered training task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Gym-style identifier, e.g. `RobotLab-Isaac-Velocity-Flat-Unitree-G1-v0`.
    pub id: String,
    /// Environment class entry point.
    pub entry_point: String,
    /// Environment configuration entry point.
    pub env_cfg_entry_point: String,
    /// Agent configuration entry points keyed by RL library (`rsl_rl`,
    /// `skrl`, `skrl_amp`).
    pub agent_cfg_entry_points: HashMap<String, String>,
    pub disable_env_checker: bool,
}

/// Registry of training tasks, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, TaskDefinition>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task. Fails if the id is already taken.
    pub fn register(&mut self, task: TaskDefinition) -> Result<()> {
        if self.tasks.contains_key(&task.id) {
            bail!("task id already registered: {}", task.id);
        }
        tracing::debug!("Registered task {}", task.id);
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TaskDefinition> {
        self.tasks.get(id)
    }

    /// All registered ids, sorted.
    pub fn task_ids(&self) -> Vec<&str> {
        self.tasks.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn agent_cfgs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Register the stock G1 velocity-tracking and AMP tasks.
pub fn register_default_tasks(registry: &mut TaskRegistry) -> Result<()> {
    registry.register(TaskDefinition {
        id: "RobotLab-Isaac-Velocity-Rough-Unitree-G1-v0".to_string(),
        entry_point: "isaaclab.envs:ManagerBasedRLEnv".to_string(),
        env_cfg_entry_point: "rough_env_cfg:UnitreeG1RoughEnvCfg".to_string(),
        agent_cfg_entry_points: agent_cfgs(&[(
            "rsl_rl",
            "rsl_rl_ppo_cfg:UnitreeG1RoughPPORunnerCfg",
        )]),
        disable_env_checker: true,
    })?;

    registry.register(TaskDefinition {
        id: "RobotLab-Isaac-Velocity-Flat-Unitree-G1-v0".to_string(),
        entry_point: "isaaclab.envs:ManagerBasedRLEnv".to_string(),
        env_cfg_entry_point: "flat_env_cfg:UnitreeG1FlatEnvCfg".to_string(),
        agent_cfg_entry_points: agent_cfgs(&[(
            "rsl_rl",
            "rsl_rl_ppo_cfg:UnitreeG1FlatPPORunnerCfg",
        )]),
        disable_env_checker: true,
    })?;

    registry.register(TaskDefinition {
        id: "Isaac-G1-AMP-Dance-Direct-v0".to_string(),
        entry_point: "g1_amp_env:G1AmpEnv".to_string(),
        env_cfg_entry_point: "g1_amp_env_cfg:G1AmpDanceEnvCfg".to_string(),
        agent_cfg_entry_points: agent_cfgs(&[
            ("skrl_amp", "skrl_g1_dance_amp_cfg.yaml"),
            ("skrl", "skrl_g1_dance_amp_cfg.yaml"),
        ]),
        disable_env_checker: true,
    })?;

    registry.register(TaskDefinition {
        id: "Isaac-G1-AMP-Walk-Direct-v0".to_string(),
        entry_point: "g1_amp_env:G1AmpEnv".to_string(),
        env_cfg_entry_point: "g1_amp_env_cfg:G1AmpWalkEnvCfg".to_string(),
        agent_cfg_entry_points: agent_cfgs(&[
            ("skrl_amp", "skrl_g1_walk_amp_cfg.yaml"),
            ("skrl", "skrl_g1_walk_amp_cfg.yaml"),
        ]),
        disable_env_checker: true,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tasks_register() {
        let mut registry = TaskRegistry::new();
        register_default_tasks(&mut registry).unwrap();
        assert_eq!(registry.len(), 4);

        let flat = registry
            .get("RobotLab-Isaac-Velocity-Flat-Unitree-G1-v0")
            .unwrap();
        assert_eq!(flat.entry_point, "isaaclab.envs:ManagerBasedRLEnv");
        assert_eq!(
            flat.agent_cfg_entry_points["rsl_rl"],
            "rsl_rl_ppo_cfg:UnitreeG1FlatPPORunnerCfg"
        );

        let dance = registry.get("Isaac-G1-AMP-Dance-Direct-v0").unwrap();
        assert!(dance.agent_cfg_entry_points.contains_key("skrl_amp"));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut registry = TaskRegistry::new();
        register_default_tasks(&mut registry).unwrap();
        let err = register_default_tasks(&mut registry);
        assert!(err.is_err());
    }

    #[test]
    fn task_ids_are_sorted() {
        let mut registry = TaskRegistry::new();
        register_default_tasks(&mut registry).unwrap();
        let ids = registry.task_ids();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
