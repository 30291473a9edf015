//! Declarative robot articulation description.
//!
//! These structs carry the per-robot tuning the external simulator consumes
//! at environment-construction time: spawn/rigid-body properties, the initial
//! standing pose, and actuator groups with their gains and limits. They are
//! data only — no solver, no stepping, no runtime behavior.
//!
//! Joint-name keys are regex patterns evaluated by the simulator against the
//! robot's joint list (e.g. `".*_hip_yaw_joint"`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete articulation configuration for one robot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticulationConfig {
    pub spawn: SpawnConfig,
    pub init_state: InitialState,
    pub soft_joint_pos_limit_factor: f64,
    pub actuators: HashMap<String, ActuatorConfig>,
}

/// How the robot asset is spawned into the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// USD asset path, relative to the simulator's asset root.
    pub usd_path: String,
    pub activate_contact_sensors: bool,
    pub rigid: RigidBodyProps,
    pub articulation_root: ArticulationRootProps,
}

/// Rigid-body solver properties applied to every link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigidBodyProps {
    pub disable_gravity: bool,
    pub retain_accelerations: bool,
    pub linear_damping: f64,
    pub angular_damping: f64,
    pub max_linear_velocity: f64,
    pub max_angular_velocity: f64,
    pub max_depenetration_velocity: f64,
}

/// Articulation-root solver properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticulationRootProps {
    pub enabled_self_collisions: bool,
    pub solver_position_iteration_count: u32,
    pub solver_velocity_iteration_count: u32,
}

/// Initial pose: root position plus joint positions/velocities keyed by
/// joint-name pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialState {
    pub pos: [f64; 3],
    pub joint_pos: HashMap<String, f64>,
    pub joint_vel: HashMap<String, f64>,
}

/// A gain (stiffness, damping, armature) that is either uniform across the
/// actuator group or resolved per joint-name pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gain {
    Uniform(f64),
    PerJoint(HashMap<String, f64>),
}

impl From<f64> for Gain {
    fn from(value: f64) -> Self {
        Gain::Uniform(value)
    }
}

/// One actuator group. The two models mirror the simulator's actuator types:
/// an explicit DC-motor model with torque saturation, and the implicit
/// PD model solved inside the physics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ActuatorConfig {
    DcMotor {
        joint_names_expr: Vec<String>,
        effort_limit: f64,
        saturation_effort: f64,
        velocity_limit: f64,
        stiffness: f64,
        damping: f64,
        friction: f64,
    },
    Implicit {
        joint_names_expr: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        effort_limit: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        velocity_limit: Option<f64>,
        stiffness: Gain,
        damping: Gain,
        armature: Gain,
    },
}

impl ActuatorConfig {
    /// Joint-name patterns this group drives.
    pub fn joint_names_expr(&self) -> &[String] {
        match self {
            ActuatorConfig::DcMotor {
                joint_names_expr, ..
            } => joint_names_expr,
            ActuatorConfig::Implicit {
                joint_names_expr, ..
            } => joint_names_expr,
        }
    }
}

/// Build a pattern->value map from a literal table.
pub(crate) fn joint_map(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_deserializes_untagged() {
        let uniform: Gain = serde_json::from_str("25.0").unwrap();
        assert!(matches!(uniform, Gain::Uniform(v) if v == 25.0));

        let per_joint: Gain = serde_json::from_str(r#"{".*_knee_joint": 200.0}"#).unwrap();
        match per_joint {
            Gain::PerJoint(map) => assert_eq!(map[".*_knee_joint"], 200.0),
            Gain::Uniform(_) => panic!("expected per-joint gain"),
        }
    }

    #[test]
    fn actuator_config_round_trips() {
        let actuator = ActuatorConfig::DcMotor {
            joint_names_expr: vec![".*_joint".to_string()],
            effort_limit: 33.5,
            saturation_effort: 33.5,
            velocity_limit: 21.0,
            stiffness: 20.0,
            damping: 0.5,
            friction: 0.0,
        };
        let json = serde_json::to_string(&actuator).unwrap();
        let back: ActuatorConfig = serde_json::from_str(&json).unwrap();
        match back {
            ActuatorConfig::DcMotor {
                effort_limit,
                stiffness,
                ..
            } => {
                assert_eq!(effort_limit, 33.5);
                assert_eq!(stiffness, 20.0);
            }
            _ => panic!("model tag lost in round trip"),
        }
    }

    #[test]
    fn implicit_actuator_omits_absent_limits() {
        let actuator = ActuatorConfig::Implicit {
            joint_names_expr: vec![".*_ankle_pitch_joint".to_string()],
            effort_limit: None,
            velocity_limit: None,
            stiffness: Gain::Uniform(20.0),
            damping: Gain::Uniform(2.0),
            armature: Gain::Uniform(0.01),
        };
        let json = serde_json::to_string(&actuator).unwrap();
        assert!(!json.contains("effort_limit"));
        assert!(!json.contains("velocity_limit"));
    }
}
